//! # Emporium Core
//!
//! Core types for the Emporium catalog service.
//!
//! This crate provides the foundational pieces used across the workspace:
//! - Common error types
//! - Catalog item types
//! - The in-memory catalog store
//! - Classifier model names served by the demo model route

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod item;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use item::{Item, StoredItem};
pub use model::ModelName;
pub use store::CatalogStore;
