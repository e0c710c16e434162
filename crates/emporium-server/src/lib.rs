//! # Emporium Server
//!
//! HTTP API server for the Emporium catalog.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod handlers;
pub mod server;

pub use server::{AppState, Server, ServerConfig};
