//! HTTP server implementation for the Emporium catalog API.
//!
//! Provides the router, shared state, and process lifecycle (bind, serve,
//! graceful shutdown) around the handlers in [`crate::handlers`].

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use emporium_core::{CatalogStore, Error, Result};

use crate::api::StatusResponse;
use crate::handlers;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
    /// Seed the catalog with the demo items on startup.
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".parse().unwrap(),
            cors: true,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
    seed: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Sets whether the catalog starts seeded.
    pub fn seed(mut self, enabled: bool) -> Self {
        self.seed = Some(enabled);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            cors: self.cors.unwrap_or(defaults.cors),
            seed: self.seed.unwrap_or(defaults.seed),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The catalog store.
    pub store: Arc<CatalogStore>,
    /// Server configuration.
    pub config: ServerConfig,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state with the given config.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed {
            CatalogStore::seeded()
        } else {
            CatalogStore::new()
        };

        Self {
            store: Arc::new(store),
            config,
            start_time: Instant::now(),
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.clone()));
        Self { config, state }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            // Health endpoints
            .route("/health", get(health))
            .route("/api/status", get(server_status))
            // Catalog API
            .route("/", get(handlers::root))
            .route("/items", post(handlers::create_item))
            .route("/items/", get(handlers::list_items))
            .route(
                "/items/{item_id}",
                get(handlers::read_item).put(handlers::update_item),
            )
            // /users/me resolves before the capture: axum prefers static
            // segments over parameters
            .route("/users/me", get(handlers::read_user_me))
            .route("/users/{user_id}", get(handlers::read_user))
            .route(
                "/users/{user_id}/items/{item_id}",
                get(handlers::read_user_item),
            )
            .route("/models/{model_name}", get(handlers::get_model))
            .with_state(self.state.clone());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(
            addr = %self.config.addr,
            items = self.state.store.len(),
            "Starting Emporium server"
        );
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(Error::Io)?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

// === Error Response ===

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
    code: Option<String>,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                error_type: error_type.into(),
                code: None,
            },
        }
    }
}

pub(crate) fn error_response(status: StatusCode, message: &str, error_type: &str) -> Response {
    let body = Json(ErrorResponse::new(message, error_type));
    (status, body).into_response()
}

pub(crate) fn validation_response(err: &Error) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        &err.to_string(),
        "validation_error",
    )
}

// === Health Endpoints ===

async fn health() -> &'static str {
    "OK"
}

async fn server_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        items: state.store.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::builder()
            .addr("0.0.0.0:3000".parse().unwrap())
            .cors(false)
            .seed(false)
            .build();

        assert_eq!(config.addr, "0.0.0.0:3000".parse().unwrap());
        assert!(!config.cors);
        assert!(!config.seed);
    }

    #[test]
    fn test_server_config_defaults_to_loopback() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "127.0.0.1:8000".parse().unwrap());
        assert!(config.cors);
        assert!(config.seed);
    }

    #[test]
    fn test_app_state_seeding() {
        let seeded = AppState::new(ServerConfig::default());
        assert_eq!(seeded.store.len(), 3);

        let empty = AppState::new(ServerConfig::builder().seed(false).build());
        assert!(empty.store.is_empty());
    }

    #[test]
    fn test_error_response_body() {
        let err = ErrorResponse::new("Test error", "test_error");

        assert_eq!(err.error.message, "Test error");
        assert_eq!(err.error.error_type, "test_error");
        assert_eq!(err.error.code, None);
    }
}
