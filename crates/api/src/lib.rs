//! # taproom-api - Beer Service REST API
//!
//! This crate provides the HTTP surface of the Taproom beer service: a small
//! CRUD endpoint contract over a pluggable storage backend.
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success Status |
//! |-----------|-------------|-------------|----------------|
//! | fetch | GET | `/api/v1/beer/{id}` | 200 |
//! | create | POST | `/api/v1/beer` | 201 |
//! | update | PUT | `/api/v1/beer/{id}` | 204 |
//! | health | GET | `/health` | 200 |
//!
//! `{id}` is a canonical UUID string; payloads are JSON. An entirely-default
//! payload (`{}`) is accepted for both create and update.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taproom_api::{create_app, ServerConfig};
//! use taproom_store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     let app = create_app(store);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Errors are returned as JSON bodies with appropriate HTTP status codes:
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Malformed identifier or payload |
//! | 404 | Beer not found |
//! | 409 | Conflicting record |
//! | 500 | Internal server error |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`model`] - The beer payload schema at the HTTP boundary
//! - [`headers`] - Response header generation
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`routes`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod headers;
pub mod model;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use model::{BeerDto, BeerStyle};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use taproom_store::BeerStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function; for more control use
/// [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: BeerStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the complete beer service REST API with all handlers and
/// middleware.
///
/// # Example
///
/// ```rust,ignore
/// use taproom_api::{create_app_with_config, ServerConfig};
/// use taproom_store::MemoryStore;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryStore::new(), config);
/// ```
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: BeerStore + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        store.backend_name()
    );

    let state = AppState::new(Arc::new(store), config.clone());

    let router = routes::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.request_timeout,
        )));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taproom={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
