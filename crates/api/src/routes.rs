//! Route configuration.
//!
//! Defines all routes for the beer service REST API.

use axum::{
    Router,
    routing::{get, post, put},
};
use taproom_store::BeerStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all beer service routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// ## Resource-level
/// - `POST /api/v1/beer` - Create
/// - `GET /api/v1/beer/{id}` - Fetch
/// - `PUT /api/v1/beer/{id}` - Update
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: BeerStore + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        // Resource-level routes
        .route("/api/v1/beer", post(handlers::create_beer_handler::<S>))
        .route("/api/v1/beer/{id}", get(handlers::fetch_beer_handler::<S>))
        .route("/api/v1/beer/{id}", put(handlers::update_beer_handler::<S>))
        // State
        .with_state(state)
}
