use axum::{routing::get, Router};

use crate::handlers;

/// Create the application router with all routes.
///
/// Anything outside these two routes falls through to axum's defaults
/// (404 for an unknown path, 405 for a known path with the wrong method).
pub fn create_router() -> Router {
    Router::new()
        // Deployment greeting
        .route("/", get(handlers::root))
        // Health check (liveness probe for orchestrators)
        .route("/health", get(handlers::health))
}
