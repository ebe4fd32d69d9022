//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`tours`] - instructions document build
//! - [`shiphero`] - upstream token refresh proxy

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod health;
pub mod shiphero;
pub mod tours;

/// Build a router with all routes registered (no middleware)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(tours::router())
        .merge(shiphero::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the document link is opened straight from the browser UI
        .layer(CorsLayer::permissive())
        // Request tracing
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
