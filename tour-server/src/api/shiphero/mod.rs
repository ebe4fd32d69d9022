//! ShipHero proxy API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/shiphero/refresh-token", post(handler::refresh_token))
}
