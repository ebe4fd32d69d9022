//! Tour API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/tours/{id}/instructions-pdf", get(handler::instructions_pdf))
}
