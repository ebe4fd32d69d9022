//! Tour instructions document handler

use axum::extract::{Path, State};
use axum::response::Response;
use http::header;
use shared::{ApiError, ApiResult};

use crate::core::ServerState;

/// GET /api/tours/:id/instructions-pdf
///
/// Streams the instructions PDF for a finalized tour. Unknown tours are a
/// 404; tours whose summary has not been finalized are refused with a 412
/// rather than producing an empty document.
pub async fn instructions_pdf(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let tour = state
        .store
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found("Tour"))?;

    let Some(summary) = &tour.order_summary else {
        return Err(ApiError::precondition_failed(
            "Tour has not been finalized yet. Please finalize the tour to generate instructions.",
        ));
    };

    let bytes = state.instructions.build(&tour, summary).await.map_err(|e| {
        tracing::error!(tour = %id, error = %e, "Instructions PDF build failed");
        // Developer-facing detail stays out of production responses
        if state.config.is_production() {
            ApiError::internal("Failed to generate PDF")
        } else {
            ApiError::internal(format!("Failed to generate PDF: {e}"))
        }
    })?;

    let filename = format!("Tour-{}-Instructions.pdf", tour.tour_numeric_id);
    Response::builder()
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header(header::CONTENT_LENGTH, bytes.len())
        .body(bytes.into())
        .map_err(|e| ApiError::internal(e.to_string()))
}
