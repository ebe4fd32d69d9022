//! ShipHero token refresh proxy
//!
//! Browser clients cannot call the ShipHero auth endpoint directly, so
//! this route forwards the refresh credential. The outbound client
//! carries a hard timeout ceiling; a timeout maps to 408, distinct from
//! other upstream failures, which echo the upstream status and body.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use shared::{ApiError, ApiResult};

use crate::core::ServerState;

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// POST /api/shiphero/refresh-token
pub async fn refresh_token(
    State(state): State<ServerState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let token = req
        .refresh_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::invalid("Refresh token required"))?;

    tracing::info!(
        token_prefix = %token.chars().take(10).collect::<String>(),
        "Refreshing token with ShipHero"
    );

    let response = state
        .http_client
        .post(&state.config.shiphero_auth_url)
        .json(&serde_json::json!({ "refresh_token": token }))
        .send()
        .await;

    let response = match response {
        Ok(r) => r,
        Err(e) if e.is_timeout() => {
            tracing::error!(
                timeout_ms = state.config.shiphero_timeout_ms,
                "ShipHero API timeout"
            );
            return Err(ApiError::upstream_timeout(
                "ShipHero API timeout. Request took too long. Please try again.",
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "ShipHero request failed");
            return Err(ApiError::internal(format!("Failed to reach ShipHero: {e}")));
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = %status, "ShipHero refresh error");
        return Err(ApiError::upstream(status.as_u16(), body));
    }

    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiError::internal(format!("Invalid ShipHero response: {e}")))?;

    tracing::info!("Token refresh successful");
    Ok(Json(data))
}
