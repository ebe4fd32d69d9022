//! Error types for the shared crate
//!
//! Standardized error types used across the service

use crate::response::ApiResponse;
use http::{Response, StatusCode};
use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Invalid request (400)
    Invalid,
    /// Resource not found (404)
    NotFound,
    /// Request precondition not met (412)
    PreconditionFailed,
    /// Upstream request timed out (408)
    UpstreamTimeout,
    /// Upstream returned a failure (502)
    Upstream,
    /// Internal server error (500)
    Internal,
}

impl ApiErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Invalid => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
            Self::UpstreamTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Upstream => StatusCode::BAD_GATEWAY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Invalid => "E0006",
            Self::NotFound => "E0003",
            Self::PreconditionFailed => "E0007",
            Self::UpstreamTimeout => "E5001",
            Self::Upstream => "E5002",
            Self::Internal => "E9001",
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unified error type for the service
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request
    #[error("Invalid request: {message}")]
    Invalid { message: String },

    /// Resource not found
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Request precondition not met
    #[error("Precondition failed: {message}")]
    PreconditionFailed { message: String },

    /// Upstream request timed out
    #[error("Upstream timeout: {message}")]
    UpstreamTimeout { message: String },

    /// Upstream returned a failure status
    #[error("Upstream error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Internal server error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    // ========== Convenient constructors ==========

    /// Create an Invalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid { message: message.into() }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a PreconditionFailed error
    pub fn precondition_failed(message: impl Into<String>) -> Self {
        Self::PreconditionFailed { message: message.into() }
    }

    /// Create an UpstreamTimeout error
    pub fn upstream_timeout(message: impl Into<String>) -> Self {
        Self::UpstreamTimeout { message: message.into() }
    }

    /// Create an Upstream error echoing the upstream status and body
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream { status, body: body.into() }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    // ========== Error inspection methods ==========

    /// Get the error code for this error
    pub fn error_code(&self) -> ApiErrorCode {
        match self {
            Self::Invalid { .. } => ApiErrorCode::Invalid,
            Self::NotFound { .. } => ApiErrorCode::NotFound,
            Self::PreconditionFailed { .. } => ApiErrorCode::PreconditionFailed,
            Self::UpstreamTimeout { .. } => ApiErrorCode::UpstreamTimeout,
            Self::Upstream { .. } => ApiErrorCode::Upstream,
            Self::Internal { .. } => ApiErrorCode::Internal,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Invalid { message } => message.clone(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::PreconditionFailed { message } => message.clone(),
            Self::UpstreamTimeout { message } => message.clone(),
            Self::Upstream { body, .. } => body.clone(),
            Self::Internal { message } => message.clone(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Upstream errors echo the upstream status instead of a fixed code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            other => other.error_code().status_code(),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> Response<axum::body::Body> {
        let status = self.status();
        let code = self.error_code();
        let message = self.message();

        let body = ApiResponse::<()>::error(code.code(), message);
        let json_body = serde_json::to_string(&body).unwrap_or_default();

        http::Response::builder()
            .status(status)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(json_body.into())
            .unwrap_or_else(|_| {
                http::Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body("Internal error".into())
                    .unwrap()
            })
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::not_found("tour").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::precondition_failed("not finalized").status(),
            StatusCode::PRECONDITION_FAILED
        );
        assert_eq!(
            ApiError::upstream_timeout("timeout").status(),
            StatusCode::REQUEST_TIMEOUT
        );
        assert_eq!(ApiError::internal("boom").status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_echoes_status() {
        let err = ApiError::upstream(401, "bad token");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "bad token");
    }
}
