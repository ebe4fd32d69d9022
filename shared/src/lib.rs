//! Shared types for the tour document service
//!
//! Common types used across multiple crates: tour records, order summary
//! schemas, error types and response structures.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use models::{OrderSummary, SummaryCounters, Tour};
pub use response::ApiResponse;
