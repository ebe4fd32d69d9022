//! Error types for the document pipeline

use thiserror::Error;

/// Document pipeline error types
#[derive(Debug, Error)]
pub enum DocError {
    /// SKU contains a character outside the CODE128 code set B range
    #[error("SKU not encodable as CODE128: {sku}")]
    InvalidSku { sku: String },

    /// Image encoding/decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// PDF rendering error
    #[error("Render failed: {0}")]
    Render(String),
}

/// Result type for document pipeline operations
pub type DocResult<T> = Result<T, DocError>;
