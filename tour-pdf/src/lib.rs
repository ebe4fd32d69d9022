//! # tour-pdf
//!
//! Tour instructions document pipeline - turns a finalized tour's order
//! summary into a printable PDF with scannable SKU barcodes.
//!
//! ## Scope
//!
//! This crate handles HOW to build the document:
//! - Order summary normalization (two historical schema shapes)
//! - CODE128 barcode rasterization (PNG via `image`)
//! - Workflow grouping of order records
//! - Page assembly and PDF byte generation
//!
//! Fetching tour records and serving the bytes over HTTP stays in
//! application code (tour-server).
//!
//! ## Example
//!
//! ```ignore
//! use tour_pdf::{normalize, group_by_workflow, encode_batch, InstructionsRenderer, TourDocument};
//!
//! let normalized = normalize(&summary);
//! let barcodes = encode_batch(&normalized, 8).await;
//! let groups = group_by_workflow(normalized.orders);
//! let doc = TourDocument::new(&tour, summary.counters(), groups, barcodes);
//! let pdf_bytes = InstructionsRenderer::new().render(&doc)?;
//! ```

mod barcode;
mod document;
mod error;
mod pdf;
mod render;
mod summary;
mod workflow;

// Re-exports
pub use barcode::{Barcode, encode_batch, encode_png};
pub use document::{BARCODES_PER_PAGE, DocPage, TourDocument, TourMeta};
pub use error::{DocError, DocResult};
pub use pdf::{Font, PdfBuilder};
pub use render::InstructionsRenderer;
pub use summary::{NormalizedSummary, OrderRecord, normalize};
pub use workflow::{WorkflowGroup, group_by_workflow};
