//! Data models shared across the service

mod summary;
mod tour;

pub use summary::{
    HostOrder, LegacyOrder, LegacySummary, OrderSummary, PurchaseOrder, SalesOrder,
    SummaryCounters, TaggedSummary,
};
pub use tour::{Host, Participant, Tour, Warehouse};
