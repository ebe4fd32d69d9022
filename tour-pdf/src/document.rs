//! Document assembly
//!
//! Combines tour metadata, workflow groups and encoded barcodes into the
//! immutable rendering input, and splits the barcode list into fixed-size
//! pages.

use chrono::NaiveDate;
use shared::models::{SummaryCounters, Tour};

use crate::barcode::Barcode;
use crate::workflow::WorkflowGroup;

/// Maximum barcode cells per barcode page
pub const BARCODES_PER_PAGE: usize = 15;

/// Tour metadata shown on the detail page header
#[derive(Debug, Clone)]
pub struct TourMeta {
    pub tour_numeric_id: i64,
    pub date: Option<String>,
    pub time: Option<String>,
    pub warehouse_name: String,
    pub warehouse_code: Option<String>,
    pub host_name: String,
    pub participant_count: usize,
}

impl From<&Tour> for TourMeta {
    fn from(tour: &Tour) -> Self {
        Self {
            tour_numeric_id: tour.tour_numeric_id,
            date: tour.date.clone(),
            time: tour.time.clone(),
            warehouse_name: tour.warehouse.name.clone(),
            warehouse_code: tour.warehouse.code.clone(),
            host_name: tour.host.full_name(),
            participant_count: tour.participants.len(),
        }
    }
}

impl TourMeta {
    /// Long-form calendar date, `N/A` when absent or unparsable
    pub fn formatted_date(&self) -> String {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// The immutable rendering input for one document build
#[derive(Debug, Clone)]
pub struct TourDocument {
    pub meta: TourMeta,
    pub counters: SummaryCounters,
    pub groups: Vec<WorkflowGroup>,
    pub barcodes: Vec<Barcode>,
}

/// One page of the assembled document
#[derive(Debug)]
pub enum DocPage<'a> {
    /// Tour details, summary block and workflow group listings
    Detail,
    /// A grid of at most [`BARCODES_PER_PAGE`] barcode cells
    Barcodes {
        /// 1-based page index among barcode pages
        index: usize,
        /// Total barcode page count
        total: usize,
        items: &'a [Barcode],
    },
}

impl TourDocument {
    pub fn new(
        tour: &Tour,
        counters: SummaryCounters,
        groups: Vec<WorkflowGroup>,
        barcodes: Vec<Barcode>,
    ) -> Self {
        Self {
            meta: TourMeta::from(tour),
            counters,
            groups,
            barcodes,
        }
    }

    /// Split the document into its page sequence: one detail page, then
    /// `ceil(barcodes / 15)` barcode pages (none when there are no SKUs)
    pub fn paginate(&self) -> Vec<DocPage<'_>> {
        let mut pages = vec![DocPage::Detail];

        let total = self.barcodes.len().div_ceil(BARCODES_PER_PAGE);
        for (i, items) in self.barcodes.chunks(BARCODES_PER_PAGE).enumerate() {
            pages.push(DocPage::Barcodes {
                index: i + 1,
                total,
                items,
            });
        }

        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barcode(sku: &str) -> Barcode {
        Barcode {
            sku: sku.to_string(),
            image: None,
            usage_count: 1,
        }
    }

    fn document_with_barcodes(count: usize) -> TourDocument {
        TourDocument {
            meta: TourMeta {
                tour_numeric_id: 7,
                date: Some("2025-06-01".to_string()),
                time: Some("10:00".to_string()),
                warehouse_name: "East DC".to_string(),
                warehouse_code: None,
                host_name: "Jane Doe".to_string(),
                participant_count: 3,
            },
            counters: SummaryCounters::default(),
            groups: Vec::new(),
            barcodes: (0..count).map(|i| barcode(&format!("SKU-{i:03}"))).collect(),
        }
    }

    #[test]
    fn test_no_skus_means_no_barcode_pages() {
        let doc = document_with_barcodes(0);
        assert_eq!(doc.paginate().len(), 1);
    }

    #[test]
    fn test_barcode_page_counts() {
        for (skus, pages) in [(1, 1), (15, 1), (16, 2), (30, 2), (31, 3)] {
            let doc = document_with_barcodes(skus);
            assert_eq!(doc.paginate().len(), 1 + pages, "{skus} SKUs");
        }
    }

    #[test]
    fn test_barcode_pages_chunked_in_order() {
        let doc = document_with_barcodes(16);
        let pages = doc.paginate();
        match &pages[1] {
            DocPage::Barcodes { index, total, items } => {
                assert_eq!((*index, *total, items.len()), (1, 2, 15));
                assert_eq!(items[0].sku, "SKU-000");
            }
            other => panic!("expected barcode page, got {other:?}"),
        }
        match &pages[2] {
            DocPage::Barcodes { index, items, .. } => {
                assert_eq!((*index, items.len()), (2, 1));
                assert_eq!(items[0].sku, "SKU-015");
            }
            other => panic!("expected barcode page, got {other:?}"),
        }
    }

    #[test]
    fn test_formatted_date() {
        let mut doc = document_with_barcodes(0);
        assert_eq!(doc.meta.formatted_date(), "June 1, 2025");

        doc.meta.date = Some("garbage".to_string());
        assert_eq!(doc.meta.formatted_date(), "N/A");

        doc.meta.date = None;
        assert_eq!(doc.meta.formatted_date(), "N/A");
    }
}
