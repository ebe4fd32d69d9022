//! Instructions build service
//!
//! Runs the full pipeline for one tour: normalize the order summary,
//! encode the unique SKUs as barcodes (bounded fan-out), group the orders
//! by workflow and render the paginated PDF. Stateless across builds;
//! callers may safely retry the whole build.

use shared::models::{OrderSummary, Tour};
use tour_pdf::{DocResult, InstructionsRenderer, TourDocument, encode_batch, group_by_workflow, normalize};

/// Builds tour instruction documents
pub struct InstructionsService {
    /// Bound on concurrent barcode encode tasks
    concurrency: usize,
}

impl InstructionsService {
    pub fn new(concurrency: usize) -> Self {
        Self { concurrency }
    }

    /// Build the instructions PDF for a finalized tour
    ///
    /// The caller is responsible for refusing tours without a summary;
    /// this method only runs the document pipeline.
    pub async fn build(&self, tour: &Tour, summary: &OrderSummary) -> DocResult<Vec<u8>> {
        let normalized = normalize(summary);
        tracing::info!(
            tour = tour.tour_numeric_id,
            unique_skus = normalized.skus.len(),
            "Generating barcodes"
        );

        // All encodings complete (success or degraded) before layout.
        let barcodes = encode_batch(&normalized, self.concurrency).await;
        let groups = group_by_workflow(normalized.orders);

        let doc = TourDocument::new(tour, summary.counters(), groups, barcodes);
        let bytes = InstructionsRenderer::new().render(&doc)?;

        tracing::info!(
            tour = tour.tour_numeric_id,
            bytes = bytes.len(),
            "Instructions PDF generated"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalized_tour() -> Tour {
        serde_json::from_value(serde_json::json!({
            "id": "t-1",
            "tour_numeric_id": 42,
            "date": "2025-06-01",
            "time": "10:00",
            "warehouse": {"name": "East DC", "code": "EDC"},
            "host": {"first_name": "Jane", "last_name": "Doe"},
            "participants": [
                {"first_name": "Alice", "last_name": "Smith"}
            ],
            "order_summary": {
                "participantOrders": [
                    {"orderNumber": "SO-1", "participantName": "Alice", "skus": ["A1", "B2"]}
                ],
                "hostOrder": {"orderNumber": "SO-2", "hostName": "Jane", "skus": ["B2"]},
                "totalOrders": 2,
                "successCount": 2,
                "failedCount": 0
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_build_produces_pdf() {
        let tour = finalized_tour();
        let summary = tour.order_summary.clone().unwrap();

        let bytes = InstructionsService::new(4).build(&tour, &summary).await.unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("TOUR INSTRUCTIONS #42"));
        // Two unique SKUs on one barcode page
        assert_eq!(text.matches("/Type /Page ").count(), 2);
    }
}
