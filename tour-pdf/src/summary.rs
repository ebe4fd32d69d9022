//! Order summary normalization
//!
//! Maps both historical order summary shapes onto one canonical record
//! list and collects the unique SKU set referenced by the tour.

use std::collections::BTreeSet;

use shared::models::{LegacySummary, OrderSummary, TaggedSummary};

/// Canonical order record, valid for the duration of one document build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub order_number: String,
    pub recipient: String,
    pub workflow: String,
    pub skus: Vec<String>,
}

/// Output of normalization: sorted unique SKUs plus canonical records
#[derive(Debug, Clone, Default)]
pub struct NormalizedSummary {
    /// Unique SKU set, ascending lexicographic
    pub skus: Vec<String>,
    /// Canonical order records in section discovery order
    pub orders: Vec<OrderRecord>,
}

impl NormalizedSummary {
    /// Number of distinct order records whose SKU list contains `sku`
    pub fn usage_count(&self, sku: &str) -> usize {
        self.orders
            .iter()
            .filter(|order| order.skus.iter().any(|s| s == sku))
            .count()
    }
}

/// Normalize a raw order summary of either schema shape
///
/// Missing sections contribute nothing; entries with malformed SKU lists
/// have already been degraded to empty lists during deserialization.
pub fn normalize(summary: &OrderSummary) -> NormalizedSummary {
    let orders = match summary {
        OrderSummary::Legacy(s) => normalize_legacy(s),
        OrderSummary::WorkflowTagged(s) => normalize_tagged(s),
    };

    // Case-sensitive union; BTreeSet gives the sorted unique set directly.
    let skus: Vec<String> = orders
        .iter()
        .flat_map(|order| order.skus.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    tracing::debug!(
        orders = orders.len(),
        unique_skus = skus.len(),
        "Order summary normalized"
    );

    NormalizedSummary { skus, orders }
}

fn normalize_legacy(summary: &LegacySummary) -> Vec<OrderRecord> {
    let mut orders = Vec::new();

    for order in &summary.participant_orders {
        orders.push(OrderRecord {
            order_number: first_present(&order.order_number, &order.order_id, "N/A"),
            recipient: first_present(&order.participant_name, &order.recipient, "Unknown"),
            workflow: "Participant Orders".to_string(),
            skus: order.skus.clone(),
        });
    }

    if let Some(host) = &summary.host_order {
        orders.push(OrderRecord {
            order_number: first_present(&host.order_number, &host.order_id, "N/A"),
            recipient: host.host_name.clone().unwrap_or_else(|| "Tour Host".to_string()),
            workflow: "Host Order".to_string(),
            skus: host.skus.clone(),
        });
    }

    for order in &summary.extra_orders {
        orders.push(OrderRecord {
            order_number: first_present(&order.order_number, &order.order_id, "N/A"),
            recipient: order.recipient.clone().unwrap_or_else(|| "Demo Customer".to_string()),
            workflow: "Extra Demo Orders".to_string(),
            skus: order.skus.clone(),
        });
    }

    orders
}

fn normalize_tagged(summary: &TaggedSummary) -> Vec<OrderRecord> {
    let mut orders = Vec::new();

    for order in &summary.sales_orders {
        let workflow = order.workflow.as_deref().unwrap_or("Unknown");
        orders.push(OrderRecord {
            order_number: order.order_number.clone().unwrap_or_else(|| "N/A".to_string()),
            recipient: order.customer_name.clone().unwrap_or_else(|| "Unknown".to_string()),
            workflow: format!("Sales Orders - {workflow}"),
            skus: order.skus.clone(),
        });
    }

    for order in &summary.purchase_orders {
        let workflow = order.workflow.as_deref().unwrap_or("Unknown");
        orders.push(OrderRecord {
            order_number: order.po_number.clone().unwrap_or_else(|| "N/A".to_string()),
            recipient: order.vendor_name.clone().unwrap_or_else(|| "Unknown".to_string()),
            workflow: format!("Purchase Orders - {workflow}"),
            skus: order.skus.clone(),
        });
    }

    orders
}

fn first_present(a: &Option<String>, b: &Option<String>, default: &str) -> String {
    a.clone()
        .or_else(|| b.clone())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> OrderSummary {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_legacy_participant_and_host() {
        let summary = parse(serde_json::json!({
            "participantOrders": [
                {"orderNumber": "SO-1", "participantName": "Alice", "skus": ["A1", "B2"]}
            ],
            "hostOrder": {"orderNumber": "SO-2", "hostName": "Bob", "skus": ["B2"]}
        }));
        let normalized = normalize(&summary);

        assert_eq!(normalized.skus, vec!["A1", "B2"]);
        assert_eq!(normalized.orders.len(), 2);
        assert_eq!(normalized.orders[0].workflow, "Participant Orders");
        assert_eq!(normalized.orders[1].workflow, "Host Order");
        assert_eq!(normalized.usage_count("B2"), 2);
        assert_eq!(normalized.usage_count("A1"), 1);
    }

    #[test]
    fn test_skus_sorted_and_deduplicated() {
        let summary = parse(serde_json::json!({
            "participantOrders": [
                {"orderNumber": "SO-1", "skus": ["Z9", "A1"]},
                {"orderNumber": "SO-2", "skus": ["A1", "M5"]}
            ]
        }));
        let normalized = normalize(&summary);
        assert_eq!(normalized.skus, vec!["A1", "M5", "Z9"]);
    }

    #[test]
    fn test_sku_dedup_is_case_sensitive() {
        let summary = parse(serde_json::json!({
            "participantOrders": [
                {"orderNumber": "SO-1", "skus": ["abc", "ABC"]}
            ]
        }));
        let normalized = normalize(&summary);
        assert_eq!(normalized.skus, vec!["ABC", "abc"]);
    }

    #[test]
    fn test_empty_summary_yields_nothing() {
        let normalized = normalize(&parse(serde_json::json!({})));
        assert!(normalized.skus.is_empty());
        assert!(normalized.orders.is_empty());
    }

    #[test]
    fn test_malformed_sku_list_does_not_abort_siblings() {
        let summary = parse(serde_json::json!({
            "participantOrders": [
                {"orderNumber": "SO-1", "skus": {"bad": "shape"}},
                {"orderNumber": "SO-2", "skus": ["C3"]}
            ]
        }));
        let normalized = normalize(&summary);
        assert_eq!(normalized.orders.len(), 2);
        assert!(normalized.orders[0].skus.is_empty());
        assert_eq!(normalized.skus, vec!["C3"]);
    }

    #[test]
    fn test_tagged_workflow_defaults_to_unknown() {
        let summary = parse(serde_json::json!({
            "sales_orders": [
                {"order_number": "SO-10", "workflow": "Pick", "skus": ["A"]},
                {"order_number": "SO-11", "workflow": "Pick", "skus": ["B"]}
            ],
            "purchase_orders": [
                {"po_number": "PO-1", "skus": ["C"]}
            ]
        }));
        let normalized = normalize(&summary);

        assert_eq!(normalized.orders[0].workflow, "Sales Orders - Pick");
        assert_eq!(normalized.orders[1].workflow, "Sales Orders - Pick");
        assert_eq!(normalized.orders[2].workflow, "Purchase Orders - Unknown");
        assert_eq!(normalized.orders[2].order_number, "PO-1");
    }

    #[test]
    fn test_legacy_field_fallbacks() {
        let summary = parse(serde_json::json!({
            "participantOrders": [
                {"orderId": "legacy-7", "recipient": "Carol", "skus": []}
            ],
            "hostOrder": {"skus": ["H1"]}
        }));
        let normalized = normalize(&summary);

        assert_eq!(normalized.orders[0].order_number, "legacy-7");
        assert_eq!(normalized.orders[0].recipient, "Carol");
        assert_eq!(normalized.orders[1].order_number, "N/A");
        assert_eq!(normalized.orders[1].recipient, "Tour Host");
    }
}
