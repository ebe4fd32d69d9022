//! Order summary schemas
//!
//! A finalized tour carries an order summary in one of two historical
//! shapes. The legacy shape has three fixed sections (participant orders,
//! host order, extra demo orders); the newer shape tags every entry with a
//! workflow and splits entries into sales and purchase orders. Neither
//! shape carries a version discriminator, so detection is by field
//! presence.

use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;

/// Order totals carried alongside the order sections
///
/// All counters are optional; older summaries may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCounters {
    pub total_orders: Option<u64>,
    pub success_count: Option<u64>,
    pub failed_count: Option<u64>,
}

/// Raw order summary, one of the two known schema shapes
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OrderSummary {
    /// Three fixed sections, camelCase fields
    Legacy(LegacySummary),
    /// Workflow-tagged sales/purchase orders, snake_case fields
    WorkflowTagged(TaggedSummary),
}

impl OrderSummary {
    /// Order totals, regardless of schema shape
    pub fn counters(&self) -> SummaryCounters {
        match self {
            Self::Legacy(s) => s.counters(),
            Self::WorkflowTagged(s) => s.counters(),
        }
    }
}

impl<'de> Deserialize<'de> for OrderSummary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let map = value
            .as_object()
            .ok_or_else(|| de::Error::custom("order summary must be a JSON object"))?;

        // Field-presence detection: the tagged shape wins when its marker
        // sections are present. A summary with neither marker is accepted
        // as an empty legacy summary (missing sections are not errors).
        if map.contains_key("sales_orders") || map.contains_key("purchase_orders") {
            serde_json::from_value::<TaggedSummary>(value)
                .map(Self::WorkflowTagged)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value::<LegacySummary>(value)
                .map(Self::Legacy)
                .map_err(de::Error::custom)
        }
    }
}

// ========== Legacy shape ==========

/// Legacy summary: participant orders, one host order, extra demo orders
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize)]
pub struct LegacySummary {
    #[serde(default, rename = "participantOrders")]
    pub participant_orders: Vec<LegacyOrder>,
    #[serde(default, rename = "hostOrder")]
    pub host_order: Option<HostOrder>,
    #[serde(default, rename = "extraOrders")]
    pub extra_orders: Vec<LegacyOrder>,
    #[serde(default, rename = "totalOrders")]
    pub total_orders: Option<u64>,
    #[serde(default, rename = "successCount")]
    pub success_count: Option<u64>,
    #[serde(default, rename = "failedCount")]
    pub failed_count: Option<u64>,
}

impl LegacySummary {
    pub fn counters(&self) -> SummaryCounters {
        SummaryCounters {
            total_orders: self.total_orders,
            success_count: self.success_count,
            failed_count: self.failed_count,
        }
    }
}

/// Participant or extra order in the legacy shape
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize)]
pub struct LegacyOrder {
    #[serde(default, rename = "orderNumber")]
    pub order_number: Option<String>,
    #[serde(default, rename = "orderId")]
    pub order_id: Option<String>,
    #[serde(default, rename = "participantName")]
    pub participant_name: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default, deserialize_with = "lenient_skus")]
    pub skus: Vec<String>,
}

/// Host order in the legacy shape
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize)]
pub struct HostOrder {
    #[serde(default, rename = "orderNumber")]
    pub order_number: Option<String>,
    #[serde(default, rename = "orderId")]
    pub order_id: Option<String>,
    #[serde(default, rename = "hostName")]
    pub host_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_skus")]
    pub skus: Vec<String>,
}

// ========== Workflow-tagged shape ==========

/// Workflow-tagged summary: sales orders and purchase orders
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize)]
pub struct TaggedSummary {
    #[serde(default)]
    pub sales_orders: Vec<SalesOrder>,
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
    #[serde(default)]
    pub total_orders: Option<u64>,
    #[serde(default)]
    pub success_count: Option<u64>,
    #[serde(default)]
    pub failed_count: Option<u64>,
}

impl TaggedSummary {
    pub fn counters(&self) -> SummaryCounters {
        SummaryCounters {
            total_orders: self.total_orders,
            success_count: self.success_count,
            failed_count: self.failed_count,
        }
    }
}

/// Sales order in the workflow-tagged shape
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize)]
pub struct SalesOrder {
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub workflow: Option<String>,
    #[serde(default, deserialize_with = "lenient_skus")]
    pub skus: Vec<String>,
}

/// Purchase order in the workflow-tagged shape
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize)]
pub struct PurchaseOrder {
    #[serde(default)]
    pub po_number: Option<String>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub workflow: Option<String>,
    #[serde(default, deserialize_with = "lenient_skus")]
    pub skus: Vec<String>,
}

/// Tolerant SKU list deserializer
///
/// A missing or malformed `skus` field (non-array value, non-string items)
/// contributes zero codes instead of failing the whole summary.
fn lenient_skus<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_legacy_shape() {
        let json = serde_json::json!({
            "participantOrders": [
                {"orderNumber": "SO-1", "participantName": "Alice", "skus": ["A1", "B2"]}
            ],
            "hostOrder": {"orderId": "SO-2", "hostName": "Bob", "skus": ["B2"]},
            "totalOrders": 2,
            "successCount": 2
        });
        let summary: OrderSummary = serde_json::from_value(json).unwrap();
        match summary {
            OrderSummary::Legacy(s) => {
                assert_eq!(s.participant_orders.len(), 1);
                assert_eq!(s.participant_orders[0].skus, vec!["A1", "B2"]);
                assert_eq!(s.host_order.unwrap().order_id.as_deref(), Some("SO-2"));
                assert_eq!(s.total_orders, Some(2));
                assert_eq!(s.failed_count, None);
            }
            other => panic!("expected legacy shape, got {other:?}"),
        }
    }

    #[test]
    fn test_detects_tagged_shape() {
        let json = serde_json::json!({
            "sales_orders": [
                {"order_number": "SO-9", "customer_name": "ACME", "workflow": "Pick", "skus": ["X"]}
            ],
            "purchase_orders": [
                {"po_number": "PO-1", "skus": ["Y"]}
            ]
        });
        let summary: OrderSummary = serde_json::from_value(json).unwrap();
        match summary {
            OrderSummary::WorkflowTagged(s) => {
                assert_eq!(s.sales_orders[0].workflow.as_deref(), Some("Pick"));
                assert_eq!(s.purchase_orders[0].workflow, None);
            }
            other => panic!("expected tagged shape, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_summary_is_legacy_with_no_sections() {
        let summary: OrderSummary = serde_json::from_value(serde_json::json!({})).unwrap();
        match summary {
            OrderSummary::Legacy(s) => {
                assert!(s.participant_orders.is_empty());
                assert!(s.host_order.is_none());
                assert!(s.extra_orders.is_empty());
            }
            other => panic!("expected legacy shape, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_skus_field_is_tolerated() {
        let json = serde_json::json!({
            "participantOrders": [
                {"orderNumber": "SO-1", "skus": "not-a-list"},
                {"orderNumber": "SO-2", "skus": ["OK-1", 42, "OK-2"]}
            ]
        });
        let summary: OrderSummary = serde_json::from_value(json).unwrap();
        let OrderSummary::Legacy(s) = summary else {
            panic!("expected legacy shape");
        };
        assert!(s.participant_orders[0].skus.is_empty());
        assert_eq!(s.participant_orders[1].skus, vec!["OK-1", "OK-2"]);
    }

    #[test]
    fn test_non_object_summary_rejected() {
        let result: Result<OrderSummary, _> = serde_json::from_value(serde_json::json!([1, 2]));
        assert!(result.is_err());
    }
}
