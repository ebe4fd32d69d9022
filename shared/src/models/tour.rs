//! Tour record as stored by the fulfillment backend

use serde::{Deserialize, Serialize};

use super::OrderSummary;

/// Warehouse hosting the tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Team member hosting the tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub first_name: String,
    pub last_name: String,
}

impl Host {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Tour participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// A scheduled tour with its fulfillment order summary
///
/// `order_summary` stays `None` until the tour is finalized; the document
/// build refuses tours without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub tour_numeric_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub warehouse: Warehouse,
    pub host: Host,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub order_summary: Option<OrderSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_without_summary() {
        let json = serde_json::json!({
            "id": "t-1",
            "tour_numeric_id": 42,
            "date": "2025-06-01",
            "time": "10:00",
            "warehouse": {"name": "East DC", "code": "EDC"},
            "host": {"first_name": "Jane", "last_name": "Doe"}
        });
        let tour: Tour = serde_json::from_value(json).unwrap();
        assert!(tour.order_summary.is_none());
        assert!(tour.participants.is_empty());
        assert_eq!(tour.host.full_name(), "Jane Doe");
    }
}
