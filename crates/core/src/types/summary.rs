//! Aggregate order statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Count/total/recent-window statistics over a customer's filtered orders.
///
/// Serialized camelCase - this is the renderer's stat-tile contract.
///
/// `total_spent` is an exact decimal sum without cross-currency normalization;
/// the order collection is assumed single-currency (documented limitation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Number of orders the customer has placed.
    pub total_orders: u64,
    /// Sum of all order totals.
    pub total_spent: Decimal,
    /// Orders placed within the trailing 30-day recency window.
    pub recent_orders: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let summary = OrderSummary {
            total_orders: 2,
            total_spent: Decimal::new(203_000, 2),
            recent_orders: 1,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalOrders"], 2);
        assert_eq!(json["recentOrders"], 1);
        assert!(json.get("total_orders").is_none());
    }
}
