//! Order placement result.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{OrderNumber, Timestamp};

/// The broker's confirmation of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderResult {
    /// Broker-assigned order number.
    pub order_number: OrderNumber,
    /// When the broker accepted the order.
    #[serde(default)]
    pub placed_at: Option<Timestamp>,
    /// Broker confirmation text, if any.
    #[serde(default)]
    pub confirmation_message: Option<String>,
}

impl PlaceOrderResult {
    /// Create a result carrying only the order number.
    #[must_use]
    pub const fn new(order_number: OrderNumber) -> Self {
        Self {
            order_number,
            placed_at: None,
            confirmation_message: None,
        }
    }

    /// Set the placement timestamp.
    #[must_use]
    pub const fn with_placed_at(mut self, placed_at: Timestamp) -> Self {
        self.placed_at = Some(placed_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_order_result_new() {
        let result = PlaceOrderResult::new(OrderNumber::new("12345"));
        assert_eq!(result.order_number.as_str(), "12345");
        assert!(result.placed_at.is_none());
        assert!(result.confirmation_message.is_none());
    }

    #[test]
    fn place_order_result_with_placed_at() {
        let ts = Timestamp::parse("2026-08-01T12:00:00Z").unwrap();
        let result = PlaceOrderResult::new(OrderNumber::new("12345")).with_placed_at(ts);
        assert_eq!(result.placed_at, Some(ts));
    }

    #[test]
    fn place_order_result_serde_roundtrip() {
        let result = PlaceOrderResult::new(OrderNumber::new("12345"));
        let json = serde_json::to_string(&result).unwrap();
        let parsed: PlaceOrderResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
