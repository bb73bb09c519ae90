//! Order preview result from the trade service.

use serde::{Deserialize, Serialize};

use super::OrderDetails;

/// Server-computed summary of an order before submission.
///
/// Warnings are informational; acknowledgements are risk disclosures the
/// user must accept before the order may be submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPreviewResult {
    /// The previewed order.
    pub details: OrderDetails,
    /// Informational warnings, in server order.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Required risk acknowledgements, in server order.
    #[serde(default)]
    pub acknowledgements: Vec<String>,
}

impl OrderPreviewResult {
    /// Create a preview with no warnings or acknowledgements.
    #[must_use]
    pub const fn new(details: OrderDetails) -> Self {
        Self {
            details,
            warnings: Vec::new(),
            acknowledgements: Vec::new(),
        }
    }

    /// Returns true if the preview requires no user acknowledgement.
    #[must_use]
    pub fn requires_no_acknowledgement(&self) -> bool {
        self.acknowledgements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_ticket::value_objects::{OrderAction, OrderExpiration};
    use crate::domain::shared::{Quantity, Symbol};

    fn details() -> OrderDetails {
        OrderDetails::new(
            OrderAction::Buy,
            Symbol::new("AAPL"),
            Quantity::from_i64(10),
            "150.00",
            OrderExpiration::GoodForDay,
        )
    }

    #[test]
    fn preview_new_is_clean() {
        let preview = OrderPreviewResult::new(details());
        assert!(preview.warnings.is_empty());
        assert!(preview.requires_no_acknowledgement());
    }

    #[test]
    fn preview_deserializes_missing_lists_as_empty() {
        let json = r#"{
            "details": {
                "action": "BUY",
                "symbol": "AAPL",
                "quantity": "10",
                "price": "150.00",
                "expiration": "GOOD_FOR_DAY"
            }
        }"#;
        let preview: OrderPreviewResult = serde_json::from_str(json).unwrap();
        assert!(preview.warnings.is_empty());
        assert!(preview.acknowledgements.is_empty());
    }

    #[test]
    fn preview_serde_roundtrip() {
        let mut preview = OrderPreviewResult::new(details());
        preview.warnings.push("Market is closed".to_string());
        preview
            .acknowledgements
            .push("I understand the risks".to_string());

        let json = serde_json::to_string(&preview).unwrap();
        let parsed: OrderPreviewResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, preview);
    }
}
