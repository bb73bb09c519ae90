//! Order details carried by a preview result.

use serde::{Deserialize, Serialize};

use super::{OrderAction, OrderExpiration};
use crate::domain::shared::{Money, Quantity, Symbol};

/// The order as the broker previewed it.
///
/// The price is a server-formatted string: limit, stop, and market previews
/// render it differently and the ticket passes it through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Order action.
    pub action: OrderAction,
    /// Symbol being traded.
    pub symbol: Symbol,
    /// Quantity.
    pub quantity: Quantity,
    /// Server-formatted price description.
    pub price: String,
    /// Time in force.
    pub expiration: OrderExpiration,
    /// Estimated broker commission, if the broker reports one.
    #[serde(default)]
    pub commission: Option<Money>,
    /// Estimated total order value, if the broker reports one.
    #[serde(default)]
    pub estimated_total: Option<Money>,
}

impl OrderDetails {
    /// Create details without optional estimates.
    #[must_use]
    pub fn new(
        action: OrderAction,
        symbol: Symbol,
        quantity: Quantity,
        price: impl Into<String>,
        expiration: OrderExpiration,
    ) -> Self {
        Self {
            action,
            symbol,
            quantity,
            price: price.into(),
            expiration,
            commission: None,
            estimated_total: None,
        }
    }

    /// Set the estimated broker commission.
    #[must_use]
    pub fn with_commission(mut self, commission: Money) -> Self {
        self.commission = Some(commission);
        self
    }

    /// Set the estimated total order value.
    #[must_use]
    pub fn with_estimated_total(mut self, total: Money) -> Self {
        self.estimated_total = Some(total);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn order_details_new_has_no_estimates() {
        let details = OrderDetails::new(
            OrderAction::Buy,
            Symbol::new("AAPL"),
            Quantity::from_i64(10),
            "150.00",
            OrderExpiration::GoodForDay,
        );
        assert!(details.commission.is_none());
        assert!(details.estimated_total.is_none());
    }

    #[test]
    fn order_details_builders() {
        let details = OrderDetails::new(
            OrderAction::Buy,
            Symbol::new("AAPL"),
            Quantity::from_i64(10),
            "150.00",
            OrderExpiration::GoodForDay,
        )
        .with_commission(Money::new(dec!(4.50)))
        .with_estimated_total(Money::new(dec!(1504.50)));

        assert_eq!(details.commission, Some(Money::new(dec!(4.50))));
        assert_eq!(details.estimated_total, Some(Money::new(dec!(1504.50))));
    }

    #[test]
    fn order_details_deserializes_without_optionals() {
        let json = r#"{
            "action": "SELL",
            "symbol": "MSFT",
            "quantity": "5",
            "price": "Market",
            "expiration": "GOOD_UNTIL_CANCELED"
        }"#;
        let details: OrderDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.action, OrderAction::Sell);
        assert_eq!(details.price, "Market");
        assert!(details.commission.is_none());
    }
}
