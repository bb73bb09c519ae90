//! Order action.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the order does with the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
    /// Open or add to a long position.
    Buy,
    /// Reduce or close a long position.
    Sell,
    /// Close a short position.
    BuyToCover,
    /// Open a short position.
    SellShort,
}

impl OrderAction {
    /// Display label used on the preview.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::BuyToCover => "Buy to Cover",
            Self::SellShort => "Sell Short",
        }
    }

    /// Returns true for actions that increase exposure.
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        matches!(self, Self::Buy | Self::SellShort)
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_action_labels() {
        assert_eq!(OrderAction::Buy.label(), "Buy");
        assert_eq!(OrderAction::Sell.label(), "Sell");
        assert_eq!(OrderAction::BuyToCover.label(), "Buy to Cover");
        assert_eq!(OrderAction::SellShort.label(), "Sell Short");
    }

    #[test]
    fn order_action_is_opening() {
        assert!(OrderAction::Buy.is_opening());
        assert!(OrderAction::SellShort.is_opening());
        assert!(!OrderAction::Sell.is_opening());
        assert!(!OrderAction::BuyToCover.is_opening());
    }

    #[test]
    fn order_action_serde() {
        assert_eq!(
            serde_json::to_string(&OrderAction::BuyToCover).unwrap(),
            "\"BUY_TO_COVER\""
        );
        let parsed: OrderAction = serde_json::from_str("\"BUY\"").unwrap();
        assert_eq!(parsed, OrderAction::Buy);
    }
}
