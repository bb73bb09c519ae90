//! Order expiration (time in force).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How long the order remains working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderExpiration {
    /// Expires at the end of the trading day.
    GoodForDay,
    /// Works until explicitly cancelled.
    GoodUntilCanceled,
}

impl OrderExpiration {
    /// Display label used on the preview.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GoodForDay => "Good for day",
            Self::GoodUntilCanceled => "Good until canceled",
        }
    }
}

impl fmt::Display for OrderExpiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_expiration_labels() {
        assert_eq!(OrderExpiration::GoodForDay.label(), "Good for day");
        assert_eq!(
            OrderExpiration::GoodUntilCanceled.label(),
            "Good until canceled"
        );
    }

    #[test]
    fn order_expiration_serde() {
        assert_eq!(
            serde_json::to_string(&OrderExpiration::GoodForDay).unwrap(),
            "\"GOOD_FOR_DAY\""
        );
        let parsed: OrderExpiration = serde_json::from_str("\"GOOD_UNTIL_CANCELED\"").unwrap();
        assert_eq!(parsed, OrderExpiration::GoodUntilCanceled);
    }
}
