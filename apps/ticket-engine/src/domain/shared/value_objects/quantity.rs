//! Quantity value object for order and position sizes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A quantity of shares or currency units.
///
/// Represented as a Decimal: FX positions and fractional shares are not
/// whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a new Quantity from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Quantity from an integer.
    #[must_use]
    pub fn from_i64(amount: i64) -> Self {
        Self(Decimal::new(amount, 0))
    }

    /// Zero quantity.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this quantity is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this quantity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Returns true if this quantity has no fractional part.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.0.fract() == Decimal::ZERO
    }

    /// Get the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Validate quantity for order submission.
    ///
    /// # Errors
    ///
    /// Returns error if quantity is zero or negative.
    pub fn validate_for_order(&self) -> Result<(), DomainError> {
        if self.0 <= Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "Order quantity must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quantity_new_and_display() {
        let q = Quantity::new(dec!(10));
        assert_eq!(format!("{q}"), "10");
    }

    #[test]
    fn quantity_from_i64() {
        let q = Quantity::from_i64(100);
        assert_eq!(q.amount(), dec!(100));
    }

    #[test]
    fn quantity_predicates() {
        assert!(Quantity::new(dec!(1)).is_positive());
        assert!(!Quantity::ZERO.is_positive());
        assert!(Quantity::ZERO.is_zero());
    }

    #[test]
    fn quantity_is_whole() {
        assert!(Quantity::new(dec!(10)).is_whole());
        assert!(!Quantity::new(dec!(10.5)).is_whole());
    }

    #[test]
    fn quantity_abs() {
        assert_eq!(Quantity::new(dec!(-3)).abs(), Quantity::new(dec!(3)));
    }

    #[test]
    fn quantity_validate_for_order() {
        assert!(Quantity::new(dec!(10)).validate_for_order().is_ok());
        assert!(Quantity::ZERO.validate_for_order().is_err());
        assert!(Quantity::new(dec!(-1)).validate_for_order().is_err());
    }

    #[test]
    fn quantity_serde_roundtrip() {
        let q = Quantity::new(dec!(10.5));
        let json = serde_json::to_string(&q).unwrap();
        let parsed: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, q);
    }

    #[test]
    fn quantity_default_is_zero() {
        assert!(Quantity::default().is_zero());
    }
}
