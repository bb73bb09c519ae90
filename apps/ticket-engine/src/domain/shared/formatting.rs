//! Market formatting seam.
//!
//! Locale-aware currency and quantity rendering is supplied by the host; the
//! domain only decides *which* values are formatted, never *how*.

use crate::domain::shared::value_objects::{Money, Quantity};

/// Formats monetary amounts and quantities for display.
///
/// Implemented in the infrastructure layer; domain services receive it as a
/// trait object so row building stays a pure function of its inputs.
pub trait MarketFormatter: Send + Sync {
    /// Format a monetary amount in the given ISO currency code.
    fn format_currency(&self, amount: Money, currency_code: &str) -> String;

    /// Format an order quantity (shares or units).
    fn format_quantity(&self, quantity: Quantity) -> String;
}
