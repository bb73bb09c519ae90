//! Locale-aware market formatter.

use rust_decimal::Decimal;

use crate::domain::shared::{MarketFormatter, Money, Quantity};

/// Default [`MarketFormatter`] implementation.
///
/// Currency amounts get the symbol for well-known ISO codes (unknown codes
/// are prefixed verbatim), thousands grouping, and the currency's customary
/// decimal places. Quantities keep only significant decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleMarketFormatter;

impl LocaleMarketFormatter {
    /// Create a new formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn symbol(currency_code: &str) -> Option<&'static str> {
        match currency_code {
            "USD" | "AUD" | "CAD" | "SGD" => Some("$"),
            "EUR" => Some("\u{20ac}"),
            "GBP" => Some("\u{a3}"),
            "JPY" => Some("\u{a5}"),
            _ => None,
        }
    }

    fn decimal_places(currency_code: &str) -> u32 {
        // JPY has no minor unit.
        if currency_code == "JPY" { 0 } else { 2 }
    }
}

/// Insert thousands separators into an unsigned integer digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render a non-negative decimal with grouping, keeping its scale.
fn render_grouped(value: Decimal) -> String {
    let text = value.to_string();
    match text.split_once('.') {
        Some((integer, fraction)) => format!("{}.{fraction}", group_thousands(integer)),
        None => group_thousands(&text),
    }
}

impl MarketFormatter for LocaleMarketFormatter {
    fn format_currency(&self, amount: Money, currency_code: &str) -> String {
        let places = Self::decimal_places(currency_code);
        let mut rounded = amount.amount().round_dp(places);
        // round_dp only drops digits; pad back to the customary scale.
        rounded.rescale(places);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let rendered = render_grouped(rounded.abs());

        Self::symbol(currency_code).map_or_else(
            || format!("{sign}{currency_code} {rendered}"),
            |symbol| format!("{sign}{symbol}{rendered}"),
        )
    }

    fn format_quantity(&self, quantity: Quantity) -> String {
        render_grouped(quantity.amount().abs().normalize())
    }
}
