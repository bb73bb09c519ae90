//! Portfolio position types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Quantity, Symbol};

/// An equity holding in a linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPosition {
    /// Symbol.
    pub symbol: Symbol,
    /// Quantity held (signed: positive for long, negative for short).
    pub quantity: Quantity,
    /// Total cost basis.
    pub cost_basis: Money,
    /// Last traded price, if the broker reports one.
    pub last_price: Option<Money>,
    /// Currency the position is denominated in.
    ///
    /// Stamped with the account base currency at fetch time; the position
    /// service itself does not report it per-position.
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// An FX holding in a linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxPosition {
    /// Currency pair, e.g. "USD/JPY".
    pub symbol: Symbol,
    /// Units held.
    pub quantity: Quantity,
    /// Average acquisition rate.
    #[serde(default)]
    pub average_rate: Option<Decimal>,
}

/// One position in a linked account's portfolio, equity or FX.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PortfolioPosition {
    /// Equity holding.
    Equity(EquityPosition),
    /// FX holding.
    Fx(FxPosition),
}

impl PortfolioPosition {
    /// Get the position's symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        match self {
            Self::Equity(p) => &p.symbol,
            Self::Fx(p) => &p.symbol,
        }
    }

    /// Get the position's quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        match self {
            Self::Equity(p) => p.quantity,
            Self::Fx(p) => p.quantity,
        }
    }

    /// Returns true for FX holdings.
    #[must_use]
    pub const fn is_fx(&self) -> bool {
        matches!(self, Self::Fx(_))
    }
}
