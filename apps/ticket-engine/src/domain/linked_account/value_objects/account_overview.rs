//! Account balance snapshots returned by the balance service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// Equity account balance snapshot.
///
/// Every field is optional: brokers differ in which figures they report, and
/// the facade stores whatever the last successful fetch returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountOverview {
    /// Cash available for trading.
    pub available_cash: Option<Money>,
    /// Buying power (with margin).
    pub buying_power: Option<Money>,
    /// Total account value.
    pub total_value: Option<Money>,
    /// Day change in account value.
    pub day_absolute_return: Option<Money>,
    /// Day change as a percentage.
    pub day_percent_return: Option<Decimal>,
    /// All-time change in account value.
    pub total_absolute_return: Option<Money>,
    /// All-time change as a percentage.
    pub total_percent_return: Option<Decimal>,
}

/// FX account balance snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FxAccountOverview {
    /// Total account value in USD.
    pub total_value_usd: Option<Money>,
    /// Total account value in the account base currency.
    pub total_value_base_currency: Option<Money>,
    /// Buying power in the account base currency.
    pub buying_power_base_currency: Option<Money>,
    /// Unrealized profit and loss in the account base currency.
    pub unrealized_profit_and_loss_base_currency: Option<Money>,
    /// Realized profit and loss in the account base currency.
    pub realized_profit_and_loss_base_currency: Option<Money>,
}
