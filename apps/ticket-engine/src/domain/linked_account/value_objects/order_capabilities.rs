//! Per-instrument order capabilities reported by the broker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument class a linked account can trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    /// Listed equities.
    Equities,
    /// Spot FX.
    Fx,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equities => write!(f, "equities"),
            Self::Fx => write!(f, "fx"),
        }
    }
}

/// What the broker allows for one instrument class on one account.
///
/// Action and expiration tokens are broker-supplied strings; the ticket does
/// not interpret them beyond membership checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentOrderCapabilities {
    /// Instrument class these capabilities apply to.
    pub instrument: Instrument,
    /// Supported order action tokens (e.g. "buy", "sellShort").
    pub actions: Vec<String>,
    /// Supported expiration tokens (e.g. "day", "gtc").
    pub expirations: Vec<String>,
}

impl InstrumentOrderCapabilities {
    /// Check whether an action token is supported.
    #[must_use]
    pub fn supports_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}
