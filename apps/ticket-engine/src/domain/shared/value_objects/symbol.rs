//! Symbol value object for instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A trading symbol (equity ticker or FX pair).
///
/// Examples:
/// - Equity: "AAPL", "MSFT", "GOOGL"
/// - FX pair: "USD/JPY", "EUR/USD"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check if this is an FX pair symbol ("BASE/QUOTE").
    #[must_use]
    pub fn is_fx_pair(&self) -> bool {
        self.0.contains('/')
    }

    /// Check if this is an equity symbol.
    #[must_use]
    pub fn is_equity(&self) -> bool {
        !self.is_fx_pair()
    }

    /// Validate the symbol for order submission.
    ///
    /// # Errors
    ///
    /// Returns error if the symbol is empty, too long, or contains
    /// characters outside `[A-Z0-9./-]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: "Symbol cannot be empty".to_string(),
            });
        }
        if self.0.len() > 12 {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: format!("Symbol too long: {}", self.0),
            });
        }
        let valid = self
            .0
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '.' | '/' | '-'));
        if !valid {
            return Err(DomainError::InvalidValue {
                field: "symbol".to_string(),
                message: format!("Symbol contains invalid characters: {}", self.0),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
