//! The heterogeneous row model rendered by the preview.

use serde::{Deserialize, Serialize};

/// A risk disclosure the user must explicitly accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Disclosure text.
    pub text: String,
    /// Whether the user has accepted it.
    pub is_accepted: bool,
}

impl Acknowledgement {
    /// Create an unaccepted acknowledgement.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_accepted: false,
        }
    }
}

/// One renderable line of an order preview.
///
/// The presentation layer matches exhaustively on this at its single
/// rendering boundary; the workflow only produces and filters it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewRow {
    /// A label/value display pair.
    Value {
        /// Row label, e.g. "Symbol".
        label: String,
        /// Display value.
        value: String,
    },
    /// An informational warning.
    Warning {
        /// Warning text.
        message: String,
    },
    /// A required risk acknowledgement with its acceptance state.
    Acknowledgement(Acknowledgement),
}

impl PreviewRow {
    /// Create a label/value row.
    #[must_use]
    pub fn value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create a warning row.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
        }
    }

    /// Returns true for acknowledgement rows.
    #[must_use]
    pub const fn is_acknowledgement(&self) -> bool {
        matches!(self, Self::Acknowledgement(_))
    }

    /// Get the label of a value row.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Value { label, .. } => Some(label),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgement_starts_unaccepted() {
        let ack = Acknowledgement::new("I understand the risks");
        assert!(!ack.is_accepted);
    }

    #[test]
    fn preview_row_constructors() {
        let row = PreviewRow::value("Symbol", "AAPL");
        assert_eq!(row.label(), Some("Symbol"));
        assert!(!row.is_acknowledgement());

        let row = PreviewRow::warning("Market is closed");
        assert!(row.label().is_none());
    }

    #[test]
    fn preview_row_acknowledgement_detection() {
        let row = PreviewRow::Acknowledgement(Acknowledgement::new("Risk"));
        assert!(row.is_acknowledgement());
        assert!(row.label().is_none());
    }

    #[test]
    fn preview_row_serde_is_tagged() {
        let row = PreviewRow::value("Price", "150.00");
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"kind\":\"value\""));

        let parsed: PreviewRow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }
}
