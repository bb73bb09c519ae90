//! Linked Broker Cache Port (Driven Port)
//!
//! Fire-and-forget persistence for linked broker state. The host decides
//! where snapshots live (keychain, disk, nowhere); the core only hands over
//! a serializable snapshot and never consumes a result.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AccountNumber, LinkId};

/// Persisted view of one linked account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAccountSnapshot {
    /// Account display name.
    pub account_name: String,
    /// Account number.
    pub account_number: AccountNumber,
    /// Broker-side account index.
    pub account_index: String,
    /// Account base currency.
    pub base_currency: String,
    /// Whether the account is enabled in the host app.
    pub is_enabled: bool,
}

/// Persisted view of one linked broker and all its accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedBrokerSnapshot {
    /// Link identifier.
    pub link_id: LinkId,
    /// Broker display name.
    pub broker_name: String,
    /// Accounts under this link.
    pub accounts: Vec<LinkedAccountSnapshot>,
}

/// Port for caching linked broker state.
pub trait LinkedBrokerCache: Send + Sync {
    /// Persist a snapshot of the broker's full linked state.
    fn cache(&self, snapshot: &LinkedBrokerSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> LinkedBrokerSnapshot {
        LinkedBrokerSnapshot {
            link_id: LinkId::new("link-1"),
            broker_name: "Fidelity".to_string(),
            accounts: vec![LinkedAccountSnapshot {
                account_name: "IRA".to_string(),
                account_number: AccountNumber::new("42"),
                account_index: String::new(),
                base_currency: "USD".to_string(),
                is_enabled: true,
            }],
        }
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let snapshot = snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: LinkedBrokerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn snapshot_json_shape() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["broker_name"], "Fidelity");
        assert_eq!(json["accounts"][0]["account_number"], "42");
        assert_eq!(json["accounts"][0]["is_enabled"], true);
    }
}
