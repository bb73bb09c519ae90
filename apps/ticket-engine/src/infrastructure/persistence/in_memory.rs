//! In-memory linked-broker cache for testing.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{LinkedBrokerCache, LinkedBrokerSnapshot};

/// In-memory implementation of [`LinkedBrokerCache`].
///
/// Suitable for testing and development. Hosts persist snapshots to their
/// own storage in production.
#[derive(Debug, Default)]
pub struct InMemoryLinkedBrokerCache {
    entries: RwLock<HashMap<String, LinkedBrokerSnapshot>>,
    writes: AtomicUsize,
}

impl InMemoryLinkedBrokerCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of cached brokers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Get the number of writes performed, including overwrites.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Get the cached snapshot for a link, if any.
    #[must_use]
    pub fn get(&self, link_id: &str) -> Option<LinkedBrokerSnapshot> {
        self.entries.read().unwrap().get(link_id).cloned()
    }

    /// Clear all cached snapshots.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

impl LinkedBrokerCache for InMemoryLinkedBrokerCache {
    fn cache(&self, snapshot: &LinkedBrokerSnapshot) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(broker = %snapshot.broker_name, "linked broker state cached");
        self.entries
            .write()
            .unwrap()
            .insert(snapshot.link_id.as_str().to_string(), snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::LinkedAccountSnapshot;
    use crate::domain::shared::{AccountNumber, LinkId};

    fn snapshot(link_id: &str, enabled: bool) -> LinkedBrokerSnapshot {
        LinkedBrokerSnapshot {
            link_id: LinkId::new(link_id),
            broker_name: "Fidelity".to_string(),
            accounts: vec![LinkedAccountSnapshot {
                account_name: "IRA".to_string(),
                account_number: AccountNumber::new("42"),
                account_index: String::new(),
                base_currency: "USD".to_string(),
                is_enabled: enabled,
            }],
        }
    }

    #[test]
    fn cache_starts_empty() {
        let cache = InMemoryLinkedBrokerCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.writes(), 0);
    }

    #[test]
    fn cache_stores_by_link_id() {
        let cache = InMemoryLinkedBrokerCache::new();
        cache.cache(&snapshot("link-1", true));

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get("link-1").map(|s| s.broker_name),
            Some("Fidelity".to_string())
        );
        assert!(cache.get("link-2").is_none());
    }

    #[test]
    fn cache_overwrites_and_counts_writes() {
        let cache = InMemoryLinkedBrokerCache::new();
        cache.cache(&snapshot("link-1", true));
        cache.cache(&snapshot("link-1", false));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.writes(), 2);
        assert!(!cache.get("link-1").unwrap().accounts[0].is_enabled);
    }

    #[test]
    fn cache_clear() {
        let cache = InMemoryLinkedBrokerCache::new();
        cache.cache(&snapshot("link-1", true));
        cache.clear();
        assert!(cache.is_empty());
    }
}
