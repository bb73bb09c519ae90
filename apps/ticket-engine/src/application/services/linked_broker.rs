//! Linked broker context.
//!
//! One `LinkedBroker` represents a brokerage the user has connected. It owns
//! the account facades discovered by the link operation, the shared error
//! slot balance/position fetches report into, and the authentication and
//! cache collaborators its accounts delegate to.

use std::sync::{Arc, RwLock};

use crate::application::ports::{
    AuthOutcome, AuthenticationService, BalanceService, LinkedBrokerCache, LinkedBrokerSnapshot,
    PositionService, ServiceError,
};
use crate::application::services::LinkedBrokerAccount;
use crate::domain::shared::{AccountNumber, LinkId};

/// Account identity reported by a broker-link operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAccount {
    /// Account display name.
    pub name: String,
    /// Account number.
    pub number: AccountNumber,
    /// Broker-side account index.
    pub index: String,
    /// Account base currency.
    pub base_currency: String,
}

/// A brokerage link and the accounts under it.
pub struct LinkedBroker {
    link_id: LinkId,
    broker_name: String,
    auth: Arc<dyn AuthenticationService>,
    cache: Arc<dyn LinkedBrokerCache>,
    accounts: RwLock<Vec<Arc<LinkedBrokerAccount>>>,
    error: RwLock<Option<ServiceError>>,
}

impl LinkedBroker {
    /// Create a broker link with no accounts yet.
    #[must_use]
    pub fn new(
        broker_name: impl Into<String>,
        auth: Arc<dyn AuthenticationService>,
        cache: Arc<dyn LinkedBrokerCache>,
    ) -> Arc<Self> {
        Arc::new(Self {
            link_id: LinkId::generate(),
            broker_name: broker_name.into(),
            auth,
            cache,
            accounts: RwLock::new(Vec::new()),
            error: RwLock::new(None),
        })
    }

    /// Replace this link's accounts with the ones a link operation
    /// discovered.
    ///
    /// The account list is overwritten wholesale; facades from a previous
    /// discovery keep working in degraded mode once dropped from the link.
    pub fn link_accounts(
        self: &Arc<Self>,
        discovered: Vec<DiscoveredAccount>,
        balances: &Arc<dyn BalanceService>,
        positions: &Arc<dyn PositionService>,
    ) {
        let accounts: Vec<Arc<LinkedBrokerAccount>> = discovered
            .into_iter()
            .map(|account| {
                Arc::new(LinkedBrokerAccount::new(
                    Arc::downgrade(self),
                    account,
                    Arc::clone(balances),
                    Arc::clone(positions),
                ))
            })
            .collect();

        tracing::info!(
            broker = %self.broker_name,
            count = accounts.len(),
            "linked accounts discovered"
        );
        *self.accounts.write().unwrap() = accounts;
    }

    /// Get the link identifier.
    #[must_use]
    pub const fn link_id(&self) -> &LinkId {
        &self.link_id
    }

    /// Get the broker display name.
    #[must_use]
    pub fn broker_name(&self) -> &str {
        &self.broker_name
    }

    /// Get all accounts under this link.
    #[must_use]
    pub fn accounts(&self) -> Vec<Arc<LinkedBrokerAccount>> {
        self.accounts.read().unwrap().clone()
    }

    /// Get the accounts the user has enabled.
    #[must_use]
    pub fn enabled_accounts(&self) -> Vec<Arc<LinkedBrokerAccount>> {
        self.accounts
            .read()
            .unwrap()
            .iter()
            .filter(|account| account.is_enabled())
            .cloned()
            .collect()
    }

    /// Find an account by number.
    #[must_use]
    pub fn account_numbered(&self, number: &AccountNumber) -> Option<Arc<LinkedBrokerAccount>> {
        self.accounts
            .read()
            .unwrap()
            .iter()
            .find(|account| account.account_number() == number)
            .cloned()
    }

    /// Get the current broker-level error, if any.
    #[must_use]
    pub fn error(&self) -> Option<ServiceError> {
        self.error.read().unwrap().clone()
    }

    /// Record a broker-level error.
    pub fn set_error(&self, error: ServiceError) {
        tracing::warn!(broker = %self.broker_name, %error, "broker error recorded");
        *self.error.write().unwrap() = Some(error);
    }

    /// Clear the broker-level error.
    pub fn clear_error(&self) {
        *self.error.write().unwrap() = None;
    }

    /// Build a snapshot of the full linked state.
    #[must_use]
    pub fn snapshot(&self) -> LinkedBrokerSnapshot {
        LinkedBrokerSnapshot {
            link_id: self.link_id.clone(),
            broker_name: self.broker_name.clone(),
            accounts: self
                .accounts
                .read()
                .unwrap()
                .iter()
                .map(|account| account.snapshot())
                .collect(),
        }
    }

    /// Persist the full linked state through the cache collaborator.
    pub fn cache_linked_state(&self) {
        tracing::debug!(broker = %self.broker_name, "caching linked broker state");
        self.cache.cache(&self.snapshot());
    }

    /// Ensure the broker session is valid, authenticating if required.
    pub async fn authenticate_if_needed(&self) -> Result<AuthOutcome, ServiceError> {
        self.auth.authenticate_if_needed().await
    }

    /// Answer a pending security question.
    pub async fn answer_security_question(
        &self,
        answer: &str,
    ) -> Result<AuthOutcome, ServiceError> {
        self.auth.answer_security_question(answer).await
    }
}

impl std::fmt::Debug for LinkedBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedBroker")
            .field("link_id", &self.link_id)
            .field("broker_name", &self.broker_name)
            .field("accounts", &self.accounts.read().unwrap().len())
            .field("error", &self.error.read().unwrap())
            .finish_non_exhaustive()
    }
}
