//! Linked brokerage account facade.
//!
//! Owns the cached balance and position state for one account and exposes
//! the account-scoped operations the ticket and portfolio screens drive.
//! Holds a weak back-reference to its broker: fetch results are dual-reported
//! into the broker's error slot, and every broker-dependent side effect is
//! skipped once the link is gone.

use std::sync::{Arc, RwLock, Weak};

use crate::application::ports::{
    BalanceService, LinkedAccountSnapshot, PositionService, ServiceError,
};
use crate::application::services::linked_broker::{DiscoveredAccount, LinkedBroker};
use crate::domain::linked_account::{
    AccountOverview, EquityPosition, FxAccountOverview, FxPosition, Instrument,
    InstrumentOrderCapabilities, PortfolioPosition,
};
use crate::domain::shared::{AccountNumber, Timestamp};

/// User-facing message synthesized when a position payload does not match
/// the expected shape.
const MALFORMED_POSITIONS_MESSAGE: &str =
    "Could not retrieve account positions. Please try again.";

/// One linked brokerage account.
pub struct LinkedBrokerAccount {
    account_name: String,
    account_number: AccountNumber,
    account_index: String,
    base_currency: String,
    broker: Weak<LinkedBroker>,
    balance_service: Arc<dyn BalanceService>,
    position_service: Arc<dyn PositionService>,
    balance: RwLock<Option<AccountOverview>>,
    fx_balance: RwLock<Option<FxAccountOverview>>,
    balance_last_updated: RwLock<Option<Timestamp>>,
    positions: RwLock<Vec<PortfolioPosition>>,
    order_capabilities: RwLock<Vec<InstrumentOrderCapabilities>>,
    enabled: RwLock<bool>,
}

impl LinkedBrokerAccount {
    /// Create a facade for an account a link operation discovered.
    ///
    /// New accounts start enabled with no cached balance or positions.
    #[must_use]
    pub fn new(
        broker: Weak<LinkedBroker>,
        discovered: DiscoveredAccount,
        balance_service: Arc<dyn BalanceService>,
        position_service: Arc<dyn PositionService>,
    ) -> Self {
        Self {
            account_name: discovered.name,
            account_number: discovered.number,
            account_index: discovered.index,
            base_currency: discovered.base_currency,
            broker,
            balance_service,
            position_service,
            balance: RwLock::new(None),
            fx_balance: RwLock::new(None),
            balance_last_updated: RwLock::new(None),
            positions: RwLock::new(Vec::new()),
            order_capabilities: RwLock::new(Vec::new()),
            enabled: RwLock::new(true),
        }
    }

    // ========================================================================
    // Identity
    // ========================================================================

    /// Get the account display name.
    #[must_use]
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Get the account number.
    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// Get the broker-side account index.
    #[must_use]
    pub fn account_index(&self) -> &str {
        &self.account_index
    }

    /// Get the account base currency.
    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Get the owning broker link, if it still exists.
    #[must_use]
    pub fn broker(&self) -> Option<Arc<LinkedBroker>> {
        self.broker.upgrade()
    }

    /// Get the broker display name, if the link still exists.
    #[must_use]
    pub fn broker_name(&self) -> Option<String> {
        self.broker().map(|broker| broker.broker_name().to_string())
    }

    /// Format the account for display: `{name}{sep}{number}`.
    ///
    /// Numbers longer than 4 characters keep their last 4; names longer than
    /// 10 characters keep their first 10. Either truncation switches the
    /// separator from a single space to `**`.
    #[must_use]
    pub fn formatted_display_name(&self) -> String {
        let mut name = self.account_name.clone();
        let mut number = self.account_number.as_str().to_string();
        let mut separator = " ";

        let number_len = number.chars().count();
        if number_len > 4 {
            number = number.chars().skip(number_len - 4).collect();
            separator = "**";
        }

        if name.chars().count() > 10 {
            name = name.chars().take(10).collect();
            separator = "**";
        }

        format!("{name}{separator}{number}")
    }

    // ========================================================================
    // Cached state
    // ========================================================================

    /// Get the cached equity balance, if any fetch has succeeded.
    #[must_use]
    pub fn balance(&self) -> Option<AccountOverview> {
        self.balance.read().unwrap().clone()
    }

    /// Get the cached FX balance, if the broker reports one.
    #[must_use]
    pub fn fx_balance(&self) -> Option<FxAccountOverview> {
        self.fx_balance.read().unwrap().clone()
    }

    /// Get the time of the last successful balance fetch.
    #[must_use]
    pub fn balance_last_updated(&self) -> Option<Timestamp> {
        *self.balance_last_updated.read().unwrap()
    }

    /// Get the cached positions from the last successful fetch.
    #[must_use]
    pub fn positions(&self) -> Vec<PortfolioPosition> {
        self.positions.read().unwrap().clone()
    }

    /// Whether the user has this account enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        *self.enabled.read().unwrap()
    }

    /// Enable or disable this account.
    ///
    /// A no-op when the value is unchanged; otherwise the owning broker's
    /// full linked state is cached synchronously.
    pub fn set_enabled(&self, enabled: bool) {
        {
            let mut current = self.enabled.write().unwrap();
            if *current == enabled {
                return;
            }
            *current = enabled;
        }
        if let Some(broker) = self.broker() {
            broker.cache_linked_state();
        }
    }

    /// Replace the broker-reported order capabilities.
    pub fn set_order_capabilities(&self, capabilities: Vec<InstrumentOrderCapabilities>) {
        *self.order_capabilities.write().unwrap() = capabilities;
    }

    /// Get the capabilities for one instrument class, if the broker reported
    /// any.
    #[must_use]
    pub fn capabilities_for(&self, instrument: Instrument) -> Option<InstrumentOrderCapabilities> {
        self.order_capabilities
            .read()
            .unwrap()
            .iter()
            .find(|capabilities| capabilities.instrument == instrument)
            .cloned()
    }

    // ========================================================================
    // Fetches
    // ========================================================================

    /// Refresh the account balance from the balance service.
    ///
    /// On success the cached balance and FX balance are overwritten
    /// wholesale, the refresh time is stamped, the broker-level error is
    /// cleared, and — when `cache_result` — the broker's linked state is
    /// cached. On failure the error is recorded on the broker and propagated
    /// unchanged.
    pub async fn fetch_overview(
        &self,
        cache_result: bool,
    ) -> Result<AccountOverview, ServiceError> {
        match self.balance_service.account_overview(&self.account_number).await {
            Ok(bundle) => {
                *self.balance.write().unwrap() = Some(bundle.overview.clone());
                *self.fx_balance.write().unwrap() = bundle.fx_overview;
                *self.balance_last_updated.write().unwrap() = Some(Timestamp::now());

                if let Some(broker) = self.broker() {
                    broker.clear_error();
                    if cache_result {
                        broker.cache_linked_state();
                    }
                }

                tracing::debug!(account = %self.account_number, "account overview refreshed");
                Ok(bundle.overview)
            }
            Err(error) => {
                self.record_broker_error(&error);
                Err(error)
            }
        }
    }

    /// Refresh the account positions from the position service.
    ///
    /// The service returns raw JSON entries; either list failing typed
    /// deserialization fails the fetch with a synthesized invalid-response
    /// error, leaving the cached positions untouched. On success the cached
    /// list is overwritten wholesale, equity positions first (stamped with
    /// the payload base currency), FX positions second.
    pub async fn fetch_positions(&self) -> Result<Vec<PortfolioPosition>, ServiceError> {
        let payload = match self.position_service.positions(&self.account_number).await {
            Ok(payload) => payload,
            Err(error) => {
                self.record_broker_error(&error);
                return Err(error);
            }
        };

        let equity = match payload
            .positions
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<Result<Vec<EquityPosition>, _>>()
        {
            Ok(positions) => positions,
            Err(_) => return Err(self.malformed_positions_error()),
        };

        let fx = match payload
            .fx_positions
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<Result<Vec<FxPosition>, _>>()
        {
            Ok(positions) => positions,
            Err(_) => return Err(self.malformed_positions_error()),
        };

        let mut positions: Vec<PortfolioPosition> = equity
            .into_iter()
            .map(|mut position| {
                position.currency_code = Some(payload.account_base_currency.clone());
                PortfolioPosition::Equity(position)
            })
            .collect();
        positions.extend(fx.into_iter().map(PortfolioPosition::Fx));

        *self.positions.write().unwrap() = positions.clone();
        tracing::debug!(
            account = %self.account_number,
            count = positions.len(),
            "account positions refreshed"
        );
        Ok(positions)
    }

    /// Build this account's slice of the broker snapshot.
    #[must_use]
    pub fn snapshot(&self) -> LinkedAccountSnapshot {
        LinkedAccountSnapshot {
            account_name: self.account_name.clone(),
            account_number: self.account_number.clone(),
            account_index: self.account_index.clone(),
            base_currency: self.base_currency.clone(),
            is_enabled: self.is_enabled(),
        }
    }

    fn malformed_positions_error(&self) -> ServiceError {
        let error = ServiceError::invalid_response(MALFORMED_POSITIONS_MESSAGE);
        self.record_broker_error(&error);
        error
    }

    fn record_broker_error(&self, error: &ServiceError) {
        tracing::warn!(account = %self.account_number, %error, "account fetch failed");
        if let Some(broker) = self.broker() {
            broker.set_error(error.clone());
        }
    }
}

impl std::fmt::Debug for LinkedBrokerAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedBrokerAccount")
            .field("account_name", &self.account_name)
            .field("account_number", &self.account_number)
            .field("base_currency", &self.base_currency)
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AccountOverviewBundle;
    use crate::domain::shared::Money;
    use crate::infrastructure::mock::{MockBalanceService, MockPositionService};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn discovered(name: &str, number: &str) -> DiscoveredAccount {
        DiscoveredAccount {
            name: name.to_string(),
            number: AccountNumber::new(number),
            index: String::new(),
            base_currency: "USD".to_string(),
        }
    }

    fn detached_account(
        name: &str,
        number: &str,
        balances: Arc<MockBalanceService>,
        positions: Arc<MockPositionService>,
    ) -> LinkedBrokerAccount {
        LinkedBrokerAccount::new(Weak::new(), discovered(name, number), balances, positions)
    }

    fn overview(total: Money) -> AccountOverviewBundle {
        AccountOverviewBundle {
            overview: AccountOverview {
                total_value: Some(total),
                ..AccountOverview::default()
            },
            fx_overview: None,
        }
    }

    #[test]
    fn formatted_display_name_truncates_both() {
        let account = detached_account(
            "Individual Brokerage",
            "123456789",
            Arc::new(MockBalanceService::new()),
            Arc::new(MockPositionService::new()),
        );
        assert_eq!(account.formatted_display_name(), "Individual**6789");
    }

    #[test]
    fn formatted_display_name_short_values() {
        let account = detached_account(
            "IRA",
            "42",
            Arc::new(MockBalanceService::new()),
            Arc::new(MockPositionService::new()),
        );
        assert_eq!(account.formatted_display_name(), "IRA 42");
    }

    #[test]
    fn formatted_display_name_number_only_truncation() {
        let account = detached_account(
            "IRA",
            "987654321",
            Arc::new(MockBalanceService::new()),
            Arc::new(MockPositionService::new()),
        );
        assert_eq!(account.formatted_display_name(), "IRA**4321");
    }

    #[tokio::test]
    async fn fetch_overview_overwrites_wholesale() {
        let balances = Arc::new(MockBalanceService::new());
        balances.push_success(AccountOverviewBundle {
            overview: AccountOverview {
                total_value: Some(Money::new(dec!(1000))),
                ..AccountOverview::default()
            },
            fx_overview: Some(FxAccountOverview::default()),
        });
        balances.push_success(overview(Money::new(dec!(2000))));

        let account =
            detached_account("IRA", "42", balances, Arc::new(MockPositionService::new()));

        account.fetch_overview(false).await.unwrap();
        assert!(account.fx_balance().is_some());

        account.fetch_overview(false).await.unwrap();
        let balance = account.balance().unwrap();
        assert_eq!(balance.total_value, Some(Money::new(dec!(2000))));
        // Second bundle had no FX overview: no merge residue from the first.
        assert!(account.fx_balance().is_none());
        assert!(account.balance_last_updated().is_some());
    }

    #[tokio::test]
    async fn fetch_overview_failure_propagates_unchanged() {
        let balances = Arc::new(MockBalanceService::new());
        let failure = ServiceError::transport("Could Not Fetch Balance", "timeout");
        balances.push_failure(failure.clone());

        let account =
            detached_account("IRA", "42", balances, Arc::new(MockPositionService::new()));

        let err = account.fetch_overview(true).await.unwrap_err();
        assert_eq!(err, failure);
        assert!(account.balance().is_none());
        assert!(account.balance_last_updated().is_none());
    }

    #[tokio::test]
    async fn fetch_positions_orders_equity_before_fx() {
        let positions = Arc::new(MockPositionService::new());
        positions.push_payload(
            vec![json!({"symbol": "AAPL", "quantity": "10", "cost_basis": "1500"})],
            vec![json!({"symbol": "USD/JPY", "quantity": "10000"})],
            "GBP",
        );

        let account =
            detached_account("IRA", "42", Arc::new(MockBalanceService::new()), positions);

        let fetched = account.fetch_positions().await.unwrap();
        assert_eq!(fetched.len(), 2);
        assert!(!fetched[0].is_fx());
        assert!(fetched[1].is_fx());
        // Equity positions are stamped with the payload base currency.
        match &fetched[0] {
            PortfolioPosition::Equity(p) => {
                assert_eq!(p.currency_code.as_deref(), Some("GBP"));
            }
            PortfolioPosition::Fx(_) => panic!("expected equity position first"),
        }
        assert_eq!(account.positions(), fetched);
    }

    #[tokio::test]
    async fn fetch_positions_malformed_fx_is_invalid_response() {
        let positions = Arc::new(MockPositionService::new());
        positions.push_payload(
            vec![json!({"symbol": "AAPL", "quantity": "10", "cost_basis": "1500"})],
            vec![json!(42)],
            "USD",
        );

        let account =
            detached_account("IRA", "42", Arc::new(MockBalanceService::new()), positions);

        let err = account.fetch_positions().await.unwrap_err();
        assert!(err.is_invalid_response());
        assert_eq!(
            err.to_string(),
            "Could not retrieve account positions. Please try again."
        );
        // Cached list untouched by the failed fetch.
        assert!(account.positions().is_empty());
    }

    #[tokio::test]
    async fn fetch_positions_transport_error_is_not_invalid_response() {
        let positions = Arc::new(MockPositionService::new());
        positions.push_failure(ServiceError::transport("Could Not Fetch Positions", "503"));

        let account =
            detached_account("IRA", "42", Arc::new(MockBalanceService::new()), positions);

        let err = account.fetch_positions().await.unwrap_err();
        assert!(!err.is_invalid_response());
    }

    #[test]
    fn set_enabled_without_broker_does_not_panic() {
        let account = detached_account(
            "IRA",
            "42",
            Arc::new(MockBalanceService::new()),
            Arc::new(MockPositionService::new()),
        );
        assert!(account.is_enabled());
        account.set_enabled(false);
        assert!(!account.is_enabled());
    }

    mod display_name_props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn display_name_respects_truncation_bounds(
                name in "[A-Za-z ]{0,24}",
                number in "[0-9]{1,16}",
            ) {
                let account = detached_account(
                    &name,
                    &number,
                    Arc::new(MockBalanceService::new()),
                    Arc::new(MockPositionService::new()),
                );
                let formatted = account.formatted_display_name();

                let truncated = name.chars().count() > 10 || number.chars().count() > 4;
                let separator = if truncated { "**" } else { " " };
                let expected_name: String = name.chars().take(10).collect();
                let expected_number: String = if number.chars().count() > 4 {
                    number.chars().skip(number.chars().count() - 4).collect()
                } else {
                    number.clone()
                };

                prop_assert_eq!(
                    formatted,
                    format!("{expected_name}{separator}{expected_number}")
                );
            }
        }
    }

    #[test]
    fn capabilities_lookup() {
        let account = detached_account(
            "IRA",
            "42",
            Arc::new(MockBalanceService::new()),
            Arc::new(MockPositionService::new()),
        );
        account.set_order_capabilities(vec![InstrumentOrderCapabilities {
            instrument: Instrument::Equities,
            actions: vec!["buy".to_string()],
            expirations: vec!["day".to_string()],
        }]);

        assert!(account.capabilities_for(Instrument::Equities).is_some());
        assert!(account.capabilities_for(Instrument::Fx).is_none());
    }
}
