//! Balance Port (Driven Port)
//!
//! Interface to the broker's balance service.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::linked_account::{AccountOverview, FxAccountOverview};
use crate::domain::shared::AccountNumber;

/// Balance payload for one account: the equity overview plus, for brokers
/// with FX support, the FX overview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountOverviewBundle {
    /// Equity account overview.
    pub overview: AccountOverview,
    /// FX account overview, if the broker reports one.
    pub fx_overview: Option<FxAccountOverview>,
}

/// Port for the broker balance service.
#[async_trait]
pub trait BalanceService: Send + Sync {
    /// Fetch the current balance snapshot for an account.
    async fn account_overview(
        &self,
        account_number: &AccountNumber,
    ) -> Result<AccountOverviewBundle, ServiceError>;
}
