//! Position Port (Driven Port)
//!
//! Interface to the broker's position service.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::shared::AccountNumber;

/// Raw position payload for one account.
///
/// The lists are untyped JSON values on purpose: brokers occasionally return
/// malformed entries, and the account facade must distinguish a payload
/// shape mismatch from a transport failure. Typed deserialization happens at
/// the facade boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionsPayload {
    /// Equity position entries.
    pub positions: Vec<serde_json::Value>,
    /// FX position entries.
    pub fx_positions: Vec<serde_json::Value>,
    /// Base currency the account reports in.
    pub account_base_currency: String,
}

/// Port for the broker position service.
#[async_trait]
pub trait PositionService: Send + Sync {
    /// Fetch all positions for an account.
    async fn positions(
        &self,
        account_number: &AccountNumber,
    ) -> Result<PositionsPayload, ServiceError>;
}
