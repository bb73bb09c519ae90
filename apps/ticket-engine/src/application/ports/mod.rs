//! Application Ports (Driven)
//!
//! Ports define interfaces for the external collaborators the ticket core
//! depends on: the balance/position/trade services, broker authentication,
//! and the linked-broker cache. Transport, sessions, and wire formats live
//! behind these seams.

mod auth_port;
mod balance_port;
mod cache_port;
mod position_port;
mod trade_port;

pub use auth_port::{AuthOutcome, AuthenticationService, SecurityQuestion};
pub use balance_port::{AccountOverviewBundle, BalanceService};
pub use cache_port::{LinkedAccountSnapshot, LinkedBrokerCache, LinkedBrokerSnapshot};
pub use position_port::{PositionService, PositionsPayload};
pub use trade_port::OrderPlacer;

/// Collaborator service error.
///
/// Balance, position, authentication, and placement failures are all
/// reported through this type. A security question is not an error; it is
/// an [`AuthOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Network or service failure reported by the collaborator.
    #[error("{title}: {message}")]
    Transport {
        /// Short user-facing title.
        title: String,
        /// Error details.
        message: String,
    },

    /// Collaborator payload did not match the expected shape.
    #[error("{message}")]
    InvalidResponse {
        /// Synthesized user-facing message.
        message: String,
    },
}

impl ServiceError {
    /// Create a transport error.
    #[must_use]
    pub fn transport(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Returns true for boundary shape mismatches.
    #[must_use]
    pub const fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = ServiceError::transport("Could Not Complete Your Request", "Session expired");
        assert_eq!(
            err.to_string(),
            "Could Not Complete Your Request: Session expired"
        );
        assert!(!err.is_invalid_response());
    }

    #[test]
    fn invalid_response_display() {
        let err = ServiceError::invalid_response("Could not retrieve account positions.");
        assert_eq!(err.to_string(), "Could not retrieve account positions.");
        assert!(err.is_invalid_response());
    }
}
