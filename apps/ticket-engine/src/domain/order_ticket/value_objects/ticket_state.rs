//! Ticket state in the preview-to-placement lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order ticket lifecycle state.
///
/// A ticket starts in `Previewing` with the preview rendered. Submission
/// drives it through authentication (possibly suspending on a security
/// question) and placement. `Confirmed` is the only terminal state; a
/// `Failed` ticket can be resubmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketState {
    /// Preview loaded, waiting for the user to submit.
    Previewing,
    /// Submission started, authenticating with the broker.
    AwaitingAuthentication,
    /// Broker asked a security question; waiting for the user's answer.
    AwaitingSecurityAnswer,
    /// Authenticated, order placement dispatched.
    Placing,
    /// Order placed, broker order number assigned.
    Confirmed,
    /// Authentication or placement failed; submission may be retried.
    Failed,
}

impl TicketState {
    /// Returns true if the ticket is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Returns true if a new submission attempt may start from this state.
    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        matches!(self, Self::Previewing | Self::Failed)
    }

    /// Returns true while a submission attempt is in flight.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::AwaitingAuthentication | Self::AwaitingSecurityAnswer | Self::Placing
        )
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previewing => write!(f, "PREVIEWING"),
            Self::AwaitingAuthentication => write!(f, "AWAITING_AUTHENTICATION"),
            Self::AwaitingSecurityAnswer => write!(f, "AWAITING_SECURITY_ANSWER"),
            Self::Placing => write!(f, "PLACING"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}
