//! Ticket State Machine Service
//!
//! Validates lifecycle transitions for the preview-to-placement workflow.

use crate::domain::order_ticket::errors::TicketError;
use crate::domain::order_ticket::value_objects::TicketState;

/// Ticket state machine for validating transitions.
///
/// Placement can never begin before authentication resolves: the only path
/// into `Placing` is from `AwaitingAuthentication`.
pub struct TicketStateMachine;

impl TicketStateMachine {
    /// Check if a state transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: TicketState, to: TicketState) -> bool {
        matches!(
            (from, to),
            // From Previewing
            (TicketState::Previewing, TicketState::AwaitingAuthentication)
                // From AwaitingAuthentication
                | (TicketState::AwaitingAuthentication, TicketState::Placing)
                | (
                    TicketState::AwaitingAuthentication,
                    TicketState::AwaitingSecurityAnswer
                )
                | (TicketState::AwaitingAuthentication, TicketState::Failed)
                // From AwaitingSecurityAnswer
                | (
                    TicketState::AwaitingSecurityAnswer,
                    TicketState::AwaitingAuthentication
                )
                | (TicketState::AwaitingSecurityAnswer, TicketState::Previewing)
                // From Placing
                | (TicketState::Placing, TicketState::Confirmed)
                | (TicketState::Placing, TicketState::Failed)
                // From Failed (resubmission)
                | (TicketState::Failed, TicketState::AwaitingAuthentication)
        )
    }

    /// Validate a state transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is invalid.
    pub fn validate_transition(from: TicketState, to: TicketState) -> Result<(), TicketError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(TicketError::InvalidStateTransition {
                from,
                to,
                reason: Self::transition_error_reason(from, to),
            })
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: TicketState, to: TicketState) -> String {
        match from {
            TicketState::Confirmed => {
                format!("Order is already confirmed, cannot transition to {to}")
            }
            TicketState::Previewing => {
                format!("Submission must authenticate first, cannot transition to {to}")
            }
            _ => format!("Invalid transition from {from} to {to}"),
        }
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn valid_next_states(from: TicketState) -> Vec<TicketState> {
        match from {
            TicketState::Previewing => vec![TicketState::AwaitingAuthentication],
            TicketState::AwaitingAuthentication => vec![
                TicketState::Placing,
                TicketState::AwaitingSecurityAnswer,
                TicketState::Failed,
            ],
            TicketState::AwaitingSecurityAnswer => vec![
                TicketState::AwaitingAuthentication,
                TicketState::Previewing,
            ],
            TicketState::Placing => vec![TicketState::Confirmed, TicketState::Failed],
            TicketState::Failed => vec![TicketState::AwaitingAuthentication],
            // Terminal state
            TicketState::Confirmed => vec![],
        }
    }
}
