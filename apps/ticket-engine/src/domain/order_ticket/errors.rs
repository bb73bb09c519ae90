//! Order ticket errors.

use std::fmt;

use super::value_objects::TicketState;

/// Errors that can occur while driving the order ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// Invalid lifecycle transition attempted.
    InvalidStateTransition {
        /// Current ticket state.
        from: TicketState,
        /// Attempted state.
        to: TicketState,
        /// Reason for failure.
        reason: String,
    },

    /// Submission attempted while acknowledgements are outstanding.
    AcknowledgementsOutstanding {
        /// Number of unaccepted acknowledgements.
        outstanding: usize,
    },

    /// Submission attempted while another attempt is in flight.
    SubmissionInFlight,

    /// Submission attempted after the order was confirmed.
    AlreadyConfirmed,

    /// Security question answered or cancelled with no pending challenge.
    NoChallengePending,

    /// Acknowledgement index out of range.
    AcknowledgementOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of acknowledgements on the ticket.
        len: usize,
    },
}

impl fmt::Display for TicketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStateTransition { from, to, reason } => {
                write!(f, "Invalid ticket transition: {from} -> {to}: {reason}")
            }
            Self::AcknowledgementsOutstanding { outstanding } => {
                write!(
                    f,
                    "{outstanding} acknowledgement(s) must be accepted before submitting"
                )
            }
            Self::SubmissionInFlight => {
                write!(f, "A submission attempt is already in flight")
            }
            Self::AlreadyConfirmed => {
                write!(f, "Order is already confirmed")
            }
            Self::NoChallengePending => {
                write!(f, "No security question is pending")
            }
            Self::AcknowledgementOutOfBounds { index, len } => {
                write!(
                    f,
                    "Acknowledgement index {index} out of range for {len} acknowledgement(s)"
                )
            }
        }
    }
}

impl std::error::Error for TicketError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_display() {
        let err = TicketError::InvalidStateTransition {
            from: TicketState::Confirmed,
            to: TicketState::Placing,
            reason: "Order is already confirmed".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("CONFIRMED"));
        assert!(msg.contains("PLACING"));
    }

    #[test]
    fn acknowledgements_outstanding_display() {
        let err = TicketError::AcknowledgementsOutstanding { outstanding: 2 };
        assert!(format!("{err}").contains('2'));
    }

    #[test]
    fn out_of_bounds_display() {
        let err = TicketError::AcknowledgementOutOfBounds { index: 3, len: 1 };
        let msg = format!("{err}");
        assert!(msg.contains('3'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn ticket_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TicketError::SubmissionInFlight);
        assert!(!err.to_string().is_empty());
    }
}
