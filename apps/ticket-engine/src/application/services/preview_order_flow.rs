//! Preview-to-placement order flow.
//!
//! Drives one previewed order from `Previewing` through authentication and
//! placement to `Confirmed`, suspending on security questions and gating
//! submission on acknowledgement acceptance. Authentication is delegated to
//! the account's broker link; placement goes through the `OrderPlacer` the
//! external caller supplied with the preview.

use std::sync::Arc;

use tokio::sync::oneshot;

use crate::application::ports::{AuthOutcome, OrderPlacer, SecurityQuestion, ServiceError};
use crate::application::services::LinkedBrokerAccount;
use crate::domain::order_ticket::{
    Acknowledgement, OrderPreviewResult, PlaceOrderResult, PreviewRow, TicketError, TicketState,
    TicketStateMachine, build_preview_rows,
};
use crate::domain::shared::{MarketFormatter, OrderNumber};

/// What a submission attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Order placed; the broker assigned this order number.
    Confirmed(OrderNumber),
    /// The broker challenged authentication; the flow is suspended until
    /// the question is answered or cancelled.
    SecurityQuestion(SecurityQuestion),
}

/// A failed submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The ticket rejected the attempt before any network call.
    #[error(transparent)]
    Ticket(#[from] TicketError),

    /// Broker authentication failed.
    ///
    /// `relink_available` is true when the account still has a broker link,
    /// so the presentation layer can offer a relink affordance instead of a
    /// plain error.
    #[error("Authentication failed: {source}")]
    Authentication {
        /// Underlying collaborator error.
        source: ServiceError,
        /// Whether a relink affordance applies.
        relink_available: bool,
    },

    /// Order placement failed.
    #[error("Order placement failed: {source}")]
    Placement {
        /// Underlying collaborator error.
        source: ServiceError,
        /// Whether a relink affordance applies.
        relink_available: bool,
    },
}

/// The order preview workflow for one previewed order.
pub struct PreviewOrderFlow {
    account: Arc<LinkedBrokerAccount>,
    preview: OrderPreviewResult,
    placer: Arc<dyn OrderPlacer>,
    formatter: Arc<dyn MarketFormatter>,
    state: TicketState,
    acknowledgements: Vec<Acknowledgement>,
    placement: Option<PlaceOrderResult>,
    confirmation: Option<oneshot::Sender<OrderNumber>>,
}

impl PreviewOrderFlow {
    /// Create a flow for a previewed order.
    ///
    /// Acknowledgements start unaccepted, in the order the preview supplied
    /// them.
    #[must_use]
    pub fn new(
        account: Arc<LinkedBrokerAccount>,
        preview: OrderPreviewResult,
        placer: Arc<dyn OrderPlacer>,
        formatter: Arc<dyn MarketFormatter>,
    ) -> Self {
        let acknowledgements = preview
            .acknowledgements
            .iter()
            .map(Acknowledgement::new)
            .collect();

        Self {
            account,
            preview,
            placer,
            formatter,
            state: TicketState::Previewing,
            acknowledgements,
            placement: None,
            confirmation: None,
        }
    }

    /// Get the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TicketState {
        self.state
    }

    /// Get the preview this flow was built from.
    #[must_use]
    pub const fn preview(&self) -> &OrderPreviewResult {
        &self.preview
    }

    /// Get the placement result once the order is confirmed.
    #[must_use]
    pub const fn placement(&self) -> Option<&PlaceOrderResult> {
        self.placement.as_ref()
    }

    /// Get the current acknowledgement list.
    #[must_use]
    pub fn acknowledgements(&self) -> &[Acknowledgement] {
        &self.acknowledgements
    }

    /// Build the current row sequence for rendering.
    ///
    /// The order-number row appears once the order is placed.
    #[must_use]
    pub fn rows(&self) -> Vec<PreviewRow> {
        build_preview_rows(
            &self.account.formatted_display_name(),
            self.account.base_currency(),
            &self.preview,
            self.placement.as_ref(),
            &self.acknowledgements,
            self.formatter.as_ref(),
        )
    }

    /// Toggle one acknowledgement's acceptance.
    ///
    /// # Errors
    ///
    /// Returns error if the index is out of range.
    pub fn set_acknowledgement_accepted(
        &mut self,
        index: usize,
        accepted: bool,
    ) -> Result<(), TicketError> {
        let len = self.acknowledgements.len();
        let acknowledgement = self.acknowledgements.get_mut(index).ok_or(
            TicketError::AcknowledgementOutOfBounds { index, len },
        )?;
        acknowledgement.is_accepted = accepted;
        Ok(())
    }

    /// Returns true when every acknowledgement is accepted (vacuously true
    /// with none).
    #[must_use]
    pub fn all_acknowledgements_accepted(&self) -> bool {
        self.acknowledgements.iter().all(|a| a.is_accepted)
    }

    /// Returns true when a submission attempt may start right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.is_submittable() && self.all_acknowledgements_accepted()
    }

    /// Register for the one-shot confirmation notification.
    ///
    /// The returned receiver resolves with the broker order number when the
    /// flow reaches `Confirmed`. Registering again replaces the previous
    /// registration.
    pub fn notify_on_confirmation(&mut self) -> oneshot::Receiver<OrderNumber> {
        let (tx, rx) = oneshot::channel();
        self.confirmation = Some(tx);
        rx
    }

    /// Submit the previewed order.
    ///
    /// Gates on acknowledgement acceptance before any network call, then
    /// authenticates and places. May suspend on a security question.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Ticket`] when the gate rejects the attempt,
    /// otherwise the authentication or placement failure.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        match self.state {
            TicketState::Confirmed => return Err(TicketError::AlreadyConfirmed.into()),
            state if state.is_in_flight() => return Err(TicketError::SubmissionInFlight.into()),
            _ => {}
        }

        let outstanding = self
            .acknowledgements
            .iter()
            .filter(|a| !a.is_accepted)
            .count();
        if outstanding > 0 {
            return Err(TicketError::AcknowledgementsOutstanding { outstanding }.into());
        }

        self.transition(TicketState::AwaitingAuthentication)?;

        let outcome = match self.account.broker() {
            Some(broker) => broker.authenticate_if_needed().await,
            None => Err(unlinked_error()),
        };
        self.resolve_authentication(outcome).await
    }

    /// Answer the pending security question and resume the submission.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::NoChallengePending`] when no question is
    /// pending, otherwise the authentication or placement failure.
    pub async fn answer_security_question(
        &mut self,
        answer: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        if self.state != TicketState::AwaitingSecurityAnswer {
            return Err(TicketError::NoChallengePending.into());
        }

        self.transition(TicketState::AwaitingAuthentication)?;

        let outcome = match self.account.broker() {
            Some(broker) => broker.answer_security_question(answer).await,
            None => Err(unlinked_error()),
        };
        self.resolve_authentication(outcome).await
    }

    /// Cancel the pending security question and abandon the submission.
    ///
    /// Already-dispatched requests are not aborted; the ticket simply
    /// returns to `Previewing` with acknowledgements untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::NoChallengePending`] when no question is
    /// pending.
    pub fn cancel_security_question(&mut self) -> Result<(), TicketError> {
        if self.state != TicketState::AwaitingSecurityAnswer {
            return Err(TicketError::NoChallengePending);
        }
        self.transition(TicketState::Previewing)
    }

    async fn resolve_authentication(
        &mut self,
        outcome: Result<AuthOutcome, ServiceError>,
    ) -> Result<SubmitOutcome, SubmitError> {
        match outcome {
            Ok(AuthOutcome::Authenticated) => self.place_order().await,
            Ok(AuthOutcome::SecurityQuestion(question)) => {
                self.transition(TicketState::AwaitingSecurityAnswer)?;
                Ok(SubmitOutcome::SecurityQuestion(question))
            }
            Err(source) => {
                let relink_available = self.account.broker().is_some();
                self.transition(TicketState::Failed)?;
                Err(SubmitError::Authentication {
                    source,
                    relink_available,
                })
            }
        }
    }

    async fn place_order(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.transition(TicketState::Placing)?;

        match self.placer.place_order().await {
            Ok(result) => {
                self.transition(TicketState::Confirmed)?;
                let order_number = result.order_number.clone();
                self.placement = Some(result);

                if let Some(tx) = self.confirmation.take() {
                    // Receiver may have been dropped; confirmation is
                    // best-effort.
                    let _ = tx.send(order_number.clone());
                }

                tracing::info!(
                    account = %self.account.account_number(),
                    order_number = %order_number,
                    "order placed"
                );
                Ok(SubmitOutcome::Confirmed(order_number))
            }
            Err(source) => {
                let relink_available = self.account.broker().is_some();
                self.transition(TicketState::Failed)?;
                Err(SubmitError::Placement {
                    source,
                    relink_available,
                })
            }
        }
    }

    fn transition(&mut self, to: TicketState) -> Result<(), TicketError> {
        TicketStateMachine::validate_transition(self.state, to)?;
        tracing::debug!(from = %self.state, to = %to, "ticket transition");
        self.state = to;
        Ok(())
    }
}

/// Authentication error used when the account's broker link is gone.
fn unlinked_error() -> ServiceError {
    ServiceError::transport(
        "Authentication failed",
        "No broker link is available for this account.",
    )
}
