//! Mock collaborators for testing.
//!
//! These mocks return simulated responses without touching the network.
//! Responses can be scripted per call; with nothing scripted each mock
//! falls back to a benign success. Useful for unit tests and integration
//! tests that don't require real broker connectivity.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::application::ports::{
    AccountOverviewBundle, AuthOutcome, AuthenticationService, BalanceService, OrderPlacer,
    PositionService, PositionsPayload, ServiceError,
};
use crate::domain::order_ticket::PlaceOrderResult;
use crate::domain::shared::{AccountNumber, OrderNumber};

/// Mock balance service with scripted responses.
#[derive(Debug, Default)]
pub struct MockBalanceService {
    responses: Mutex<VecDeque<Result<AccountOverviewBundle, ServiceError>>>,
}

impl MockBalanceService {
    /// Create a mock that answers every call with an empty overview.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next response as a success.
    pub fn push_success(&self, bundle: AccountOverviewBundle) {
        self.responses.lock().unwrap().push_back(Ok(bundle));
    }

    /// Script the next response as a failure.
    pub fn push_failure(&self, error: ServiceError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl BalanceService for MockBalanceService {
    async fn account_overview(
        &self,
        _account_number: &AccountNumber,
    ) -> Result<AccountOverviewBundle, ServiceError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(AccountOverviewBundle::default()))
    }
}

/// Mock position service with scripted payloads.
#[derive(Debug, Default)]
pub struct MockPositionService {
    responses: Mutex<VecDeque<Result<PositionsPayload, ServiceError>>>,
}

impl MockPositionService {
    /// Create a mock that answers every call with an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next response from raw position entries.
    pub fn push_payload(
        &self,
        positions: Vec<serde_json::Value>,
        fx_positions: Vec<serde_json::Value>,
        account_base_currency: &str,
    ) {
        self.responses.lock().unwrap().push_back(Ok(PositionsPayload {
            positions,
            fx_positions,
            account_base_currency: account_base_currency.to_string(),
        }));
    }

    /// Script the next response as a failure.
    pub fn push_failure(&self, error: ServiceError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl PositionService for MockPositionService {
    async fn positions(
        &self,
        _account_number: &AccountNumber,
    ) -> Result<PositionsPayload, ServiceError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PositionsPayload::default()))
    }
}

/// Mock authentication service with scripted outcomes.
#[derive(Debug, Default)]
pub struct MockAuthenticationService {
    outcomes: Mutex<VecDeque<Result<AuthOutcome, ServiceError>>>,
    answer_outcomes: Mutex<VecDeque<Result<AuthOutcome, ServiceError>>>,
    answers: Mutex<Vec<String>>,
}

impl MockAuthenticationService {
    /// Create a mock that authenticates every call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next `authenticate_if_needed` outcome.
    pub fn push_outcome(&self, outcome: Result<AuthOutcome, ServiceError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Script the next `answer_security_question` outcome.
    pub fn push_answer_outcome(&self, outcome: Result<AuthOutcome, ServiceError>) {
        self.answer_outcomes.lock().unwrap().push_back(outcome);
    }

    /// Get the answers submitted so far.
    #[must_use]
    pub fn answers(&self) -> Vec<String> {
        self.answers.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthenticationService for MockAuthenticationService {
    async fn authenticate_if_needed(&self) -> Result<AuthOutcome, ServiceError> {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(AuthOutcome::Authenticated))
    }

    async fn answer_security_question(&self, answer: &str) -> Result<AuthOutcome, ServiceError> {
        self.answers.lock().unwrap().push(answer.to_string());
        self.answer_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(AuthOutcome::Authenticated))
    }
}

/// Mock order placer with scripted results.
///
/// Order numbers are generated sequentially starting from 1.
#[derive(Debug, Default)]
pub struct MockOrderPlacer {
    results: Mutex<VecDeque<Result<PlaceOrderResult, ServiceError>>>,
    order_counter: AtomicU64,
    calls: AtomicU64,
}

impl MockOrderPlacer {
    /// Create a mock that accepts every order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next placement result.
    pub fn push_result(&self, result: PlaceOrderResult) {
        self.results.lock().unwrap().push_back(Ok(result));
    }

    /// Script the next placement as a failure.
    pub fn push_failure(&self, error: ServiceError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    /// Get the number of placement calls made.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderPlacer for MockOrderPlacer {
    async fn place_order(&self) -> Result<PlaceOrderResult, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results.lock().unwrap().pop_front().unwrap_or_else(|| {
            let number = self.order_counter.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(PlaceOrderResult::new(OrderNumber::new(format!(
                "order-{number}"
            ))))
        })
    }
}
