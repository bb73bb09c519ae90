//! Authentication Port (Driven Port)
//!
//! Interface to the broker authentication collaborator. Sessions and token
//! refresh live behind this seam; the ticket only needs "authenticated or
//! challenged".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ServiceError;

/// A secondary authentication step requested mid-flow by the brokerage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityQuestion {
    /// Question text shown to the user.
    pub prompt: String,
    /// Multiple-choice options; empty for free-form answers.
    #[serde(default)]
    pub options: Vec<String>,
}

impl SecurityQuestion {
    /// Create a free-form security question.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
        }
    }

    /// Returns true for multiple-choice questions.
    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Result of an authentication attempt.
///
/// A security question is an interruption, not a failure: the workflow
/// suspends and resumes once the user answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session is valid; proceed.
    Authenticated,
    /// The broker requires a security answer before the session is valid.
    SecurityQuestion(SecurityQuestion),
}

/// Port for broker authentication.
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Ensure the broker session is valid, authenticating if required.
    async fn authenticate_if_needed(&self) -> Result<AuthOutcome, ServiceError>;

    /// Answer a pending security question.
    ///
    /// The broker may respond with another challenge.
    async fn answer_security_question(&self, answer: &str) -> Result<AuthOutcome, ServiceError>;
}
