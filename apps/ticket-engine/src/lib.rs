// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Ticket Engine - Rust Core Library
//!
//! The account-linking and order-ticket core behind the BrokerLink SDK.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `order_ticket`: preview row model, ticket lifecycle state machine,
//!     pure row builder
//!   - `linked_account`: balance, position, and capability value objects
//!   - `shared`: identifiers, money/quantity/timestamp primitives, the
//!     market formatting seam
//!
//! - **Application**: Orchestration over collaborator ports
//!   - `ports`: interfaces for external systems (`BalanceService`,
//!     `PositionService`, `AuthenticationService`, `OrderPlacer`,
//!     `LinkedBrokerCache`)
//!   - `services`: `LinkedBroker`, `LinkedBrokerAccount` (the account
//!     facade), `PreviewOrderFlow` (the submission workflow)
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: in-memory linked-broker cache
//!   - `formatting`: locale market formatter
//!   - `mock`: scripted collaborators for tests and development
//!   - `config`: environment-driven SDK settings

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Collaborator ports and orchestration services.
pub mod application;

/// Infrastructure layer - Adapters and configuration.
pub mod infrastructure;

/// Tracing initialization.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::linked_account::{
    AccountOverview, EquityPosition, FxAccountOverview, FxPosition, Instrument,
    InstrumentOrderCapabilities, PortfolioPosition,
};
pub use domain::order_ticket::{
    Acknowledgement, OrderAction, OrderDetails, OrderExpiration, OrderPreviewResult,
    PlaceOrderResult, PreviewRow, TicketError, TicketState, TicketStateMachine,
    build_preview_rows,
};
pub use domain::shared::{
    AccountNumber, LinkId, MarketFormatter, Money, OrderNumber, Quantity, Symbol, Timestamp,
};

// Application re-exports
pub use application::ports::{
    AccountOverviewBundle, AuthOutcome, AuthenticationService, BalanceService,
    LinkedAccountSnapshot, LinkedBrokerCache, LinkedBrokerSnapshot, OrderPlacer, PositionService,
    PositionsPayload, SecurityQuestion, ServiceError,
};
pub use application::services::{
    DiscoveredAccount, LinkedBroker, LinkedBrokerAccount, PreviewOrderFlow, SubmitError,
    SubmitOutcome,
};

// Infrastructure re-exports
pub use infrastructure::config::{ApiKey, ConfigError, SdkConfig, SdkEnvironment, ThemeSettings};
pub use infrastructure::formatting::LocaleMarketFormatter;
pub use infrastructure::persistence::InMemoryLinkedBrokerCache;
