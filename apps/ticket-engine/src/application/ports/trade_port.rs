//! Order Placement Port (Driven Port)
//!
//! Placement is supplied by the external caller that produced the preview,
//! not constructed by the workflow: the preview and its placement belong to
//! the same trade-service session.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::order_ticket::PlaceOrderResult;

/// Port for placing the previewed order.
#[async_trait]
pub trait OrderPlacer: Send + Sync {
    /// Place the previewed order with the broker.
    async fn place_order(&self) -> Result<PlaceOrderResult, ServiceError>;
}
