//! Order Ticket Context
//!
//! The preview-to-placement order workflow's domain: the heterogeneous row
//! model a preview renders as, the order detail value objects, the ticket
//! lifecycle state machine, and the pure row builder.

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::TicketError;
pub use services::{TicketStateMachine, build_preview_rows};
pub use value_objects::{
    Acknowledgement, OrderAction, OrderDetails, OrderExpiration, OrderPreviewResult,
    PlaceOrderResult, PreviewRow, TicketState,
};
