//! Order ticket value objects.

mod order_action;
mod order_details;
mod order_expiration;
mod placement;
mod preview_result;
mod preview_row;
mod ticket_state;

pub use order_action::OrderAction;
pub use order_details::OrderDetails;
pub use order_expiration::OrderExpiration;
pub use placement::PlaceOrderResult;
pub use preview_result::OrderPreviewResult;
pub use preview_row::{Acknowledgement, PreviewRow};
pub use ticket_state::TicketState;
