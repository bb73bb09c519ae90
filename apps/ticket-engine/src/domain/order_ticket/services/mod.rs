//! Order ticket domain services.

mod row_builder;
mod ticket_state_machine;

pub use row_builder::build_preview_rows;
pub use ticket_state_machine::TicketStateMachine;
