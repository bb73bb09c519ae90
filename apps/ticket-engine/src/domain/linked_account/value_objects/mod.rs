//! Linked account value objects.

mod account_overview;
mod order_capabilities;
mod position;

pub use account_overview::{AccountOverview, FxAccountOverview};
pub use order_capabilities::{Instrument, InstrumentOrderCapabilities};
pub use position::{EquityPosition, FxPosition, PortfolioPosition};
