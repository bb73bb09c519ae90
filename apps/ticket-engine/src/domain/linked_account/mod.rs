//! Linked Account Context
//!
//! Value objects describing one linked brokerage account: balances (equity
//! and FX), portfolio positions, and per-instrument order capabilities. The
//! stateful account facade lives in the application layer; this context only
//! carries the data it caches.

pub mod value_objects;

pub use value_objects::{
    AccountOverview, EquityPosition, FxAccountOverview, FxPosition, Instrument,
    InstrumentOrderCapabilities, PortfolioPosition,
};
