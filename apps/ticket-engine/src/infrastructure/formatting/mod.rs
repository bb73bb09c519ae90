//! Market formatter adapters.

mod locale;

pub use locale::LocaleMarketFormatter;
