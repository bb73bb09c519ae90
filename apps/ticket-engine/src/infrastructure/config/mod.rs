//! SDK configuration.

mod settings;

pub use settings::{ApiKey, ConfigError, SdkConfig, SdkEnvironment, ThemeSettings};
