//! Tracing Setup
//!
//! Console tracing initialization for host applications embedding the SDK.
//!
//! # Configuration
//!
//! - `RUST_LOG`: standard env-filter directives (default: `info`)
//!
//! # Usage
//!
//! ```rust,ignore
//! ticket_engine::telemetry::init_tracing();
//! ```

use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// Safe to call more than once; later calls are no-ops. Hosts with their own
/// subscriber should skip this and the SDK's spans flow into theirs.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("still alive after double init");
    }
}
