//! Debug tracing infrastructure for development diagnostics.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=fieldlens::update=debug` - module-level filtering

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a console tracing subscriber.
///
/// Embedding hosts that install their own subscriber should skip this;
/// repeated initialization is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
