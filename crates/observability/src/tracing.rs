//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process from `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Like [`init`], with an explicit filter directive such as
/// `"catalog_warehouse=debug"`. Returns `false` when the directive does not parse
/// (nothing is installed then).
pub fn init_with_filter(directives: &str) -> bool {
    match EnvFilter::try_new(directives) {
        Ok(filter) => {
            install(filter);
            true
        }
        Err(_) => false,
    }
}

fn install(filter: EnvFilter) {
    // JSON logs + timestamps.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
