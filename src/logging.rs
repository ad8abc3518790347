//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events. Hosts that do not install their
//! own subscriber can call [`init`] once at startup; tests call it freely.

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]. Returns false if a global subscriber already exists.
pub fn init() -> bool {
    init_with_filter(DEFAULT_LOG_FILTER)
}

/// Like [`init`] with a caller-chosen fallback directive.
pub fn init_with_filter(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
