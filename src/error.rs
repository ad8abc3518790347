//! Error types for resize wiring and configuration.
//!
//! Pointer processing itself never fails: invalid geometry is filtered and
//! host hiccups are logged and skipped. Errors surface only where a caller
//! made a wiring or configuration mistake, or where a host operation reports
//! a failure the controller decides to swallow.

use thiserror::Error;

/// Errors that can occur while wiring or configuring resizable elements
#[derive(Error, Debug)]
pub enum ResizeError {
    /// A handle was asked to dispatch without any controller association
    #[error("resize handle has no controller: bind one directly or name a registered container")]
    MissingController,

    /// A declarative container reference did not resolve
    #[error("no resizable container registered under {0:?}")]
    UnknownContainer(String),

    /// A host element operation failed (clone, preventDefault, ...)
    #[error("host operation failed: {0}")]
    Host(String),

    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON parsing error from serde_json
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for resize operations
pub type ResizeResult<T> = Result<T, ResizeError>;

impl ResizeError {
    /// Convenience constructor for host failures.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }
}
