//! Error types for hashkv
//!
//! The error set is closed on purpose: every operation resolves to one of
//! four kinds, and callers are expected to match all of them. There is no
//! catch-all variant.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for all store operations
#[derive(Debug, Error)]
pub enum KvError {
    /// The key has no entry file on disk. Expected in normal operation,
    /// e.g. first-time reads or a remove of an already-removed key.
    #[error("key not found")]
    KeyNotFound,

    /// Underlying filesystem failure: permission denied, disk full,
    /// path-type mismatch, directory listing failure. Never retried
    /// internally.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller-supplied key failed structural validation. Carries the
    /// validator's reason. Always a caller bug, never transient.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Operation attempted after `close`. Carries an optional reason,
    /// defaulting to none.
    #[error("store is closed{}", closed_suffix(.0))]
    ClosedStore(Option<String>),
}

fn closed_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(": {r}"),
        None => String::new(),
    }
}
