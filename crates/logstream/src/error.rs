//! crates/logstream/src/error.rs
//! Error types surfaced by the prefix logger and its configuration parser.

use std::io;

/// Failures reported by [`PrefixLogger`](crate::PrefixLogger) operations.
#[derive(Debug, thiserror::Error)]
pub enum LogStreamError {
    /// [`pop`](crate::PrefixLogger::pop) was called while no scope was active.
    #[error("cannot pop a scope: the prefix stack is empty")]
    ScopeUnderflow,

    /// An operation needed the secondary sink but none is attached.
    #[error("no secondary sink is attached")]
    NoSecondarySink,

    /// A sink rejected a write or flush.
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),
}

impl LogStreamError {
    /// Reports whether the error is a [`LogStreamError::ScopeUnderflow`].
    #[must_use]
    pub const fn is_scope_underflow(&self) -> bool {
        matches!(self, Self::ScopeUnderflow)
    }

    /// Reports whether the error is a [`LogStreamError::NoSecondarySink`].
    #[must_use]
    pub const fn is_no_secondary_sink(&self) -> bool {
        matches!(self, Self::NoSecondarySink)
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = LogStreamError> = std::result::Result<T, E>;

/// Failures reported while parsing a [`LogStreamConfig`](crate::LogStreamConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A token in the configuration string was empty.
    #[error("empty configuration token")]
    EmptyToken,

    /// A token did not name a known setting.
    #[error("unknown configuration token: {0}")]
    UnknownToken(String),

    /// A depth value could not be parsed.
    #[error("invalid depth value: {0}")]
    InvalidDepth(String),
}
