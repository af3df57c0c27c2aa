//! Error type shared by every secure generator.

use std::io;

use thiserror::Error;

/// Errors returned by the secure generators.
///
/// Insecure generators never return an error; their invalid inputs are
/// documented precondition violations.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The caller supplied a non-positive bound, an empty or non-ASCII
    /// character set, or an empty choice sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operating system entropy source failed to produce bytes.
    #[error("entropy source unavailable")]
    EntropyUnavailable(#[source] io::Error),
}

impl RandomError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::debug!(reason = %msg, "rejected random generation request");
        Self::InvalidArgument(msg)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RandomError>;
