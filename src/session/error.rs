//! Session configuration errors.

use thiserror::Error;

/// Errors that can occur when building a [`crate::session::MatchSession`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Best-of count must be odd and at least 1, got {0}")]
    InvalidBestOf(u8),

    #[error("Match format must require at least one set to win")]
    InvalidFormat,

    #[error("History limit must allow at least one snapshot")]
    ZeroHistoryLimit,
}
