//! Checkpoint error types.

use thiserror::Error;

/// Reasons a match checkpoint cannot be written or loaded
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The checkpoint could not be encoded as JSON text or bincode bytes
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The input is not a readable JSON or bincode checkpoint
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The checkpoint carries a format version this crate cannot read
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint decoded but its "current state" or a "snapshot N"
    /// describes an impossible match, belongs to a different match, or
    /// exceeds the history limit
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
