//! Persistence format for matches in progress.
//!
//! The engine never stores anything itself. This module gives the storage
//! layer a versioned, self-validating value to write wherever it likes,
//! as JSON (readable) or bincode (compact).

use crate::core::{HistoryStack, MatchState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable capture of a match session: the current state plus every
/// undo snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Current state of the match
    pub state: MatchState,

    /// Undo snapshots, oldest first
    pub history: HistoryStack<MatchState>,

    /// Maximum undo depth the session was configured with
    pub history_limit: usize,
}

impl Checkpoint {
    pub fn new(state: MatchState, history: HistoryStack<MatchState>, history_limit: usize) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state,
            history,
            history_limit,
        }
    }

    /// Check format version and every state the checkpoint carries.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.history_limit == 0 {
            return Err(CheckpointError::ValidationFailed(
                "history limit must be at least 1".to_string(),
            ));
        }
        if self.history.size() > self.history_limit {
            return Err(CheckpointError::ValidationFailed(format!(
                "{} snapshots exceed the history limit of {}",
                self.history.size(),
                self.history_limit
            )));
        }

        self.state
            .validate()
            .map_err(|e| CheckpointError::ValidationFailed(format!("current state: {e}")))?;
        for (index, snapshot) in self.history.iter().enumerate() {
            snapshot.validate().map_err(|e| {
                CheckpointError::ValidationFailed(format!("snapshot {index}: {e}"))
            })?;
            // Undo must stay within the same match and its rules.
            if snapshot.format != self.state.format {
                return Err(CheckpointError::ValidationFailed(format!(
                    "snapshot {index}: format needs {} sets, current state needs {}",
                    snapshot.format.sets_to_win, self.state.format.sets_to_win
                )));
            }
            if snapshot.created_at != self.state.created_at {
                return Err(CheckpointError::ValidationFailed(format!(
                    "snapshot {index}: belongs to a match created at {}",
                    snapshot.created_at
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        debug!(id = %checkpoint.id, "Loaded JSON checkpoint");
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a binary checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        debug!(id = %checkpoint.id, "Loaded binary checkpoint");
        Ok(checkpoint)
    }
}

/// Encode a single match state as JSON text.
pub fn serialize_state(state: &MatchState) -> Result<String, CheckpointError> {
    serde_json::to_string(state).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
}

/// Decode a match state, yielding `None` for anything corrupted or
/// describing an impossible match.
pub fn deserialize_state(text: &str) -> Option<MatchState> {
    let state: MatchState = match serde_json::from_str(text) {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "Discarding unreadable match state");
            return None;
        }
    };
    if let Err(e) = state.validate() {
        warn!(error = %e, "Discarding invalid match state");
        return None;
    }
    Some(state)
}
