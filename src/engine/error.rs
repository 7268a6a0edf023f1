//! Scoring errors.

use thiserror::Error;

/// Reasons a point can be rejected.
///
/// A rejected point never changes the state it was given and never records
/// a history snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Unknown team identifier {team:?}, expected \"teamA\" or \"teamB\"")]
    InvalidTeam { team: String },

    #[error("Match is already finished")]
    MatchAlreadyFinished,
}
