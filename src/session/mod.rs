//! Single owner of the match being scored.
//!
//! A [`MatchSession`] holds exactly one current [`MatchState`] together
//! with its undo history and threads both through the engine. Input layers
//! keep one session per match instead of reaching for shared global state.
//!
//! # History limit
//!
//! The history stack is unbounded by itself. The session caps it at
//! [`DEFAULT_HISTORY_LIMIT`] snapshots unless configured otherwise; when a
//! point would exceed the cap the oldest snapshot is discarded and a
//! warning is logged, so only the earliest points of a very long match
//! become un-undoable.

pub mod builder;
pub mod error;

pub use builder::SessionBuilder;
pub use error::BuildError;

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{HistoryStack, MatchFormat, MatchState, State, Team};
use crate::engine::{add_point, add_point_for, ScoringError};
use tracing::{debug, info, warn};

/// Snapshots kept by default. A five-set match rarely runs past 400 points.
pub const DEFAULT_HISTORY_LIMIT: usize = 512;

/// The current match and its undo history.
///
/// # Example
///
/// ```rust
/// use courtside::core::{MatchFormat, Point, Team};
/// use courtside::session::MatchSession;
///
/// let mut session = MatchSession::new(MatchFormat::BEST_OF_THREE);
/// session.score(Team::TeamA).unwrap();
/// session.score(Team::TeamA).unwrap();
/// assert_eq!(session.state().team(Team::TeamA).points, Point::Thirty);
///
/// session.undo();
/// assert_eq!(session.state().team(Team::TeamA).points, Point::Fifteen);
/// assert_eq!(session.undo_depth(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatchSession {
    state: MatchState,
    history: HistoryStack<MatchState>,
    history_limit: usize,
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new(MatchFormat::default())
    }
}

impl MatchSession {
    /// Start a new match with the default history limit.
    pub fn new(format: MatchFormat) -> Self {
        Self::from_parts(MatchState::new(format), HistoryStack::new(), DEFAULT_HISTORY_LIMIT)
    }

    pub(crate) fn from_parts(
        state: MatchState,
        history: HistoryStack<MatchState>,
        history_limit: usize,
    ) -> Self {
        Self {
            state,
            history,
            history_limit,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn history(&self) -> &HistoryStack<MatchState> {
        &self.history
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Award a point and make the result the current state.
    ///
    /// On error the session is unchanged.
    pub fn score(&mut self, team: Team) -> Result<&MatchState, ScoringError> {
        let next = add_point(&self.state, team, Some(&mut self.history))?;
        self.commit(next);
        Ok(&self.state)
    }

    /// Award a point to the team with the given identifier.
    pub fn score_by_id(&mut self, team_id: &str) -> Result<&MatchState, ScoringError> {
        let next = add_point_for(&self.state, team_id, Some(&mut self.history))?;
        self.commit(next);
        Ok(&self.state)
    }

    /// Revert the most recent point.
    ///
    /// Returns `None` and leaves the state alone when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> Option<&MatchState> {
        let previous = self.history.pop()?;
        self.state = previous;
        debug!(
            phase = self.state.name(),
            remaining = self.history.size(),
            "Point undone"
        );
        Some(&self.state)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.size()
    }

    /// Discard the match and its history and start over in the same format.
    pub fn reset(&mut self) {
        self.state = MatchState::new(self.state.format);
        self.history.clear();
        info!(sets_to_win = self.state.format.sets_to_win, "Match reset");
    }

    /// Capture the session for persistence.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.state.clone(), self.history.clone(), self.history_limit)
    }

    /// Rebuild a session from a checkpoint, validating it first.
    pub fn restore(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        info!(
            id = %checkpoint.id,
            undo_depth = checkpoint.history.size(),
            "Session restored from checkpoint"
        );
        Ok(Self::from_parts(
            checkpoint.state,
            checkpoint.history,
            checkpoint.history_limit,
        ))
    }

    fn commit(&mut self, next: MatchState) {
        self.state = next;
        while self.history.size() > self.history_limit {
            if self.history.drop_oldest().is_some() {
                warn!(
                    limit = self.history_limit,
                    "History limit reached, oldest snapshot discarded"
                );
            }
        }
    }
}
