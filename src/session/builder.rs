//! Builder for configuring match sessions.

use crate::core::{MatchFormat, MatchState};
use crate::session::error::BuildError;
use crate::session::{MatchSession, DEFAULT_HISTORY_LIMIT};

/// Builder for constructing a [`MatchSession`] with a fluent API.
///
/// # Example
///
/// ```
/// use courtside::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .best_of(5)
///     .history_limit(300)
///     .build()
///     .unwrap();
///
/// assert_eq!(session.state().format.sets_to_win, 3);
/// assert_eq!(session.history_limit(), 300);
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    format: MatchFormat,
    best_of: Option<u8>,
    history_limit: usize,
}

impl SessionBuilder {
    /// Create a builder for a best-of-3 match with the default history limit.
    pub fn new() -> Self {
        Self {
            format: MatchFormat::default(),
            best_of: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the match format directly.
    pub fn format(mut self, format: MatchFormat) -> Self {
        self.format = format;
        self.best_of = None;
        self
    }

    /// Set the format as a best-of count (1, 3, 5, ...).
    pub fn best_of(mut self, sets: u8) -> Self {
        self.best_of = Some(sets);
        self
    }

    /// Maximum number of undo snapshots kept.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the session.
    /// Returns an error if the configuration cannot describe a match.
    pub fn build(self) -> Result<MatchSession, BuildError> {
        let format = match self.best_of {
            Some(sets) if sets % 2 == 1 => MatchFormat::new(sets / 2 + 1),
            Some(sets) => return Err(BuildError::InvalidBestOf(sets)),
            None => self.format,
        };
        if format.sets_to_win == 0 {
            return Err(BuildError::InvalidFormat);
        }
        if self.history_limit == 0 {
            return Err(BuildError::ZeroHistoryLimit);
        }

        Ok(MatchSession::from_parts(
            MatchState::new(format),
            Default::default(),
            self.history_limit,
        ))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
