//! Undo history of state snapshots.
//!
//! Snapshots are stored by value, so the stack never aliases the state a
//! caller is holding: whatever happens to the live state after a push, or
//! to a value after it is popped, the remaining entries are untouched.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// LIFO stack of independent state snapshots.
///
/// The stack itself is unbounded; capping it is a caller policy (see
/// [`crate::session::MatchSession`]). Popping or peeking an empty stack
/// returns `None`, which is the normal "nothing to undo" answer rather than
/// an error.
///
/// # Example
///
/// ```rust
/// use courtside::core::{HistoryStack, MatchState, Team};
/// use courtside::engine::add_point;
///
/// let mut history = HistoryStack::new();
/// let before = MatchState::default();
/// let after = add_point(&before, Team::TeamA, Some(&mut history)).unwrap();
///
/// assert_eq!(history.size(), 1);
/// assert_ne!(after, before);
///
/// let restored = history.pop().unwrap();
/// assert_eq!(restored, before);
/// assert!(history.pop().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct HistoryStack<S: State> {
    entries: VecDeque<S>,
}

impl<S: State> Default for HistoryStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> HistoryStack<S> {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Store an independent copy of `state` on top of the stack.
    pub fn push(&mut self, state: &S) {
        self.entries.push_back(state.clone());
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<S> {
        self.entries.pop_back()
    }

    /// Return a copy of the most recent snapshot without removing it.
    ///
    /// The copy is owned by the caller; changing it leaves the stack as is.
    pub fn peek(&self) -> Option<S> {
        self.entries.back().cloned()
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Evict the bottom (oldest) snapshot.
    ///
    /// Used by bounded callers once their depth limit is exceeded.
    pub fn drop_oldest(&mut self) -> Option<S> {
        self.entries.pop_front()
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.entries.iter()
    }
}
