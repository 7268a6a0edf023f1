//! Courtside: a pure functional scoring state machine for racket sports
//!
//! Courtside follows a "pure core, imperative shell" design. Scoring is a
//! function from the current match state and the team that won the point
//! to the next match state; nothing is mutated in place and no global state
//! exists. Undo works by recording a by-value snapshot before every point.
//!
//! # Core Concepts
//!
//! - **Match state**: Serializable snapshot of points, games, sets and tie-break
//! - **Engine**: The only code path that produces a new match state
//! - **History**: LIFO stack of snapshots used for undo
//! - **Session**: Explicit owner of one match and its history
//! - **Checkpoint**: Versioned persistence format for a session
//!
//! # Example
//!
//! ```rust
//! use courtside::core::{HistoryStack, MatchFormat, MatchState, Point, Team};
//! use courtside::engine::add_point;
//!
//! let mut history = HistoryStack::new();
//! let mut state = MatchState::new(MatchFormat::BEST_OF_THREE);
//!
//! for _ in 0..4 {
//!     state = add_point(&state, Team::TeamA, Some(&mut history)).unwrap();
//! }
//! assert_eq!(state.team(Team::TeamA).games, 1);
//! assert_eq!(state.team(Team::TeamA).points, Point::Love);
//!
//! // Undo the game-winning point.
//! state = history.pop().unwrap();
//! assert_eq!(state.team(Team::TeamA).points, Point::Forty);
//! assert_eq!(history.size(), 3);
//! ```

pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    create_initial_match_state, HistoryStack, MatchFormat, MatchState, MatchStatus, Point, State,
    Team,
};
pub use engine::{add_point, ScoringError};
pub use session::{MatchSession, SessionBuilder};
