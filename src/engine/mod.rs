//! The scoring state machine.
//!
//! The engine is the only code path that changes a [`MatchState`]. Each
//! call takes the current state by reference, optionally records a
//! snapshot of it, and returns the next state by value:
//!
//! - **Tie-break**: integer points, first to seven with a two point lead
//! - **Deuce / advantage**: from forty-all a point gives advantage, a second
//!   point wins the game, a point against advantage returns to deuce
//! - **Regular play**: love, fifteen, thirty, forty, game
//! - **Game award**: six games with a two game lead wins the set, six-all
//!   starts a tie-break, enough sets finishes the match
//!
//! [`MatchState`]: crate::core::MatchState

mod error;
mod scoring;

pub use error::ScoringError;
pub use scoring::{add_point, add_point_at, add_point_for};
