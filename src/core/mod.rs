//! Core scoring types.
//!
//! This module contains the pure data side of the scoring machine:
//! - The frozen scoring vocabulary (teams, points, status)
//! - The serializable match state and its factory
//! - The `State` trait and the snapshot history stack
//!
//! Nothing here mutates a match; transitions live in [`crate::engine`].

mod constants;
mod error;
mod history;
mod model;
mod state;

pub use constants::{
    MatchStatus, Phase, Point, Progress, Team, GAMES_TO_WIN_SET, POINT_SEQUENCE,
    TIE_BREAK_POINTS_TO_WIN, WINNING_MARGIN,
};
pub use error::StateError;
pub use history::HistoryStack;
pub use model::{
    create_initial_match_state, MatchFormat, MatchState, SetResult, SetState, TeamScore,
    TieBreakScore,
};
pub use state::State;

pub(crate) use model::{set_decided, tie_break_decided};
