//! Match state validation errors.

use super::constants::{MatchStatus, Point, Team};
use thiserror::Error;

/// Invariant violations found by [`crate::core::MatchState::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    #[error("Match format must require at least one set to win")]
    InvalidFormat,

    #[error("Both teams hold advantage")]
    DoubleAdvantage,

    #[error("{team} holds advantage while the opponent is at {opponent}")]
    AdvantageWithoutDeuce { team: Team, opponent: Point },

    #[error("{team} has {team_games} games but the set counter shows {set_games}")]
    GamesMismatch {
        team: Team,
        team_games: u8,
        set_games: u8,
    },

    #[error("Current set score {team_a}-{team_b} is not reachable in play")]
    InvalidSetScore { team_a: u8, team_b: u8 },

    #[error("Tie-break score {team_a}-{team_b} is not reachable in play")]
    InvalidTieBreak { team_a: u8, team_b: u8 },

    #[error("Completed set {index} has no valid winner ({team_a}-{team_b})")]
    InvalidCompletedSet { index: usize, team_a: u8, team_b: u8 },

    #[error("Status {status:?} disagrees with sets won ({team_a}-{team_b}, {sets_to_win} needed)")]
    StatusMismatch {
        status: MatchStatus,
        team_a: usize,
        team_b: usize,
        sets_to_win: u8,
    },

    #[error("Last update precedes match creation")]
    TimestampsOutOfOrder,
}
