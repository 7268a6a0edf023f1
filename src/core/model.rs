//! Match state model.
//!
//! [`MatchState`] is the canonical, serializable snapshot of a match. It
//! exposes queries only; every transition goes through
//! [`crate::engine::add_point`].

use super::constants::{
    MatchStatus, Phase, Point, Team, GAMES_TO_WIN_SET, TIE_BREAK_POINTS_TO_WIN, WINNING_MARGIN,
};
use super::error::StateError;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-team counters within the current game and set.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScore {
    /// Point value in the current regular game
    pub points: Point,
    /// Games won in the current set
    pub games: u8,
}

/// The set currently in progress.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetState {
    pub team_a_games: u8,
    pub team_b_games: u8,
    /// Set once both teams reach six games
    pub is_tie_break: bool,
    pub tie_break_points_a: u8,
    pub tie_break_points_b: u8,
}

impl SetState {
    pub fn games(&self, team: Team) -> u8 {
        match team {
            Team::TeamA => self.team_a_games,
            Team::TeamB => self.team_b_games,
        }
    }

    pub fn tie_break_points(&self, team: Team) -> u8 {
        match team {
            Team::TeamA => self.tie_break_points_a,
            Team::TeamB => self.tie_break_points_b,
        }
    }

    pub(crate) fn games_mut(&mut self, team: Team) -> &mut u8 {
        match team {
            Team::TeamA => &mut self.team_a_games,
            Team::TeamB => &mut self.team_b_games,
        }
    }

    pub(crate) fn tie_break_points_mut(&mut self, team: Team) -> &mut u8 {
        match team {
            Team::TeamA => &mut self.tie_break_points_a,
            Team::TeamB => &mut self.tie_break_points_b,
        }
    }
}

/// Final points of a set decided by tie-break.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieBreakScore {
    pub team_a: u8,
    pub team_b: u8,
}

/// A finalized set.
///
/// Sets closed by a tie-break are recorded 7-6 with the tie-break points
/// attached.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetResult {
    pub team_a_games: u8,
    pub team_b_games: u8,
    #[serde(default)]
    pub tie_break: Option<TieBreakScore>,
}

impl SetResult {
    pub fn games(&self, team: Team) -> u8 {
        match team {
            Team::TeamA => self.team_a_games,
            Team::TeamB => self.team_b_games,
        }
    }

    /// Team with more games, `None` for a level (malformed) result.
    pub fn winner(&self) -> Option<Team> {
        use std::cmp::Ordering;
        match self.team_a_games.cmp(&self.team_b_games) {
            Ordering::Greater => Some(Team::TeamA),
            Ordering::Less => Some(Team::TeamB),
            Ordering::Equal => None,
        }
    }

    fn is_valid(&self) -> bool {
        let Some(winner) = self.winner() else {
            return false;
        };
        let won = self.games(winner);
        let lost = self.games(winner.opponent());
        match (won, lost, self.tie_break) {
            (6, 0..=4, None) | (7, 5, None) => true,
            (7, 6, Some(tb)) => {
                let (tb_won, tb_lost) = match winner {
                    Team::TeamA => (tb.team_a, tb.team_b),
                    Team::TeamB => (tb.team_b, tb.team_a),
                };
                tie_break_decided(tb_won, tb_lost)
                    && (tb_won == TIE_BREAK_POINTS_TO_WIN || tb_won - tb_lost == WINNING_MARGIN)
            }
            _ => false,
        }
    }
}

/// Number of sets needed to take the match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFormat {
    pub sets_to_win: u8,
}

impl MatchFormat {
    pub const BEST_OF_ONE: Self = Self { sets_to_win: 1 };
    pub const BEST_OF_THREE: Self = Self { sets_to_win: 2 };
    pub const BEST_OF_FIVE: Self = Self { sets_to_win: 3 };

    pub fn new(sets_to_win: u8) -> Self {
        Self { sets_to_win }
    }

    /// Maximum number of sets the format can take.
    pub fn best_of(&self) -> u8 {
        self.sets_to_win.saturating_mul(2).saturating_sub(1)
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self::BEST_OF_THREE
    }
}

/// Canonical snapshot of a match.
///
/// Plain data only, so a clone is a full deep copy and the JSON form
/// round-trips exactly.
///
/// # Example
///
/// ```rust
/// use courtside::core::{create_initial_match_state, MatchFormat, MatchStatus, Point, Team};
///
/// let state = create_initial_match_state(MatchFormat::BEST_OF_FIVE);
/// assert_eq!(state.team(Team::TeamA).points, Point::Love);
/// assert_eq!(state.status, MatchStatus::Active);
/// assert!(state.completed_sets.is_empty());
/// assert_eq!(state.format.best_of(), 5);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub team_a: TeamScore,
    pub team_b: TeamScore,
    #[serde(rename = "currentSetStatus")]
    pub current_set: SetState,
    pub completed_sets: Vec<SetResult>,
    pub status: MatchStatus,
    pub format: MatchFormat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Build the zeroed state a new match starts from.
pub fn create_initial_match_state(format: MatchFormat) -> MatchState {
    MatchState::new(format)
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchFormat::default())
    }
}

impl MatchState {
    pub fn new(format: MatchFormat) -> Self {
        Self::new_at(format, Utc::now())
    }

    /// Same as [`MatchState::new`] with an explicit creation time.
    pub fn new_at(format: MatchFormat, now: DateTime<Utc>) -> Self {
        Self {
            team_a: TeamScore::default(),
            team_b: TeamScore::default(),
            current_set: SetState::default(),
            completed_sets: Vec::new(),
            status: MatchStatus::Active,
            format,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn team(&self, team: Team) -> &TeamScore {
        match team {
            Team::TeamA => &self.team_a,
            Team::TeamB => &self.team_b,
        }
    }

    pub(crate) fn team_mut(&mut self, team: Team) -> &mut TeamScore {
        match team {
            Team::TeamA => &mut self.team_a,
            Team::TeamB => &mut self.team_b,
        }
    }

    /// Completed sets won by `team`.
    pub fn sets_won(&self, team: Team) -> usize {
        self.completed_sets
            .iter()
            .filter(|set| set.winner() == Some(team))
            .count()
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// The match winner, once the match is finished.
    pub fn winner(&self) -> Option<Team> {
        if !self.is_finished() {
            return None;
        }
        Team::ALL
            .into_iter()
            .find(|&team| self.sets_won(team) >= usize::from(self.format.sets_to_win))
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            return Phase::Finished;
        }
        if self.current_set.is_tie_break {
            return Phase::TieBreak;
        }
        match (self.team_a.points, self.team_b.points) {
            (Point::Advantage, _) => Phase::Advantage(Team::TeamA),
            (_, Point::Advantage) => Phase::Advantage(Team::TeamB),
            (Point::Forty, Point::Forty) => Phase::Deuce,
            _ => Phase::Regular,
        }
    }

    /// Check every structural invariant of the model.
    ///
    /// States produced by the engine always pass; this exists for states
    /// that arrive from outside, e.g. a loaded checkpoint.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.format.sets_to_win == 0 {
            return Err(StateError::InvalidFormat);
        }
        if self.updated_at < self.created_at {
            return Err(StateError::TimestampsOutOfOrder);
        }

        if self.team_a.points == Point::Advantage && self.team_b.points == Point::Advantage {
            return Err(StateError::DoubleAdvantage);
        }
        for team in Team::ALL {
            let opponent = self.team(team.opponent()).points;
            if self.team(team).points == Point::Advantage && opponent != Point::Forty {
                return Err(StateError::AdvantageWithoutDeuce { team, opponent });
            }
            let team_games = self.team(team).games;
            let set_games = self.current_set.games(team);
            if team_games != set_games {
                return Err(StateError::GamesMismatch {
                    team,
                    team_games,
                    set_games,
                });
            }
        }

        for (index, set) in self.completed_sets.iter().enumerate() {
            if !set.is_valid() {
                return Err(StateError::InvalidCompletedSet {
                    index,
                    team_a: set.team_a_games,
                    team_b: set.team_b_games,
                });
            }
        }

        let (sets_a, sets_b) = (self.sets_won(Team::TeamA), self.sets_won(Team::TeamB));
        let needed = usize::from(self.format.sets_to_win);
        let consistent = match self.status {
            MatchStatus::Active => sets_a < needed && sets_b < needed,
            MatchStatus::Finished => (sets_a == needed) != (sets_b == needed),
        };
        if !consistent {
            return Err(StateError::StatusMismatch {
                status: self.status,
                team_a: sets_a,
                team_b: sets_b,
                sets_to_win: self.format.sets_to_win,
            });
        }

        // A finished match keeps the counters of its deciding set.
        if self.status == MatchStatus::Active {
            self.validate_current_set()?;
        }
        Ok(())
    }

    fn validate_current_set(&self) -> Result<(), StateError> {
        let set = &self.current_set;
        let (a, b) = (set.team_a_games, set.team_b_games);

        if set.is_tie_break {
            let level = a == GAMES_TO_WIN_SET && b == GAMES_TO_WIN_SET;
            let points_cleared =
                self.team_a.points == Point::Love && self.team_b.points == Point::Love;
            if !level || !points_cleared {
                return Err(StateError::InvalidSetScore {
                    team_a: a,
                    team_b: b,
                });
            }
            let (tb_a, tb_b) = (set.tie_break_points_a, set.tie_break_points_b);
            if tie_break_decided(tb_a.max(tb_b), tb_a.min(tb_b)) {
                return Err(StateError::InvalidTieBreak {
                    team_a: tb_a,
                    team_b: tb_b,
                });
            }
            return Ok(());
        }

        if set.tie_break_points_a != 0 || set.tie_break_points_b != 0 {
            return Err(StateError::InvalidTieBreak {
                team_a: set.tie_break_points_a,
                team_b: set.tie_break_points_b,
            });
        }
        let (high, low) = (a.max(b), a.min(b));
        let reachable = high < GAMES_TO_WIN_SET || (high == GAMES_TO_WIN_SET && low == 5);
        if !reachable {
            return Err(StateError::InvalidSetScore {
                team_a: a,
                team_b: b,
            });
        }
        Ok(())
    }
}

impl State for MatchState {
    fn name(&self) -> &str {
        self.phase().name()
    }

    fn is_final(&self) -> bool {
        self.is_finished()
    }
}

/// Whether a games tally closes out a set.
pub(crate) fn set_decided(leader: u8, trailer: u8) -> bool {
    leader >= GAMES_TO_WIN_SET && leader.saturating_sub(trailer) >= WINNING_MARGIN
}

/// Whether a tie-break tally closes out the tie-break.
pub(crate) fn tie_break_decided(leader: u8, trailer: u8) -> bool {
    leader >= TIE_BREAK_POINTS_TO_WIN && leader.saturating_sub(trailer) >= WINNING_MARGIN
}
