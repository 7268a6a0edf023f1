//! Frozen scoring vocabulary.
//!
//! Teams, point values, match status and the numeric thresholds of the
//! rule set. Everything here is plain data; the transition logic lives in
//! [`crate::engine`].

use crate::engine::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Games a team must reach to be able to win a set.
pub const GAMES_TO_WIN_SET: u8 = 6;

/// Points a team must reach to be able to win a tie-break.
pub const TIE_BREAK_POINTS_TO_WIN: u8 = 7;

/// Lead required to close out a set or a tie-break.
pub const WINNING_MARGIN: u8 = 2;

/// Regular point progression within a game, in order.
pub const POINT_SEQUENCE: [Point; 4] = [Point::Love, Point::Fifteen, Point::Thirty, Point::Forty];

/// One of the two sides of a match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
}

impl Team {
    /// Both teams, A first.
    pub const ALL: [Team; 2] = [Team::TeamA, Team::TeamB];

    /// The other side.
    pub fn opponent(self) -> Team {
        match self {
            Self::TeamA => Self::TeamB,
            Self::TeamB => Self::TeamA,
        }
    }

    /// Stable identifier used in persisted state and by input layers.
    pub fn id(self) -> &'static str {
        match self {
            Self::TeamA => "teamA",
            Self::TeamB => "teamB",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Team {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teamA" => Ok(Self::TeamA),
            "teamB" => Ok(Self::TeamB),
            other => Err(ScoringError::InvalidTeam {
                team: other.to_string(),
            }),
        }
    }
}

/// Symbolic point value within a regular game.
///
/// Tie-break points are plain counters on [`crate::core::SetState`] and
/// never use this type.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum Point {
    #[default]
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
}

/// Outcome of advancing a point along [`POINT_SEQUENCE`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Progress {
    /// The team moves to the given point value.
    Point(Point),
    /// The team has taken the game.
    Game,
}

impl Point {
    /// Displayed value (0/15/30/40), or `None` for advantage.
    pub fn value(self) -> Option<u8> {
        match self {
            Self::Love => Some(0),
            Self::Fifteen => Some(15),
            Self::Thirty => Some(30),
            Self::Forty => Some(40),
            Self::Advantage => None,
        }
    }

    /// Next step in the regular progression.
    ///
    /// Forty and Advantage both lead to [`Progress::Game`]; whether that
    /// game is actually awarded depends on the opponent, which the engine
    /// decides.
    pub fn next(self) -> Progress {
        match self {
            Self::Love => Progress::Point(Self::Fifteen),
            Self::Fifteen => Progress::Point(Self::Thirty),
            Self::Thirty => Progress::Point(Self::Forty),
            Self::Forty | Self::Advantage => Progress::Game,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("AD"),
        }
    }
}

/// Lifecycle of a match. Only ever moves `Active -> Finished`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Active,
    Finished,
}

/// Coarse position of a match, derived from its counters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Regular,
    Deuce,
    Advantage(Team),
    TieBreak,
    Finished,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Deuce => "deuce",
            Self::Advantage(_) => "advantage",
            Self::TieBreak => "tie-break",
            Self::Finished => "finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_sequence_advances_to_game() {
        let mut progress = Vec::new();
        for point in POINT_SEQUENCE {
            progress.push(point.next());
        }
        assert_eq!(
            progress,
            vec![
                Progress::Point(Point::Fifteen),
                Progress::Point(Point::Thirty),
                Progress::Point(Point::Forty),
                Progress::Game,
            ]
        );
    }

    #[test]
    fn point_values_match_display() {
        assert_eq!(Point::Love.to_string(), "0");
        assert_eq!(Point::Thirty.to_string(), "30");
        assert_eq!(Point::Advantage.to_string(), "AD");
        assert_eq!(Point::Advantage.value(), None);
    }

    #[test]
    fn opponent_is_an_involution() {
        for team in Team::ALL {
            assert_ne!(team, team.opponent());
            assert_eq!(team, team.opponent().opponent());
        }
    }

    #[test]
    fn team_parses_known_ids_only() {
        assert_eq!("teamA".parse::<Team>().unwrap(), Team::TeamA);
        assert_eq!("teamB".parse::<Team>().unwrap(), Team::TeamB);

        let err = "teamC".parse::<Team>().unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidTeam {
                team: "teamC".to_string()
            }
        );
    }

    #[test]
    fn team_serializes_as_identifier() {
        let json = serde_json::to_string(&Team::TeamB).unwrap();
        assert_eq!(json, "\"teamB\"");
        let back: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Team::TeamB);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::Finished).unwrap(),
            "\"finished\""
        );
        assert_eq!(MatchStatus::default(), MatchStatus::Active);
    }
}
