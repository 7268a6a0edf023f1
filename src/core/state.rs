//! Core State trait for anything that can be snapshotted.
//!
//! The history stack and checkpoint format are generic over this trait so
//! that they only rely on value semantics: clone, compare, serialize.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for snapshot-able scoring states.
///
/// All methods are pure - no side effects. A state is a plain value; two
/// clones never share mutable data, which is what makes undo exact.
///
/// # Required Traits
///
/// - `Clone`: snapshots are taken by value
/// - `PartialEq`: undo must restore a state equal to the one recorded
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for persistence
///
/// # Example
///
/// ```rust
/// use courtside::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ServeSide {
///     Deuce,
///     Ad,
/// }
///
/// impl State for ServeSide {
///     fn name(&self) -> &str {
///         match self {
///             Self::Deuce => "deuce-court",
///             Self::Ad => "ad-court",
///         }
///     }
/// }
///
/// assert_eq!(ServeSide::Ad.name(), "ad-court");
/// assert!(!ServeSide::Ad.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name of the state for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states accept no further scoring.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchState, Team};
    use crate::engine::add_point;

    fn score(state: MatchState, team: Team, points: usize) -> MatchState {
        (0..points).fold(state, |s, _| add_point(&s, team, None).unwrap())
    }

    #[test]
    fn fresh_match_is_regular_and_not_final() {
        let state = MatchState::default();
        assert_eq!(state.name(), "regular");
        assert!(!state.is_final());
        assert!(!state.is_error());
    }

    #[test]
    fn name_follows_deuce_and_advantage() {
        let state = score(MatchState::default(), Team::TeamA, 3);
        let deuce = score(state, Team::TeamB, 3);
        assert_eq!(deuce.name(), "deuce");

        let advantage = score(deuce, Team::TeamB, 1);
        assert_eq!(advantage.name(), "advantage");
    }

    #[test]
    fn finished_match_is_final() {
        let state = MatchState::new(crate::core::MatchFormat::BEST_OF_ONE);
        let finished = score(state, Team::TeamA, 24);
        assert_eq!(finished.name(), "finished");
        assert!(finished.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = score(MatchState::default(), Team::TeamB, 2);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable() {
        let state = score(MatchState::default(), Team::TeamA, 5);
        let cloned = state.clone();
        assert_eq!(state, cloned);
    }
}
