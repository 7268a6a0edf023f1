//! Point-by-point state transitions.

use crate::core::{
    set_decided, tie_break_decided, HistoryStack, MatchState, MatchStatus, Point, Progress,
    SetResult, SetState, State, Team, TieBreakScore, GAMES_TO_WIN_SET,
};
use crate::engine::error::ScoringError;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Award one point to `team` and return the resulting state.
///
/// When `history` is given, a snapshot of `state` as it was before the
/// call is pushed exactly once, before anything changes. `state` itself is
/// never modified.
///
/// # Errors
///
/// [`ScoringError::MatchAlreadyFinished`] if the match is over. Nothing is
/// pushed in that case.
///
/// # Example
///
/// ```rust
/// use courtside::core::{MatchState, Point, Team};
/// use courtside::engine::add_point;
///
/// let state = MatchState::default();
/// let next = add_point(&state, Team::TeamB, None).unwrap();
///
/// assert_eq!(next.team(Team::TeamB).points, Point::Fifteen);
/// assert_eq!(state.team(Team::TeamB).points, Point::Love);
/// ```
pub fn add_point(
    state: &MatchState,
    team: Team,
    history: Option<&mut HistoryStack<MatchState>>,
) -> Result<MatchState, ScoringError> {
    add_point_at(state, team, history, Utc::now())
}

/// Same as [`add_point`], taking the team by its textual identifier.
///
/// # Errors
///
/// [`ScoringError::InvalidTeam`] for anything other than `"teamA"` or
/// `"teamB"`; the state is left as is and nothing is pushed.
pub fn add_point_for(
    state: &MatchState,
    team_id: &str,
    history: Option<&mut HistoryStack<MatchState>>,
) -> Result<MatchState, ScoringError> {
    let team: Team = match team_id.parse() {
        Ok(team) => team,
        Err(err) => {
            warn!(team = team_id, "Rejected point for unknown team");
            return Err(err);
        }
    };
    add_point(state, team, history)
}

/// Same as [`add_point`] with an explicit clock, so results are fully
/// determined by the inputs.
///
/// `updated_at` is never set earlier than the match's `created_at`.
pub fn add_point_at(
    state: &MatchState,
    team: Team,
    history: Option<&mut HistoryStack<MatchState>>,
    now: DateTime<Utc>,
) -> Result<MatchState, ScoringError> {
    if state.is_finished() {
        warn!(%team, "Rejected point, match already finished");
        return Err(ScoringError::MatchAlreadyFinished);
    }

    if let Some(history) = history {
        history.push(state);
    }

    let mut next = state.clone();
    if next.current_set.is_tie_break {
        score_tie_break(&mut next, team);
    } else {
        score_regular(&mut next, team);
    }
    // A wall clock stepping backwards must not date a point before the match.
    next.updated_at = now.max(state.created_at);

    debug!(
        %team,
        phase = next.name(),
        points_a = %next.team_a.points,
        points_b = %next.team_b.points,
        "Point awarded"
    );
    Ok(next)
}

fn score_tie_break(state: &mut MatchState, team: Team) {
    let points = state.current_set.tie_break_points_mut(team);
    *points = points.saturating_add(1);

    let won = state.current_set.tie_break_points(team);
    let lost = state.current_set.tie_break_points(team.opponent());
    if !tie_break_decided(won, lost) {
        return;
    }

    let set = &state.current_set;
    let result = SetResult {
        team_a_games: set.team_a_games + u8::from(team == Team::TeamA),
        team_b_games: set.team_b_games + u8::from(team == Team::TeamB),
        tie_break: Some(TieBreakScore {
            team_a: set.tie_break_points_a,
            team_b: set.tie_break_points_b,
        }),
    };
    close_set(state, team, result);
}

fn score_regular(state: &mut MatchState, team: Team) {
    let opponent = team.opponent();
    let scorer_points = state.team(team).points;
    let opponent_points = state.team(opponent).points;
    match (scorer_points, opponent_points) {
        (Point::Advantage, _) => award_game(state, team),
        // Point against advantage: back to deuce.
        (_, Point::Advantage) => state.team_mut(opponent).points = Point::Forty,
        (Point::Forty, Point::Forty) => state.team_mut(team).points = Point::Advantage,
        (points, _) => match points.next() {
            Progress::Point(next) => state.team_mut(team).points = next,
            Progress::Game => award_game(state, team),
        },
    }
}

fn award_game(state: &mut MatchState, team: Team) {
    state.team_mut(team).games += 1;
    *state.current_set.games_mut(team) += 1;
    state.team_a.points = Point::Love;
    state.team_b.points = Point::Love;

    let set = state.current_set;
    info!(
        %team,
        games_a = set.team_a_games,
        games_b = set.team_b_games,
        "Game won"
    );

    let won = set.games(team);
    let lost = set.games(team.opponent());
    if set_decided(won, lost) {
        let result = SetResult {
            team_a_games: set.team_a_games,
            team_b_games: set.team_b_games,
            tie_break: None,
        };
        close_set(state, team, result);
    } else if won == GAMES_TO_WIN_SET && lost == GAMES_TO_WIN_SET {
        state.current_set.is_tie_break = true;
        state.current_set.tie_break_points_a = 0;
        state.current_set.tie_break_points_b = 0;
        info!("Tie-break started");
    }
}

/// Record a finished set and either finish the match or start the next set.
fn close_set(state: &mut MatchState, team: Team, result: SetResult) {
    state.completed_sets.push(result);
    let sets_won = state.sets_won(team);
    info!(
        %team,
        set = state.completed_sets.len(),
        games_a = result.team_a_games,
        games_b = result.team_b_games,
        "Set won"
    );

    if sets_won >= usize::from(state.format.sets_to_win) {
        state.status = MatchStatus::Finished;
        info!(%team, sets_won, "Match won");
    } else {
        state.current_set = SetState::default();
        state.team_a.games = 0;
        state.team_b.games = 0;
    }
}
