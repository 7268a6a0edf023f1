//! End-to-end scoring scenarios through the public API.

use courtside::checkpoint::{deserialize_state, serialize_state, Checkpoint};
use courtside::core::{SetResult, SetState, TieBreakScore};
use courtside::engine::add_point_for;
use courtside::{
    add_point, create_initial_match_state, HistoryStack, MatchFormat, MatchSession, MatchState,
    MatchStatus, Point, ScoringError, SessionBuilder, Team,
};

fn points(mut state: MatchState, team: Team, count: usize) -> MatchState {
    for _ in 0..count {
        state = add_point(&state, team, None).unwrap();
    }
    state
}

fn games(state: MatchState, team: Team, count: usize) -> MatchState {
    points(state, team, count * 4)
}

fn six_all() -> MatchState {
    let mut state = create_initial_match_state(MatchFormat::BEST_OF_THREE);
    for _ in 0..6 {
        state = games(state, Team::TeamA, 1);
        state = games(state, Team::TeamB, 1);
    }
    state
}

#[test]
fn regular_game_win() {
    let mut state = create_initial_match_state(MatchFormat::BEST_OF_THREE);
    let mut progression = Vec::new();
    for _ in 0..4 {
        state = add_point(&state, Team::TeamA, None).unwrap();
        progression.push(state.team_a.points);
    }

    assert_eq!(
        progression,
        vec![Point::Fifteen, Point::Thirty, Point::Forty, Point::Love]
    );
    assert_eq!(state.team_a.games, 1);
    assert_eq!(state.team_b.games, 0);
    assert_eq!(state.team_a.points, Point::Love);
    assert_eq!(state.team_b.points, Point::Love);
}

#[test]
fn advantage_conversion() {
    let state = points(create_initial_match_state(MatchFormat::default()), Team::TeamA, 3);
    let deuce = points(state, Team::TeamB, 3);

    let advantage = add_point(&deuce, Team::TeamA, None).unwrap();
    assert_eq!(advantage.team_a.points, Point::Advantage);
    assert_eq!(advantage.team_b.points, Point::Forty);

    let game = add_point(&advantage, Team::TeamA, None).unwrap();
    assert_eq!(game.team_a.games, deuce.team_a.games + 1);
    assert_eq!(game.team_a.points, Point::Love);
    assert_eq!(game.team_b.points, Point::Love);
}

#[test]
fn set_win_six_four() {
    let mut state = create_initial_match_state(MatchFormat::BEST_OF_THREE);
    for _ in 0..4 {
        state = games(state, Team::TeamB, 1);
        state = games(state, Team::TeamA, 1);
    }
    let state = games(state, Team::TeamA, 2);

    assert_eq!(
        state.completed_sets,
        vec![SetResult {
            team_a_games: 6,
            team_b_games: 4,
            tie_break: None,
        }]
    );
    assert_eq!(state.current_set, SetState::default());
    assert_eq!(state.sets_won(Team::TeamA), 1);
    assert_eq!(state.status, MatchStatus::Active);
}

#[test]
fn tie_break_entry_at_six_all() {
    let state = six_all();

    assert!(state.current_set.is_tie_break);
    assert_eq!(state.current_set.tie_break_points_a, 0);
    assert_eq!(state.current_set.tie_break_points_b, 0);
    assert_eq!(state.team_a.games, 6);
    assert_eq!(state.team_b.games, 6);
}

#[test]
fn tie_break_win_seven_five() {
    let mut state = six_all();
    for _ in 0..5 {
        state = add_point(&state, Team::TeamB, None).unwrap();
        state = add_point(&state, Team::TeamA, None).unwrap();
    }
    let state = points(state, Team::TeamA, 2);

    assert_eq!(
        state.completed_sets,
        vec![SetResult {
            team_a_games: 7,
            team_b_games: 6,
            tie_break: Some(TieBreakScore {
                team_a: 7,
                team_b: 5,
            }),
        }]
    );
    assert_eq!(state.completed_sets[0].winner(), Some(Team::TeamA));
    assert!(!state.current_set.is_tie_break);
}

#[test]
fn invalid_team_leaves_state_byte_for_byte() {
    let state = points(create_initial_match_state(MatchFormat::default()), Team::TeamB, 2);
    let before = serialize_state(&state).unwrap();
    let mut history = HistoryStack::new();

    let result = add_point_for(&state, "teamC", Some(&mut history));

    assert_eq!(
        result,
        Err(ScoringError::InvalidTeam {
            team: "teamC".to_string()
        })
    );
    assert_eq!(serialize_state(&state).unwrap(), before);
    assert_eq!(history.size(), 0);
}

#[test]
fn best_of_five_needs_three_sets() {
    let mut session = SessionBuilder::new().best_of(5).build().unwrap();
    for set in 1..=3 {
        for _ in 0..24 {
            session.score(Team::TeamB).unwrap();
        }
        assert_eq!(session.state().sets_won(Team::TeamB), set);
    }

    assert_eq!(session.state().status, MatchStatus::Finished);
    assert_eq!(session.state().winner(), Some(Team::TeamB));
    assert_eq!(
        session.score(Team::TeamA).unwrap_err(),
        ScoringError::MatchAlreadyFinished
    );
}

#[test]
fn undo_walks_back_through_a_set() {
    let mut session = MatchSession::new(MatchFormat::BEST_OF_THREE);
    let initial = session.state().clone();
    for _ in 0..24 {
        session.score(Team::TeamA).unwrap();
    }
    assert_eq!(session.state().completed_sets.len(), 1);

    session.undo();
    assert!(session.state().completed_sets.is_empty());
    assert_eq!(session.state().team_a.games, 5);
    assert_eq!(session.state().team_a.points, Point::Forty);

    while session.undo().is_some() {}
    assert_eq!(session.state(), &initial);
}

#[test]
fn persisted_session_resumes_scoring() {
    let mut session = MatchSession::default();
    for team in [Team::TeamA, Team::TeamB, Team::TeamB] {
        session.score(team).unwrap();
    }

    let json = session.checkpoint().to_json().unwrap();
    let mut resumed = MatchSession::restore(Checkpoint::from_json(&json).unwrap()).unwrap();
    resumed.score(Team::TeamB).unwrap();
    session.score(Team::TeamB).unwrap();

    assert_eq!(resumed.state().team_b.points, Point::Forty);
    assert_eq!(resumed.undo_depth(), session.undo_depth());
    assert_eq!(
        deserialize_state(&serialize_state(resumed.state()).unwrap())
            .unwrap()
            .team_b,
        session.state().team_b
    );
}
