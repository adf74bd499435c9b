//! Session lifecycle tests.
//!
//! The session layer drives the scorer through the same call sequence the UI
//! uses: start, submit rounds, read the scoreboard and histories, reset.

use maal_score::core::{PlayerId, RoundRecord, ScoreError};
use maal_score::session::Session;

fn started_session() -> Session {
    let mut session = Session::new();
    session.start(&["A", "B", "C"]).unwrap();
    session
}

#[test]
fn test_new_session_is_idle() {
    let session = Session::new();
    assert!(!session.is_started());
    assert_eq!(session.current_totals(), Err(ScoreError::NotStarted));
    assert_eq!(session.round_index(), Err(ScoreError::NotStarted));
    assert_eq!(
        session.history(PlayerId::new(0)),
        Err(ScoreError::NotStarted)
    );
}

#[test]
fn test_round_before_start_is_rejected() {
    let mut session = Session::new();
    assert_eq!(
        session.submit_round(&[0, 0], &[0, 0], "A"),
        Err(ScoreError::NotStarted)
    );
}

#[test]
fn test_start_validates_player_count() {
    let mut session = Session::new();
    assert_eq!(
        session.start(&["only one"]),
        Err(ScoreError::PlayerCount { got: 1 })
    );

    let too_many: Vec<String> = (0..21).map(|i| format!("p{i}")).collect();
    assert_eq!(
        session.start(&too_many),
        Err(ScoreError::PlayerCount { got: 21 })
    );

    // Rejected setup leaves the session idle.
    assert!(!session.is_started());
}

#[test]
fn test_blank_names_default() {
    let mut session = Session::new();
    session.start(&["  ", "Bikram", ""]).unwrap();

    let names: Vec<String> = session.game().unwrap().player_names().map(String::from).collect();
    assert_eq!(names, vec!["Player1", "Bikram", "Player3"]);
}

#[test]
fn test_names_are_trimmed() {
    let mut session = Session::new();
    session.start(&["  Asha  ", "Bikram"]).unwrap();
    assert_eq!(session.game().unwrap().player_id("Asha"), Some(PlayerId::new(0)));
}

#[test]
fn test_duplicate_names_rejected() {
    let mut session = Session::new();
    assert_eq!(
        session.start(&["A", "B", "A"]),
        Err(ScoreError::DuplicateName {
            name: "A".to_string()
        })
    );
    assert!(!session.is_started());
}

#[test]
fn test_double_start_rejected() {
    let mut session = started_session();
    assert_eq!(session.start(&["X", "Y"]), Err(ScoreError::AlreadyStarted));

    // The original game is untouched.
    assert_eq!(session.game().unwrap().player_count(), 3);
}

#[test]
fn test_two_round_game() {
    let mut session = started_session();

    session.submit_round(&[2, 0, 0], &[0, 5, 3], "A").unwrap();
    assert_eq!(
        session.current_totals().unwrap(),
        vec![
            ("A".to_string(), 12),
            ("B".to_string(), -7),
            ("C".to_string(), -5),
        ]
    );

    session.submit_round(&[0, 1, 0], &[4, 0, 2], "B").unwrap();
    assert_eq!(
        session.current_totals().unwrap(),
        vec![
            ("A".to_string(), 7),
            ("B".to_string(), 1),
            ("C".to_string(), -8),
        ]
    );
    assert_eq!(session.round_index(), Ok(2));
}

#[test]
fn test_history_records_inputs_and_scores() {
    let mut session = started_session();
    session.submit_round(&[2, 0, 0], &[0, 5, 3], "A").unwrap();
    session.submit_round(&[0, 1, 0], &[4, 0, 2], "B").unwrap();

    let b_history = session.history(PlayerId::new(1)).unwrap();
    assert_eq!(
        b_history,
        vec![
            RoundRecord {
                maal: 0,
                points: 5,
                round_points: -7,
                cumulative: -7,
            },
            RoundRecord {
                maal: 1,
                points: 0,
                round_points: 8,
                cumulative: 1,
            },
        ]
    );
}

#[test]
fn test_totals_query_is_idempotent() {
    let mut session = started_session();
    session.submit_round(&[2, 0, 0], &[0, 5, 3], "A").unwrap();

    let first = session.current_totals().unwrap();
    let second = session.current_totals().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_totals_before_any_round_are_zero() {
    let session = started_session();
    assert_eq!(
        session.current_totals().unwrap(),
        vec![
            ("A".to_string(), 0),
            ("B".to_string(), 0),
            ("C".to_string(), 0),
        ]
    );
}

/// A rejected submission must not change any player's history or the round
/// index.
#[test]
fn test_failed_submission_leaves_state_unchanged() {
    let mut session = started_session();
    session.submit_round(&[2, 0, 0], &[0, 5, 3], "A").unwrap();
    let before = session.clone();

    assert_eq!(
        session.submit_round(&[0, 0, 0], &[0, 0, 0], "nobody"),
        Err(ScoreError::UnknownCloser {
            name: "nobody".to_string()
        })
    );
    assert_eq!(
        session.submit_round(&[0, -1, 0], &[0, 0, 0], "A"),
        Err(ScoreError::NegativeValue {
            player: PlayerId::new(1),
            value: -1,
        })
    );
    assert_eq!(
        session.submit_round(&[0, 0], &[0, 0], "A"),
        Err(ScoreError::LengthMismatch { expected: 3, got: 2 })
    );

    assert_eq!(session, before);
}

#[test]
fn test_reset_returns_to_idle() {
    let mut session = started_session();
    session.submit_round(&[2, 0, 0], &[0, 5, 3], "A").unwrap();

    session.reset();
    assert!(!session.is_started());
    assert_eq!(session.current_totals(), Err(ScoreError::NotStarted));

    // A fresh game can be started with different players.
    session.start(&["X", "Y"]).unwrap();
    assert_eq!(session.round_index(), Ok(0));
}

/// Sessions serialize cleanly, so a UI layer can stash one in whatever
/// per-session store it has.
#[test]
fn test_session_serde_round_trip() {
    let mut session = started_session();
    session.submit_round(&[2, 0, 0], &[0, 5, 3], "A").unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}
