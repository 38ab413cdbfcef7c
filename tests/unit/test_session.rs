//! Unit tests for the session state machine
//!
//! Tests cover:
//! - The countdown: automatic finish exactly once, no late ticks
//! - Navigation guards at both ends
//! - Reset transitions (back, exit, retake)

use prepdrill::bank::QuestionRecord;
use prepdrill::session::{Phase, QuizSession};

fn pool(n: usize) -> Vec<QuestionRecord> {
    let entries: Vec<String> = (0..n)
        .map(|i| format!(r#"{{"id":"q{}","type":"aptitude","answer":"4"}}"#, i))
        .collect();
    serde_json::from_str(&format!("[{}]", entries.join(","))).unwrap()
}

#[test]
fn test_one_minute_limit_finishes_after_sixty_ticks() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(3), 1));
    assert_eq!(session.remaining_seconds(), Some(60));

    for tick in 1..60 {
        session.tick();
        assert_eq!(
            session.phase(),
            Phase::Active,
            "still active after {} ticks",
            tick
        );
        assert_eq!(session.remaining_seconds(), Some(60 - tick));
    }

    session.tick();
    assert_eq!(session.phase(), Phase::Finished, "60th tick finishes the attempt");
    assert_eq!(session.remaining_seconds(), Some(0));

    // No further decrements after the automatic finish.
    for _ in 0..10 {
        session.tick();
    }
    assert_eq!(session.remaining_seconds(), Some(0));
    assert_eq!(session.phase(), Phase::Finished);
}

#[test]
fn test_timeout_scores_like_a_submit() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(2), 1));
    session.answer("4");
    for _ in 0..60 {
        session.tick();
    }
    let card = session.score();
    assert_eq!(card.correct, 1);
    assert_eq!(card.skipped, 1);
}

#[test]
fn test_prev_at_first_index_is_a_no_op() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(3), 30));
    assert_eq!(session.current_index(), 0);
    session.prev();
    assert_eq!(session.current_index(), 0);
}

#[test]
fn test_next_at_last_index_is_a_no_op() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(2), 30));
    session.next();
    assert!(session.is_last_question());
    session.next();
    assert_eq!(session.current_index(), 1);
}

#[test]
fn test_index_always_within_pool_bounds() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(3), 30));
    for _ in 0..10 {
        session.next();
        assert!(session.current_index() < session.pool().len());
    }
    for _ in 0..10 {
        session.prev();
        assert!(session.current_index() < session.pool().len());
    }
}

#[test]
fn test_exit_stops_countdown() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(2), 30));
    session.exit();
    assert_eq!(session.remaining_seconds(), None);

    // Ticks after exit must not resurrect the countdown.
    session.tick();
    assert_eq!(session.remaining_seconds(), None);
    assert_eq!(session.phase(), Phase::Setup);
}

#[test]
fn test_back_then_fresh_start_is_clean() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(2), 30));
    session.answer("4");
    session.next();
    session.submit();
    session.back();

    assert!(session.start(pool(3), 30));
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.answered_count(), 0);
    assert_eq!(session.pool().len(), 3);
    assert_eq!(session.remaining_seconds(), Some(30 * 60));
}

#[test]
fn test_answers_are_keyed_by_question_id() {
    let mut session = QuizSession::new();
    assert!(session.start(pool(3), 30));
    session.answer("first");
    session.next();
    session.answer("second");
    session.prev();
    assert_eq!(session.answer_for(0), Some("first"));
    assert_eq!(session.answer_for(1), Some("second"));
}
