//! Unit tests for the scorer
//!
//! Tests cover:
//! - Full scenarios end to end (select, answer, submit, score)
//! - The partition invariant and idempotence

use std::collections::HashMap;

use prepdrill::bank::QuestionRecord;
use prepdrill::config::QuizConfig;
use prepdrill::pool::select_pool;
use prepdrill::score::{score, Verdict};
use prepdrill::session::{Phase, QuizSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn single_question_bank() -> Vec<QuestionRecord> {
    serde_json::from_str(
        r#"[{"id":"a1","type":"aptitude","answer":"4","options":["3","4","5"]}]"#,
    )
    .unwrap()
}

#[test]
fn test_scenario_correct_answer() {
    let bank = single_question_bank();
    let config = QuizConfig {
        pool_size: 1,
        include_code: false,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let mut session = QuizSession::new();
    assert!(session.start(select_pool(&bank, &config, &mut rng), 30));
    assert_eq!(session.pool().len(), 1);
    assert_eq!(session.pool()[0].id, "a1");

    session.answer("4");
    session.submit();
    assert_eq!(session.phase(), Phase::Finished);

    let card = session.score();
    assert_eq!(card.total, 1);
    assert_eq!(card.correct, 1);
    assert_eq!(card.wrong, 0);
    assert_eq!(card.skipped, 0);
}

#[test]
fn test_scenario_no_selection_is_skipped() {
    let bank = single_question_bank();
    let config = QuizConfig {
        pool_size: 1,
        include_code: false,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let mut session = QuizSession::new();
    assert!(session.start(select_pool(&bank, &config, &mut rng), 30));
    session.submit();

    let card = session.score();
    assert_eq!(card.total, 1);
    assert_eq!(card.correct, 0);
    assert_eq!(card.wrong, 0);
    assert_eq!(card.skipped, 1);
}

#[test]
fn test_partition_invariant_on_mixed_answers() {
    let pool: Vec<QuestionRecord> = serde_json::from_str(
        r#"[
            {"id":"q1","type":"aptitude","answer":"a"},
            {"id":"q2","type":"aptitude","answer":"b"},
            {"id":"q3","type":"code","expected_output":"c"},
            {"id":"q4","type":"aptitude"}
        ]"#,
    )
    .unwrap();

    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), "a".to_string());
    answers.insert("q2".to_string(), "nope".to_string());
    answers.insert("q4".to_string(), "anything".to_string());

    let card = score(&pool, &answers);
    assert_eq!(card.total, 4);
    assert_eq!(card.correct, 1);
    assert_eq!(card.wrong, 2, "missing canonical value counts as wrong, not a crash");
    assert_eq!(card.skipped, 1);
    assert_eq!(card.correct + card.wrong + card.skipped, card.total);
}

#[test]
fn test_score_twice_yields_identical_results() {
    let pool: Vec<QuestionRecord> =
        serde_json::from_str(r#"[{"id":"q1","type":"aptitude","answer":"a"}]"#).unwrap();
    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), " a ".to_string());

    let first = score(&pool, &answers);
    let second = score(&pool, &answers);
    assert_eq!(first, second);
    assert_eq!(first.correct, 1, "trimmed comparison should match ' a ' to 'a'");
}

#[test]
fn test_review_verdicts_agree_with_scorecard() {
    let bank: Vec<QuestionRecord> = serde_json::from_str(
        r#"[
            {"id":"q1","type":"aptitude","answer":"a"},
            {"id":"q2","type":"aptitude","answer":"b"}
        ]"#,
    )
    .unwrap();
    let mut session = QuizSession::new();
    assert!(session.start(bank, 30));
    session.answer("a");
    session.submit();

    let card = session.score();
    let verdicts: Vec<Verdict> = (0..card.total)
        .map(|i| session.verdict_for(i).unwrap())
        .collect();
    let correct = verdicts.iter().filter(|v| **v == Verdict::Correct).count();
    let skipped = verdicts.iter().filter(|v| **v == Verdict::Skipped).count();
    assert_eq!(correct, card.correct);
    assert_eq!(skipped, card.skipped);
}
