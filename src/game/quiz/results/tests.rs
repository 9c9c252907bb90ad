use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::game::quiz::definition::QuestionRecord;

fn question(correct: &str, options: &[&str]) -> QuestionRecord {
    QuestionRecord::new(
        format!("Pick {}", correct),
        correct.to_owned(),
        options.iter().map(|o| o.to_string()).collect(),
    )
}

#[test]
fn counts_and_percentage() {
    let summary = ResultsSummary::new(4, 3);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.correct, 3);
    assert_eq!(summary.incorrect, 1);
    assert_eq!(summary.percentage, 75);
}

#[test]
fn percentage_rounds_half_up() {
    assert_eq!(ResultsSummary::new(8, 1).percentage, 13);
    assert_eq!(ResultsSummary::new(8, 5).percentage, 63);
    assert_eq!(ResultsSummary::new(3, 1).percentage, 33);
    assert_eq!(ResultsSummary::new(3, 2).percentage, 67);
    assert_eq!(ResultsSummary::new(7, 7).percentage, 100);
    assert_eq!(ResultsSummary::new(1, 0).percentage, 0);
}

#[test]
fn incomplete_session_has_no_summary() {
    let mut rng = StdRng::seed_from_u64(0);
    let session = QuizSession::new(vec![question("a", &["a", "b"])], &mut rng).unwrap();
    assert_eq!(
        ResultsSummary::from_session(&session),
        Err(QuizError::NotComplete)
    );
}

#[test]
fn summarizes_completed_session() {
    let mut rng = StdRng::seed_from_u64(0);
    let questions = vec![question("a", &["a", "b"]), question("c", &["c", "d"])];
    let mut session = QuizSession::new(questions, &mut rng).unwrap();
    session.submit("a").unwrap();
    session.next().unwrap();
    session.submit("d").unwrap();

    let summary = ResultsSummary::from_session(&session).unwrap();
    assert_eq!(summary, ResultsSummary::new(2, 1));
    assert_eq!(summary.percentage, 50);
}

#[test]
fn countdown_ends_after_delay() {
    let mut countdown = SummaryCountdown::new(ResultsSummary::new(1, 1), Duration::from_millis(1500));
    assert!(!countdown.is_over());
    countdown.on_tick(Duration::from_millis(1000));
    assert!(!countdown.is_over());
    countdown.on_tick(Duration::from_millis(500));
    assert!(countdown.is_over());
    assert_eq!(countdown.into_summary(), ResultsSummary::new(1, 1));
}
