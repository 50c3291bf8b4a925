use chrono::{Duration, TimeZone, Utc};

use tfquiz::model::{AnswerSheetEntry, SessionConfig, StudentIdentity};
use tfquiz::report::{render_report, SessionResult};
use tfquiz::timer::Deadline;

fn result(doubled: bool, correct: usize, elapsed: Duration) -> SessionResult {
    let started = Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap();
    SessionResult {
        identity: StudentIdentity {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            identification: "A12345".to_string(),
        },
        config: SessionConfig::new(doubled),
        correct,
        deadline: Deadline::starting_at(started),
        finished_at: started + elapsed,
        answer_sheet: vec![
            AnswerSheetEntry {
                number: 1,
                question: "Sky is blue".to_string(),
                correct_answer: "TRUE".to_string(),
                given_answer: "TRUE".to_string(),
            },
            AnswerSheetEntry {
                number: 2,
                question: "Grass is red".to_string(),
                correct_answer: "FALSE".to_string(),
                given_answer: "TRUE".to_string(),
            },
        ],
        bank_fingerprint: None,
    }
}

#[test]
fn test_score_standard_count() {
    let r = result(false, 7, Duration::minutes(3));
    assert_eq!(r.score(), 7.0);
    assert_eq!(r.percentage(), 70.0);
}

#[test]
fn test_score_doubled_count() {
    let r = result(true, 7, Duration::minutes(3));
    assert_eq!(r.score(), 3.5);
    assert_eq!(r.percentage(), 35.0);
}

#[test]
fn test_percentage_uses_configured_count() {
    // Only two questions were asked, the denominator is still ten.
    let r = result(false, 2, Duration::minutes(11));
    assert_eq!(r.asked(), 2);
    assert_eq!(r.percentage(), 20.0);
}

#[test]
fn test_elapsed_rounds_down() {
    let r = result(false, 0, Duration::minutes(9) + Duration::seconds(59));
    assert_eq!(r.elapsed_minutes(), 9);
    assert!(!r.timed_out());
}

#[test]
fn test_timed_out_at_deadline() {
    assert!(result(false, 0, Duration::minutes(10)).timed_out());
    assert!(!result(false, 0, Duration::minutes(10) - Duration::milliseconds(1)).timed_out());
}

#[test]
fn test_render_report() {
    let lines = render_report(&result(true, 7, Duration::minutes(4)));

    assert_eq!(lines[0], "You have completed the quiz.");
    assert!(lines.contains(&"First Name: Ada".to_string()));
    assert!(lines.contains(&"Last Name: Lovelace".to_string()));
    assert!(lines.contains(&"Score: 3.5 (35%)".to_string()));
    assert!(lines.contains(&"Elapsed Time: 4 minute(s).".to_string()));
    assert_eq!(
        lines[lines.len() - 2],
        "Question #1: Sky is blue | Correct Answer: TRUE | Your answer: TRUE"
    );
    assert_eq!(
        lines[lines.len() - 1],
        "Question #2: Grass is red | Correct Answer: FALSE | Your answer: TRUE"
    );
}

#[test]
fn test_render_timed_out_report() {
    let lines = render_report(&result(false, 7, Duration::minutes(12)));
    assert_eq!(lines[0], "The quiz ended because you ran out of time!");
    assert!(lines.contains(&"Score: 7 (70%)".to_string()));
    assert!(lines.contains(&"Elapsed Time: 12 minute(s).".to_string()));
}
