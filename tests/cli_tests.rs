//! Binary tests driving the quiz through piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn tfquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("tfquiz").unwrap()
}

fn full_session(answer: &str) -> String {
    let mut input = String::from("Ada Lovelace y A12345 n\n");
    for _ in 0..10 {
        input.push_str(answer);
        input.push('\n');
    }
    input
}

#[test]
fn check_prints_bank_summary() {
    tfquiz()
        .arg("fixtures/test_bank.txt")
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions: 25"))
        .stdout(predicate::str::contains("Answers: 25"))
        .stdout(predicate::str::contains("Fingerprint: sha256:"));
}

#[test]
fn check_missing_bank_fails() {
    tfquiz()
        .arg("no-such-bank.txt")
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot open question bank"));
}

#[test]
fn full_quiz_then_quit() {
    let mut input = full_session("t");
    input.push_str("q\n");

    tfquiz()
        .args(["fixtures/test_bank.txt", "--seed", "5"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Stage 5: Results]"))
        .stdout(predicate::str::contains("You have completed the quiz."))
        .stdout(predicate::str::contains("Question #10:"))
        .stdout(predicate::str::contains("Enter Q to exit or S to begin a new quiz"));
}

#[test]
fn invalid_menu_input_is_rejected() {
    let mut input = full_session("f");
    input.push_str("x\nQ\n");

    tfquiz()
        .arg("fixtures/test_bank.txt")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input!"));
}

#[test]
fn second_student_gets_a_new_session() {
    let mut input = full_session("t");
    input.push_str("s\nGrace Hopper y B1 A1 A9999 q\n");

    tfquiz()
        .arg("fixtures/test_bank.txt")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("First Name: Grace"))
        .stdout(predicate::str::contains(
            "You have entered too many invalid identification serials!",
        ));
}

#[test]
fn missing_bank_returns_to_menu() {
    tfquiz()
        .arg("no-such-bank.txt")
        .write_stdin("Ada Lovelace y A12345 n q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Failed to load question bank."))
        .stdout(predicate::str::contains("Enter Q to exit"));
}

#[test]
fn closed_input_exits_cleanly() {
    tfquiz()
        .arg("fixtures/test_bank.txt")
        .write_stdin("Ada\n")
        .assert()
        .success();
}

#[test]
fn export_writes_answer_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let mut input = full_session("t");
    input.push_str("q\n");

    tfquiz()
        .arg("fixtures/test_bank.txt")
        .arg("--export")
        .arg(dir.path())
        .write_stdin(input)
        .assert()
        .success();

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("A12345-"));
    assert!(files[0].ends_with(".yaml"));
}
