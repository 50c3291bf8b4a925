use chrono::{DateTime, Utc};

use crate::console::Console;
use crate::error::QuizError;
use crate::model::{AnswerSheetEntry, SessionConfig, StudentIdentity};
use crate::timer::{elapsed_minutes, format_minutes, Deadline};

/// Everything the results screen needs once the quiz loop has stopped.
#[derive(Debug, Clone)]
pub struct SessionResult {
    pub identity: StudentIdentity,
    pub config: SessionConfig,
    pub correct: usize,
    pub deadline: Deadline,
    pub finished_at: DateTime<Utc>,
    pub answer_sheet: Vec<AnswerSheetEntry>,
    pub bank_fingerprint: Option<String>,
}

impl SessionResult {
    pub fn score(&self) -> f32 {
        self.correct as f32 * self.config.points_per_question()
    }

    /// Percentage of the configured question count, even when fewer
    /// questions were actually asked.
    pub fn percentage(&self) -> f32 {
        (self.correct * 100) as f32 / self.config.count() as f32
    }

    pub fn timed_out(&self) -> bool {
        self.deadline.has_passed(self.finished_at)
    }

    pub fn elapsed_minutes(&self) -> i64 {
        elapsed_minutes(self.deadline.started_at, self.finished_at)
    }

    pub fn asked(&self) -> usize {
        self.answer_sheet.len()
    }
}

pub fn termination_message(result: &SessionResult) -> &'static str {
    if result.timed_out() {
        "The quiz ended because you ran out of time!"
    } else {
        "You have completed the quiz."
    }
}

pub fn render_report(result: &SessionResult) -> Vec<String> {
    let mut lines = vec![
        termination_message(result).to_string(),
        format!("First Name: {}", result.identity.first_name),
        format!("Last Name: {}", result.identity.last_name),
        format!("Identification: {}", result.identity.identification),
        format!("Score: {} ({}%)", result.score(), result.percentage()),
        format!("Elapsed Time: {}.", format_minutes(result.elapsed_minutes())),
        "Answer Sheet:".to_string(),
    ];

    for entry in &result.answer_sheet {
        lines.push(format!(
            "Question #{}: {} | Correct Answer: {} | Your answer: {}",
            entry.number, entry.question, entry.correct_answer, entry.given_answer
        ));
    }

    lines
}

pub fn print_report<C: Console>(console: &mut C, result: &SessionResult) -> Result<(), QuizError> {
    console.clear()?;
    console.heading("[Stage 5: Results]")?;
    for line in render_report(result) {
        console.line(&line)?;
    }
    Ok(())
}
