use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::model::{AnswerSheetEntry, StudentIdentity};
use crate::report::SessionResult;

#[derive(Debug, Serialize)]
struct ExportedResult<'a> {
    student: &'a StudentIdentity,
    question_count: usize,
    asked: usize,
    correct: usize,
    score: f32,
    percentage: f32,
    timed_out: bool,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    elapsed_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    bank: Option<&'a str>,
    answer_sheet: &'a [AnswerSheetEntry],
}

pub fn build_result_yaml(result: &SessionResult) -> Result<String, String> {
    let doc = ExportedResult {
        student: &result.identity,
        question_count: result.config.count(),
        asked: result.asked(),
        correct: result.correct,
        score: result.score(),
        percentage: result.percentage(),
        timed_out: result.timed_out(),
        started_at: result.deadline.started_at,
        finished_at: result.finished_at,
        elapsed_minutes: result.elapsed_minutes(),
        bank: result.bank_fingerprint.as_deref(),
        answer_sheet: &result.answer_sheet,
    };

    serde_yaml::to_string(&doc).map_err(|e| format!("Cannot serialize result: {}", e))
}

/// The last identification character is free-form, so anything that is
/// not ASCII alphanumeric becomes `_` before it reaches a path.
pub fn result_file_name(result: &SessionResult) -> String {
    let stem: String = result
        .identity
        .identification
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!(
        "{}-{}.yaml",
        stem,
        result.deadline.started_at.format("%Y%m%dT%H%M%S")
    )
}

/// Writes the answer sheet of a finished session into `dir`.
pub fn write_result(result: &SessionResult, dir: &Path) -> Result<PathBuf, String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Cannot create export dir {}: {}", dir.display(), e))?;

    let yaml = build_result_yaml(result)?;
    let path = dir.join(result_file_name(result));
    atomic_write(&path, &yaml)?;

    info!(path = %path.display(), "answer sheet exported");
    Ok(path)
}

fn atomic_write(path: &Path, content: &str) -> Result<(), String> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| format!("Cannot write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| format!("Cannot rename: {}", e))?;
    Ok(())
}
