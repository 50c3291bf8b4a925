use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::QuestionBank;

pub const RECORD_DELIMITER: char = '#';

#[derive(Debug, Error)]
pub enum BankError {
    #[error("cannot open question bank {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Splits bank text into alternating question/answer records.
///
/// Records are separated by `#`. Line breaks inside a record are removed
/// (not replaced) and records that end up empty are skipped. An odd number
/// of records leaves the last question without an answer, and a record
/// dropped from the middle shifts every later pair; neither is reported.
pub fn parse_bank(content: &str) -> QuestionBank {
    let mut bank = QuestionBank::default();
    let mut is_question = true;

    for record in content.split(RECORD_DELIMITER) {
        let record: String = record.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if record.is_empty() {
            continue;
        }

        if is_question {
            bank.questions.push(record);
        } else {
            bank.answers.push(record);
        }
        is_question = !is_question;
    }

    bank
}

/// Reads the bank from disk. Only an unreadable file is an error; a
/// malformed or empty file loads as whatever `parse_bank` makes of it.
pub fn load_bank(path: &Path) -> Result<QuestionBank, BankError> {
    let bytes = fs::read(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "question bank unreadable");
        BankError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let content = String::from_utf8_lossy(&bytes);
    let mut bank = parse_bank(&content);
    bank.fingerprint = Some(hash_bytes(&bytes));

    if bank.questions.len() != bank.answers.len() {
        debug!(
            questions = bank.questions.len(),
            answers = bank.answers.len(),
            "question bank has an unpaired record"
        );
    }
    debug!(
        path = %path.display(),
        questions = bank.len(),
        fingerprint = bank.fingerprint.as_deref().unwrap_or(""),
        "question bank loaded"
    );

    Ok(bank)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    format!("sha256:{}", hex_encode(&result))
}
