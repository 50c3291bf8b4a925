use serde::Serialize;

/// Canonical answer tokens as they appear in the bank file.
pub const TRUE_TOKEN: &str = "TRUE";
pub const FALSE_TOKEN: &str = "FALSE";

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub fingerprint: Option<String>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, idx: usize) -> &str {
        self.questions.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Raw answer record, empty when the file ran out of answers.
    pub fn answer(&self, idx: usize) -> &str {
        self.answers.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Grades a reply against the literal record. Anything other than
    /// exactly `TRUE` or `FALSE` never matches.
    pub fn is_correct(&self, idx: usize, reply: bool) -> bool {
        let expected = if reply { TRUE_TOKEN } else { FALSE_TOKEN };
        self.answer(idx) == expected
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentIdentity {
    pub first_name: String,
    pub last_name: String,
    pub identification: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionCount {
    Standard,
    Doubled,
}

impl QuestionCount {
    pub fn count(self) -> usize {
        match self {
            QuestionCount::Standard => 10,
            QuestionCount::Doubled => 20,
        }
    }

    pub fn points_per_question(self) -> f32 {
        match self {
            QuestionCount::Standard => 1.0,
            QuestionCount::Doubled => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub question_count: QuestionCount,
}

impl SessionConfig {
    pub fn new(doubled: bool) -> Self {
        let question_count = if doubled {
            QuestionCount::Doubled
        } else {
            QuestionCount::Standard
        };
        Self { question_count }
    }

    pub fn count(&self) -> usize {
        self.question_count.count()
    }

    pub fn points_per_question(&self) -> f32 {
        self.question_count.points_per_question()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSheetEntry {
    pub number: usize,
    pub question: String,
    pub correct_answer: String,
    pub given_answer: String,
}

pub fn verdict_token(value: bool) -> &'static str {
    if value {
        TRUE_TOKEN
    } else {
        FALSE_TOKEN
    }
}
