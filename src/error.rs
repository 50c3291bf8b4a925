use thiserror::Error;

/// Failures that end the whole program rather than a single session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Standard input reached end of file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
