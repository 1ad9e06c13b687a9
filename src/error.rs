//! Error types for the color_recall library

use thiserror::Error;

/// Result type alias for color_recall operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Error types for quiz setup, answer handling and scoring
#[derive(Error, Debug)]
pub enum QuizError {
    /// Hex color string could not be parsed
    #[error("invalid hex color {value:?}: {reason}")]
    InvalidHex { value: String, reason: String },

    /// Answer list length does not match the question list
    #[error("answer count mismatch: got {got} answers for {expected} questions")]
    AnswerCount { expected: usize, got: usize },

    /// Question index outside the current session
    #[error("question index {index} out of range ({count} questions)")]
    QuestionIndex { index: usize, count: usize },

    /// Scoring requested before any questions were generated
    #[error("session has no questions; call setup_questions first")]
    SessionNotStarted,

    /// Configuration file could not be read or written
    #[error("config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file could not be parsed or serialized
    #[error("config format error: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl QuizError {
    /// Create an invalid-hex error with context
    pub fn invalid_hex(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidHex { .. } | QuizError::QuestionIndex { .. }
        )
    }

    /// Get user-friendly error description for front-end display
    pub fn user_message(&self) -> String {
        match self {
            QuizError::InvalidHex { value, .. } => {
                format!(
                    "\"{}\" is not a valid color. Enter exactly six hex digits, e.g. 3366CC.",
                    value
                )
            }
            QuizError::QuestionIndex { count, .. } => {
                format!("This round only has {} colors.", count)
            }
            QuizError::AnswerCount { expected, .. } => {
                format!("Please answer all {} colors before submitting.", expected)
            }
            QuizError::SessionNotStarted => {
                "Start a new round before submitting answers.".to_string()
            }
            _ => "Something went wrong. Please start a new round.".to_string(),
        }
    }
}
