// src/error.rs

use std::fmt;

use crate::models::question::Difficulty;
use crate::utils::username::UsernameError;

/// Global engine error enum.
/// Centralizes error handling for callers driving the quiz.
#[derive(Debug)]
pub enum QuizError {
    /// Username admission failed; carries the specific reason code.
    InvalidUsername(UsernameError),

    /// The operation is not valid in the current step.
    InvalidTransition(String),

    /// The requested tier has no questions to sample from.
    NoQuestions(Difficulty),

    /// Navigation target outside the sampled question range.
    OutOfRange(usize),

    /// A question in the bank input violates its invariants.
    InvalidQuestion(String),

    /// Storage backend failure (leaderboard persistence).
    Storage(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Surfaced to the player, so use the display message.
            QuizError::InvalidUsername(reason) => write!(f, "{}", reason),
            other => write!(f, "{:?}", other),
        }
    }
}

impl std::error::Error for QuizError {}

impl From<UsernameError> for QuizError {
    fn from(err: UsernameError) -> Self {
        QuizError::InvalidUsername(err)
    }
}

/// Converts `sqlx::Error` into `QuizError::Storage`.
/// Allows using `?` operator inside the storage backends.
impl From<sqlx::Error> for QuizError {
    fn from(err: sqlx::Error) -> Self {
        QuizError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Storage(err.to_string())
    }
}
