// src/config.rs

use std::env;
use std::time::Duration;

use dotenvy::dotenv;

use crate::models::question::Difficulty;

/// Number of questions sampled into one session.
pub const QUESTIONS_PER_SESSION: usize = 10;

/// Maximum number of entries kept in the persisted leaderboard.
pub const LEADERBOARD_CAPACITY: usize = 50;

/// Maximum number of entries shown per difficulty tab.
pub const LEADERBOARD_TOP_LIMIT: usize = 10;

/// Key of the durable slot holding the leaderboard JSON array.
pub const LEADERBOARD_KEY: &str = "quiz_leaderboard";

/// How long the "time's up" state stays visible before the session
/// auto-advances to the next question.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Per-question countdown in seconds for a difficulty tier.
pub fn per_question_limit(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 20,
        Difficulty::Medium => 30,
        Difficulty::Hard => 45,
    }
}

#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Location of the SQLite slot backing the leaderboard.
    pub database_url: String,
    pub rust_log: String,
}

impl QuizConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("QUIZ_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quiz_leaderboard.db".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            rust_log,
        }
    }
}
