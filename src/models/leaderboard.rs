// src/models/leaderboard.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::Difficulty;

/// One persisted leaderboard record summarizing a finished session.
/// Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub score: u32,
    pub total: u32,
    /// Always equals `round(100 * score / total)`. Carried in the payload
    /// for display convenience but computed here, never accepted from
    /// callers.
    pub percentage: u32,
    pub difficulty: Difficulty,
    pub timestamp: DateTime<Utc>,
}

impl LeaderboardEntry {
    pub fn new(
        player: String,
        score: u32,
        total: u32,
        difficulty: Difficulty,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            player,
            score,
            total,
            percentage: derived_percentage(score, total),
            difficulty,
            timestamp,
        }
    }
}

/// round(100 * score / total); 0 when total is 0.
pub fn derived_percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}
