// src/store.rs

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::{LEADERBOARD_CAPACITY, LEADERBOARD_KEY, QuizConfig};
use crate::error::QuizError;
use crate::models::leaderboard::LeaderboardEntry;
use crate::models::question::Difficulty;

/// A durable key-value slot. The leaderboard lives as one JSON array
/// under `LEADERBOARD_KEY`.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, QuizError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), QuizError>;
}

/// SQLite-backed slot. One `kv_store` table, one row per key.
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    /// Opens (creating if missing) the SQLite database at `url`,
    /// e.g. `sqlite://quiz_leaderboard.db` or `sqlite::memory:`.
    pub async fn connect(url: &str) -> Result<Self, QuizError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query("CREATE TABLE IF NOT EXISTS kv_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl StorageBackend for SqliteBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, QuizError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), QuizError> {
        // Upsert: the slot is overwritten as a whole on every write.
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Volatile backend for tests and ephemeral use.
#[derive(Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, QuizError> {
        Ok(self.slots.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), QuizError> {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable, capped, ranked table of past results.
///
/// Persistence is best-effort: a backend that cannot be read degrades to
/// an empty board and a failed write is logged and dropped, so gameplay
/// never blocks on storage.
pub struct LeaderboardStore {
    backend: Box<dyn StorageBackend>,
}

impl LeaderboardStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Opens the SQLite-backed store at the configured location.
    pub async fn from_config(config: &QuizConfig) -> Result<Self, QuizError> {
        let backend = SqliteBackend::connect(&config.database_url).await?;
        Ok(Self::new(Box::new(backend)))
    }

    /// Inserts an entry, re-sorts the full board, truncates to capacity
    /// and persists.
    pub async fn record(&self, entry: LeaderboardEntry) {
        let mut board = self.load().await;
        board.push(entry);
        sort_board(&mut board);
        board.truncate(LEADERBOARD_CAPACITY);

        let payload = match serde_json::to_string(&board) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to serialize leaderboard: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.write(LEADERBOARD_KEY, &payload).await {
            tracing::warn!("Failed to persist leaderboard: {}", e);
        }
    }

    /// Top `limit` entries of one tier, preserving the global ordering.
    pub async fn top_by_difficulty(
        &self,
        difficulty: Difficulty,
        limit: usize,
    ) -> Vec<LeaderboardEntry> {
        let mut board = self.load().await;
        sort_board(&mut board);
        board.retain(|e| e.difficulty == difficulty);
        board.truncate(limit);
        board
    }

    /// Loads the full board; unreadable or corrupt storage degrades to
    /// an empty one.
    async fn load(&self) -> Vec<LeaderboardEntry> {
        let payload = match self.backend.read(LEADERBOARD_KEY).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Leaderboard storage unreadable: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Leaderboard payload corrupt, starting fresh: {}", e);
                Vec::new()
            }
        }
    }
}

/// Descending percentage, ties broken by more recent timestamp.
fn sort_board(board: &mut [LeaderboardEntry]) {
    board.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
}
