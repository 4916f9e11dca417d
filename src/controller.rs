// src/controller.rs

use chrono::Utc;

use crate::bank::QuestionBank;
use crate::config;
use crate::error::QuizError;
use crate::models::leaderboard::LeaderboardEntry;
use crate::models::question::{Difficulty, QuizQuestion};
use crate::models::session::{AnswerState, QuizSession};
use crate::store::LeaderboardStore;
use crate::utils::username::validate_username;

/// Outward step of the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    AwaitingPlayer,
    AwaitingDifficulty,
    InProgress,
    Finished,
}

/// Result of a one-second countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The callback no longer refers to the question being shown.
    Stale,
    /// Seconds remaining on the current question.
    Running(u32),
    /// The countdown hit zero; the question was auto-marked incorrect.
    TimedOut,
}

/// Result of advancing past the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Now showing the question at this index.
    Next(usize),
    /// No unanswered questions remained; the session is finished.
    Finished,
}

/// Orchestrates one player's quiz flow and bridges the session to the
/// leaderboard store.
///
/// All transitions run to completion; there is no concurrent mutation of
/// a session. The countdown itself lives outside (see `runner`), feeding
/// `tick` once per elapsed second with the epoch it was bound for.
pub struct QuizController {
    bank: QuestionBank,
    store: LeaderboardStore,
    step: QuizStep,
    player: Option<String>,
    session: Option<QuizSession>,
}

impl QuizController {
    pub fn new(bank: QuestionBank, store: LeaderboardStore) -> Self {
        Self {
            bank,
            store,
            step: QuizStep::AwaitingPlayer,
            player: None,
            session: None,
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.session
            .as_ref()
            .and_then(|s| s.questions.get(s.current_index))
    }

    /// Epoch a countdown must present to `tick`. Bumped on every
    /// transition that changes the shown question.
    pub fn timer_epoch(&self) -> u64 {
        self.session.as_ref().map(|s| s.timer_epoch).unwrap_or(0)
    }

    /// The bank is exposed read-only so presentation can show per-tier
    /// question counts on the difficulty screen.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Ranked view of past results for one tier.
    pub async fn leaderboard(&self, difficulty: Difficulty, limit: usize) -> Vec<LeaderboardEntry> {
        self.store.top_by_difficulty(difficulty, limit).await
    }

    /// Admits the player. On success moves to difficulty selection; on
    /// failure stays put and surfaces the specific reason.
    pub fn submit_username(&mut self, raw: &str) -> Result<(), QuizError> {
        if self.step != QuizStep::AwaitingPlayer {
            return Err(QuizError::InvalidTransition(
                "username can only be submitted before a session".to_string(),
            ));
        }

        let player = validate_username(raw)?;
        tracing::info!("Player admitted: {}", player);
        self.player = Some(player);
        self.step = QuizStep::AwaitingDifficulty;
        Ok(())
    }

    /// Samples a fresh question set and starts a session.
    ///
    /// Also serves the "retry with new questions" flow from the results
    /// screen: picking a tier always builds a brand-new session. A tier
    /// with no questions is refused and the step does not change.
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) -> Result<(), QuizError> {
        let player = match &self.player {
            Some(player) => player.clone(),
            None => {
                return Err(QuizError::InvalidTransition(
                    "a player must be admitted before picking a difficulty".to_string(),
                ));
            }
        };

        let questions = self.bank.sample(difficulty, config::QUESTIONS_PER_SESSION);
        if questions.is_empty() {
            return Err(QuizError::NoQuestions(difficulty));
        }

        tracing::info!(
            "Session started: player={} difficulty={:?} questions={}",
            player,
            difficulty,
            questions.len()
        );
        let limit = config::per_question_limit(difficulty);
        self.session = Some(QuizSession::new(player, difficulty, questions, limit));
        self.step = QuizStep::InProgress;
        Ok(())
    }

    /// Records the player's pick for the current question.
    ///
    /// Returns `Some(correct)` when the answer was recorded and `None`
    /// when the call was ignored: question already answered, countdown
    /// expired, option out of range, or no session in progress. Repeat
    /// calls never overwrite the first recorded answer, so the score
    /// cannot be double-counted.
    pub fn answer(&mut self, option_index: usize) -> Option<bool> {
        if self.step != QuizStep::InProgress {
            return None;
        }
        let session = self.session.as_mut()?;
        let idx = session.current_index;
        if session.answer_state[idx] != AnswerState::Unanswered || session.time_remaining == 0 {
            return None;
        }

        let question = &session.questions[idx];
        if option_index >= question.options.len() {
            return None;
        }

        let correct = option_index == question.correct_index;
        session.selected_option[idx] = Some(option_index);
        session.answer_state[idx] = if correct {
            AnswerState::Correct
        } else {
            AnswerState::Incorrect
        };
        // The countdown for this question is over.
        session.timer_epoch += 1;
        Some(correct)
    }

    /// One-second countdown step for the question shown at `epoch`.
    ///
    /// Stale epochs and already-answered questions are no-ops, so a
    /// timer bound to a previous question can never fire into the
    /// current one. At zero the question is auto-marked incorrect with
    /// no selected option.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        if self.step != QuizStep::InProgress {
            return TickOutcome::Stale;
        }
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Stale;
        };
        if session.timer_epoch != epoch {
            return TickOutcome::Stale;
        }
        let idx = session.current_index;
        if session.answer_state[idx] != AnswerState::Unanswered || session.time_remaining == 0 {
            return TickOutcome::Stale;
        }

        session.time_remaining -= 1;
        if session.time_remaining > 0 {
            return TickOutcome::Running(session.time_remaining);
        }

        session.answer_state[idx] = AnswerState::Incorrect;
        TickOutcome::TimedOut
    }

    /// Moves to the next unanswered question, wrapping past the end so
    /// skipped questions come back around; when none remain the session
    /// finishes and the result is recorded.
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        if self.step != QuizStep::InProgress {
            return Err(QuizError::InvalidTransition(
                "no session in progress".to_string(),
            ));
        }

        match self.session.as_ref().and_then(|s| s.next_unanswered()) {
            Some(idx) => {
                self.show_question(idx);
                Ok(AdvanceOutcome::Next(idx))
            }
            None => {
                self.finish().await;
                Ok(AdvanceOutcome::Finished)
            }
        }
    }

    /// Explicit navigation to any question index.
    ///
    /// Re-viewing an answered question restarts its displayed countdown
    /// but does not allow a new answer (the `answer` guards stand).
    pub fn jump_to(&mut self, index: usize) -> Result<(), QuizError> {
        if self.step != QuizStep::InProgress {
            return Err(QuizError::InvalidTransition(
                "no session in progress".to_string(),
            ));
        }
        let total = self.session.as_ref().map(|s| s.total()).unwrap_or(0);
        if index >= total {
            return Err(QuizError::OutOfRange(index));
        }

        self.show_question(index);
        Ok(())
    }

    /// Ends the session now. Unanswered questions simply stay
    /// unanswered; the score is whatever `answer_state` holds. Finishing
    /// an already-finished session is a no-op.
    pub async fn finish_early(&mut self) -> Result<(), QuizError> {
        match self.step {
            QuizStep::InProgress => {
                self.finish().await;
                Ok(())
            }
            QuizStep::Finished => Ok(()),
            _ => Err(QuizError::InvalidTransition(
                "no session to finish".to_string(),
            )),
        }
    }

    /// Re-samples a fresh question set for the tier of the current (or
    /// just finished) session.
    pub fn restart_same_difficulty(&mut self) -> Result<(), QuizError> {
        let difficulty = self
            .session
            .as_ref()
            .map(|s| s.difficulty)
            .ok_or_else(|| QuizError::InvalidTransition("no previous session".to_string()))?;

        self.choose_difficulty(difficulty)
    }

    /// Discards the session and returns to difficulty selection.
    pub fn restart_choose_difficulty(&mut self) -> Result<(), QuizError> {
        if self.player.is_none() {
            return Err(QuizError::InvalidTransition(
                "no player admitted".to_string(),
            ));
        }

        self.session = None;
        self.step = QuizStep::AwaitingDifficulty;
        Ok(())
    }

    /// Discards the session and the player.
    pub fn restart_full(&mut self) {
        self.session = None;
        self.player = None;
        self.step = QuizStep::AwaitingPlayer;
    }

    fn show_question(&mut self, index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.current_index = index;
            session.time_remaining = config::per_question_limit(session.difficulty);
            session.timer_epoch += 1;
        }
    }

    /// Entry into `Finished`: records the leaderboard entry exactly once
    /// per session.
    async fn finish(&mut self) {
        self.step = QuizStep::Finished;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.timer_epoch += 1;
        if session.recorded || session.total() == 0 {
            return;
        }
        session.recorded = true;

        let entry = LeaderboardEntry::new(
            session.player.clone(),
            session.score() as u32,
            session.total() as u32,
            session.difficulty,
            Utc::now(),
        );
        tracing::info!(
            "Session finished: player={} score={}/{} ({}%)",
            entry.player,
            entry.score,
            entry.total,
            entry.percentage
        );
        self.store.record(entry).await;
    }
}
