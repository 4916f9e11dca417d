// src/models/session.rs

use crate::models::question::{Difficulty, QuizQuestion};

/// Per-question answer state. The session score is always derived by
/// counting `Correct` entries, never tracked in a separate counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Correct,
    Incorrect,
}

/// One player's run through a sampled question set.
///
/// Owned exclusively by the controller for its lifetime and discarded on
/// every restart; never persisted.
#[derive(Debug)]
pub struct QuizSession {
    pub player: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuizQuestion>,
    pub answer_state: Vec<AnswerState>,
    /// Option index the player picked per question, `None` when the
    /// question was skipped or timed out.
    pub selected_option: Vec<Option<usize>>,
    pub current_index: usize,
    /// Seconds left on the currently shown question.
    pub time_remaining: u32,
    /// Bumped whenever the shown question changes or is answered;
    /// countdown callbacks bound to an older epoch are ignored.
    pub timer_epoch: u64,
    /// The leaderboard is written exactly once per session.
    pub(crate) recorded: bool,
}

impl QuizSession {
    pub fn new(
        player: String,
        difficulty: Difficulty,
        questions: Vec<QuizQuestion>,
        time_limit: u32,
    ) -> Self {
        let n = questions.len();
        Self {
            player,
            difficulty,
            questions,
            answer_state: vec![AnswerState::Unanswered; n],
            selected_option: vec![None; n],
            current_index: 0,
            time_remaining: time_limit,
            timer_epoch: 0,
            recorded: false,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Derived score: the number of correctly answered questions.
    pub fn score(&self) -> usize {
        self.answer_state
            .iter()
            .filter(|s| **s == AnswerState::Correct)
            .count()
    }

    pub fn answered_count(&self) -> usize {
        self.answer_state
            .iter()
            .filter(|s| **s != AnswerState::Unanswered)
            .count()
    }

    /// Next unanswered index after `current_index`, wrapping back to the
    /// start so skipped questions are revisited. `None` when every
    /// question has been answered.
    pub fn next_unanswered(&self) -> Option<usize> {
        let n = self.total();
        if n == 0 {
            return None;
        }
        (self.current_index + 1..n)
            .chain(0..=self.current_index)
            .find(|&i| self.answer_state[i] == AnswerState::Unanswered)
    }
}
