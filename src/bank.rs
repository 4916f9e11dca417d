// src/bank.rs

use rand::seq::SliceRandom;
use validator::Validate;

use crate::error::QuizError;
use crate::models::question::{Difficulty, QuizQuestion};

/// Immutable catalogue of questions tagged by difficulty tier.
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Builds a bank, validating every question.
    ///
    /// Rejects malformed option lists, out-of-range `correct_index`
    /// values and duplicate ids.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        for (i, q) in questions.iter().enumerate() {
            if let Err(e) = q.validate() {
                return Err(QuizError::InvalidQuestion(format!(
                    "question '{}': {}",
                    q.id, e
                )));
            }
            if q.correct_index >= q.options.len() {
                return Err(QuizError::InvalidQuestion(format!(
                    "question '{}': correct_index {} out of range",
                    q.id, q.correct_index
                )));
            }
            if questions[..i].iter().any(|other| other.id == q.id) {
                return Err(QuizError::InvalidQuestion(format!(
                    "duplicate question id '{}'",
                    q.id
                )));
            }
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions available for a tier.
    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .count()
    }

    /// Draws up to `count` distinct questions of the given tier in random
    /// order.
    ///
    /// Returns fewer when the tier holds fewer questions; an empty tier
    /// yields an empty vec, not an error. Every call reshuffles
    /// independently, so a retry gets a fresh selection.
    pub fn sample(&self, difficulty: Difficulty, count: usize) -> Vec<QuizQuestion> {
        let mut filtered: Vec<QuizQuestion> = self
            .questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .cloned()
            .collect();

        filtered.shuffle(&mut rand::thread_rng());
        filtered.truncate(count);
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn question(id: &str, difficulty: Difficulty) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            difficulty,
            prompt: format!("Soal {}", id),
            options: vec!["A", "B", "C", "D"].into_iter().map(String::from).collect(),
            correct_index: 0,
            explanation: String::new(),
        }
    }

    fn bank(easy: usize, medium: usize) -> QuestionBank {
        let mut questions = Vec::new();
        for i in 0..easy {
            questions.push(question(&format!("e{}", i), Difficulty::Easy));
        }
        for i in 0..medium {
            questions.push(question(&format!("m{}", i), Difficulty::Medium));
        }
        QuestionBank::new(questions).unwrap()
    }

    #[test]
    fn sample_returns_min_of_count_and_tier_size() {
        let bank = bank(15, 4);
        assert_eq!(bank.sample(Difficulty::Easy, 10).len(), 10);
        assert_eq!(bank.sample(Difficulty::Medium, 10).len(), 4);
    }

    #[test]
    fn sample_is_duplicate_free_and_tier_pure() {
        let bank = bank(15, 4);
        let sample = bank.sample(Difficulty::Easy, 10);

        let ids: HashSet<&str> = sample.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), sample.len());
        assert!(sample.iter().all(|q| q.difficulty == Difficulty::Easy));
    }

    #[test]
    fn empty_tier_yields_empty_sample() {
        let bank = bank(5, 0);
        assert!(bank.sample(Difficulty::Hard, 10).is_empty());
    }

    #[test]
    fn resampling_eventually_covers_the_whole_tier() {
        // 4 of 8 drawn each time; after 40 draws a question missing from
        // all of them would be a (1/2)^40 fluke.
        let bank = bank(8, 0);
        let mut seen = HashSet::new();
        for _ in 0..40 {
            for q in bank.sample(Difficulty::Easy, 4) {
                seen.insert(q.id);
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn bank_does_not_shrink_after_sampling() {
        let bank = bank(6, 0);
        bank.sample(Difficulty::Easy, 6);
        bank.sample(Difficulty::Easy, 6);
        assert_eq!(bank.count_for(Difficulty::Easy), 6);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let questions = vec![question("dup", Difficulty::Easy), question("dup", Difficulty::Hard)];
        assert!(QuestionBank::new(questions).is_err());
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let mut q = question("q1", Difficulty::Easy);
        q.correct_index = 4;
        assert!(QuestionBank::new(vec![q]).is_err());
    }
}
