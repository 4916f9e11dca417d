// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Difficulty tier of a question. Every question belongs to exactly one
/// tier, and each tier carries its own per-question time limit
/// (see `config::per_question_limit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// One entry of the question catalogue.
///
/// Validated on bank construction; the bank never mutates questions after
/// that, so a sampled question can be handed out by clone.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizQuestion {
    /// Stable identifier, unique within the bank.
    #[validate(length(min = 1))]
    pub id: String,

    pub difficulty: Difficulty,

    /// The text content of the question.
    #[validate(length(min = 1))]
    pub prompt: String,

    /// Exactly four distinct answer options.
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,

    /// Index of the correct option within `options`.
    pub correct_index: usize,

    /// Explanation shown after the question is answered.
    pub explanation: String,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() != 4 {
        return Err(validator::ValidationError::new("must_have_four_options"));
    }
    for (i, opt) in options.iter().enumerate() {
        if opt.is_empty() {
            return Err(validator::ValidationError::new("option_cannot_be_empty"));
        }
        if options[..i].contains(opt) {
            return Err(validator::ValidationError::new("options_must_be_distinct"));
        }
    }
    Ok(())
}
