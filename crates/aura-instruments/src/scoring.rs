use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::QuestionnaireError;

/// Best possible wellness score.
pub const MAX_WELLNESS_SCORE: u32 = 100;

/// A single multiple-choice question with a weight per option.
///
/// `weights[i]` is the weight of `options[i]`. Higher weight means the
/// answer describes more frequent or more severe symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub weights: Vec<u32>,
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], weights: &[u32]) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            weights: weights.to_vec(),
        }
    }

    /// Check the option/weight alignment. `index` is only used for the error.
    pub fn validate(&self, index: usize) -> Result<(), QuestionnaireError> {
        if self.options.is_empty() {
            return Err(QuestionnaireError::InvalidQuestion {
                index,
                reason: "no options".to_string(),
            });
        }
        if self.weights.len() != self.options.len() {
            return Err(QuestionnaireError::InvalidQuestion {
                index,
                reason: format!(
                    "{} options but {} weights",
                    self.options.len(),
                    self.weights.len()
                ),
            });
        }
        Ok(())
    }

    /// Position of `value` among the options. Exact, case-sensitive match.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o == value)
    }

    /// Weight of the option equal to `value`, if it is one.
    pub fn weight_of(&self, value: &str) -> Option<u32> {
        self.option_index(value)
            .and_then(|i| self.weights.get(i).copied())
    }

    pub fn max_weight(&self) -> u32 {
        self.weights.iter().copied().max().unwrap_or(0)
    }
}

/// Raw and maximum totals for a set of answers.
///
/// Summed in `u64` so any bank of `u32` weights fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreTotals {
    pub raw: u64,
    pub max: u64,
}

impl ScoreTotals {
    /// Normalize into a wellness score: `round((1 - raw / max) * 100)`.
    ///
    /// Halves round up. A bank where nothing carries weight scores 100.
    pub fn wellness_score(&self) -> u32 {
        if self.max == 0 {
            return MAX_WELLNESS_SCORE;
        }
        let max = u128::from(self.max);
        let remaining = max - u128::from(self.raw.min(self.max));
        let scaled = 2 * u128::from(MAX_WELLNESS_SCORE) * remaining + max;
        (scaled / (2 * max)) as u32
    }
}

/// Sum selected and maximum weights over a fully answered bank.
pub fn totals(
    questions: &[Question],
    answers: &[Option<String>],
) -> Result<ScoreTotals, QuestionnaireError> {
    let unanswered = questions.len().saturating_sub(answers.len())
        + answers.iter().filter(|a| a.is_none()).count();
    if unanswered > 0 {
        return Err(QuestionnaireError::IncompleteQuestionnaire { unanswered });
    }

    let mut raw: u64 = 0;
    let mut max: u64 = 0;
    for (index, (question, answer)) in questions.iter().zip(answers).enumerate() {
        let value = answer.as_deref().unwrap_or_default();
        let weight = question
            .weight_of(value)
            .ok_or_else(|| QuestionnaireError::InvalidOption {
                index,
                value: value.to_string(),
            })?;
        raw += u64::from(weight);
        max += u64::from(question.max_weight());
    }
    Ok(ScoreTotals { raw, max })
}

/// Wellness score in `[0, 100]` for a fully answered bank.
pub fn wellness_score(
    questions: &[Question],
    answers: &[Option<String>],
) -> Result<u32, QuestionnaireError> {
    Ok(totals(questions, answers)?.wellness_score())
}
