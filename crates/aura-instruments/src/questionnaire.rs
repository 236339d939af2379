//! Per-session questionnaire flow.
//!
//! A [`QuestionnaireEngine`] borrows a fixed question bank and owns the
//! answers for one check-in. The presentation layer turns user input into
//! [`answer`](QuestionnaireEngine::answer),
//! [`advance`](QuestionnaireEngine::advance) and
//! [`retreat`](QuestionnaireEngine::retreat) calls, and asks for the score
//! once [`is_complete`](QuestionnaireEngine::is_complete) holds.

use aura_core::models::WellnessProfile;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::QuestionnaireError;
use crate::scoring::{self, Question};

/// Where a session stands. `Complete` is observational: navigation and
/// re-answering remain allowed after every question has an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionnaireState {
    NotStarted,
    InProgress { index: usize },
    Complete { index: usize },
}

/// "Question `position` of `total`", 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// Share of the bank reached so far, for the progress bar.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.position as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone)]
pub struct QuestionnaireEngine<'q> {
    questions: &'q [Question],
    current_index: usize,
    /// Empty until `start()`; afterwards always `questions.len()` long.
    answers: Vec<Option<String>>,
}

impl<'q> QuestionnaireEngine<'q> {
    /// Create an engine over a question bank. The session is not started.
    pub fn new(questions: &'q [Question]) -> Result<Self, QuestionnaireError> {
        if questions.is_empty() {
            return Err(QuestionnaireError::EmptyQuestionBank);
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(Self {
            questions,
            current_index: 0,
            answers: Vec::new(),
        })
    }

    /// Begin (or restart) a check-in. Discards any answers given so far.
    pub fn start(&mut self) {
        self.current_index = 0;
        self.answers = vec![None; self.questions.len()];
        debug!(questions = self.questions.len(), "questionnaire started");
    }

    pub fn is_started(&self) -> bool {
        !self.answers.is_empty()
    }

    /// Record `value` as the answer to question `index`.
    ///
    /// `value` must match one of the question's options exactly. A rejected
    /// answer leaves the stored one untouched.
    pub fn answer(&mut self, index: usize, value: &str) -> Result<(), QuestionnaireError> {
        let question = self.question(index)?;
        if !self.is_started() {
            return Err(QuestionnaireError::NotStarted);
        }
        if question.option_index(value).is_none() {
            return Err(QuestionnaireError::InvalidOption {
                index,
                value: value.to_string(),
            });
        }
        self.answers[index] = Some(value.to_string());
        debug!(index, "answer recorded");
        Ok(())
    }

    /// Answer the current question by option position (0-based).
    pub fn answer_current(&mut self, option: usize) -> Result<(), QuestionnaireError> {
        let index = self.current_index;
        let value = self
            .question(index)?
            .options
            .get(option)
            .cloned()
            .ok_or_else(|| QuestionnaireError::InvalidOption {
                index,
                value: format!("#{}", option.saturating_add(1)),
            })?;
        self.answer(index, &value)
    }

    /// Move to the next question. The current one must be answered.
    /// At the last question this is a no-op; the caller submits instead.
    pub fn advance(&mut self) -> Result<(), QuestionnaireError> {
        if !self.is_started() {
            return Err(QuestionnaireError::NotStarted);
        }
        if self.answers[self.current_index].is_none() {
            return Err(QuestionnaireError::MissingAnswer {
                index: self.current_index,
            });
        }
        if !self.is_last() {
            self.current_index += 1;
            debug!(index = self.current_index, "advanced");
        }
        Ok(())
    }

    /// Move to the previous question. Never validates; no-op at the first.
    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            debug!(index = self.current_index, "retreated");
        }
    }

    pub fn is_complete(&self) -> bool {
        self.is_started() && self.answers.iter().all(Option::is_some)
    }

    /// Wellness score in `[0, 100]` for the current answers.
    ///
    /// Available as soon as every question is answered, wherever the
    /// session currently is.
    pub fn compute_score(&self) -> Result<u32, QuestionnaireError> {
        if !self.is_complete() {
            return Err(QuestionnaireError::IncompleteQuestionnaire {
                unanswered: self.unanswered(),
            });
        }
        let totals = scoring::totals(self.questions, &self.answers)?;
        let score = totals.wellness_score();
        info!(raw = totals.raw, max = totals.max, score, "wellness score computed");
        Ok(score)
    }

    /// Compute the score and package it as the profile to persist.
    pub fn submit(&self, computed_at: jiff::Timestamp) -> Result<WellnessProfile, QuestionnaireError> {
        let score = self.compute_score()?;
        Ok(WellnessProfile::new(score, computed_at)?)
    }

    pub fn state(&self) -> QuestionnaireState {
        if !self.is_started() {
            QuestionnaireState::NotStarted
        } else if self.is_complete() {
            QuestionnaireState::Complete {
                index: self.current_index,
            }
        } else {
            QuestionnaireState::InProgress {
                index: self.current_index,
            }
        }
    }

    pub fn questions(&self) -> &'q [Question] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &'q Question {
        &self.questions[self.current_index]
    }

    pub fn answer_at(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|a| a.as_deref())
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn unanswered(&self) -> usize {
        if !self.is_started() {
            return self.questions.len();
        }
        self.answers.iter().filter(|a| a.is_none()).count()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current_index + 1,
            total: self.questions.len(),
        }
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    fn question(&self, index: usize) -> Result<&'q Question, QuestionnaireError> {
        self.questions
            .get(index)
            .ok_or(QuestionnaireError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            })
    }
}
