use aura_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}

/// Rejections from the questionnaire engine.
///
/// None of these are fatal. The engine state is untouched by a rejected
/// call, so the caller can re-prompt and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("'{value}' is not an option for question {index}")]
    InvalidOption { index: usize, value: String },

    #[error("question {index} has not been answered")]
    MissingAnswer { index: usize },

    #[error("{unanswered} question(s) still unanswered")]
    IncompleteQuestionnaire { unanswered: usize },

    #[error("question index {index} is out of range (bank has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("questionnaire has not been started")]
    NotStarted,

    #[error("question bank is empty")]
    EmptyQuestionBank,

    #[error("question {index} is malformed: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error(transparent)]
    Profile(#[from] CoreError),
}
