//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{Language, QuestionError, SummaryError};

use crate::sessions::{QuizPhase, Transition};

/// Configuration that cannot produce a full set of unique options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("{requested} options per question is below the minimum of {minimum}")]
    TooFewOptions { requested: usize, minimum: usize },

    #[error("{requested} options per question need at least {requested} entries, vocabulary has {available}")]
    NotEnoughEntries { requested: usize, available: usize },

    #[error("{requested} options per question need {requested} distinct {language:?} terms, vocabulary has {available}")]
    NotEnoughDistinctTerms {
        language: Language,
        requested: usize,
        available: usize,
    },
}

/// Errors emitted by `QuestionGenerator`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question source produced no questions")]
    Empty,
    #[error("source produced {produced} questions for a round of {expected}")]
    RoundLength { expected: u32, produced: usize },
    #[error("cannot {action} while {phase}")]
    InvalidTransition { action: Transition, phase: QuizPhase },
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
