#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod sessions;

pub use sessions as session;

pub use error::{ConfigurationError, GeneratorError, SessionError};
pub use generator::{GeneratorBuilder, QuestionGenerator, QuestionSource, SelectionPolicy};

pub use sessions::{
    Advance, AnswerFeedback, IntentOutcome, NoopObserver, QuestionPhase, QuizIntent, QuizObserver,
    QuizPhase, QuizProgress, QuizSession, SessionState, Transition,
};
