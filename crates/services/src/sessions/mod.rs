mod intent;
mod observer;
mod progress;
mod service;
mod state;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use intent::{IntentOutcome, QuizIntent};
pub use observer::{NoopObserver, QuizObserver};
pub use progress::QuizProgress;
pub use service::{Advance, AnswerFeedback, QuizSession};
pub use state::{QuestionPhase, QuizPhase, SessionState, Transition};
