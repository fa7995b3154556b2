use super::service::{Advance, AnswerFeedback};

/// User-triggered requests from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(String),
    Advance,
}

/// Result of dispatching a [`QuizIntent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A new round started; the first question is loaded.
    Started,
    Answered(AnswerFeedback),
    /// The selection arrived outside an unanswered question and was dropped.
    Ignored,
    Advanced(Advance),
}
