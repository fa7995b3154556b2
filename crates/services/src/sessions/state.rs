use std::fmt;

use quiz_core::model::Question;
use serde::Serialize;

/// Per-question sub-state while a round is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionPhase {
    Unanswered,
    Answered,
}

/// Top-level screen state of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "phase", content = "question", rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress(QuestionPhase),
    Finished,
}

/// Transitions a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Start,
    SelectAnswer,
    Advance,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizPhase::NotStarted => write!(f, "not started"),
            QuizPhase::InProgress(QuestionPhase::Unanswered) => write!(f, "awaiting an answer"),
            QuizPhase::InProgress(QuestionPhase::Answered) => write!(f, "showing feedback"),
            QuizPhase::Finished => write!(f, "finished"),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Start => write!(f, "start"),
            Transition::SelectAnswer => write!(f, "select an answer"),
            Transition::Advance => write!(f, "advance"),
        }
    }
}

/// Mutable state of one round. Owned by `QuizSession` and replaced on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) questions: Vec<Question>,
    pub(crate) current_index: usize,
    pub(crate) score: u32,
    pub(crate) selected: Option<String>,
    pub(crate) answered: bool,
}

impl SessionState {
    pub(crate) fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }
}
