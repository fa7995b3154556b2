use std::fmt;

use quiz_core::model::{Question, QuizSummary, WordEntry};
use serde::Serialize;

use super::intent::{IntentOutcome, QuizIntent};
use super::observer::{NoopObserver, QuizObserver};
use super::progress::QuizProgress;
use super::state::{QuestionPhase, QuizPhase, SessionState, Transition};
use crate::error::SessionError;
use crate::generator::QuestionSource;

//
// ─── TRANSITION RESULTS ────────────────────────────────────────────────────────
//

/// Evaluation of a selected answer, for presentation feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub selected: String,
    pub correct_answer: String,
    pub correct_entry: WordEntry,
}

/// Where `advance` moved the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "to", content = "value", rename_all = "snake_case")]
pub enum Advance {
    /// Index of the newly loaded question.
    Question(usize),
    Finished(QuizSummary),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz state machine: `NotStarted → InProgress → Finished`.
///
/// Owns its question source, its observer and the round's `SessionState`.
/// Selecting an answer outside an unanswered question is a silent no-op;
/// advancing from anything but an answered question is rejected with
/// `SessionError::InvalidTransition` and leaves the state untouched.
pub struct QuizSession<S, O = NoopObserver> {
    source: S,
    observer: O,
    state: SessionState,
    phase: QuizPhase,
    summary: Option<QuizSummary>,
}

impl<S: QuestionSource> QuizSession<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_observer(source, NoopObserver)
    }
}

impl<S: QuestionSource, O: QuizObserver> QuizSession<S, O> {
    #[must_use]
    pub fn with_observer(source: S, observer: O) -> Self {
        Self {
            source,
            observer,
            state: SessionState::default(),
            phase: QuizPhase::NotStarted,
            summary: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// The question on screen, if a round is running.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress(_) => self.state.current_question(),
            QuizPhase::NotStarted | QuizPhase::Finished => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.state.questions.len();
        let position = match self.phase {
            QuizPhase::NotStarted => 0,
            QuizPhase::InProgress(_) => self.state.current_index + 1,
            QuizPhase::Finished => total,
        };
        QuizProgress::new(
            position,
            total,
            self.state.score,
            self.phase == QuizPhase::Finished,
        )
    }

    /// Start a new round from any phase.
    ///
    /// Regenerates the questions, resets the score and selection, and loads
    /// the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Generator` if the source fails,
    /// `SessionError::Empty` if it returns no questions and
    /// `SessionError::RoundLength` if it returns a different number than its
    /// configuration asks for. The previous state is kept in every case.
    pub fn start(&mut self) -> Result<&Question, SessionError> {
        let questions = self.source.generate()?;
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let expected = self.source.config().total_questions();
        if usize::try_from(expected).ok() != Some(questions.len()) {
            return Err(SessionError::RoundLength {
                expected,
                produced: questions.len(),
            });
        }

        self.state = SessionState::new(questions);
        self.phase = QuizPhase::InProgress(QuestionPhase::Unanswered);
        self.summary = None;
        let total = self.state.questions.len();
        tracing::debug!(total, "quiz started");

        self.observer.on_score_changed(0);
        self.observer
            .on_question_loaded(&self.state.questions[0], 0, total);
        Ok(&self.state.questions[0])
    }

    /// Same as [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// See [`start`](Self::start).
    pub fn restart(&mut self) -> Result<&Question, SessionError> {
        self.start()
    }

    /// Record `answer` for the current question.
    ///
    /// Returns `None` without touching the state unless a question is waiting
    /// for its first answer.
    pub fn select_answer(&mut self, answer: &str) -> Option<AnswerFeedback> {
        if self.phase != QuizPhase::InProgress(QuestionPhase::Unanswered) {
            tracing::debug!(phase = %self.phase, "answer ignored");
            return None;
        }

        let feedback = {
            let question = self.state.current_question()?;
            AnswerFeedback {
                is_correct: question.is_correct(answer),
                selected: answer.to_owned(),
                correct_answer: question.correct_answer().to_owned(),
                correct_entry: question.correct_entry().clone(),
            }
        };

        self.state.selected = Some(answer.to_owned());
        self.state.answered = true;
        if feedback.is_correct {
            self.state.score = self.state.score.saturating_add(1);
        }
        self.phase = QuizPhase::InProgress(QuestionPhase::Answered);
        tracing::debug!(
            index = self.state.current_index,
            is_correct = feedback.is_correct,
            score = self.state.score,
            "answer evaluated"
        );

        self.observer.on_answer_evaluated(
            feedback.is_correct,
            &feedback.correct_answer,
            &feedback.correct_entry,
        );
        if feedback.is_correct {
            self.observer.on_score_changed(self.state.score);
        }
        Some(feedback)
    }

    /// Move past an answered question, finishing the round after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the current question
    /// has been answered.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.phase != QuizPhase::InProgress(QuestionPhase::Answered) {
            return Err(SessionError::InvalidTransition {
                action: Transition::Advance,
                phase: self.phase,
            });
        }

        let total_questions = self.source.config().total_questions();
        let total = usize::try_from(total_questions)
            .unwrap_or(usize::MAX)
            .min(self.state.questions.len());
        let next = self.state.current_index + 1;
        if next < total {
            self.state.current_index = next;
            self.state.selected = None;
            self.state.answered = false;
            self.phase = QuizPhase::InProgress(QuestionPhase::Unanswered);

            self.observer
                .on_question_loaded(&self.state.questions[next], next, total);
            return Ok(Advance::Question(next));
        }

        let summary = QuizSummary::new(self.state.score, total_questions)?;
        self.phase = QuizPhase::Finished;
        self.summary = Some(summary);
        tracing::debug!(
            score = summary.score(),
            total = summary.total(),
            percentage = summary.percentage(),
            tier = ?summary.tier(),
            "quiz finished"
        );

        self.observer.on_finished(&summary);
        Ok(Advance::Finished(summary))
    }

    /// Apply a user intent by calling the matching transition.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`start`](Self::start) and
    /// [`advance`](Self::advance).
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<IntentOutcome, SessionError> {
        match intent {
            QuizIntent::Start => self.start().map(|_| IntentOutcome::Started),
            QuizIntent::Select(answer) => Ok(self
                .select_answer(&answer)
                .map_or(IntentOutcome::Ignored, IntentOutcome::Answered)),
            QuizIntent::Advance => self.advance().map(IntentOutcome::Advanced),
        }
    }
}

impl<S, O> fmt::Debug for QuizSession<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("questions_len", &self.state.questions.len())
            .field("current_index", &self.state.current_index)
            .field("score", &self.state.score)
            .field("selected", &self.state.selected)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
