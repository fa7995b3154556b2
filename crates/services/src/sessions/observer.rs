use quiz_core::model::{Question, QuizSummary, WordEntry};

/// Presentation-side listener for session events.
///
/// Every notification fires after the transition that caused it has finished
/// mutating the session. All methods default to doing nothing.
pub trait QuizObserver {
    fn on_question_loaded(&mut self, _question: &Question, _index: usize, _total: usize) {}

    fn on_answer_evaluated(
        &mut self,
        _is_correct: bool,
        _correct_answer: &str,
        _correct_entry: &WordEntry,
    ) {
    }

    fn on_score_changed(&mut self, _score: u32) {}

    fn on_finished(&mut self, _summary: &QuizSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl QuizObserver for NoopObserver {}

impl<O: QuizObserver + ?Sized> QuizObserver for &mut O {
    fn on_question_loaded(&mut self, question: &Question, index: usize, total: usize) {
        (**self).on_question_loaded(question, index, total);
    }

    fn on_answer_evaluated(
        &mut self,
        is_correct: bool,
        correct_answer: &str,
        correct_entry: &WordEntry,
    ) {
        (**self).on_answer_evaluated(is_correct, correct_answer, correct_entry);
    }

    fn on_score_changed(&mut self, score: u32) {
        (**self).on_score_changed(score);
    }

    fn on_finished(&mut self, summary: &QuizSummary) {
        (**self).on_finished(summary);
    }
}

impl<O: QuizObserver + ?Sized> QuizObserver for Box<O> {
    fn on_question_loaded(&mut self, question: &Question, index: usize, total: usize) {
        (**self).on_question_loaded(question, index, total);
    }

    fn on_answer_evaluated(
        &mut self,
        is_correct: bool,
        correct_answer: &str,
        correct_entry: &WordEntry,
    ) {
        (**self).on_answer_evaluated(is_correct, correct_answer, correct_entry);
    }

    fn on_score_changed(&mut self, score: u32) {
        (**self).on_score_changed(score);
    }

    fn on_finished(&mut self, summary: &QuizSummary) {
        (**self).on_finished(summary);
    }
}
