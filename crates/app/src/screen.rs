use std::io::{self, Write};

use quiz_core::model::{
    Direction, PromptForm, Question, QuestionConfig, QuestionMode, QuizSummary, ResultTier,
    WordEntry,
};
use quiz_core::vocabulary::{SOURCE_LANGUAGE, TARGET_LANGUAGE};
use services::{QuestionPhase, QuizObserver, QuizPhase};

/// A presentation surface for the quiz.
///
/// Observer callbacks cannot fail, so write errors are parked and collected
/// with [`Screen::take_error`] after each transition.
pub trait Screen: QuizObserver {
    fn show_welcome(&mut self, entries: usize, config: QuestionConfig);
    fn show_hint(&mut self, phase: QuizPhase, options: usize);
    fn show_notice(&mut self, message: &str);
    fn take_error(&mut self) -> Option<io::Error>;
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn show_welcome(&mut self, entries: usize, config: QuestionConfig) {
        (**self).show_welcome(entries, config);
    }

    fn show_hint(&mut self, phase: QuizPhase, options: usize) {
        (**self).show_hint(phase, options);
    }

    fn show_notice(&mut self, message: &str) {
        (**self).show_notice(message);
    }

    fn take_error(&mut self) -> Option<io::Error> {
        (**self).take_error()
    }
}

/// Message and badge shown on the results screen.
#[must_use]
pub fn tier_message(tier: ResultTier) -> (&'static str, &'static str) {
    match tier {
        ResultTier::Perfect => (
            "🏆",
            "Идеально! Ты отлично знаешь испанские слова для семьи! ¡Excelente!",
        ),
        ResultTier::Excellent => (
            "🎉",
            "Отличный результат! Ты хорошо знаешь семью на испанском. ¡Muy bien!",
        ),
        ResultTier::Good => (
            "👍",
            "Хорошая работа! Ещё немного практики - и будет идеально. ¡Buen trabajo!",
        ),
        ResultTier::Fair => ("💪", "Неплохо! Продолжай учить эти слова. ¡Sigue así!"),
        ResultTier::NeedsPractice => (
            "📚",
            "Попробуй ещё раз! С каждым разом будет получаться лучше. ¡Ánimo!",
        ),
    }
}

/// Label shown above the prompt.
#[must_use]
pub fn mode_label(mode: QuestionMode) -> &'static str {
    match mode {
        QuestionMode::Prompt(PromptForm::Text) => "Слово на испанском",
        QuestionMode::Prompt(PromptForm::Pictogram) => "Эмодзи семьи",
        QuestionMode::Direction(Direction::SourceToTarget) => "Переведи на русский",
        QuestionMode::Direction(Direction::TargetToSource) => "Переведи на испанский",
    }
}

/// Human-readable terminal screen.
pub struct TerminalScreen<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> QuizObserver for TerminalScreen<W> {
    fn on_question_loaded(&mut self, question: &Question, index: usize, total: usize) {
        let mut text = format!(
            "\nВопрос {} из {}\n{}: {}\n",
            index + 1,
            total,
            mode_label(question.mode()),
            question.prompt_text()
        );
        for (i, option) in question.options().iter().enumerate() {
            text.push_str(&format!("  {}) {option}\n", i + 1));
        }
        self.emit(text.trim_end());
    }

    fn on_answer_evaluated(&mut self, is_correct: bool, correct_answer: &str, entry: &WordEntry) {
        let text = if is_correct {
            format!("✅ Правильно! {} = {}", entry.source(), entry.target())
        } else {
            format!("❌ Неправильно. Правильный ответ: {correct_answer}")
        };
        self.emit(&text);
    }

    fn on_score_changed(&mut self, score: u32) {
        self.emit(&format!("Счёт: {score}"));
    }

    fn on_finished(&mut self, summary: &QuizSummary) {
        let (badge, message) = tier_message(summary.tier());
        self.emit(&format!(
            "\n{badge} Результат: {} из {} ({}%)\n{message}",
            summary.score(),
            summary.total(),
            summary.percentage()
        ));
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn show_welcome(&mut self, entries: usize, config: QuestionConfig) {
        self.emit(&format!(
            "Семья: {SOURCE_LANGUAGE} → {TARGET_LANGUAGE} ({entries} слов, {} вопросов, {} вариантов)",
            config.total_questions(),
            config.options_per_question()
        ));
    }

    fn show_hint(&mut self, phase: QuizPhase, options: usize) {
        let hint = match phase {
            QuizPhase::NotStarted => "Enter: начать, q: выход".to_owned(),
            QuizPhase::InProgress(QuestionPhase::Unanswered) => {
                format!("Выбери ответ (1-{options}) или введи его")
            }
            QuizPhase::InProgress(QuestionPhase::Answered) => "Enter: дальше".to_owned(),
            QuizPhase::Finished => "r: ещё раз, q: выход".to_owned(),
        };
        self.emit(&format!("> {hint}"));
    }

    fn show_notice(&mut self, message: &str) {
        self.emit(message);
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(screen: TerminalScreen<Vec<u8>>) -> String {
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn question_lists_numbered_options() {
        let entry = WordEntry::new("madre", "мама", Some("👩")).unwrap();
        let question = Question::new(
            QuestionMode::Prompt(PromptForm::Pictogram),
            entry,
            vec!["папа".into(), "мама".into()],
        )
        .unwrap();

        let mut screen = TerminalScreen::new(Vec::new());
        screen.on_question_loaded(&question, 2, 20);
        let text = rendered(screen);

        assert!(text.contains("Вопрос 3 из 20"));
        assert!(text.contains("Эмодзи семьи: 👩"));
        assert!(text.contains("  1) папа"));
        assert!(text.contains("  2) мама"));
    }

    #[test]
    fn feedback_names_the_pair_or_the_answer() {
        let entry = WordEntry::new("padre", "папа", None).unwrap();
        let mut screen = TerminalScreen::new(Vec::new());
        screen.on_answer_evaluated(true, "папа", &entry);
        screen.on_answer_evaluated(false, "папа", &entry);
        let text = rendered(screen);

        assert!(text.contains("✅ Правильно! padre = папа"));
        assert!(text.contains("❌ Неправильно. Правильный ответ: папа"));
    }

    #[test]
    fn results_show_tier_badge() {
        let mut screen = TerminalScreen::new(Vec::new());
        screen.on_finished(&QuizSummary::new(20, 20).unwrap());
        let text = rendered(screen);

        assert!(text.contains("🏆 Результат: 20 из 20 (100%)"));
        assert!(text.contains("¡Excelente!"));
    }

    #[test]
    fn every_tier_has_its_own_badge() {
        let tiers = [
            ResultTier::Perfect,
            ResultTier::Excellent,
            ResultTier::Good,
            ResultTier::Fair,
            ResultTier::NeedsPractice,
        ];
        let badges: std::collections::HashSet<_> =
            tiers.iter().map(|t| tier_message(*t).0).collect();
        assert_eq!(badges.len(), tiers.len());
    }
}
