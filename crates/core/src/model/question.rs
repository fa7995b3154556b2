use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::entry::{Language, WordEntry};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("entry '{source_term}' has no pictogram")]
    MissingPictogram { source_term: String },

    #[error("correct answer appears {count} times in options")]
    CorrectAnswerCount { count: usize },

    #[error("duplicate option: {0}")]
    DuplicateOption(String),
}

//
// ─── MODES ─────────────────────────────────────────────────────────────────────
//

/// How the prompt is shown when answers are always target-language terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptForm {
    /// The source-language word.
    Text,
    /// The entry's pictogram.
    Pictogram,
}

/// Which way a translation question runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    SourceToTarget,
    TargetToSource,
}

/// The family of modes a generator draws from. Exactly one is active per
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeAxis {
    #[default]
    PromptForm,
    Direction,
}

impl ModeAxis {
    /// Every mode on this axis.
    #[must_use]
    pub fn modes(self) -> [QuestionMode; 2] {
        match self {
            ModeAxis::PromptForm => [
                QuestionMode::Prompt(PromptForm::Text),
                QuestionMode::Prompt(PromptForm::Pictogram),
            ],
            ModeAxis::Direction => [
                QuestionMode::Direction(Direction::SourceToTarget),
                QuestionMode::Direction(Direction::TargetToSource),
            ],
        }
    }

    /// Sides that answers can be drawn from on this axis.
    #[must_use]
    pub fn answer_languages(self) -> &'static [Language] {
        match self {
            ModeAxis::PromptForm => &[Language::Target],
            ModeAxis::Direction => &[Language::Target, Language::Source],
        }
    }
}

/// The presentation mode of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "axis", content = "mode", rename_all = "snake_case")]
pub enum QuestionMode {
    Prompt(PromptForm),
    Direction(Direction),
}

impl QuestionMode {
    #[must_use]
    pub fn axis(self) -> ModeAxis {
        match self {
            QuestionMode::Prompt(_) => ModeAxis::PromptForm,
            QuestionMode::Direction(_) => ModeAxis::Direction,
        }
    }

    /// Side of the pair the options are written in.
    #[must_use]
    pub fn answer_language(self) -> Language {
        match self {
            QuestionMode::Prompt(_) | QuestionMode::Direction(Direction::SourceToTarget) => {
                Language::Target
            }
            QuestionMode::Direction(Direction::TargetToSource) => Language::Source,
        }
    }

    /// Text shown as the prompt for `entry`, or `None` when a pictogram is
    /// requested but the entry has none.
    #[must_use]
    pub fn prompt_for(self, entry: &WordEntry) -> Option<&str> {
        match self {
            QuestionMode::Prompt(PromptForm::Text) => Some(entry.source()),
            QuestionMode::Prompt(PromptForm::Pictogram) => entry.pictogram(),
            QuestionMode::Direction(_) => Some(entry.term(self.answer_language().opposite())),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    mode: QuestionMode,
    correct_entry: WordEntry,
    prompt_text: String,
    correct_answer: String,
    options: Vec<String>,
}

impl Question {
    /// Builds a question for `correct_entry` shown in `mode`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::MissingPictogram` if `mode` needs a pictogram the
    /// entry lacks, `QuestionError::CorrectAnswerCount` unless the correct
    /// answer appears exactly once in `options`, and
    /// `QuestionError::DuplicateOption` if any option repeats.
    pub fn new(
        mode: QuestionMode,
        correct_entry: WordEntry,
        options: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt_text = mode
            .prompt_for(&correct_entry)
            .ok_or_else(|| QuestionError::MissingPictogram {
                source_term: correct_entry.source().to_owned(),
            })?
            .to_owned();
        let correct_answer = correct_entry.term(mode.answer_language()).to_owned();

        let count = options.iter().filter(|o| **o == correct_answer).count();
        if count != 1 {
            return Err(QuestionError::CorrectAnswerCount { count });
        }
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        Ok(Self {
            mode,
            correct_entry,
            prompt_text,
            correct_answer,
            options,
        })
    }

    #[must_use]
    pub fn mode(&self) -> QuestionMode {
        self.mode
    }

    #[must_use]
    pub fn correct_entry(&self) -> &WordEntry {
        &self.correct_entry
    }

    #[must_use]
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Position of the correct answer within [`options`](Self::options).
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.correct_answer)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn madre() -> WordEntry {
        WordEntry::new("madre", "мама", Some("👩")).unwrap()
    }

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn text_prompt_shows_source_and_expects_target() {
        let q = Question::new(
            QuestionMode::Prompt(PromptForm::Text),
            madre(),
            opts(&["папа", "мама", "брат"]),
        )
        .unwrap();
        assert_eq!(q.prompt_text(), "madre");
        assert_eq!(q.correct_answer(), "мама");
        assert_eq!(q.correct_index(), 1);
        assert!(q.is_correct("мама"));
        assert!(!q.is_correct("папа"));
    }

    #[test]
    fn pictogram_prompt_shows_pictogram() {
        let q = Question::new(
            QuestionMode::Prompt(PromptForm::Pictogram),
            madre(),
            opts(&["мама", "папа"]),
        )
        .unwrap();
        assert_eq!(q.prompt_text(), "👩");
        assert_eq!(q.correct_answer(), "мама");
    }

    #[test]
    fn reverse_direction_expects_source() {
        let q = Question::new(
            QuestionMode::Direction(Direction::TargetToSource),
            madre(),
            opts(&["padre", "madre"]),
        )
        .unwrap();
        assert_eq!(q.prompt_text(), "мама");
        assert_eq!(q.correct_answer(), "madre");
    }

    #[test]
    fn missing_pictogram_rejected() {
        let entry = WordEntry::new("tío", "дядя", None).unwrap();
        let err = Question::new(
            QuestionMode::Prompt(PromptForm::Pictogram),
            entry,
            opts(&["дядя", "тётя"]),
        )
        .unwrap_err();
        assert!(matches!(err, QuestionError::MissingPictogram { .. }));
    }

    #[test]
    fn options_must_hold_correct_answer_once() {
        let mode = QuestionMode::Prompt(PromptForm::Text);
        let err = Question::new(mode, madre(), opts(&["папа", "брат"])).unwrap_err();
        assert_eq!(err, QuestionError::CorrectAnswerCount { count: 0 });

        let err = Question::new(mode, madre(), opts(&["мама", "мама"])).unwrap_err();
        assert_eq!(err, QuestionError::CorrectAnswerCount { count: 2 });

        let err = Question::new(mode, madre(), opts(&["мама", "папа", "папа"])).unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption("папа".into()));
    }

    #[test]
    fn mode_serializes_with_axis_tag() {
        let json = serde_json::to_value(QuestionMode::Prompt(PromptForm::Pictogram)).unwrap();
        assert_eq!(json, serde_json::json!({ "axis": "prompt", "mode": "pictogram" }));

        let json =
            serde_json::to_value(QuestionMode::Direction(Direction::TargetToSource)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "axis": "direction", "mode": "target_to_source" })
        );
    }

    #[test]
    fn axis_lists_its_modes() {
        assert!(
            ModeAxis::Direction
                .modes()
                .iter()
                .all(|m| m.axis() == ModeAxis::Direction)
        );
        assert_eq!(ModeAxis::PromptForm.answer_languages(), &[Language::Target]);
    }
}
