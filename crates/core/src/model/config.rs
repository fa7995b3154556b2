use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("total questions must be > 0")]
    ZeroQuestions,

    #[error("options per question must be >= 2 (got {0})")]
    TooFewOptions(u32),
}

/// Round length and answer count for a quiz.
///
/// Whether the vocabulary is large enough for `options_per_question` is
/// checked when a question generator is built, since it depends on the table.
/// Deserialized values go through [`QuestionConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionConfig")]
pub struct QuestionConfig {
    total_questions: u32,
    options_per_question: u32,
}

#[derive(Deserialize)]
struct RawQuestionConfig {
    total_questions: u32,
    options_per_question: u32,
}

impl TryFrom<RawQuestionConfig> for QuestionConfig {
    type Error = ConfigError;

    fn try_from(raw: RawQuestionConfig) -> Result<Self, Self::Error> {
        Self::new(raw.total_questions, raw.options_per_question)
    }
}

impl QuestionConfig {
    pub const DEFAULT_TOTAL_QUESTIONS: u32 = 20;
    pub const DEFAULT_OPTIONS_PER_QUESTION: u32 = 4;
    pub const MIN_OPTIONS_PER_QUESTION: u32 = 2;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroQuestions` if `total_questions` is zero.
    /// Returns `ConfigError::TooFewOptions` if `options_per_question` is below 2.
    pub fn new(total_questions: u32, options_per_question: u32) -> Result<Self, ConfigError> {
        if total_questions == 0 {
            return Err(ConfigError::ZeroQuestions);
        }
        if options_per_question < Self::MIN_OPTIONS_PER_QUESTION {
            return Err(ConfigError::TooFewOptions(options_per_question));
        }

        Ok(Self {
            total_questions,
            options_per_question,
        })
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn options_per_question(&self) -> u32 {
        self.options_per_question
    }

    /// Number of incorrect options shown next to the correct one.
    #[must_use]
    pub fn distractors_per_question(&self) -> u32 {
        self.options_per_question.saturating_sub(1)
    }
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            total_questions: Self::DEFAULT_TOTAL_QUESTIONS,
            options_per_question: Self::DEFAULT_OPTIONS_PER_QUESTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_round_of_twenty_with_four_options() {
        let config = QuestionConfig::default();
        assert_eq!(config.total_questions(), 20);
        assert_eq!(config.options_per_question(), 4);
        assert_eq!(config.distractors_per_question(), 3);
    }

    #[test]
    fn zero_questions_rejected() {
        assert_eq!(
            QuestionConfig::new(0, 4).unwrap_err(),
            ConfigError::ZeroQuestions
        );
    }

    #[test]
    fn single_option_rejected() {
        assert_eq!(
            QuestionConfig::new(5, 1).unwrap_err(),
            ConfigError::TooFewOptions(1)
        );
        assert!(QuestionConfig::new(5, 2).is_ok());
    }

    #[test]
    fn deserializing_goes_through_validation() {
        let config: QuestionConfig =
            serde_json::from_str(r#"{"total_questions":5,"options_per_question":3}"#).unwrap();
        assert_eq!(config, QuestionConfig::new(5, 3).unwrap());

        let err = serde_json::from_str::<QuestionConfig>(
            r#"{"total_questions":3,"options_per_question":1}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("options per question must be >= 2"));

        assert!(
            serde_json::from_str::<QuestionConfig>(
                r#"{"total_questions":3,"options_per_question":0}"#
            )
            .is_err()
        );
        assert!(
            serde_json::from_str::<QuestionConfig>(
                r#"{"total_questions":0,"options_per_question":4}"#
            )
            .is_err()
        );
    }
}
