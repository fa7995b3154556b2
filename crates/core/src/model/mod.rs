mod config;
mod entry;
mod question;
mod summary;

pub use config::{ConfigError, QuestionConfig};
pub use entry::{EntryError, Language, WordEntry};
pub use question::{Direction, ModeAxis, PromptForm, Question, QuestionError, QuestionMode};
pub use summary::{QuizSummary, ResultTier, SummaryError};
