use thiserror::Error;

use crate::model::{ConfigError, EntryError, QuestionError, SummaryError};
use crate::vocabulary::VocabularyError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
