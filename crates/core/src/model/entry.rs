use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("source term cannot be empty")]
    EmptySource,

    #[error("target term cannot be empty")]
    EmptyTarget,
}

//
// ─── LANGUAGE SIDE ─────────────────────────────────────────────────────────────
//

/// One side of the bilingual table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// The language being learned.
    Source,
    /// The learner's language; answers are usually shown here.
    Target,
}

impl Language {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Language::Source => Language::Target,
            Language::Target => Language::Source,
        }
    }
}

//
// ─── WORD ENTRY ────────────────────────────────────────────────────────────────
//

/// A single source/target word pair with an optional pictogram.
///
/// The source term is the identity key of an entry inside a
/// [`Vocabulary`](crate::Vocabulary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordEntry {
    source: String,
    target: String,
    pictogram: Option<String>,
}

impl WordEntry {
    /// Creates an entry, trimming surrounding whitespace from every field.
    ///
    /// A blank pictogram is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptySource` or `EntryError::EmptyTarget` when a
    /// term is blank after trimming.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        pictogram: Option<&str>,
    ) -> Result<Self, EntryError> {
        let source = source.into().trim().to_owned();
        let target = target.into().trim().to_owned();
        if source.is_empty() {
            return Err(EntryError::EmptySource);
        }
        if target.is_empty() {
            return Err(EntryError::EmptyTarget);
        }
        let pictogram = pictogram
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_owned);

        Ok(Self {
            source,
            target,
            pictogram,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn pictogram(&self) -> Option<&str> {
        self.pictogram.as_deref()
    }

    /// Returns the term on the given side of the pair.
    #[must_use]
    pub fn term(&self, language: Language) -> &str {
        match language {
            Language::Source => &self.source,
            Language::Target => &self.target,
        }
    }
}
