use std::collections::HashSet;
use thiserror::Error;

use crate::model::{EntryError, Language, WordEntry};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("vocabulary cannot be empty")]
    Empty,

    #[error("duplicate source term: {0}")]
    DuplicateSource(String),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Display name of the language being learned.
pub const SOURCE_LANGUAGE: &str = "Spanish";
/// Display name of the learner's language.
pub const TARGET_LANGUAGE: &str = "Russian";

/// Family vocabulary compiled into the binary: `(spanish, russian, emoji)`.
const FAMILY: [(&str, &str, &str); 16] = [
    ("madre", "мама", "👩"),
    ("padre", "папа", "👨"),
    ("hermano", "брат", "👦"),
    ("hermana", "сестра", "👧"),
    ("abuela", "бабушка", "👵"),
    ("abuelo", "дедушка", "👴"),
    ("hijo", "сын", "🧒"),
    ("hija", "дочь", "👧"),
    ("tía", "тётя", "👩‍🦱"),
    ("tío", "дядя", "👨‍🦱"),
    ("primo", "двоюродный брат", "👦"),
    ("prima", "двоюродная сестра", "👧"),
    ("esposo", "муж", "🤵"),
    ("esposa", "жена", "👰"),
    ("nieto", "внук", "👶"),
    ("nieta", "внучка", "👶"),
];

/// Immutable, ordered table of word entries keyed by source term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<WordEntry>,
}

impl Vocabulary {
    /// Creates a vocabulary from `entries`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Empty` for an empty list and
    /// `VocabularyError::DuplicateSource` if two entries share a source term.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, VocabularyError> {
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.source()) {
                return Err(VocabularyError::DuplicateSource(entry.source().to_owned()));
            }
        }
        Ok(Self { entries })
    }

    /// Builds a vocabulary from `(source, target, pictogram)` rows.
    ///
    /// # Errors
    ///
    /// Propagates entry validation errors and the checks of [`Vocabulary::new`].
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Option<&'a str>)>,
    {
        let entries = rows
            .into_iter()
            .map(|(source, target, pictogram)| WordEntry::new(source, target, pictogram))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// The compiled-in Spanish/Russian family vocabulary.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in table is invalid, which the tests rule out.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_rows(FAMILY.iter().map(|(es, ru, emoji)| (*es, *ru, Some(*emoji))))
            .expect("built-in vocabulary should be valid")
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct terms on one side of the table.
    ///
    /// Source terms are unique by construction; target terms may repeat.
    #[must_use]
    pub fn distinct_terms(&self, language: Language) -> usize {
        self.entries
            .iter()
            .map(|e| e.term(language))
            .collect::<HashSet<_>>()
            .len()
    }
}
