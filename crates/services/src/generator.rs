use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use quiz_core::Vocabulary;
use quiz_core::model::{ModeAxis, PromptForm, Question, QuestionConfig, QuestionMode, WordEntry};

use crate::error::{ConfigurationError, GeneratorError};

/// How the correct entry of each question is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Draw from a shrinking pool of unused entries and refill it once empty.
    ///
    /// Every block of `|vocabulary|` consecutive questions, counted from the
    /// start of a round, uses each entry exactly once.
    #[default]
    Exhaustive,
    /// Draw uniformly from the whole table for every question; repeats allowed.
    Independent,
}

/// Anything that can produce the question list for a round.
pub trait QuestionSource {
    /// Produce a fresh, ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError` if a question cannot be assembled.
    fn generate(&mut self) -> Result<Vec<Question>, GeneratorError>;

    /// The configuration questions are generated for.
    fn config(&self) -> QuestionConfig;
}

//
// ─── BUILDER ───────────────────────────────────────────────────────────────────
//

/// Collects generator options and validates them against the vocabulary.
pub struct GeneratorBuilder<R> {
    vocabulary: Arc<Vocabulary>,
    config: QuestionConfig,
    rng: R,
    selection: SelectionPolicy,
    axis: ModeAxis,
}

impl<R: Rng> GeneratorBuilder<R> {
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_mode_axis(mut self, axis: ModeAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Validate the configuration and build the generator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::TooFewOptions` if fewer than two options
    /// are requested, `ConfigurationError::NotEnoughEntries` if the table has fewer
    /// entries than `options_per_question`, and
    /// `ConfigurationError::NotEnoughDistinctTerms` if an answer side of the
    /// active axis has fewer distinct terms than that.
    pub fn build(self) -> Result<QuestionGenerator<R>, GeneratorError> {
        let requested = usize::try_from(self.config.options_per_question()).unwrap_or(usize::MAX);
        let minimum = usize::try_from(QuestionConfig::MIN_OPTIONS_PER_QUESTION).unwrap_or(2);
        if requested < minimum {
            return Err(ConfigurationError::TooFewOptions { requested, minimum }.into());
        }
        let available = self.vocabulary.len();
        if requested > available {
            return Err(ConfigurationError::NotEnoughEntries {
                requested,
                available,
            }
            .into());
        }
        for &language in self.axis.answer_languages() {
            let distinct = self.vocabulary.distinct_terms(language);
            if requested > distinct {
                return Err(ConfigurationError::NotEnoughDistinctTerms {
                    language,
                    requested,
                    available: distinct,
                }
                .into());
            }
        }

        tracing::debug!(
            entries = available,
            total_questions = self.config.total_questions(),
            options_per_question = requested,
            selection = ?self.selection,
            axis = ?self.axis,
            "question generator ready"
        );

        Ok(QuestionGenerator {
            vocabulary: self.vocabulary,
            config: self.config,
            rng: self.rng,
            selection: self.selection,
            axis: self.axis,
        })
    }
}

//
// ─── GENERATOR ─────────────────────────────────────────────────────────────────
//

/// Builds rounds of multiple-choice questions from a vocabulary.
///
/// All randomness comes from the injected `rng`, so a seeded generator always
/// produces the same rounds.
pub struct QuestionGenerator<R> {
    vocabulary: Arc<Vocabulary>,
    config: QuestionConfig,
    rng: R,
    selection: SelectionPolicy,
    axis: ModeAxis,
}

impl<R: Rng> QuestionGenerator<R> {
    /// Start configuring a generator. Defaults to exhaustive selection on the
    /// prompt-form axis.
    #[must_use]
    pub fn builder(
        vocabulary: Arc<Vocabulary>,
        config: QuestionConfig,
        rng: R,
    ) -> GeneratorBuilder<R> {
        GeneratorBuilder {
            vocabulary,
            config,
            rng,
            selection: SelectionPolicy::default(),
            axis: ModeAxis::default(),
        }
    }

    /// Build a generator with default policies.
    ///
    /// # Errors
    ///
    /// See [`GeneratorBuilder::build`].
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        config: QuestionConfig,
        rng: R,
    ) -> Result<Self, GeneratorError> {
        Self::builder(vocabulary, config, rng).build()
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }

    #[must_use]
    pub fn mode_axis(&self) -> ModeAxis {
        self.axis
    }

    /// Generate `total_questions` questions.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError` if a question cannot be assembled; validation
    /// in [`GeneratorBuilder::build`] rules this out for the built-in checks.
    pub fn generate(&mut self) -> Result<Vec<Question>, GeneratorError> {
        let vocabulary = Arc::clone(&self.vocabulary);
        let total = usize::try_from(self.config.total_questions()).unwrap_or(usize::MAX);
        let distractors =
            usize::try_from(self.config.distractors_per_question()).unwrap_or(usize::MAX);

        let mut unused: Vec<usize> = Vec::with_capacity(vocabulary.len());
        let mut questions = Vec::with_capacity(total);
        for _ in 0..total {
            let index = self.pick_entry(&mut unused);
            let entry = &vocabulary.entries()[index];
            let mode = self.pick_mode(entry);
            let question = assemble(&mut self.rng, &vocabulary, entry, mode, distractors)?;
            tracing::trace!(
                source = entry.source(),
                mode = ?question.mode(),
                options = ?question.options(),
                "question generated"
            );
            questions.push(question);
        }

        Ok(questions)
    }

    fn pick_entry(&mut self, unused: &mut Vec<usize>) -> usize {
        let len = self.vocabulary.len();
        match self.selection {
            SelectionPolicy::Exhaustive => {
                if unused.is_empty() {
                    unused.extend(0..len);
                }
                let slot = self.rng.random_range(0..unused.len());
                unused.swap_remove(slot)
            }
            SelectionPolicy::Independent => self.rng.random_range(0..len),
        }
    }

    fn pick_mode(&mut self, entry: &WordEntry) -> QuestionMode {
        let [first, second] = self.axis.modes();
        let mode = if self.rng.random_bool(0.5) { first } else { second };
        if mode.prompt_for(entry).is_some() {
            mode
        } else {
            QuestionMode::Prompt(PromptForm::Text)
        }
    }
}

impl QuestionGenerator<StdRng> {
    /// Build a default-policy generator driven by a seeded `StdRng`.
    ///
    /// # Errors
    ///
    /// See [`GeneratorBuilder::build`].
    pub fn seeded(
        vocabulary: Arc<Vocabulary>,
        config: QuestionConfig,
        seed: u64,
    ) -> Result<Self, GeneratorError> {
        Self::new(vocabulary, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuestionSource for QuestionGenerator<R> {
    fn generate(&mut self) -> Result<Vec<Question>, GeneratorError> {
        QuestionGenerator::generate(self)
    }

    fn config(&self) -> QuestionConfig {
        self.config
    }
}

/// Shuffle the other entries, take distinct answer-side terms as distractors,
/// then shuffle them together with the correct answer.
fn assemble<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &Vocabulary,
    entry: &WordEntry,
    mode: QuestionMode,
    distractors: usize,
) -> Result<Question, GeneratorError> {
    let language = mode.answer_language();

    let mut pool: Vec<&WordEntry> = vocabulary
        .entries()
        .iter()
        .filter(|other| other.source() != entry.source())
        .collect();
    pool.shuffle(rng);

    let mut options: Vec<String> = Vec::with_capacity(distractors + 1);
    options.push(entry.term(language).to_owned());
    for other in pool {
        if options.len() > distractors {
            break;
        }
        let term = other.term(language);
        if options.iter().any(|taken| taken == term) {
            continue;
        }
        options.push(term.to_owned());
    }

    if options.len() <= distractors {
        return Err(ConfigurationError::NotEnoughDistinctTerms {
            language,
            requested: distractors + 1,
            available: options.len(),
        }
        .into());
    }

    options.shuffle(rng);
    Ok(Question::new(mode, entry.clone(), options)?)
}
