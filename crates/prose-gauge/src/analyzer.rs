//! The analysis pipeline and session façade.
//!
//! [`analyze`] is the whole engine: one pass from raw text to an
//! immutable [`AnalysisReport`]. [`TextAnalyzer`] wraps it in a small
//! load-then-query session for callers that want to hold results
//! alongside the lexicon.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::{FrequencyEntry, FrequencyTable};
use crate::lexicon::Lexicon;
use crate::metrics::{self, OrientationScale};
use crate::text;

/// Everything derived from one analyzed text.
///
/// Built in a single pass and never mutated afterwards; all accessors
/// are pure reads, and the frequency accessors return freshly sorted
/// views of the stored tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    text: String,
    sentences: Vec<String>,
    words: Vec<String>,
    avg_sentence_length: f64,
    unique_words: FrequencyTable,
    abridged_words: FrequencyTable,
    pronoun_words: FrequencyTable,
    syllable_count: usize,
    sentence_count: usize,
    readability_score: f64,
    grade_level: f64,
    orientation: OrientationScale,
}

/// Analyze a text against a lexicon.
///
/// The pipeline runs normalize → segment/tokenize → frequency tables →
/// metrics, in that order, with each stage reading only the output of
/// earlier stages. Empty input is a valid analysis with zeroed metrics,
/// not an error.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze(lexicon: &Lexicon, input: &str) -> AnalysisReport {
    let normalized = text::normalize(input);
    let sentences = text::split_sentences(&normalized);
    let words = text::extract_words(&normalized);

    let unique_words = FrequencyTable::from_words(&words);
    let abridged_words = unique_words.without(lexicon.stop_words());
    let pronoun_words = unique_words.only(lexicon.pronouns());

    let avg_sentence_length = metrics::average_sentence_length(&sentences);
    let syllable_count = metrics::total_syllables(&words);
    let sentence_count = sentences.len();
    let readability_score = metrics::flesch_reading_ease(words.len(), sentence_count, syllable_count);
    let grade_level = metrics::flesch_kincaid_grade(words.len(), sentence_count, syllable_count);
    let orientation = metrics::orientation_scale(
        &sentences,
        &unique_words,
        lexicon.pronouns(),
        lexicon.self_directed_pronouns(),
    );

    AnalysisReport {
        text: normalized,
        sentences,
        words,
        avg_sentence_length,
        unique_words,
        abridged_words,
        pronoun_words,
        syllable_count,
        sentence_count,
        readability_score,
        grade_level,
        orientation,
    }
}

impl AnalysisReport {
    /// The normalized (lowercased) text the report was derived from.
    pub fn normalized_text(&self) -> &str {
        &self.text
    }

    /// Sentences in order of appearance, terminal punctuation included.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Mean word count per sentence, rounded to one decimal place.
    pub const fn average_sentence_length(&self) -> f64 {
        self.avg_sentence_length
    }

    /// Every word token, in order of appearance.
    pub fn all_words(&self) -> &[String] {
        &self.words
    }

    /// Total word tokens.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct words.
    pub fn unique_word_count(&self) -> usize {
        self.unique_words.len()
    }

    /// Number of distinct words after stop-word removal.
    pub fn abridged_word_count(&self) -> usize {
        self.abridged_words.len()
    }

    /// Number of distinct pronouns used.
    pub fn pronoun_word_count(&self) -> usize {
        self.pronoun_words.len()
    }

    /// All distinct words with counts, sorted descending (stable on ties).
    pub fn unique_word_frequency(&self) -> Vec<FrequencyEntry> {
        self.unique_words.sorted()
    }

    /// Stop-word-filtered words with counts, sorted descending.
    pub fn abridged_word_frequency(&self) -> Vec<FrequencyEntry> {
        self.abridged_words.sorted()
    }

    /// The `n` most frequent non-stop words.
    pub fn top_abridged_word_frequency(&self, n: usize) -> Vec<FrequencyEntry> {
        self.abridged_words.top(n)
    }

    /// Pronouns with counts, sorted descending.
    pub fn pronoun_frequency(&self) -> Vec<FrequencyEntry> {
        self.pronoun_words.sorted()
    }

    /// Total syllables across every word token.
    pub const fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    /// Number of sentences.
    pub const fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Flesch Reading Ease (0 for texts under 100 words).
    pub const fn readability_score(&self) -> f64 {
        self.readability_score
    }

    /// Flesch-Kincaid Grade Level (0 for texts under 100 words).
    pub const fn grade_level(&self) -> f64 {
        self.grade_level
    }

    /// The self/others/neutral orientation scale.
    pub const fn orientation_scale(&self) -> OrientationScale {
        self.orientation
    }
}

/// A load-then-query analysis session.
///
/// Starts empty; [`TextAnalyzer::load_text`] runs the full pipeline and
/// swaps in the finished report wholesale, so a query never observes a
/// half-updated state. Reloading the same text reproduces the same
/// report. The lexicon is fixed for the session's lifetime.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    lexicon: Lexicon,
    report: Option<AnalysisReport>,
}

impl TextAnalyzer {
    /// Create an empty session with the given lexicon.
    pub const fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            report: None,
        }
    }

    /// Create a session and analyze `text` immediately.
    pub fn with_text(lexicon: Lexicon, input: &str) -> Self {
        let mut analyzer = Self::new(lexicon);
        analyzer.load_text(input);
        analyzer
    }

    /// Analyze `text`, replacing any previously loaded result.
    pub fn load_text(&mut self, input: &str) {
        self.report = Some(analyze(&self.lexicon, input));
    }

    /// The current report.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoTextLoaded`] before the first
    /// [`TextAnalyzer::load_text`].
    pub fn report(&self) -> AnalysisResult<&AnalysisReport> {
        self.report.as_ref().ok_or(AnalysisError::NoTextLoaded)
    }

    /// The lexicon this session analyzes against.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
