//! Aggregate metrics: sentence-length averages, Flesch readability
//! formulas, and the self/other pronoun-orientation scale.
//!
//! Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//! Flesch-Kincaid Grade: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Both formulas need a sample of at least [`MIN_WORDS_FOR_READABILITY`]
//! words to say anything meaningful; below that they report 0.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;
use crate::syllable;
use crate::text;

/// Minimum word count before the readability formulas apply.
pub const MIN_WORDS_FOR_READABILITY: usize = 100;

/// Self/others/neutral pronoun-orientation percentages.
///
/// The three values always total exactly 100: `neutral` is computed as
/// the remainder and absorbs any rounding error from the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OrientationScale {
    /// Share of the text directed at the writer (first person).
    #[serde(rename = "self")]
    pub self_directed: i32,
    /// Share directed at someone else (second/third person).
    pub others: i32,
    /// The remainder: sentences with no pronoun signal.
    pub neutral: i32,
}

impl Default for OrientationScale {
    fn default() -> Self {
        Self {
            self_directed: 0,
            others: 0,
            neutral: 100,
        }
    }
}

/// Mean word count per sentence, rounded to one decimal place.
/// Zero sentences yields 0.0.
pub fn average_sentence_length(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| text::count_words(s)).sum();
    round1(total as f64 / sentences.len() as f64)
}

/// Sum of [`syllable::estimate_syllables`] over every word token.
/// Repeated words count each occurrence.
pub fn total_syllables(words: &[String]) -> usize {
    words.iter().map(|w| syllable::estimate_syllables(w)).sum()
}

/// Flesch Reading Ease, rounded to the nearest integer
/// (half away from zero). Higher = easier.
pub fn flesch_reading_ease(
    total_words: usize,
    sentence_count: usize,
    total_syllables: usize,
) -> f64 {
    if total_words < MIN_WORDS_FOR_READABILITY || sentence_count == 0 {
        return 0.0;
    }
    let words_per_sentence = total_words as f64 / sentence_count as f64;
    let syllables_per_word = total_syllables as f64 / total_words as f64;
    (206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word).round()
}

/// Flesch-Kincaid Grade Level, rounded to the nearest integer
/// (half away from zero). Lower = more readable.
pub fn flesch_kincaid_grade(
    total_words: usize,
    sentence_count: usize,
    total_syllables: usize,
) -> f64 {
    if total_words < MIN_WORDS_FOR_READABILITY || sentence_count == 0 {
        return 0.0;
    }
    let words_per_sentence = total_words as f64 / sentence_count as f64;
    let syllables_per_word = total_syllables as f64 / total_words as f64;
    (0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59).round()
}

/// Derive the orientation scale from sentence-level pronoun usage.
///
/// With no pronouns or no sentences the scale is all-neutral. Otherwise
/// the self and others shares are each scaled by the fraction of
/// sentences that contain at least one pronoun; neutral takes the rest.
pub fn orientation_scale(
    sentences: &[String],
    unique_words: &FrequencyTable,
    pronouns: &HashSet<String>,
    self_directed: &HashSet<String>,
) -> OrientationScale {
    let pronoun_count = unique_words.only(pronouns).occurrences();
    let sentence_count = sentences.len();
    if pronoun_count == 0 || sentence_count == 0 {
        return OrientationScale::default();
    }

    let self_count = unique_words.only(self_directed).occurrences();
    let others_count = pronoun_count - self_count;
    let with_pronouns = sentences
        .iter()
        .filter(|s| sentence_has_pronoun(s, pronouns))
        .count();
    let pronoun_sentence_ratio = with_pronouns as f64 / sentence_count as f64;

    let self_pct =
        ((self_count as f64 / pronoun_count as f64) * pronoun_sentence_ratio * 100.0).round() as i32;
    let others_pct = ((others_count as f64 / pronoun_count as f64) * pronoun_sentence_ratio * 100.0)
        .round() as i32;

    OrientationScale {
        self_directed: self_pct,
        others: others_pct,
        neutral: 100 - (self_pct + others_pct),
    }
}

fn sentence_has_pronoun(sentence: &str, pronouns: &HashSet<String>) -> bool {
    text::extract_words(sentence)
        .iter()
        .any(|w| pronouns.contains(w))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
