//! Text normalization, sentence segmentation, and word tokenization.
//!
//! Every downstream computation consumes the output of [`normalize`];
//! the segmenter and tokenizer assume already-lowercased text.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for word tokens: runs of word characters, with apostrophes
/// treated as internal so contractions ("it's", "there's") stay whole.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:'\w+)*").expect("valid regex"));

/// Lowercase the full input (Unicode simple case folding).
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Split normalized text into sentences.
///
/// A boundary is a `.`, `?`, or `!`, followed by one-or-more whitespace
/// characters, followed by a letter. The whitespace run is the separator
/// and is not part of either sentence. Text with no boundary comes back
/// as a single sentence; empty or whitespace-only input yields none.
///
/// This is a deliberate heuristic, not a grammar-aware splitter: it will
/// mis-segment abbreviations, and capitalization carries no signal since
/// the text is lowercased before it gets here.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        current.push(chars[i]);

        if is_sentence_terminator(chars[i]) {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            // Boundary only when whitespace was crossed and a letter follows.
            // A digit after the gap is not a boundary (enumerations, versions).
            if j > i + 1 && j < chars.len() && chars[j].is_alphabetic() {
                sentences.push(std::mem::take(&mut current));
                i = j;
                continue;
            }
        }

        i += 1;
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Extract word tokens in order of appearance.
///
/// Punctuation and whitespace are separators; digits and underscores
/// count as word characters.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of word tokens in a piece of text.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}
