//! Error types for prose-gauge.

use thiserror::Error;

/// Errors that can occur when building or loading a lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Failed to deserialize a lexicon from its configured sources.
    #[error("invalid lexicon: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A self-directed pronoun is missing from the pronoun set.
    #[error("self-directed pronoun {word:?} is not in the pronoun set")]
    SelfDirectedNotPronoun {
        /// The offending word.
        word: String,
    },

    /// An explicit other-directed list disagrees with pronouns minus
    /// self-directed.
    #[error(
        "other-directed pronouns must equal pronouns minus self-directed \
         (unexpected: {unexpected:?}, missing: {missing:?})"
    )]
    OtherDirectedMismatch {
        /// Words listed as other-directed that the derivation does not produce.
        unexpected: Vec<String>,
        /// Words the derivation produces that the list omits.
        missing: Vec<String>,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur when querying an analysis session.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The session has not analyzed any text yet.
    #[error("no text loaded")]
    NoTextLoaded,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
