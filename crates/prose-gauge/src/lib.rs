//! Readability and pronoun-orientation metrics for English prose.
//!
//! prose-gauge takes a raw text and derives sentence/word structure,
//! frequency tables, syllable totals, Flesch Reading Ease and
//! Flesch-Kincaid Grade Level, and a self/others/neutral orientation
//! scale from sentence-level pronoun usage.
//!
//! # Modules
//!
//! - [`analyzer`] - The analysis pipeline, report, and session façade
//! - [`lexicon`] - Lexicon provider: word sets plus layered loading
//! - [`text`] - Normalization, sentence splitting, word tokenization
//! - [`syllable`] - Heuristic syllable estimation
//! - [`frequency`] - Frequency tables and sorted views
//! - [`metrics`] - Readability formulas and the orientation scale
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prose_gauge::{Lexicon, TextAnalyzer};
//!
//! let mut analyzer = TextAnalyzer::new(Lexicon::default());
//! analyzer.load_text("This is text that I am loading into text analyzer.");
//!
//! let report = analyzer.report().expect("text was loaded");
//! assert_eq!(report.word_count(), 10);
//! assert_eq!(report.sentence_count(), 1);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod error;
pub mod frequency;
pub mod lexicon;
pub mod metrics;
pub mod syllable;
pub mod text;
pub mod word_lists;

pub use analyzer::{AnalysisReport, TextAnalyzer, analyze};
pub use error::{AnalysisError, AnalysisResult, LexiconError, LexiconResult};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use lexicon::{Lexicon, LexiconLoader};
pub use metrics::OrientationScale;
