//! Lexicon construction and discovery.
//!
//! A [`Lexicon`] is the injected configuration behind every analysis:
//! stop words for the abridged frequency table, and the pronoun sets
//! behind the orientation scale. The built-in word lists are the
//! default; [`LexiconLoader`] lets a user override them from files
//! or the environment.
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Lexicon file locations (lowest precedence first)
//!
//! - built-in defaults
//! - `<user-config-dir>/prose-gauge/lexicon.<ext>`
//! - explicit files added via [`LexiconLoader::with_file`], in order
//! - `PROSE_GAUGE_*` environment variables

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, LexiconResult};
use crate::word_lists;

/// Application name for user config directory lookup.
const APP_NAME: &str = "prose-gauge";

/// Supported lexicon file extensions (in order of preference).
const LEXICON_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// The word sets driving frequency filtering and the orientation scale.
///
/// Immutable once built, and safe to share across any number of
/// analyzer sessions. All words are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    pronouns: HashSet<String>,
    self_directed: HashSet<String>,
    other_directed: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from stop words, pronouns, and the self-directed
    /// subset. The other-directed set is derived as pronouns minus
    /// self-directed, which keeps the two from drifting apart.
    ///
    /// # Errors
    ///
    /// Fails when a self-directed pronoun is not in the pronoun set.
    pub fn new(
        stop_words: HashSet<String>,
        pronouns: HashSet<String>,
        self_directed: HashSet<String>,
    ) -> LexiconResult<Self> {
        if let Some(stray) = self_directed.iter().find(|w| !pronouns.contains(*w)) {
            return Err(LexiconError::SelfDirectedNotPronoun {
                word: stray.clone(),
            });
        }
        let other_directed = pronouns.difference(&self_directed).cloned().collect();
        Ok(Self {
            stop_words,
            pronouns,
            self_directed,
            other_directed,
        })
    }

    /// Stop words excluded from the abridged frequency table.
    pub const fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// All tracked pronouns.
    pub const fn pronouns(&self) -> &HashSet<String> {
        &self.pronouns
    }

    /// First-person pronouns.
    pub const fn self_directed_pronouns(&self) -> &HashSet<String> {
        &self.self_directed
    }

    /// Second/third-person pronouns (pronouns minus self-directed).
    pub const fn other_directed_pronouns(&self) -> &HashSet<String> {
        &self.other_directed
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            to_owned_set(&word_lists::STOP_WORDS),
            to_owned_set(&word_lists::PRONOUNS),
            to_owned_set(&word_lists::SELF_DIRECTED_PRONOUNS),
        )
        .expect("built-in word lists are consistent")
    }
}

fn to_owned_set(words: &HashSet<&'static str>) -> HashSet<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Serialized form of a lexicon, as found in lexicon files.
///
/// `other_directed_pronouns` is optional; when present it must match
/// pronouns minus self-directed exactly.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
struct LexiconFile {
    stop_words: Vec<String>,
    pronouns: Vec<String>,
    self_directed_pronouns: Vec<String>,
    other_directed_pronouns: Option<Vec<String>>,
}

impl Default for LexiconFile {
    fn default() -> Self {
        Self {
            stop_words: to_sorted_vec(&word_lists::STOP_WORDS),
            pronouns: to_sorted_vec(&word_lists::PRONOUNS),
            self_directed_pronouns: to_sorted_vec(&word_lists::SELF_DIRECTED_PRONOUNS),
            other_directed_pronouns: None,
        }
    }
}

fn to_sorted_vec(words: &HashSet<&'static str>) -> Vec<String> {
    let mut v: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    v.sort_unstable();
    v
}

impl TryFrom<LexiconFile> for Lexicon {
    type Error = LexiconError;

    fn try_from(file: LexiconFile) -> LexiconResult<Self> {
        let lexicon = Self::new(
            lowercase_set(file.stop_words),
            lowercase_set(file.pronouns),
            lowercase_set(file.self_directed_pronouns),
        )?;

        if let Some(listed) = file.other_directed_pronouns {
            let listed = lowercase_set(listed);
            if listed != lexicon.other_directed {
                let mut unexpected: Vec<String> =
                    listed.difference(&lexicon.other_directed).cloned().collect();
                let mut missing: Vec<String> =
                    lexicon.other_directed.difference(&listed).cloned().collect();
                unexpected.sort_unstable();
                missing.sort_unstable();
                return Err(LexiconError::OtherDirectedMismatch {
                    unexpected,
                    missing,
                });
            }
        }

        Ok(lexicon)
    }
}

fn lowercase_set(words: Vec<String>) -> HashSet<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}

/// Builder for loading a [`Lexicon`] from layered sources.
#[derive(Debug, Default)]
pub struct LexiconLoader {
    /// Whether to include the user lexicon from the config directory.
    include_user_lexicon: bool,
    /// Explicit lexicon files to load (later files take precedence).
    explicit_files: Vec<Utf8PathBuf>,
}

impl LexiconLoader {
    /// Create a new loader with user-lexicon discovery enabled.
    pub const fn new() -> Self {
        Self {
            include_user_lexicon: true,
            explicit_files: Vec::new(),
        }
    }

    /// Set whether to look for `lexicon.<ext>` in the user config directory.
    pub const fn with_user_lexicon(mut self, include: bool) -> Self {
        self.include_user_lexicon = include;
        self
    }

    /// Add an explicit lexicon file. Files merge in the order added,
    /// later files winning on conflicting keys.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load the lexicon, merging all sources over the built-in defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed files or on inconsistent pronoun sets.
    #[tracing::instrument(skip(self), fields(explicit = self.explicit_files.len()))]
    pub fn load(self) -> LexiconResult<Lexicon> {
        tracing::debug!("loading lexicon");
        let mut figment = Figment::new().merge(Serialized::defaults(LexiconFile::default()));

        if self.include_user_lexicon
            && let Some(user_lexicon) = find_user_lexicon()
        {
            tracing::debug!(path = %user_lexicon, "merging user lexicon");
            figment = merge_file(figment, &user_lexicon);
        }

        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }

        figment = figment.merge(Env::prefixed("PROSE_GAUGE_").lowercase(true));

        let file: LexiconFile = figment
            .extract()
            .map_err(|e| LexiconError::Deserialize(Box::new(e)))?;
        let lexicon = Lexicon::try_from(file)?;
        tracing::info!(
            stop_words = lexicon.stop_words.len(),
            pronouns = lexicon.pronouns.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }
}

/// Find `lexicon.<ext>` in the user config directory.
fn find_user_lexicon() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let config_dir = proj_dirs.config_dir();

    for ext in LEXICON_EXTENSIONS {
        let path = config_dir.join(format!("lexicon.{ext}"));
        if path.is_file() {
            return Utf8PathBuf::from_path_buf(path).ok();
        }
    }

    None
}

/// Merge a lexicon file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn default_lexicon_is_consistent() {
        let lexicon = Lexicon::default();
        assert!(lexicon.stop_words().contains("the"));
        assert!(lexicon.pronouns().contains("they"));
        assert!(lexicon.self_directed_pronouns().contains("i"));
        assert!(lexicon.other_directed_pronouns().contains("they"));
        assert!(!lexicon.other_directed_pronouns().contains("i"));
        assert_eq!(
            lexicon.other_directed_pronouns().len() + lexicon.self_directed_pronouns().len(),
            lexicon.pronouns().len()
        );
    }

    #[test]
    fn new_derives_other_directed() {
        let lexicon = Lexicon::new(
            set(&["the"]),
            set(&["i", "you", "they"]),
            set(&["i"]),
        )
        .unwrap();
        assert_eq!(lexicon.other_directed_pronouns(), &set(&["you", "they"]));
    }

    #[test]
    fn new_rejects_stray_self_directed() {
        let result = Lexicon::new(set(&[]), set(&["you"]), set(&["i"]));
        assert!(matches!(
            result,
            Err(LexiconError::SelfDirectedNotPronoun { word }) if word == "i"
        ));
    }

    #[test]
    fn loader_defaults_match_builtin() {
        let lexicon = LexiconLoader::new()
            .with_user_lexicon(false)
            .load()
            .unwrap();
        assert_eq!(lexicon, Lexicon::default());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.toml");
        fs::write(
            &path,
            r#"
stop_words = ["the", "a"]
pronouns = ["i", "you"]
self_directed_pronouns = ["i"]
"#,
        )
        .unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let lexicon = LexiconLoader::new()
            .with_user_lexicon(false)
            .with_file(&path)
            .load()
            .unwrap();

        assert_eq!(lexicon.stop_words(), &set(&["the", "a"]));
        assert_eq!(lexicon.other_directed_pronouns(), &set(&["you"]));
    }

    #[test]
    fn yaml_file_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.yaml");
        fs::write(
            &path,
            "stop_words: [the]\npronouns: [i, you]\nself_directed_pronouns: [i]\n",
        )
        .unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let lexicon = LexiconLoader::new()
            .with_user_lexicon(false)
            .with_file(&path)
            .load()
            .unwrap();
        assert_eq!(lexicon.pronouns(), &set(&["i", "you"]));
    }

    #[test]
    fn explicit_other_directed_must_match_derivation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.toml");
        fs::write(
            &path,
            r#"
stop_words = []
pronouns = ["i", "you", "they"]
self_directed_pronouns = ["i"]
other_directed_pronouns = ["you", "we"]
"#,
        )
        .unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let result = LexiconLoader::new()
            .with_user_lexicon(false)
            .with_file(&path)
            .load();

        match result {
            Err(LexiconError::OtherDirectedMismatch {
                unexpected,
                missing,
            }) => {
                assert_eq!(unexpected, vec!["we"]);
                assert_eq!(missing, vec!["they"]);
            }
            other => panic!("expected mismatch error, got {other:?}"),
        }
    }

    #[test]
    fn consistent_explicit_other_directed_accepted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.toml");
        fs::write(
            &path,
            r#"
stop_words = []
pronouns = ["i", "you"]
self_directed_pronouns = ["i"]
other_directed_pronouns = ["you"]
"#,
        )
        .unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let lexicon = LexiconLoader::new()
            .with_user_lexicon(false)
            .with_file(&path)
            .load()
            .unwrap();
        assert_eq!(lexicon.other_directed_pronouns(), &set(&["you"]));
    }

    #[test]
    fn file_entries_are_lowercased() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.toml");
        fs::write(
            &path,
            r#"
stop_words = ["The"]
pronouns = ["I", "You"]
self_directed_pronouns = ["I"]
"#,
        )
        .unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let lexicon = LexiconLoader::new()
            .with_user_lexicon(false)
            .with_file(&path)
            .load()
            .unwrap();
        assert!(lexicon.stop_words().contains("the"));
        assert!(lexicon.self_directed_pronouns().contains("i"));
    }
}
