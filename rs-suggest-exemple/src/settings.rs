use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rs_suggest_core::EngineConfig;
use serde::Deserialize;

/// Environment variable pointing at the settings file.
pub const CONFIG_ENV: &str = "RS_SUGGEST_CONFIG";

/// Settings of the example typing session.
///
/// Read from a TOML file, every field is optional:
///
/// ```toml
/// corpus_path = "data/corpus.json"
/// # 0 learns the whole corpus
/// corpus_limit = 100000
///
/// [suggestions]
/// completions = 5
/// single_word_suggestions = 3
/// two_word_suggestions = 1
///
/// [engine]
/// window_size = 4
/// threads = 0
/// ```
///
/// Unknown keys are rejected so a misspelled setting is not silently ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
    /// Only the first `corpus_limit` texts are learned, `0` keeps them all.
    #[serde(default = "default_corpus_limit")]
    pub corpus_limit: usize,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// How many entries of each kind a session lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestionSettings {
    /// Completions of the word being typed.
    #[serde(default = "default_completions")]
    pub completions: usize,
    /// One-word continuations.
    #[serde(default = "default_single_word")]
    pub single_word_suggestions: usize,
    /// Two-word continuations.
    #[serde(default = "default_two_words")]
    pub two_word_suggestions: usize,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("corpus.json")
}

fn default_corpus_limit() -> usize {
    100_000
}

fn default_completions() -> usize {
    5
}

fn default_single_word() -> usize {
    3
}

fn default_two_words() -> usize {
    1
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            completions: default_completions(),
            single_word_suggestions: default_single_word(),
            two_word_suggestions: default_two_words(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            corpus_limit: default_corpus_limit(),
            suggestions: SuggestionSettings::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl Settings {
    /// The corpus limit as understood by `read_corpus`: `None` when unlimited.
    pub fn corpus_limit(&self) -> Option<usize> {
        (self.corpus_limit > 0).then_some(self.corpus_limit)
    }

    /// Loads the settings file named by `explicit`, or by `$RS_SUGGEST_CONFIG`.
    ///
    /// Falls back to the defaults when neither is given. An explicitly named
    /// file that cannot be read or parsed is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => env::var_os(CONFIG_ENV).map(PathBuf::from),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                log::info!("No settings file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("failed to read settings {}: {e}", path.display()))?;
        let settings = toml::from_str(&raw)
            .map_err(|e| format!("failed to parse settings {}: {e}", path.display()))?;
        log::info!("Settings loaded from {}", path.display());
        Ok(settings)
    }
}
