use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Word game settings.
    #[serde(default)]
    pub scramble: ScrambleConfig,
}

/// Word game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Override for the bundled start-word list.
    #[serde(default)]
    pub words_path: Option<PathBuf>,
    /// Newline-delimited dictionary used for spell checking
    /// (default: /usr/share/dict/words).
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// Language tag passed to the spell checker (default: "en").
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("/usr/share/dict/words")
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            scramble: ScrambleConfig::default(),
        }
    }
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            words_path: None,
            dictionary_path: default_dictionary_path(),
            language: default_language(),
        }
    }
}
