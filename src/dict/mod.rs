//! Word list loading and spell checking.
//!
//! The word game consumes two external text collaborators: a start-word
//! list from which each session's root word is drawn, and a dictionary
//! used to decide whether a submitted word is real. Both are
//! newline-delimited text. The dictionary sits behind the [`SpellChecker`]
//! trait so the acceptance rule can be tested without a real dictionary.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rng::RandomSource;

/// Start-word list bundled into the binary.
const EMBEDDED_START_WORDS: &str = include_str!("../../assets/start.txt");

/// Errors that can occur when loading word assets.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("Failed to read word file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list '{name}' contains no usable words")]
    EmptyList { name: String },
}

/// A non-empty collection of candidate root words.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse a newline-delimited word list. Blank lines are skipped.
    pub fn parse(name: &str, content: &str) -> Result<Self, DictError> {
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(DictError::EmptyList {
                name: name.to_string(),
            });
        }

        Ok(Self { words })
    }

    /// Load a word list from a file on disk.
    pub fn load(path: &Path) -> Result<Self, DictError> {
        let content = fs::read_to_string(path).map_err(|e| DictError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&path.display().to_string(), &content)
    }

    /// The word list compiled into the binary.
    ///
    /// The embedded asset is validated at parse time like any other list;
    /// an empty asset is a build defect surfaced as a startup error.
    pub fn embedded() -> Result<Self, DictError> {
        Self::parse("embedded start list", EMBEDDED_START_WORDS)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random. Repeats across calls are allowed.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> &str {
        &self.words[rng.pick(self.words.len())]
    }
}

/// External spell-checking capability.
///
/// Given a word and a BCP-47-ish language tag, report whether the word is
/// recognized. Implementations are black boxes; the game only consumes the
/// yes/no answer.
pub trait SpellChecker: Send {
    fn check(&self, word: &str, language: &str) -> bool;
}

/// Spell checker backed by a newline-delimited dictionary file
/// (e.g. `/usr/share/dict/words`).
///
/// Entries are lowercased at load time; lookups are exact matches against
/// the normalized candidate. The language tag is accepted for interface
/// compatibility but a loaded dictionary covers exactly one language.
#[derive(Debug)]
pub struct FileDictionary {
    words: HashSet<String>,
}

impl FileDictionary {
    pub fn load(path: &Path) -> Result<Self, DictError> {
        let content = fs::read_to_string(path).map_err(|e| DictError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(DictError::EmptyList {
                name: path.display().to_string(),
            });
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl SpellChecker for FileDictionary {
    fn check(&self, word: &str, _language: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPick(usize);

    impl RandomSource for FixedPick {
        fn pick(&mut self, bound: usize) -> usize {
            self.0.min(bound - 1)
        }
    }

    #[test]
    fn parse_skips_blank_lines_and_lowercases() {
        let list = WordList::parse("test", "Alpha\n\n  \nbravo\n").unwrap();
        assert_eq!(list.len(), 2);
        let mut rng = FixedPick(0);
        assert_eq!(list.pick(&mut rng), "alpha");
    }

    #[test]
    fn parse_rejects_empty_content() {
        let err = WordList::parse("test", "\n  \n").unwrap_err();
        assert!(matches!(err, DictError::EmptyList { .. }));
    }

    #[test]
    fn embedded_list_is_usable() {
        let list = WordList::embedded().unwrap();
        assert!(!list.is_empty());
    }

    #[test]
    fn pick_returns_selected_index() {
        let list = WordList::parse("test", "one\ntwo\nthree").unwrap();
        let mut rng = FixedPick(2);
        assert_eq!(list.pick(&mut rng), "three");
    }
}
