//! Shared test utilities: deterministic randomness and fake spell checkers.

#![allow(dead_code)]

use parlor::dict::{SpellChecker, WordList};
use parlor::rng::RandomSource;
use std::path::PathBuf;
use tempfile::TempDir;

/// Random source that replays a fixed sequence of picks, clamped to the
/// requested bound, then repeats the last value.
pub struct ScriptedRng {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }

    /// Source that always answers zero.
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedRng {
    fn pick(&mut self, bound: usize) -> usize {
        let index = self.next.min(self.picks.len().saturating_sub(1));
        if self.next < self.picks.len() {
            self.next += 1;
        }
        self.picks
            .get(index)
            .copied()
            .unwrap_or(0)
            .min(bound.saturating_sub(1))
    }
}

/// Spell checker recognizing a fixed set of words.
pub struct FakeChecker {
    words: Vec<&'static str>,
}

impl FakeChecker {
    pub fn recognizing(words: &[&'static str]) -> Self {
        Self {
            words: words.to_vec(),
        }
    }

    pub fn accept_all() -> Self {
        Self { words: Vec::new() }
    }
}

impl SpellChecker for FakeChecker {
    fn check(&self, word: &str, _language: &str) -> bool {
        self.words.is_empty() || self.words.contains(&word)
    }
}

/// Write a newline-delimited word file and return the directory guard
/// alongside its path.
pub fn temp_word_file(words: &[&str]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("words.txt");
    std::fs::write(&path, words.join("\n")).expect("Failed to write word file");
    (dir, path)
}

/// Single-word start list for deterministic sessions.
pub fn single_word_list(word: &str) -> WordList {
    WordList::parse("test", word).expect("word list")
}
