use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::GameError;

/// Ordered list of target words, uppercase, no duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Normalize every word to uppercase and reject empty, non-alphabetic or
    /// repeated entries
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for word in words {
            let word = word.as_ref().trim().to_uppercase();
            if word.is_empty() {
                return Err(GameError::EmptyWord);
            }
            if let Some(letter) = word.chars().find(|c| !c.is_alphabetic()) {
                return Err(GameError::InvalidCharacter { word, letter });
            }
            if !seen.insert(word.clone()) {
                return Err(GameError::DuplicateWord(word));
            }
            normalized.push(word);
        }

        Ok(Self { words: normalized })
    }

    /// Load a word list from a file with one word per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let list = Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
        .with_context(|| format!("invalid word list {}", path.display()))?;

        tracing::info!("Loaded {} words from {}", list.len(), path.display());

        Ok(list)
    }

    /// Check if a word is a target, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.words.iter().any(|w| *w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length in letters of the longest word
    pub fn longest(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0)
    }
}
