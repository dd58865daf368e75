//! Root-word sources

use super::loader::{load_from_file, words_from_slice};
use std::io;
use std::path::Path;

/// Supplies the pool of root words a round may start from
pub trait WordSource {
    /// Every candidate root word
    fn pool(&self) -> &[String];
}

impl WordSource for Vec<String> {
    fn pool(&self) -> &[String] {
        self
    }
}

impl WordSource for [String] {
    fn pool(&self) -> &[String] {
        self
    }
}

/// An in-memory list of root words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Build from string slices, normalizing each entry
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::{WordList, WordSource};
    ///
    /// let list = WordList::from_slice(&["Stream", "", "dog"]);
    /// assert_eq!(list.pool(), ["stream", "dog"]);
    /// ```
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self::new(words_from_slice(words))
    }

    /// Load a plain-text list, one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl WordSource for WordList {
    fn pool(&self) -> &[String] {
        &self.words
    }
}
