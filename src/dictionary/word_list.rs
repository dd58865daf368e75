//! Word-list backed dictionary

use super::Dictionary;
use rustc_hash::FxHashSet;
use tracing::trace;

/// Dictionary answering from a fixed set of words in one language
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
    sorted: Vec<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from already-normalized words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::new("en", vec!["mate".to_string()]);
    /// assert!(dictionary.is_real_word("mate", "en"));
    /// assert!(!dictionary.is_real_word("mate", "de"));
    /// ```
    #[must_use]
    pub fn new(language: impl Into<String>, words: Vec<String>) -> Self {
        let words: FxHashSet<String> = words.into_iter().collect();
        let mut sorted: Vec<String> = words.iter().cloned().collect();
        sorted.sort_unstable();

        Self {
            language: language.into(),
            words,
            sorted,
        }
    }

    /// Language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// All known words, alphabetically
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.sorted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        if !self.language.eq_ignore_ascii_case(language) {
            trace!(
                language,
                dictionary = %self.language,
                "lookup in unsupported language"
            );
            return false;
        }
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordListDictionary {
        WordListDictionary::new(
            "en",
            vec!["team".to_string(), "mate".to_string(), "team".to_string()],
        )
    }

    #[test]
    fn deduplicates_and_sorts() {
        let dictionary = sample();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words(), ["mate", "team"]);
    }

    #[test]
    fn language_match_is_case_insensitive() {
        let dictionary = sample();
        assert!(dictionary.is_real_word("team", "EN"));
        assert!(!dictionary.is_real_word("team", "fr"));
    }

    #[test]
    fn unknown_word_is_not_real() {
        let dictionary = sample();
        assert!(!dictionary.is_real_word("meta", "en"));
        assert!(!dictionary.is_real_word("", "en"));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = WordListDictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.is_real_word("team", ""));
    }
}
