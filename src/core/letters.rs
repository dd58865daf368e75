//! Letter multisets
//!
//! A `LetterPool` tracks how many of each letter a root word offers, so a
//! candidate can only spend each letter as often as it appears.

use rustc_hash::FxHashMap;

/// Count the letters of a word
///
/// Letters are Unicode scalar values, so accented words score the same way
/// they are spelled.
///
/// # Examples
/// ```
/// use word_scramble::core::letter_count;
///
/// assert_eq!(letter_count("stream"), 6);
/// assert_eq!(letter_count("café"), 4);
/// ```
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Multiset of the letters in a word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from every letter of `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` the pool holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&n| n == 0)
    }

    /// Remove one copy of `letter`, returning false if none is left
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `candidate` can be spelled from this pool
    ///
    /// Consumes letters greedily from a scratch copy; the pool itself is
    /// left untouched.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining = self.clone();
        candidate.chars().all(|ch| remaining.take(ch))
    }
}

/// Check whether `candidate` uses only letters of `root`, respecting multiplicity
///
/// # Examples
/// ```
/// use word_scramble::core::is_composable;
///
/// assert!(is_composable("tee", "teetee"));
/// assert!(!is_composable("teeteex", "teetee"));
/// assert!(!is_composable("sees", "stream"));
/// ```
#[must_use]
pub fn is_composable(candidate: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::new("teetee");
        assert_eq!(pool.count('t'), 2);
        assert_eq!(pool.count('e'), 4);
        assert_eq!(pool.count('x'), 0);
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn take_exhausts_letter() {
        let mut pool = LetterPool::new("dog");
        assert!(pool.take('d'));
        assert!(!pool.take('d'));
        assert!(pool.take('o'));
        assert!(pool.take('g'));
        assert!(pool.is_empty());
    }

    #[test]
    fn can_spell_leaves_pool_intact() {
        let pool = LetterPool::new("stream");
        assert!(pool.can_spell("mate"));
        assert!(pool.can_spell("mate"));
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn composable_respects_multiplicity() {
        assert!(is_composable("tee", "teetee"));
        assert!(is_composable("teetee", "teetee"));
        assert!(!is_composable("teeteet", "teetee"));
    }

    #[test]
    fn composable_rejects_foreign_letter() {
        assert!(!is_composable("teeteex", "teetee"));
        assert!(!is_composable("cat", "dog"));
    }

    #[test]
    fn empty_candidate_is_composable() {
        assert!(is_composable("", "dog"));
        assert!(LetterPool::new("").is_empty());
    }

    #[test]
    fn letter_count_uses_chars() {
        assert_eq!(letter_count(""), 0);
        assert_eq!(letter_count("tee"), 3);
        assert_eq!(letter_count("naïve"), 5);
    }
}
