//! Hints command
//!
//! Lists every word a fresh round on a root word would accept.

use crate::core::letter_count;
use crate::dictionary::Dictionary;
use crate::game::{Game, GameError, GameSession};
use crate::wordlists::WordSource;
use rayon::prelude::*;

/// Result of searching for playable words
pub struct HintsResult {
    pub root_word: String,
    /// Playable words, longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for playing every word
    pub max_score: usize,
}

/// Find every word in `vocabulary` that `root_word` accepts
///
/// Each word goes through the same pipeline a submission would, so the
/// dictionary is still the judge of what counts as a word.
///
/// # Errors
///
/// Returns an error if `root_word` is not a single lowercase word.
pub fn find_hints<S, D>(
    game: &Game<'_, S, D>,
    root_word: &str,
    vocabulary: &[String],
) -> Result<HintsResult, GameError>
where
    S: WordSource + Sync + ?Sized,
    D: Dictionary + Sync + ?Sized,
{
    let session = GameSession::new(root_word.trim().to_lowercase())?;

    let mut words: Vec<String> = vocabulary
        .par_iter()
        .filter(|word| matches!(game.check_word(&session, word), Some(Ok(()))))
        .cloned()
        .collect();
    words.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let max_score = words.iter().map(|w| letter_count(w)).sum();

    Ok(HintsResult {
        root_word: session.root_word().to_string(),
        words,
        max_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn vocabulary(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn finds_playable_words() {
        let vocabulary = vocabulary(&[
            "am", "team", "mate", "stream", "master", "cat", "ram", "meats", "tress",
        ]);
        let dictionary = WordListDictionary::new("en", vocabulary.clone());
        let source: Vec<String> = Vec::new();
        let game = Game::new(&source, &dictionary, "en");

        let result = find_hints(&game, "stream", &vocabulary).unwrap();

        assert_eq!(result.root_word, "stream");
        assert_eq!(result.words, ["master", "meats", "mate", "team", "ram"]);
        assert_eq!(result.max_score, 6 + 5 + 4 + 4 + 3);
    }

    #[test]
    fn dictionary_still_decides() {
        let vocabulary = vocabulary(&["team", "mate"]);
        let dictionary = |word: &str, _: &str| word == "mate";
        let source: Vec<String> = Vec::new();
        let game = Game::new(&source, &dictionary, "en");

        let result = find_hints(&game, "stream", &vocabulary).unwrap();
        assert_eq!(result.words, ["mate"]);
        assert_eq!(result.max_score, 4);
    }

    #[test]
    fn nothing_playable() {
        let vocabulary = vocabulary(&["zebra"]);
        let dictionary = |_: &str, _: &str| true;
        let source: Vec<String> = Vec::new();
        let game = Game::new(&source, &dictionary, "en");

        let result = find_hints(&game, "dog", &vocabulary).unwrap();
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
    }
}
