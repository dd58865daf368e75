//! Scripted check command
//!
//! Plays a list of candidates against a fixed root word and reports every
//! outcome.

use crate::dictionary::Dictionary;
use crate::game::{Game, GameError, GameSession, Outcome};
use crate::wordlists::WordSource;

/// A candidate and what the round made of it
pub struct CheckEntry {
    pub candidate: String,
    pub outcome: Outcome,
}

/// Result of checking a sequence of candidates
pub struct CheckResult {
    pub session: GameSession,
    pub entries: Vec<CheckEntry>,
}

/// Submit `candidates` in order to a fresh round on `root_word`
///
/// # Errors
///
/// Returns an error if `root_word` is not a single lowercase word.
pub fn check_words<S, D>(
    game: &Game<'_, S, D>,
    root_word: &str,
    candidates: &[String],
) -> Result<CheckResult, GameError>
where
    S: WordSource + ?Sized,
    D: Dictionary + ?Sized,
{
    let mut session = GameSession::new(root_word.trim().to_lowercase())?;

    let entries = candidates
        .iter()
        .map(|candidate| CheckEntry {
            candidate: candidate.clone(),
            outcome: game.submit_word(&mut session, candidate),
        })
        .collect();

    Ok(CheckResult { session, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn checks_in_order() {
        let source: Vec<String> = Vec::new();
        let dictionary = |word: &str, _: &str| ["team", "mate", "stream"].contains(&word);
        let game = Game::new(&source, &dictionary, "en");

        let result = check_words(&game, "Stream", &words(&["team", "TEAM", "mate", "stream", ""]))
            .unwrap();

        let outcomes: Vec<_> = result.entries.iter().map(|e| e.outcome.clone()).collect();
        assert!(outcomes[0].is_accepted());
        assert_eq!(outcomes[1], Outcome::Rejected(Rejection::AlreadyUsed));
        assert!(outcomes[2].is_accepted());
        assert_eq!(outcomes[3], Outcome::Rejected(Rejection::IsRootWord));
        assert_eq!(outcomes[4], Outcome::Ignored);

        assert_eq!(result.session.root_word(), "stream");
        assert_eq!(result.session.score(), 8);
    }

    #[test]
    fn invalid_root_is_an_error() {
        let source: Vec<String> = Vec::new();
        let dictionary = |_: &str, _: &str| true;
        let game = Game::new(&source, &dictionary, "en");

        assert!(check_words(&game, "two words", &[]).is_err());
    }
}
