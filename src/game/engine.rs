//! Round driver

use super::validation::validate;
use super::{GameError, GameSession, Outcome};
use crate::core::{Rejection, normalize_candidate};
use crate::dictionary::Dictionary;
use crate::wordlists::WordSource;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, trace};

/// Starts rounds and judges submitted words
///
/// Holds the collaborators a round needs but no round state of its own,
/// so one `Game` can serve any number of sessions.
pub struct Game<'a, S: ?Sized, D: ?Sized> {
    source: &'a S,
    dictionary: &'a D,
    language: String,
}

impl<'a, S, D> Game<'a, S, D>
where
    S: WordSource + ?Sized,
    D: Dictionary + ?Sized,
{
    /// Create a game drawing root words from `source` and checking words
    /// against `dictionary` in `language`
    pub fn new(source: &'a S, dictionary: &'a D, language: impl Into<String>) -> Self {
        Self {
            source,
            dictionary,
            language: language.into(),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn source(&self) -> &'a S {
        self.source
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a D {
        self.dictionary
    }

    /// Begin a round on a root word picked uniformly from the pool
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` when the source has no words, or
    /// `GameError::InvalidRootWord` if the chosen entry is malformed.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::game::Game;
    /// use word_scramble::wordlists::WordList;
    ///
    /// let source = WordList::from_slice(&["stream"]);
    /// let dictionary = |_: &str, _: &str| true;
    /// let game = Game::new(&source, &dictionary, "en");
    ///
    /// let session = game.start_new_game(&mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(session.root_word(), "stream");
    /// assert_eq!(session.score(), 0);
    /// ```
    pub fn start_new_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameSession, GameError> {
        let pool = self.source.pool();
        let root_word = pool.choose(rng).ok_or(GameError::EmptyPool)?;
        let session = GameSession::new(root_word.clone())?;

        debug!(root_word = %root_word, pool = pool.len(), "started new round");
        Ok(session)
    }

    /// Replace `session` with a fresh round
    ///
    /// On error the old session is left as it was.
    ///
    /// # Errors
    ///
    /// Same as [`Game::start_new_game`].
    pub fn restart<R: Rng + ?Sized>(
        &self,
        session: &mut GameSession,
        rng: &mut R,
    ) -> Result<(), GameError> {
        *session = self.start_new_game(rng)?;
        Ok(())
    }

    /// Judge a candidate without changing the round
    ///
    /// Returns `None` when the candidate is blank after normalization.
    #[must_use]
    pub fn check_word(&self, session: &GameSession, candidate: &str) -> Option<Result<(), Rejection>> {
        let word = normalize_candidate(candidate);
        if word.is_empty() {
            return None;
        }
        Some(validate(session, &word, self.dictionary, &self.language))
    }

    /// Submit a candidate word to the round
    ///
    /// The candidate is trimmed and lowercased first. Blank input is
    /// ignored. A rejected word leaves `session` untouched; an accepted
    /// word is prepended to the used words and its length added to the
    /// score.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    /// use word_scramble::game::{Game, GameSession, Outcome};
    ///
    /// let source: Vec<String> = vec!["stream".to_string()];
    /// let dictionary = |word: &str, _: &str| ["team", "mate"].contains(&word);
    /// let game = Game::new(&source, &dictionary, "en");
    /// let mut session = GameSession::new("stream").unwrap();
    ///
    /// assert!(game.submit_word(&mut session, " Team ").is_accepted());
    /// assert_eq!(
    ///     game.submit_word(&mut session, "team"),
    ///     Outcome::Rejected(Rejection::AlreadyUsed)
    /// );
    /// assert_eq!(game.submit_word(&mut session, "  "), Outcome::Ignored);
    /// assert_eq!(session.score(), 4);
    /// ```
    pub fn submit_word(&self, session: &mut GameSession, candidate: &str) -> Outcome {
        let word = normalize_candidate(candidate);
        if word.is_empty() {
            return Outcome::Ignored;
        }

        match validate(session, &word, self.dictionary, &self.language) {
            Ok(()) => {
                let points = session.accept(word.clone());
                debug!(word = %word, points, score = session.score(), "accepted word");
                Outcome::Accepted {
                    word,
                    points,
                    score: session.score(),
                }
            }
            Err(rejection) => {
                trace!(word = %word, root_word = session.root_word(), ?rejection, "rejected word");
                Outcome::Rejected(rejection)
            }
        }
    }
}
