//! Round state

use super::GameError;
use crate::core::{MIN_WORD_LENGTH, Rejection, is_composable, is_single_token, letter_count};
use serde::{Deserialize, Serialize};

/// State of one round
///
/// Plain data: the UI layer owns it and hands it to [`super::Game`] to
/// change. Fields are only mutated through the validation pipeline, which
/// keeps the invariants below.
///
/// - every used word is spelled from `root_word`, at least three letters,
///   not the root word itself, and was a dictionary word;
/// - `score` is the total letter count of `used_words`.
///
/// Deserializing replays the used words onto a fresh round, so a restored
/// session keeps the same invariants (apart from dictionary membership).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionData")]
pub struct GameSession {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl GameSession {
    /// Start a fresh round on `root_word`
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidRootWord` unless the root word is a single
    /// lowercase token.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::GameSession;
    ///
    /// let session = GameSession::new("stream").unwrap();
    /// assert_eq!(session.root_word(), "stream");
    /// assert!(session.used_words().is_empty());
    /// assert_eq!(session.score(), 0);
    ///
    /// assert!(GameSession::new("two words").is_err());
    /// ```
    pub fn new(root_word: impl Into<String>) -> Result<Self, GameError> {
        let root_word = root_word.into();
        if !is_single_token(&root_word) {
            return Err(GameError::InvalidRootWord(root_word));
        }

        Ok(Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
        })
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Check whether `word` was already accepted this round
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Record an accepted word and return the points it earned
    pub(super) fn accept(&mut self, word: String) -> usize {
        let points = letter_count(&word);
        self.used_words.insert(0, word);
        self.score += points;
        points
    }
}

/// Unchecked serialized form of [`GameSession`]
#[derive(Deserialize)]
struct SessionData {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl TryFrom<SessionData> for GameSession {
    type Error = GameError;

    fn try_from(data: SessionData) -> Result<Self, Self::Error> {
        let mut session = Self::new(data.root_word)?;

        // Stored most recent first; replay oldest first to keep the order
        for word in data.used_words.into_iter().rev() {
            let playable = is_single_token(&word)
                && letter_count(&word) >= MIN_WORD_LENGTH
                && word != session.root_word
                && is_composable(&word, &session.root_word)
                && !session.is_used(&word);
            if !playable {
                return Err(GameError::InvalidUsedWord(word));
            }
            session.accept(word);
        }

        if session.score != data.score {
            return Err(GameError::ScoreMismatch {
                expected: session.score,
                found: data.score,
            });
        }

        Ok(session)
    }
}

/// What happened to a submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was entered
    Ignored,
    /// The word was added to the round
    Accepted {
        word: String,
        points: usize,
        score: usize,
    },
    /// The word failed a check; the round is unchanged
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}
