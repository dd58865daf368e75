//! Errors that stop a round from starting

/// Failure to set up a round
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The word source has nothing to draw from
    #[error("no root words available: the word list is empty")]
    EmptyPool,
    /// A root word was not a single lowercase token
    #[error("invalid root word {0:?}: expected a single lowercase word")]
    InvalidRootWord(String),
    /// A restored round lists a word the game could never have accepted
    #[error("invalid used word {0:?} for this round")]
    InvalidUsedWord(String),
    /// A restored round's score disagrees with its used words
    #[error("score {found} does not match used words worth {expected}")]
    ScoreMismatch { expected: usize, found: usize },
}
