//! Reasons a submitted word can be turned down

use serde::{Deserialize, Serialize};

/// A failed validation check
///
/// Variants are listed in the order the checks run. `Display` renders the
/// short title; [`Rejection::message`] gives the longer explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Rejection {
    /// The word was already accepted this round
    #[error("Word used already")]
    AlreadyUsed,
    /// The word needs letters the root word does not have
    #[error("Word not possible")]
    NotComposable,
    /// The dictionary does not know the word
    #[error("Word not recognized")]
    NotAWord,
    /// The word is shorter than three letters
    #[error("Word is less than 3 letters")]
    TooShort,
    /// The word is the root word itself
    #[error("Word is root word")]
    IsRootWord,
}

impl Rejection {
    /// Every rejection kind, in pipeline order
    pub const ALL: [Self; 5] = [
        Self::AlreadyUsed,
        Self::NotComposable,
        Self::NotAWord,
        Self::TooShort,
        Self::IsRootWord,
    ];

    /// Short title suitable for an alert heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotComposable => "Word not possible",
            Self::NotAWord => "Word not recognized",
            Self::TooShort => "Word is less than 3 letters",
            Self::IsRootWord => "Word is root word",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotComposable => format!("You can't spell that word from {root_word}!"),
            Self::NotAWord => "You made up that word!".to_string(),
            Self::TooShort => "Can't use words with less than 3 characters!".to_string(),
            Self::IsRootWord => format!("You can't use {root_word}!"),
        }
    }
}
