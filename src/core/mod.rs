//! Core domain types for the word game
//!
//! Pure validation building blocks: candidate normalization, letter
//! multisets, and the rejection kinds. Nothing here touches I/O.

mod candidate;
mod letters;
mod rejection;

pub use candidate::{MIN_WORD_LENGTH, is_single_token, normalize_candidate};
pub use letters::{LetterPool, is_composable, letter_count};
pub use rejection::Rejection;
