//! Word lists for the game
//!
//! Provides the root-word pool and the built-in dictionary, embedded in the
//! binary, plus loaders for replacing either with a plain-text file.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{WordList, WordSource};
