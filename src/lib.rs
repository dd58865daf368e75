//! Word Scramble
//!
//! A word game: spell shorter words from the letters of a randomly chosen
//! root word. Words must be new this round, spelled from the root word's
//! letters, real words, at least three letters long, and not the root word
//! itself. Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Rejection;
//! use word_scramble::game::{Game, GameSession, Outcome};
//! use word_scramble::wordlists::WordList;
//!
//! let source = WordList::from_slice(&["stream"]);
//! let dictionary = |word: &str, _: &str| ["team", "mate"].contains(&word);
//! let game = Game::new(&source, &dictionary, "en");
//!
//! let mut session = GameSession::new("stream").unwrap();
//! assert!(game.submit_word(&mut session, "mate").is_accepted());
//! assert_eq!(
//!     game.submit_word(&mut session, "cat"),
//!     Outcome::Rejected(Rejection::NotComposable)
//! );
//! assert_eq!(session.score(), 4);
//! ```

// Core domain types
pub mod core;

// Rounds and the validation pipeline
pub mod game;

// Dictionary lookups
pub mod dictionary;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Diagnostic tracing
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
