//! The ordered validation pipeline
//!
//! Checks run in a fixed order and the first failure decides the
//! rejection. Callers rely on the order: a word that is both used and equal
//! to the root word reports `AlreadyUsed`.

use super::GameSession;
use crate::core::{MIN_WORD_LENGTH, Rejection, is_composable, letter_count};
use crate::dictionary::Dictionary;

/// Run every check against an already-normalized, non-empty candidate
///
/// # Errors
///
/// Returns the first failing [`Rejection`].
pub fn validate<D: Dictionary + ?Sized>(
    session: &GameSession,
    candidate: &str,
    dictionary: &D,
    language: &str,
) -> Result<(), Rejection> {
    if !is_original(session, candidate) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(session, candidate) {
        return Err(Rejection::NotComposable);
    }
    if !dictionary.is_real_word(candidate, language) {
        return Err(Rejection::NotAWord);
    }
    if !is_long_enough(candidate) {
        return Err(Rejection::TooShort);
    }
    if is_root_word(session, candidate) {
        return Err(Rejection::IsRootWord);
    }
    Ok(())
}

#[inline]
fn is_original(session: &GameSession, candidate: &str) -> bool {
    !session.is_used(candidate)
}

#[inline]
fn is_possible(session: &GameSession, candidate: &str) -> bool {
    is_composable(candidate, session.root_word())
}

#[inline]
fn is_long_enough(candidate: &str) -> bool {
    letter_count(candidate) >= MIN_WORD_LENGTH
}

#[inline]
fn is_root_word(session: &GameSession, candidate: &str) -> bool {
    candidate == session.root_word()
}
