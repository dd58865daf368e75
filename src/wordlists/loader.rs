//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{is_single_token, normalize_candidate};
use std::fs;
use std::io;
use std::path::Path;

/// Normalize one line of a word list
///
/// Returns `None` for blank lines and entries with internal whitespace.
fn normalize_entry(line: &str) -> Option<String> {
    let word = normalize_candidate(line);
    is_single_token(&word).then_some(word)
}

/// Load words from a file, one per line
///
/// Entries are trimmed and lowercased; blank lines and multi-word entries
/// are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_entry).collect())
}

/// Convert embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize_entry(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["Stream", "  dog  ", "teetee"]);
        assert_eq!(words, ["stream", "dog", "teetee"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["stream", "", "   ", "two words", "dog"]);
        assert_eq!(words, ["stream", "dog"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_trailing_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "silkworm\nDinosaur\n\n  hamsters \n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, ["silkworm", "dinosaur", "hamsters"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
