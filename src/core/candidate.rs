//! Candidate normalization

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize raw player input before validation
///
/// Trims surrounding whitespace and lowercases the rest.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize_candidate;
///
/// assert_eq!(normalize_candidate("  Stream \n"), "stream");
/// assert_eq!(normalize_candidate("   "), "");
/// ```
#[must_use]
pub fn normalize_candidate(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check that a word is a single lowercase token
///
/// Root words must satisfy this; candidates are not required to.
#[must_use]
pub fn is_single_token(word: &str) -> bool {
    !word.is_empty() && !word.chars().any(char::is_whitespace) && word.to_lowercase() == word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_candidate("  Stream "), "stream");
        assert_eq!(normalize_candidate("\tDOG\r\n"), "dog");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_candidate(" Ice Cream "), "ice cream");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize_candidate(""), "");
        assert_eq!(normalize_candidate(" \n\t "), "");
    }

    #[test]
    fn single_token_checks() {
        assert!(is_single_token("streamline"));
        assert!(!is_single_token(""));
        assert!(!is_single_token("two words"));
        assert!(!is_single_token("Stream"));
        assert!(!is_single_token("tab\there"));
    }
}
