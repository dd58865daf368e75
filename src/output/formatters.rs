//! Formatting utilities for terminal output

use crate::core::Rejection;
use crate::game::Outcome;

/// Badge showing a word's length, like ④ for a four-letter word
///
/// Circled digits cover 1 to 20; longer words fall back to `(n)`.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// Heading for the used-word list
#[must_use]
pub fn found_label(count: usize) -> String {
    if count == 1 {
        "1 word found".to_string()
    } else {
        format!("{count} words found")
    }
}

/// Score line
#[must_use]
pub fn points_label(score: usize) -> String {
    if score == 1 {
        "You have 1 point".to_string()
    } else {
        format!("You have {score} points")
    }
}

/// Title and message for a rejection, as shown in an alert
#[must_use]
pub fn rejection_text(rejection: Rejection, root_word: &str) -> (&'static str, String) {
    (rejection.title(), rejection.message(root_word))
}

/// One-line summary of an outcome, or `None` when nothing happened
#[must_use]
pub fn describe_outcome(outcome: &Outcome, root_word: &str) -> Option<String> {
    match outcome {
        Outcome::Ignored => None,
        Outcome::Accepted { word, points, score } => Some(format!(
            "{word} accepted: +{points} ({})",
            points_label(*score)
        )),
        Outcome::Rejected(rejection) => {
            let (title, message) = rejection_text(*rejection, root_word);
            Some(format!("{title}: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_circled_digits() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(3), "③");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn badge_falls_back_for_long_words() {
        assert_eq!(length_badge(21), "(21)");
        assert_eq!(length_badge(0), "(0)");
    }

    #[test]
    fn found_label_pluralizes() {
        assert_eq!(found_label(0), "0 words found");
        assert_eq!(found_label(1), "1 word found");
        assert_eq!(found_label(7), "7 words found");
    }

    #[test]
    fn points_label_pluralizes() {
        assert_eq!(points_label(0), "You have 0 points");
        assert_eq!(points_label(1), "You have 1 point");
        assert_eq!(points_label(12), "You have 12 points");
    }

    #[test]
    fn describe_accepted() {
        let outcome = Outcome::Accepted {
            word: "team".to_string(),
            points: 4,
            score: 9,
        };
        assert_eq!(
            describe_outcome(&outcome, "stream").unwrap(),
            "team accepted: +4 (You have 9 points)"
        );
    }

    #[test]
    fn describe_rejected() {
        let outcome = Outcome::Rejected(Rejection::NotComposable);
        assert_eq!(
            describe_outcome(&outcome, "dog").unwrap(),
            "Word not possible: You can't spell that word from dog!"
        );
        assert_eq!(describe_outcome(&Outcome::Ignored, "dog"), None);
    }
}
