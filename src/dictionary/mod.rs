//! Dictionary lookups
//!
//! The game only needs to ask one question of a dictionary: is this a real
//! word in the configured language? Anything that can answer it plugs in.

mod word_list;

pub use word_list::WordListDictionary;

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// A spell-check capability
///
/// Lookups must be synchronous and free of side effects.
pub trait Dictionary {
    /// Return true if `word` is a recognized word in `language`
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<D: Dictionary + ?Sized>(dictionary: &D, word: &str) -> bool {
        dictionary.is_real_word(word, DEFAULT_LANGUAGE)
    }

    #[test]
    fn closures_act_as_dictionaries() {
        let only_cat = |word: &str, _: &str| word == "cat";
        assert!(lookup(&only_cat, "cat"));
        assert!(!lookup(&only_cat, "dog"));
    }

    #[test]
    fn closures_see_language() {
        let english_only = |_: &str, language: &str| language == "en";
        assert!(english_only.is_real_word("anything", "en"));
        assert!(!english_only.is_real_word("anything", "fr"));
    }

    #[test]
    fn trait_objects_work() {
        let permissive = |_: &str, _: &str| true;
        let dynamic: &dyn Dictionary = &permissive;
        assert!(lookup(dynamic, "zzz"));
    }
}
