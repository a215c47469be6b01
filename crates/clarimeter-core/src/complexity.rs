//! Complex-word classification.
//!
//! A word is complex when it has three or more syllables, with two
//! exclusions: capitalized words (treated as proper nouns, which also
//! catches every sentence-initial word) and words that only reach three
//! syllables through a common inflectional suffix.

use crate::syllables::count_syllables;

/// Suffixes that do not make a word harder to read.
pub const COMMON_SUFFIXES: &[&str] = &[
    "ed", "es", "ing", "s", "ly", "er", "est", "ion", "tion", "ness",
];

/// Minimum syllable count for a complex word.
const COMPLEX_SYLLABLES: usize = 3;

/// Classify a word as complex.
pub fn is_complex(word: &str) -> bool {
    let mut chars = word.chars();
    if chars.next().is_some_and(char::is_uppercase) && chars.next().is_some() {
        return false;
    }

    let clean: String = word
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase();
    if clean.chars().count() < 3 {
        return false;
    }

    let syllables = count_syllables(&clean);

    let inflected = COMMON_SUFFIXES.iter().any(|suffix| {
        clean.len() > suffix.len()
            && clean
                .strip_suffix(suffix)
                .is_some_and(|base| count_syllables(base) < COMPLEX_SYLLABLES)
    });
    if inflected {
        return false;
    }

    syllables >= COMPLEX_SYLLABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polysyllabic_words_are_complex() {
        assert!(is_complex("beautiful"));
        assert!(is_complex("organization"));
        assert!(is_complex("interesting"));
    }

    #[test]
    fn capitalized_words_never_complex() {
        assert!(!is_complex("International"));
        assert!(!is_complex("Beautiful"));
        assert!(!is_complex("ORGANIZATION"));
    }

    #[test]
    fn short_words_not_complex() {
        assert!(!is_complex("it"));
        assert!(!is_complex("A"));
        assert!(!is_complex("cat"));
    }

    #[test]
    fn suffix_reducing_below_three_is_not_complex() {
        // happi-ness
        assert!(!is_complex("happiness"));
        // excit-ed
        assert!(!is_complex("excited"));
        // relat-ion
        assert!(!is_complex("relation"));
    }

    #[test]
    fn suffix_leaving_three_syllables_stays_complex() {
        // beautiful-ly keeps three syllables in the base
        assert!(is_complex("beautifully"));
    }

    #[test]
    fn punctuation_is_stripped_before_scoring() {
        assert!(is_complex("re-evaluate,"));
        assert!(!is_complex("--"));
    }

    #[test]
    fn two_syllable_words_not_complex() {
        assert!(!is_complex("hello"));
        assert!(!is_complex("complete"));
    }
}
