//! Syllable estimation by vowel groups.
//!
//! No dictionary: every word is estimated by counting runs of vowels, with a
//! silent-e correction. Short words (three characters or fewer) always count
//! as one syllable.

/// `y` counts as a vowel.
const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the number of syllables in a word.
///
/// Always returns at least 1, including for the empty string.
pub fn count_syllables(word: &str) -> usize {
    let word = word.trim().to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut prev_was_vowel = false;
    for ch in word.chars() {
        let vowel = is_vowel(ch);
        if vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = vowel;
    }

    // Silent trailing e
    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}
