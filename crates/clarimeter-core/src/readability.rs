//! Readability scoring.
//!
//! Computes raw counts (words, sentences, syllables, complex and long words,
//! paragraphs) and five indices derived from them:
//!
//! - Clarity Index: `ASL + 100 * complex_words / words`
//! - Gunning Fog: `0.4 * (ASL + 100 * complex_words / words)`
//! - Infogineering Index: `(ASL + 100 * long_words / words + 5 * sentences / paragraphs) / 2`
//! - Flesch Reading Ease: `206.835 - 1.015 * ASL - 84.6 * (syllables / words)`
//! - Flesch-Kincaid Grade: `0.39 * ASL + 11.8 * (syllables / words) - 15.59`
//!
//! `ASL` is the average sentence length in words. Every index is computed
//! from unrounded inputs and rounded to two decimals only when stored, ties
//! going to the even digit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::complexity::is_complex;
use crate::syllables::count_syllables;
use crate::text;

/// Words longer than this many characters count as long words.
const LONG_WORD_CHARS: usize = 8;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metrics {
    /// Number of words detected.
    pub words: usize,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Words with three or more syllables, excluding proper nouns and inflections.
    pub complex_words: usize,
    /// Words longer than eight characters.
    pub long_words: usize,
    /// Number of paragraphs (at least 1).
    pub paragraphs: usize,
    /// Average sentence length in words.
    pub asl: f64,
    /// Percentage of complex words.
    pub pcw: f64,
    /// Average sentences per paragraph.
    pub aspp: f64,
    /// Clarity Index.
    pub clarity_index: f64,
    /// Gunning Fog index.
    pub gunning_fog: f64,
    /// Infogineering Index.
    pub infogineering_index: f64,
    /// Flesch Reading Ease score.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: f64,
}

/// Analyze text and compute readability metrics.
///
/// Returns `None` when the text is blank or has no detectable sentence or
/// word. That is an expected outcome, distinct from any zero-valued record.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> Option<Metrics> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let paragraphs = text::split_paragraphs(text).len().max(1);

    let sentences = text::split_sentences(text).len();
    if sentences == 0 {
        tracing::debug!("no sentences detected");
        return None;
    }

    let word_list = text::extract_words(text);
    let words = word_list.len();
    if words == 0 {
        tracing::debug!("no words detected");
        return None;
    }

    let mut syllables = 0;
    let mut complex_words = 0;
    let mut long_words = 0;
    for word in &word_list {
        syllables += count_syllables(word);
        if is_complex(word) {
            complex_words += 1;
        }
        if word.chars().count() > LONG_WORD_CHARS {
            long_words += 1;
        }
    }

    let w = words as f64;
    let s = sentences as f64;
    let p = paragraphs as f64;

    let asl = w / s;
    let pcw = complex_words as f64 / w * 100.0;
    let aspp = s / p;
    let syllables_per_word = syllables as f64 / w;

    let clarity = asl + 100.0 * complex_words as f64 / w;
    let gunning_fog = 0.4 * (asl + 100.0 * complex_words as f64 / w);
    let infogineering = (asl + 100.0 * long_words as f64 / w + 5.0 * s / p) / 2.0;
    // Evaluated left to right, no fused multiply-add
    #[allow(clippy::suboptimal_flops)]
    let reading_ease = 206.835 - 1.015 * asl - 84.6 * syllables_per_word;
    #[allow(clippy::suboptimal_flops)]
    let grade = 0.39 * asl + 11.8 * syllables_per_word - 15.59;

    tracing::debug!(words, sentences, syllables, complex_words, "text analyzed");

    Some(Metrics {
        words,
        sentences,
        syllables,
        complex_words,
        long_words,
        paragraphs,
        asl: round2(asl),
        pcw: round2(pcw),
        aspp: round2(aspp),
        clarity_index: round2(clarity),
        gunning_fog: round2(gunning_fog),
        infogineering_index: round2(infogineering),
        flesch_reading_ease: round2(reading_ease),
        flesch_kincaid_grade: round2(grade),
    })
}

/// Round to two decimals from the exact binary value, ties to even.
///
/// Scaling by 100 first would round an already-inexact product, so `1.125`
/// would become `1.13` instead of `1.12`.
fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLEX_PROSE: &str = "The implementation of the comprehensive organizational \
        restructuring initiative necessitated the establishment of interdepartmental \
        communication protocols that facilitated the dissemination of procedural \
        documentation.";

    #[test]
    fn basic_counts() {
        let m = analyze("The cat sat. The dog ran.").unwrap();
        assert_eq!(m.words, 6);
        assert_eq!(m.sentences, 2);
        assert_eq!(m.paragraphs, 1);
        assert_eq!(m.syllables, 6);
        assert_eq!(m.complex_words, 0);
        assert_eq!(m.long_words, 0);
        assert_eq!(m.asl, 3.0);
        assert_eq!(m.pcw, 0.0);
        assert_eq!(m.aspp, 2.0);
    }

    #[test]
    fn simple_text_formulas() {
        let m = analyze("The cat sat. The dog ran.").unwrap();
        assert_eq!(m.clarity_index, 3.0);
        assert_eq!(m.gunning_fog, 1.2);
        // (3 + 0 + 5 * 2 / 1) / 2
        assert_eq!(m.infogineering_index, 6.5);
        // 206.835 - 3.045 - 84.6
        assert_eq!(m.flesch_reading_ease, 119.19);
        // 1.17 + 11.8 - 15.59
        assert_eq!(m.flesch_kincaid_grade, -2.62);
    }

    #[test]
    fn blank_input_has_no_result() {
        assert!(analyze("").is_none());
        assert!(analyze("   ").is_none());
        assert!(analyze("\n\n\t").is_none());
    }

    #[test]
    fn punctuation_only_has_no_result() {
        assert!(analyze("???").is_none());
        assert!(analyze("... !!! ???").is_none());
    }

    #[test]
    fn sentence_without_words_has_no_result() {
        assert!(analyze("-- ;;").is_none());
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        let m = analyze("no punctuation here").unwrap();
        assert_eq!(m.sentences, 1);
        assert_eq!(m.words, 3);
    }

    #[test]
    fn counts_paragraphs() {
        let m = analyze("First one. Still first.\n\nSecond here.\n  \nThird.").unwrap();
        assert_eq!(m.paragraphs, 3);
        assert_eq!(m.sentences, 4);
        assert_eq!(m.aspp, 1.33);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round2(1.125), 1.12);
        assert_eq!(round2(6.625), 6.62);
        assert_eq!(round2(28.125), 28.12);
        assert_eq!(round2(1.135), 1.14);
        assert_eq!(round2(-2.62), -2.62);
        assert_eq!(round2(3.0), 3.0);
    }

    #[test]
    fn nine_sentences_over_eight_paragraphs() {
        let text = format!("{}Go now. Go now.", "Go now.\n\n".repeat(7));
        let m = analyze(&text).unwrap();
        assert_eq!(m.paragraphs, 8);
        assert_eq!(m.sentences, 9);
        assert_eq!(m.aspp, 1.12);
    }

    #[test]
    fn fifty_three_words_over_eight_sentences() {
        let text = format!("{}We go to it.", "We go to the big red shop. ".repeat(7));
        let m = analyze(&text).unwrap();
        assert_eq!(m.words, 53);
        assert_eq!(m.sentences, 8);
        assert_eq!(m.asl, 6.62);
    }

    #[test]
    fn capitalized_mid_text_word_not_complex() {
        let m = analyze("We met. International people came.").unwrap();
        assert_eq!(m.complex_words, 0);
        let m = analyze("We met. The international people came.").unwrap();
        assert_eq!(m.complex_words, 1);
    }

    #[test]
    fn long_words_use_raw_length() {
        let m = analyze("Extraordinary things happen occasionally.").unwrap();
        // "Extraordinary" and "occasionally" exceed eight characters
        assert_eq!(m.long_words, 2);
    }

    #[test]
    fn gunning_fog_uses_unrounded_inputs() {
        let m = analyze(COMPLEX_PROSE).unwrap();
        let w = m.words as f64;
        let expected = 0.4 * (w / m.sentences as f64 + 100.0 * m.complex_words as f64 / w);
        assert!((m.gunning_fog - round2(expected)).abs() < 1e-9);
        assert!(m.complex_words > 0);
    }

    #[test]
    fn complex_text_scores_harder_than_simple() {
        let simple = analyze("The cat sat on the mat. The dog ran fast.").unwrap();
        let complex = analyze(COMPLEX_PROSE).unwrap();
        assert!(complex.flesch_kincaid_grade > simple.flesch_kincaid_grade);
        assert!(complex.flesch_reading_ease < simple.flesch_reading_ease);
        assert!(complex.clarity_index > simple.clarity_index);
    }

    #[test]
    fn derived_fields_have_two_decimals() {
        let m = analyze(COMPLEX_PROSE).unwrap();
        for v in [
            m.asl,
            m.pcw,
            m.aspp,
            m.clarity_index,
            m.gunning_fog,
            m.infogineering_index,
            m.flesch_reading_ease,
            m.flesch_kincaid_grade,
        ] {
            assert!((v * 100.0 - (v * 100.0).round()).abs() < 1e-6, "{v}");
        }
    }

    #[test]
    fn analysis_is_idempotent() {
        let a = analyze(COMPLEX_PROSE).unwrap();
        let b = analyze(COMPLEX_PROSE).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.gunning_fog.to_bits(), b.gunning_fog.to_bits());
    }

    #[test]
    fn json_field_names() {
        let m = analyze("The cat sat. The dog ran.").unwrap();
        let json = serde_json::to_value(&m).unwrap();
        for key in [
            "words",
            "sentences",
            "syllables",
            "complex_words",
            "long_words",
            "paragraphs",
            "asl",
            "pcw",
            "aspp",
            "clarity_index",
            "gunning_fog",
            "infogineering_index",
            "flesch_reading_ease",
            "flesch_kincaid_grade",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
