//! Rule-based feedback derived from readability metrics.
//!
//! Feedback is a pure function of a [`Metrics`] value. Thresholds:
//!
//! | Signal | Rule |
//! |--------|------|
//! | confidence | `low` below 50 words or 3 sentences, `medium` up to 200 words, else `high` |
//! | conclusion | clarity index `<= 30`, `<= 45`, or above |
//! | suggestions | ASL `> 20`, PCW `> 15`, ASPP `> 6`, padded with general tips to exactly 3 |
//! | example rewrite | only when ASL `> 25` |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::Metrics;

/// Number of suggestions in every [`Feedback`].
pub const SUGGESTION_COUNT: usize = 3;

/// Conclusion for a clarity index of 30 or less.
pub const CONCLUSION_CLEAR: &str =
    "Your text shows good clarity with manageable sentence complexity.";

/// Conclusion for a clarity index above 30 and up to 45.
pub const CONCLUSION_MODERATE: &str =
    "Moderate clarity — some sentences may benefit from simplification.";

/// Conclusion for a clarity index above 45.
pub const CONCLUSION_COMPLEX: &str =
    "High complexity detected — consider breaking down complex ideas.";

/// Tips used to pad the suggestion list, indexed by the current list length.
pub const GENERAL_TIPS: [&str; 3] = [
    "Use active voice for clarity",
    "Choose simple words over complex ones",
    "Start sentences with the main idea",
];

/// Rewrite hint shown when sentences run long.
pub const EXAMPLE_REWRITE: &str =
    "Consider splitting your longest sentence into two shorter ones.";

/// How much the feedback can be trusted, based on sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Fewer than 50 words or fewer than 3 sentences.
    Low,
    /// Up to 200 words.
    Medium,
    /// More than 200 words.
    High,
}

impl Confidence {
    /// Derive confidence from word and sentence counts.
    pub const fn from_counts(words: usize, sentences: usize) -> Self {
        if words < 50 || sentences < 3 {
            Self::Low
        } else if words <= 200 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Returns the confidence as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative judgment of a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Feedback {
    /// One-sentence overall verdict.
    pub conclusion: String,
    /// Exactly three suggestions, metric-specific ones first.
    pub suggestions: Vec<String>,
    /// Rewrite hint, empty when none applies.
    pub example_rewrite: String,
    /// Trust in the verdict given the sample size.
    pub confidence: Confidence,
}

/// Build feedback from metrics.
#[tracing::instrument(skip_all, fields(clarity_index = metrics.clarity_index))]
pub fn feedback(metrics: &Metrics) -> Feedback {
    let confidence = Confidence::from_counts(metrics.words, metrics.sentences);

    let conclusion = if metrics.clarity_index <= 30.0 {
        CONCLUSION_CLEAR
    } else if metrics.clarity_index <= 45.0 {
        CONCLUSION_MODERATE
    } else {
        CONCLUSION_COMPLEX
    };

    let mut suggestions = Vec::with_capacity(SUGGESTION_COUNT);
    if metrics.asl > 20.0 {
        suggestions.push(format!("Shorten sentences — ASL={}", format_value(metrics.asl)));
    }
    if metrics.pcw > 15.0 {
        suggestions.push(format!(
            "Reduce complex words — PCW={}%",
            format_value(metrics.pcw)
        ));
    }
    if metrics.aspp > 6.0 {
        suggestions.push(format!(
            "Break up paragraphs — ASPP={}",
            format_value(metrics.aspp)
        ));
    }
    while suggestions.len() < SUGGESTION_COUNT {
        suggestions.push(GENERAL_TIPS[suggestions.len() % GENERAL_TIPS.len()].to_string());
    }
    suggestions.truncate(SUGGESTION_COUNT);

    let example_rewrite = if metrics.asl > 25.0 {
        EXAMPLE_REWRITE.to_string()
    } else {
        String::new()
    };

    tracing::debug!(%confidence, triggered = ?suggestions, "feedback built");

    Feedback {
        conclusion: conclusion.to_string(),
        suggestions,
        example_rewrite,
        confidence,
    }
}

/// Render a metric the way clients have always seen it: shortest
/// round-trip form, with `.0` kept on whole numbers.
fn format_value(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(words: usize, sentences: usize) -> Metrics {
        Metrics {
            words,
            sentences,
            syllables: words,
            complex_words: 0,
            long_words: 0,
            paragraphs: 1,
            asl: 10.0,
            pcw: 0.0,
            aspp: 2.0,
            clarity_index: 10.0,
            gunning_fog: 4.0,
            infogineering_index: 10.0,
            flesch_reading_ease: 80.0,
            flesch_kincaid_grade: 5.0,
        }
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(feedback(&metrics(10, 5)).confidence, Confidence::Low);
        assert_eq!(feedback(&metrics(100, 5)).confidence, Confidence::Medium);
        assert_eq!(feedback(&metrics(500, 5)).confidence, Confidence::High);
    }

    #[test]
    fn confidence_boundaries() {
        assert_eq!(Confidence::from_counts(49, 10), Confidence::Low);
        assert_eq!(Confidence::from_counts(50, 10), Confidence::Medium);
        assert_eq!(Confidence::from_counts(200, 10), Confidence::Medium);
        assert_eq!(Confidence::from_counts(201, 10), Confidence::High);
        // Too few sentences overrides word count
        assert_eq!(Confidence::from_counts(500, 2), Confidence::Low);
    }

    #[test]
    fn conclusion_by_clarity() {
        let mut m = metrics(100, 5);
        m.clarity_index = 30.0;
        assert_eq!(feedback(&m).conclusion, CONCLUSION_CLEAR);
        m.clarity_index = 30.01;
        assert_eq!(feedback(&m).conclusion, CONCLUSION_MODERATE);
        m.clarity_index = 45.0;
        assert_eq!(feedback(&m).conclusion, CONCLUSION_MODERATE);
        m.clarity_index = 45.01;
        assert_eq!(feedback(&m).conclusion, CONCLUSION_COMPLEX);
    }

    #[test]
    fn no_triggers_uses_all_general_tips() {
        let fb = feedback(&metrics(100, 5));
        assert_eq!(fb.suggestions, GENERAL_TIPS.to_vec());
        assert!(fb.example_rewrite.is_empty());
    }

    #[test]
    fn one_trigger_pads_from_tip_index_one() {
        let mut m = metrics(100, 5);
        m.asl = 21.5;
        let fb = feedback(&m);
        assert_eq!(
            fb.suggestions,
            vec![
                "Shorten sentences — ASL=21.5".to_string(),
                GENERAL_TIPS[1].to_string(),
                GENERAL_TIPS[2].to_string(),
            ]
        );
    }

    #[test]
    fn two_triggers_pad_with_last_tip() {
        let mut m = metrics(100, 5);
        m.pcw = 18.25;
        m.aspp = 7.0;
        let fb = feedback(&m);
        assert_eq!(
            fb.suggestions,
            vec![
                "Reduce complex words — PCW=18.25%".to_string(),
                "Break up paragraphs — ASPP=7.0".to_string(),
                GENERAL_TIPS[2].to_string(),
            ]
        );
    }

    #[test]
    fn all_triggers_fill_exactly_three() {
        let mut m = metrics(100, 5);
        m.asl = 30.0;
        m.pcw = 20.0;
        m.aspp = 8.5;
        let fb = feedback(&m);
        assert_eq!(fb.suggestions.len(), SUGGESTION_COUNT);
        assert_eq!(fb.suggestions[0], "Shorten sentences — ASL=30.0");
        assert_eq!(fb.suggestions[1], "Reduce complex words — PCW=20.0%");
        assert_eq!(fb.suggestions[2], "Break up paragraphs — ASPP=8.5");
    }

    #[test]
    fn thresholds_are_strict() {
        let mut m = metrics(100, 5);
        m.asl = 20.0;
        m.pcw = 15.0;
        m.aspp = 6.0;
        assert_eq!(feedback(&m).suggestions, GENERAL_TIPS.to_vec());
    }

    #[test]
    fn example_rewrite_only_for_long_sentences() {
        let mut m = metrics(100, 5);
        m.asl = 25.0;
        assert!(feedback(&m).example_rewrite.is_empty());
        m.asl = 25.01;
        assert_eq!(feedback(&m).example_rewrite, EXAMPLE_REWRITE);
    }

    #[test]
    fn confidence_serializes_lowercase() {
        let fb = feedback(&metrics(10, 1));
        let json = serde_json::to_value(&fb).unwrap();
        assert_eq!(json["confidence"], "low");
        assert!(json["conclusion"].is_string());
        assert!(json["example_rewrite"].is_string());
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn suggestion_uses_tie_rounded_pcw() {
        let text = "The beautiful cat saw a beautiful red dog. \
            The beautiful cat saw a beautiful red dog. \
            The beautiful cat saw a beautiful red dog. \
            The beautiful cat saw a beautiful beautiful dog.";
        let m = crate::readability::analyze(text).unwrap();
        assert_eq!(m.words, 32);
        assert_eq!(m.complex_words, 9);
        assert_eq!(m.pcw, 28.12);
        assert_eq!(m.clarity_index, 36.12);

        let fb = feedback(&m);
        assert_eq!(fb.suggestions[0], "Reduce complex words — PCW=28.12%");
    }

    #[test]
    fn format_value_keeps_trailing_zero() {
        assert_eq!(format_value(22.0), "22.0");
        assert_eq!(format_value(21.53), "21.53");
        assert_eq!(format_value(0.5), "0.5");
    }
}
