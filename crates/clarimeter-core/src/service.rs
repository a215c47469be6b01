//! Request evaluation shared by the CLI, HTTP API, and MCP server.
//!
//! Every front end deserializes an [`AnalyzeRequest`], hands it to
//! [`evaluate`], and maps [`AnalysisError`] onto its own error surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::feedback::{Feedback, feedback};
use crate::readability::{Metrics, analyze};

/// Method label used when a request does not name one.
pub const DEFAULT_METHOD: &str = "clarity_index";

/// An analysis request as clients send it.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct AnalyzeRequest {
    /// The text to analyze.
    #[serde(default)]
    pub text: Option<String>,
    /// Display label echoed back as `selected_method`. Does not affect scoring.
    #[serde(default)]
    pub method: Option<String>,
}

impl AnalyzeRequest {
    /// Create a request for the given text with no method label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            method: None,
        }
    }

    /// Set the method label.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

/// Metrics, feedback, and the echoed method label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResponse {
    /// Readability metrics.
    pub metrics: Metrics,
    /// Rule-based feedback derived from `metrics`.
    pub ai_feedback: Feedback,
    /// Method label from the request, or the default.
    pub selected_method: String,
}

/// Evaluate a request.
///
/// # Arguments
///
/// * `request` - The deserialized request.
/// * `default_method` - Label to echo when the request has none; `None`
///   means [`DEFAULT_METHOD`].
/// * `max_input_bytes` - Optional size limit on `text`.
#[tracing::instrument(skip_all, fields(method = ?request.method))]
pub fn evaluate(
    request: &AnalyzeRequest,
    default_method: Option<&str>,
    max_input_bytes: Option<usize>,
) -> AnalysisResult<AnalysisResponse> {
    let text = request.text.as_deref().ok_or(AnalysisError::MissingText)?;

    if let Some(limit) = max_input_bytes
        && text.len() > limit
    {
        return Err(AnalysisError::InputTooLarge {
            size: text.len(),
            limit,
        });
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(AnalysisError::EmptyText);
    }

    let metrics = analyze(text).ok_or(AnalysisError::Unanalyzable)?;
    let ai_feedback = feedback(&metrics);

    let selected_method = request
        .method
        .clone()
        .unwrap_or_else(|| default_method.unwrap_or(DEFAULT_METHOD).to_string());

    tracing::info!(
        words = metrics.words,
        clarity_index = metrics.clarity_index,
        confidence = %ai_feedback.confidence,
        "request evaluated"
    );

    Ok(AnalysisResponse {
        metrics,
        ai_feedback,
        selected_method,
    })
}
