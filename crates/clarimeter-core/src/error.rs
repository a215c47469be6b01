//! Error types for clarimeter-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while evaluating an analysis request.
///
/// Each variant means the request itself cannot be scored; none of them
/// indicate a fault in the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The request carried no `text` field.
    #[error("No text provided")]
    MissingText,

    /// The `text` field was empty or whitespace-only.
    #[error("Empty text provided")]
    EmptyText,

    /// The text had no detectable sentence or word.
    #[error("Unable to analyze text")]
    Unanalyzable,

    /// The text exceeds the configured input size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Size of the submitted text in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
