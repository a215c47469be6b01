//! Core library for clarimeter.
//!
//! This crate provides the readability analysis and feedback rules used by
//! the `clarimeter` CLI, its HTTP API, and its MCP server.
//!
//! # Modules
//!
//! - [`text`] - Paragraph, sentence, and word tokenization
//! - [`syllables`] - Vowel-group syllable estimation
//! - [`complexity`] - Complex-word classification
//! - [`readability`] - The [`Metrics`] record and [`analyze`]
//! - [`feedback`] - Rule-based feedback derived from [`Metrics`]
//! - [`service`] - Request evaluation shared by every front end
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use clarimeter_core::{analyze, feedback};
//!
//! let metrics = analyze("The cat sat. The dog ran.").expect("scorable text");
//! assert_eq!(metrics.sentences, 2);
//!
//! let fb = feedback(&metrics);
//! assert_eq!(fb.suggestions.len(), 3);
//! ```
#![deny(unsafe_code)]

pub mod complexity;
pub mod config;
pub mod error;
pub mod feedback;
pub mod readability;
pub mod service;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use feedback::{Confidence, Feedback, feedback};
pub use readability::{Metrics, analyze};
pub use service::{AnalysisResponse, AnalyzeRequest, DEFAULT_METHOD, evaluate};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
