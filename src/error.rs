//! Error types for format classification.
//!
//! This module provides the [`FormatError`] type and the [`Result`]
//! convenience type. Classification itself is total and never returns an
//! error; failures only arise at the edges (leader parsing, classifier
//! construction and output rendering).

use thiserror::Error;

/// Error type for the edges of the classification pipeline.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Error indicating an invalid leader (24-byte header).
    #[error("Invalid leader: {0}")]
    InvalidLeader(String),

    /// Error indicating a classifier configuration that cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configured pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Output document could not be rendered.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;
