//! Error types.

use serde::Serialize;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    SerializationError,
    ConfigurationError,
    IoError,
    ParseError,
}

#[derive(Debug, Error)]
pub enum SeoError {
    /// Structured JSON-LD could not be turned into text.
    #[error("failed to serialize JSON-LD, supply pre-serialized text instead: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The metadata store was used without a live provider.
    #[error("SEO store unavailable: {0}")]
    Configuration(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A config or page file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl SeoError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SeoError::Serialization(_) => ErrorCode::SerializationError,
            SeoError::Configuration(_) => ErrorCode::ConfigurationError,
            SeoError::Io { .. } => ErrorCode::IoError,
            SeoError::Parse { .. } => ErrorCode::ParseError,
        }
    }

    pub fn no_provider() -> Self {
        SeoError::Configuration(
            "no SEO provider in scope; create an SeoProvider and use its handle".to_string(),
        )
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        SeoError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        SeoError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for metadata operations.
pub type SeoResult<T> = std::result::Result<T, SeoError>;
