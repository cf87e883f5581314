//! Centralized error types for Logic Hunter.

use thiserror::Error;

/// Main error type for analysis and post-generation operations.
#[derive(Error, Debug)]
pub enum HunterError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Mode unavailable: {0}")]
    ModeUnavailable(String),

    #[error("AI 모델로부터 비어있는 응답을 받았습니다.")]
    EmptyResponse,

    #[error("Malformed model output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("Generation backend error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for Logic Hunter operations.
pub type HunterResult<T> = Result<T, HunterError>;

/// Coarse classification of a [`HunterError`], used by callers that map
/// failures onto status codes or exit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or blank input; never reaches the generation backend.
    Validation,
    /// The requested mode needs configuration the server does not have.
    Unavailable,
    /// The backend answered without any text.
    EmptyResponse,
    /// The backend's text did not parse as the expected shape.
    MalformedOutput,
    /// Network, auth or quota failure from the backend.
    Upstream,
    /// Local configuration or IO failure.
    Internal,
}

impl HunterError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a mode unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::ModeUnavailable(msg.into())
    }

    /// Create an upstream error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationError(_) => ErrorKind::Validation,
            Self::ModeUnavailable(_) => ErrorKind::Unavailable,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::MalformedOutput(_) => ErrorKind::MalformedOutput,
            Self::Upstream(_) => ErrorKind::Upstream,
            Self::Config(_) | Self::Io(_) | Self::Csv(_) => ErrorKind::Internal,
        }
    }

    /// Whether the failure was caused by the caller's request rather than
    /// by the backend or the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Unavailable)
    }
}
