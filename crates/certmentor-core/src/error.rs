//! Error taxonomy for certmentor.
//!
//! Defined in `certmentor-core` so callers can classify collaborator
//! failures without string matching. None of these are fatal to the
//! process; the binary converts them to user-visible messages.

use thiserror::Error;

/// Errors from the text-generation collaborator.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The call succeeded but the content is unusable (blank text, or no
    /// quiz questions could be parsed from it).
    #[error("unusable model output: {0}")]
    UnusableOutput(String),
}

/// Errors from the blob-storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store returned an error response.
    #[error("storage error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("storage request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("storage network error: {0}")]
    NetworkError(String),

    /// A local filesystem write failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed identity input. Blocks progress until corrected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// A session operation was called before its preconditions were met.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no certification goal set")]
    GoalNotSet,

    #[error("no quiz to submit; generate one first")]
    NoQuiz,

    #[error("no question recorded; ask one first")]
    NoQuestion,

    #[error("question must not be empty")]
    EmptyQuestion,
}
