//! # Common Error Types
//!
//! Consolidated error handling for the client.
//!
//! Every service function, session mutation and router/app flow returns
//! [`Result<T>`]. Nothing in the service layer swallows an error: callers that
//! want graceful degradation opt in with [`ResultExt::or_fallback`].
//!
//! ## Error Categories
//!
//! - **Network**: transport failure (connection refused, timeout, DNS)
//! - **Api**: non-2xx answer, with the message the backend put in its payload
//! - **MalformedResponse**: a 2xx body that does not parse or lacks a field
//! - **MalformedToken**: a bearer token whose claims are absent or unreadable
//! - **Storage**: durable session storage I/O
//! - **Validation**: input rejected before any request was sent
//!
//! ## Usage Pattern
//!
//! ```rust
//! use blog_client::core::error::{AppError, ResultExt};
//!
//! let listing: Result<Vec<String>, AppError> = Err(AppError::Network("refused".to_string()));
//! assert!(listing.or_fallback("categories").is_empty());
//! ```

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Transport failure before any HTTP status was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is taken from the error payload (`message`, `detail` or
    /// `error`), or is the operation's generic fallback text.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A 2xx body that could not be mapped to the expected type.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Token claims absent or unparseable.
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Durable session storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401 answers, the backend's verdict on a missing or stale token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_auth::TokenError> for AppError {
    fn from(err: lib_auth::TokenError) -> Self {
        AppError::MalformedToken(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Caller-side fallback for read operations.
pub trait ResultExt<T> {
    /// Log the error at `warn` and yield `T::default()` (empty list, `None`, `false`).
    fn or_fallback(self, what: &str) -> T
    where
        T: Default;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_fallback(self, what: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, what = what, "Falling back to empty result");
                T::default()
            }
        }
    }
}
