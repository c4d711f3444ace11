//! Error types for the weather client
//!
//! Provides unified error handling using thiserror.
//!
//! The cache layer never produces errors: a missing or expired entry is a
//! normal `None`, not a failure. Everything that can actually go wrong lives
//! here and is surfaced to callers verbatim, with no internal retry.

use thiserror::Error;

// == Weather Error Enum ==
/// Unified error type for the weather client.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// A live session already holds this credential
    #[error("a client for credential \"{0}\" is already active")]
    DuplicateCredential(String),

    /// The provider could not be reached (network error, timeout)
    #[error("failed to reach weather provider: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("weather provider returned {status}: {message}")]
    Remote {
        /// HTTP status code of the provider response
        status: u16,
        /// Provider-supplied error message, if any
        message: String,
    },

    /// The provider payload could not be decoded into the expected shape
    #[error("malformed provider payload: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Validation(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather client.
pub type Result<T> = std::result::Result<T, WeatherError>;
