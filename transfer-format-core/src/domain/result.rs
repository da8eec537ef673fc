//! Result and error types for the core library

use std::fmt;

use thiserror::Error;

use super::Address;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Summing the transfers of `token` left the range of the amount type
    #[error("Amount overflow while totalling token {token}")]
    AmountOverflow { token: Address },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid address error
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::InvalidAddress(msg.into())
    }

    /// Create an invalid amount error
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a formatting call whose name resolver is itself fallible.
///
/// Resolver errors are handed back untouched so callers can match on their
/// own error type.
#[derive(Debug)]
pub enum FormatError<E> {
    /// The amount arithmetic failed
    Core(Error),
    /// The token name resolver failed
    Resolve(E),
}

impl<E: fmt::Display> fmt::Display for FormatError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Core(e) => write!(f, "{}", e),
            FormatError::Resolve(e) => write!(f, "Token name resolution failed: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for FormatError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Core(e) => Some(e),
            FormatError::Resolve(e) => Some(e),
        }
    }
}

impl<E> From<Error> for FormatError<E> {
    fn from(e: Error) -> Self {
        FormatError::Core(e)
    }
}
