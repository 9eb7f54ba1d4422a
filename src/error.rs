//! Error handling for the Stockroom Rust client

use std::fmt;
use thiserror::Error;

/// Unified error type for the Stockroom Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport errors (timeout, unreachable host)
    #[error("failed to fetch: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// An HTTP 4xx/5xx response, carrying the server message when one was
    /// present and a generic fallback otherwise
    #[error("{message}")]
    Api {
        /// The HTTP status code of the response
        status: u16,
        /// Human-readable message for the caller
        message: String,
    },

    /// An HTTP 401 response. The local session has already been cleared by
    /// the time this error is returned.
    #[error("{0}")]
    Unauthorized(String),

    /// Authentication errors raised locally (e.g. calling an endpoint that
    /// needs a token while signed out)
    #[error("authentication error: {0}")]
    Auth(String),

    /// Device key-value storage errors
    #[error("session storage error: {0}")]
    Vault(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new API error from a status code and message
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new storage error
    pub fn vault<T: fmt::Display>(msg: T) -> Self {
        Error::Vault(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// The HTTP status code behind this error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Unauthorized(_) => Some(401),
            _ => None,
        }
    }
}
