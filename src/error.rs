//! Error handling for the SurgiLog client

use std::fmt;
use thiserror::Error;

/// Unified error type for the SurgiLog client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors (non-2xx statuses, timeouts, body reads)
    #[error("Network error: {0}")]
    Network(String),

    /// The response parsed as JSON but did not have the expected shape
    #[error("Format error: {0}")]
    Format(String),

    /// Connection-level failures, heuristically attributed to an
    /// unreachable or misconfigured endpoint. The underlying transport
    /// reports DNS failures, refused connections and blocked requests with
    /// the same signature, so this classification is a best guess.
    #[error("Access error: {0}")]
    Access(String),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session persistence errors (unreadable or corrupted session file)
    #[error("Session error: {0}")]
    Session(String),

    /// Record validation errors (drafts missing required fields)
    #[error("Record error: {0}")]
    Record(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Filesystem errors from the session store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new network error
    pub fn network<T: fmt::Display>(msg: T) -> Self {
        Error::Network(msg.to_string())
    }

    /// Create a new format error
    pub fn format<T: fmt::Display>(msg: T) -> Self {
        Error::Format(msg.to_string())
    }

    /// Create a new access error
    pub fn access<T: fmt::Display>(msg: T) -> Self {
        Error::Access(msg.to_string())
    }

    /// Create a new session error
    pub fn session<T: fmt::Display>(msg: T) -> Self {
        Error::Session(msg.to_string())
    }

    /// Create a new record error
    pub fn record<T: fmt::Display>(msg: T) -> Self {
        Error::Record(msg.to_string())
    }
}

impl From<reqwest::Error> for Error {
    /// Classify a transport error the way the record endpoint's callers
    /// need it: connection-level failures land in the access bucket,
    /// everything else (timeouts, decode failures, body reads) is network.
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Error::Access(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}
