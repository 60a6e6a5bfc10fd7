/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types returned by every operation of the client

use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// An argument had the wrong shape, e.g. a list where a single symbol is required
    TypeArgument(String),
    /// A date argument could not be parsed
    InvalidDate(String),
    /// The server answered with a non-success status
    Request {
        /// HTTP status code returned by the server
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// The response body was not valid JSON, or not of the expected shape
    Decode(String),
    /// The transport failed before a response was received
    Transport(String),
    /// JSON (de)serialization error outside of response decoding
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
    /// Invalid input provided to a function
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::TypeArgument(msg) => write!(f, "type argument error: {msg}"),
            AppError::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            AppError::Request { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Decode(msg) => write!(f, "decode error: {msg}"),
            AppError::Transport(msg) => write!(f, "transport error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl AppError {
    /// HTTP status carried by a `Request` error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

/// Convenience result alias used across the crate
pub type IexResult<T> = Result<T, AppError>;
