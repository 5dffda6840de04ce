//! Error taxonomy for the lookup service.
//!
//! Every failure a public operation can hit is classified into one of a
//! fixed set of categories, and each category renders as a single
//! user-facing message via `Display`. Nothing in this crate panics or
//! escapes as an unhandled fault.

use std::fmt;

/// Result type for the public lookup operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// What went wrong at the transport level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request exceeded the client's timeout budget.
    Timeout,
    /// The server could not be reached at all.
    Unreachable,
    /// The server answered with an HTTP error status.
    HttpStatus(u16),
    /// Anything else (bad response body, client build failure, ...).
    Unknown,
}

/// Abstract description of a failed transport call.
///
/// `server_message` carries the upstream envelope's `message` field when the
/// error response had one; empty messages are normalized to `None` at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: FailureKind,
    pub server_message: Option<String>,
}

impl TransportFailure {
    pub fn timeout() -> Self {
        Self {
            kind: FailureKind::Timeout,
            server_message: None,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            kind: FailureKind::Unreachable,
            server_message: None,
        }
    }

    pub fn http_status(status: u16, server_message: Option<String>) -> Self {
        Self {
            kind: FailureKind::HttpStatus(status),
            server_message: server_message.filter(|m| !m.trim().is_empty()),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: FailureKind::Unknown,
            server_message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// Map this failure onto the fixed set of user-facing messages.
    ///
    /// Total and never empty: every kind has a fallback when no server
    /// message is available.
    pub fn user_message(&self) -> String {
        match self.kind {
            FailureKind::Timeout => "request timed out, please try again".to_string(),
            FailureKind::Unreachable => {
                "cannot reach the server, check your network connection".to_string()
            }
            FailureKind::HttpStatus(400) => self
                .server_message
                .clone()
                .unwrap_or_else(|| "invalid student id".to_string()),
            FailureKind::HttpStatus(404) => "no record found for this student id".to_string(),
            FailureKind::HttpStatus(500) => "server error, please try again later".to_string(),
            FailureKind::HttpStatus(503) => {
                "service under maintenance, please try again later".to_string()
            }
            FailureKind::HttpStatus(status) => self
                .server_message
                .clone()
                .unwrap_or_else(|| format!("error: {status}")),
            FailureKind::Unknown => self
                .server_message
                .clone()
                .unwrap_or_else(|| "an unknown error occurred".to_string()),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl std::error::Error for TransportFailure {}

/// Error type for the public lookup operations.
///
/// `Display` yields exactly the message the UI shows; callers never need to
/// inspect variants to build one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// Input rejected locally, before any network call.
    #[error("{0}")]
    Validation(String),

    /// The transport call itself failed.
    #[error("{0}")]
    Transport(#[from] TransportFailure),

    /// The envelope arrived but its logical code was not the success code.
    #[error("{message}")]
    Protocol { code: i64, message: String },

    /// The envelope was well-formed but the payload had the wrong shape.
    #[error("{0}")]
    Shape(String),

    /// A well-formed payload contained no usable data.
    #[error("{0}")]
    EmptyResult(String),

    /// Client configuration could not be loaded.
    #[error("{0}")]
    Configuration(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn protocol(code: i64, message: impl Into<String>) -> Self {
        Self::Protocol {
            code,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::EmptyResult(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// The single message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
