//! Error types for the resource services.

use std::fmt;
use std::time::Duration;

use swo_client_net::NetworkError;
use thiserror::Error;

/// How a rejected mutation renders the server's `code` and `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureFormat {
    /// `"<action>. code: <code> message: <message>"`
    #[default]
    Labeled,
    /// `"<action>. code=<code> message=<message>"`
    KeyValue,
}

/// A mutation the server answered with `success: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Local description of the failed action, e.g. `"create dashboard failed"`.
    pub action: &'static str,
    /// Server-supplied code, verbatim.
    pub code: String,
    /// Server-supplied message, verbatim.
    pub message: String,
    /// Rendering of the error text.
    pub format: FailureFormat,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            FailureFormat::Labeled => write!(
                f,
                "{}. code: {} message: {}",
                self.action, self.code, self.message
            ),
            FailureFormat::KeyValue => write!(
                f,
                "{}. code={} message={}",
                self.action, self.code, self.message
            ),
        }
    }
}

/// Errors returned by the resource services.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The round trip failed: transport, HTTP status, malformed body or a
    /// GraphQL `errors` array. Passed through unchanged.
    #[error(transparent)]
    Transport(NetworkError),

    /// The server rejected a mutation.
    #[error("{0}")]
    Rejected(Rejection),

    /// The server reported success but sent no payload.
    #[error("{action}: server reported success without a payload. code: {code} message: {message}")]
    MissingPayload {
        /// Local description of the action.
        action: &'static str,
        /// Server-supplied code.
        code: String,
        /// Server-supplied message.
        message: String,
    },

    /// No entity exists with the given id.
    #[error("{kind} not found. id: {id}")]
    NotFound {
        /// Resource kind, e.g. `"alert"`.
        kind: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A polymorphic read resolved to a different entity type.
    #[error("unexpected type {actual}, expected {expected}")]
    UnexpectedVariant {
        /// The type the caller asked for.
        expected: &'static str,
        /// The runtime type name the server returned.
        actual: String,
    },

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,

    /// A retrying read gave up before the entity appeared.
    #[error("{kind} {id} not found after {attempts} attempts in {elapsed:?}")]
    Timeout {
        /// Resource kind.
        kind: &'static str,
        /// The id that was looked up.
        id: String,
        /// Number of queries issued.
        attempts: u32,
        /// Time spent before giving up.
        elapsed: Duration,
    },
}

impl ClientError {
    /// The underlying transport error, if this is one.
    pub fn as_transport(&self) -> Option<&NetworkError> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }

    /// Check if the server rejected the operation.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Check if the entity was not found, either at once or after retrying.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Timeout { .. })
    }

    /// Check if the caller cancelled the operation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<NetworkError> for ClientError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Cancelled => Self::Cancelled,
            other => Self::Transport(other),
        }
    }
}

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
