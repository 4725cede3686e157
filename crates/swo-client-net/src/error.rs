//! Error types for the GraphQL execution layer.

use thiserror::Error;

use crate::graphql::GraphQLError;

/// Errors raised while executing a GraphQL operation.
///
/// These cover everything up to and including decoding the `{data, errors}`
/// envelope. Callers further up the stack propagate them unchanged.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    /// HTTP request failed.
    #[error("HTTP request error: {0}")]
    Request(String),
    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Request timed out.
    #[error("Request timed out")]
    Timeout,
    /// Connection refused or failed.
    #[error("Connection error: {0}")]
    Connection(String),
    /// Invalid header name or value.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
    /// Request was cancelled by the caller.
    #[error("Request was cancelled")]
    Cancelled,
    /// The response body did not have the expected shape.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
    /// HTTP error status (non-2xx).
    #[error("{}", format_status(.status, .message))]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// Optional error message from the response body.
        message: Option<String>,
    },
    /// The server answered with a non-empty GraphQL `errors` array.
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQL(Vec<GraphQLError>),
}

fn format_status(status: &u16, message: &Option<String>) -> String {
    match message.as_deref() {
        Some(msg) if !msg.is_empty() => format!("HTTP {status}: {msg}"),
        _ => format!("HTTP {status}"),
    }
}

fn join_messages(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl NetworkError {
    /// The HTTP status code, when the error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a caller-initiated cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for NetworkError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<http::header::InvalidHeaderName> for NetworkError {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for NetworkError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
