//! Error types for the user service client.

use thiserror::Error;
use user_core::FieldError;

use crate::types::ErrorBody;

/// Errors that can occur when talking to the user service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a status other than the one the operation expects
    #[error("Expected status {expected}, got {status}: {body}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        body: String,
    },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Unknown environment name
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// HTTP status received, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The target user does not exist (404)
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The payload or query failed validation (422)
    pub fn is_validation(&self) -> bool {
        self.status() == Some(422)
    }

    /// The server failed for reasons unrelated to the input (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }

    /// Field-level detail of a validation failure, if the body carried any
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::UnexpectedStatus { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .map(|b| b.fields)
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
