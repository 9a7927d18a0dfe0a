//! Typed error handling for the client
//!
//! Two layers of errors exist:
//!
//! - [`ValidationError`]: produced by the parameter validation engine before
//!   any network activity; always recoverable by correcting the request.
//! - [`ClientError`]: everything an [`execute`](crate::client::ZipDemographicsClient::execute)
//!   call can fail with — validation, transport, API-reported failures, and
//!   payload decoding.

use std::fmt;

/// A parameter validation failure
///
/// Carries one human-readable message per violated constraint, in field
/// declaration order. Constructed only when at least one violation exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The individual constraint-violation messages
    pub fn messages(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {}", self.errors.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// The main error type for client operations
#[derive(Debug)]
pub enum ClientError {
    /// Request parameters violated the endpoint's rule table
    Validation(ValidationError),

    /// Connection, timeout, or protocol failure before a response arrived
    Transport { message: String },

    /// The API answered with a non-success status or an envelope-level error
    Api { status: u16, message: String },

    /// The response payload did not match the documented contract
    Decode { message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(e) => write!(f, "{}", e),
            ClientError::Transport { message } => {
                write!(f, "Transport error: {}", message)
            }
            ClientError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ClientError::Decode { message } => {
                write!(f, "Failed to decode response: {}", message)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode {
                message: err.to_string(),
            }
        } else {
            ClientError::Transport {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
