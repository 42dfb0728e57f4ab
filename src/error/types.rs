//! Error types
//!
//! Defines domain-specific error types for each module of the call controller.

use thiserror::Error;

/// Credential module errors
///
/// Raised while fetching or decoding the access token. Any of these aborts
/// the `start` attempt before a session handle is constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialFetchError {
    #[error("Credential request failed: {0}")]
    Network(String),
    #[error("Credential endpoint returned status {0}")]
    Status(u16),
    #[error("Malformed credential payload: {0}")]
    Malformed(String),
    #[error("Invalid token URL: {0}")]
    InvalidUrl(String),
}

/// Error reported by the voice SDK through the `error` event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Connection error{}: {}",
    .code.map_or(String::new(), |code| format!(" {}", code)),
    .message
)]
pub struct ConnectionError {
    pub code: Option<u32>,
    pub message: String,
}

impl ConnectionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: u32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

/// Device module errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Session handle construction failed: {0}")]
    Construction(String),
}

/// General controller error that encompasses all error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialFetchError),
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),
}
