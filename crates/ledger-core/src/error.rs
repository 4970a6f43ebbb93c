//! Error types for the ledger client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, business (protocol) and input validation errors.
//! Storage backend failures have their own variant but never escape the
//! session store, which degrades them to "value absent".

use std::fmt;
use thiserror::Error;

/// The unified error type for ledger operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout, body decode).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors. `Unauthenticated` is terminal for the session.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Business or validation failure reported by the server.
    #[error("request failed: {0}")]
    Protocol(#[from] ProtocolError),

    /// Client-side input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Key-value storage backend errors.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Returns true if this error ends the current session.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Error::Auth(AuthError::Unauthenticated))
    }

    /// Returns the HTTP status for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol(e) => Some(e.status),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("invalid response body: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No usable credentials remain; the session has been cleared and the
    /// caller must send the user back to login.
    #[error("not authenticated")]
    Unauthenticated,

    /// Login or registration was rejected by the server.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}

/// A non-401 error response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Message extracted from the response body.
    pub message: String,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Build an error from a response body.
    ///
    /// The message is taken from `detail`, then `error`, then `fallback`.
    /// A structured `detail` (field errors) is rendered as compact JSON.
    pub fn from_body(status: u16, body: &[u8], fallback: &str) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| extract_message(&value))
            .unwrap_or_else(|| fallback.to_string());
        Self::new(status, message)
    }
}

fn extract_message(value: &serde_json::Value) -> Option<String> {
    let field = |name: &str| match value.get(name) {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(v @ (serde_json::Value::Object(_) | serde_json::Value::Array(_))) => {
            Some(v.to_string())
        }
        _ => None,
    };
    field("detail").or_else(|| field("error"))
}

/// Key-value storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },

    /// Stored data could not be decoded.
    #[error("corrupt stored data: {message}")]
    Corrupt { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Registration password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Unknown enumeration value.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
