//! Question source error types

use thiserror::Error;

/// Failure to obtain a batch of questions
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Network, message)
    }

    pub fn bad_status(code: u16, message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::BadStatus(code), message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::MalformedPayload, message)
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport failed: connect, timeout, truncated body
    Network,
    /// Provider answered outside 200..=299
    BadStatus(u16),
    /// Body did not parse into the expected question batch
    MalformedPayload,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::BadStatus(_) => "bad_status",
            Self::MalformedPayload => "malformed_payload",
        }
    }
}
