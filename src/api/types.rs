//! API response types
//!
//! Turn envelopes themselves live in [`crate::turn`].

use serde::{Deserialize, Serialize};

/// Error body for rejected requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
