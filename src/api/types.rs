//! API response bodies
//!
//! The wire format is flat, matching the protocol in the README: success
//! bodies carry their payload directly, error bodies carry `{message}`.

use serde::Serialize;

use crate::models::ResultRecord;

/// Body of a successful endpoint definition: the opaque key to call
#[derive(Debug, Clone, Serialize)]
pub struct EndpointCreated {
    /// Opaque key identifying the new endpoint
    pub key: String,
}

/// Body of a successful results fetch
#[derive(Debug, Clone, Serialize)]
pub struct ResultsPage {
    /// Captured requests, newest first
    pub items: Vec<ResultRecord>,
}

/// Body of any error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    /// Create an error body
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
