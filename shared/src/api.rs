use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::IntegrationType;

// ============================================================================
// Load Request
// ============================================================================

/// Form field carrying the JSON-serialized credentials.
pub const CREDENTIALS_FIELD: &str = "credentials";

/// Path of the load endpoint for an integration, relative to the API base.
pub fn load_path(integration: IntegrationType) -> String {
    format!("/integrations/{}/load", integration.route())
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body returned by the integrations backend.
///
/// `detail` is usually a message string, but validation failures carry a
/// list of objects instead, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The detail as text to show the user, if the server sent one.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(message)) => Some(message.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// A failed load. Every variant ends up in the same user notification; the
/// variants only exist so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl LoadError {
    /// Build the error for a non-success response from its status and body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.message());
        LoadError::Status { status, detail }
    }

    /// Server-supplied detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            LoadError::Status { detail, .. } => detail.as_deref(),
            LoadError::Network(_) | LoadError::Decode(_) => None,
        }
    }

    /// Text for the blocking alert: the server's detail, otherwise blank.
    pub fn alert_message(&self) -> String {
        self.detail().unwrap_or_default().to_string()
    }
}
