//! Error types shared by the form controller and the client.

use serde::Deserialize;
use thiserror::Error;

/// Rejection reasons for the page-embedded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid group form configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported HTTP method `{0}`")]
    UnsupportedMethod(String),
    #[error("endpoint `{0}` has an empty URL")]
    EmptyUrl(&'static str),
    #[error("editing a group requires an `updateGroup` endpoint")]
    MissingUpdateEndpoint,
    #[error("configuration not found: {0}")]
    NotFound(String),
}

/// Rejection reasons for crash-reporter setup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportingError {
    #[error("invalid DSN: {0}")]
    InvalidDsn(String),
    #[error("crash reporting is already initialized")]
    AlreadyInitialized,
}

/// Error envelope returned by the annotation API on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Attempt to pull a user-facing message out of an API error body.
/// Prefers `reason`, falls back to `message`.
pub fn try_error_reason(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok()?;
    [parsed.reason, parsed.message]
        .into_iter()
        .flatten()
        .find(|msg| !msg.trim().is_empty())
}

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, body: String },
    Deserialize(String),
}

impl ApiError {
    /// Text shown in the form's error area.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network request failed".to_string(),
            ApiError::Http { status, body } => try_error_reason(body)
                .unwrap_or_else(|| format!("Request failed (HTTP {status})")),
            ApiError::Deserialize(_) => "Received an invalid response from the server".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Deserialize(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
