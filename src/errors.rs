//! Error types for the Bitstamp SDK.
//!
//! Four failure kinds reach callers, in the order the call pipeline can
//! produce them: argument validation, transport (connection/timeout or a
//! non-JSON body), the service's own error envelope, and response
//! normalization. None of them is retried or masked by the SDK.

use serde_json::Value;
use thiserror::Error;

/// Convenience alias used across the SDK.
pub type Result<T> = std::result::Result<T, BitstampError>;

/// The primary error type for the Bitstamp SDK.
#[derive(Error, Debug)]
pub enum BitstampError {
    /// A caller-supplied argument violates a documented constraint.
    /// Raised before any network I/O.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Connection, TLS, or timeout failure from the HTTP layer.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// The service answered with its error envelope (a JSON object
    /// carrying an `error` key). The detail is kept verbatim.
    #[error("API error: {}", api_detail(.detail))]
    Api { detail: Value },

    /// A response field did not match its documented type or format.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// `Credentials::from_env` could not find a required variable.
    #[error("environment variable {0} is not set")]
    EnvVarNotSet(String),
}

/// A response field failed conversion to its documented type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Names the offending field, what was expected, and what arrived.
    #[error("field `{field}`: expected {expected}, found {found}")]
    Field {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// The payload's overall shape was wrong (object where an array was
    /// documented, a book level that is not a two-element pair, ...).
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// No branch of the timestamp fallback chain accepted the input.
    #[error("could not parse timestamp from {0}")]
    Timestamp(String),
}

/// Render the envelope detail without JSON string quoting when it is a
/// plain string, which is the common case.
fn api_detail(detail: &Value) -> String {
    match detail.as_str() {
        Some(s) => s.to_string(),
        None => detail.to_string(),
    }
}
