//! Error types for the ProofRails transport
//!
//! Every failure of a logical request is normalized into [`Error`]. The
//! accessors ([`Error::code`], [`Error::status_code`], [`Error::details`])
//! give callers a uniform view regardless of which variant was produced.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Machine code reported for timeouts.
pub const TIMEOUT: &str = "TIMEOUT";
/// Machine code reported for connection-level failures.
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
/// Machine code reported for failures without an extractable message.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Main error type for the ProofRails SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the body's `message` or `detail` field, or a status line
        message: String,
        /// Machine code from the body's `code` field
        code: Option<String>,
        /// The parsed error body (`{}` when the body was not JSON)
        details: serde_json::Value,
    },

    /// A single attempt exceeded the configured timeout.
    #[error("Request timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// No response was obtained (DNS, connect, reset, truncated body).
    #[error("{0}")]
    Network(String),

    /// Failure without any extractable message.
    #[error("Unknown error occurred")]
    Unknown,

    /// A 2xx body could not be decoded into the expected type.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid base URL or request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid HTTP header name or value.
    #[error("Invalid HTTP header: {0}")]
    InvalidHeader(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The push-event connection failed.
    #[error("Event stream error: {0}")]
    EventStream(String),
}

impl Error {
    /// Build an API error from a non-2xx response.
    ///
    /// The body is parsed as JSON; anything unparsable becomes `{}`. The message
    /// prefers the body's `message`, then `detail`, then `HTTP <status>: <reason>`.
    /// Non-string `message`, `detail` and `code` values are rendered as JSON text.
    pub fn from_response(status: http::StatusCode, body: &[u8]) -> Self {
        let details = serde_json::from_slice::<serde_json::Value>(body)
            .unwrap_or_else(|_| serde_json::Value::Object(Default::default()));

        let message = field_text(&details, "message")
            .or_else(|| field_text(&details, "detail"))
            .unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            });

        let code = field_text(&details, "code");

        Error::Api {
            status: status.as_u16(),
            message,
            code,
            details,
        }
    }

    /// Normalize a transport-level failure with no status into a terminal error.
    pub fn from_network_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Error::Unknown
        } else {
            Error::Network(message)
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Machine-readable code, when one applies.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => code.as_deref(),
            Error::Timeout(_) => Some(TIMEOUT),
            Error::Network(_) => Some(NETWORK_ERROR),
            Error::Unknown => Some(UNKNOWN_ERROR),
            Error::Decode(_) => Some("DECODE_ERROR"),
            Error::Serialization(_) => Some("SERIALIZATION_ERROR"),
            Error::InvalidUrl(_) => Some("INVALID_URL"),
            Error::InvalidHeader(_) => Some("INVALID_HEADER"),
            Error::HttpClient(_) => Some("HTTP_CLIENT_ERROR"),
            Error::EventStream(_) => Some("EVENT_STREAM_ERROR"),
        }
    }

    /// HTTP status code, present only for [`Error::Api`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The parsed error body, present only for [`Error::Api`].
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            Error::Api { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Whether this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

fn field_text(value: &serde_json::Value, key: &str) -> Option<String> {
    match value.get(key)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
