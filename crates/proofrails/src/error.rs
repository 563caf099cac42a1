//! Error types for the ProofRails SDK
//!
//! Every API failure surfaces as the transport's [`Error`]. This module adds
//! a presentational mapping from an error to advice a person can act on.

pub use proofrails_transport::error::{Error, NETWORK_ERROR, Result, TIMEOUT, UNKNOWN_ERROR};

/// An error explained for display to end users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendlyError {
    /// Short headline
    pub title: String,
    /// What went wrong
    pub message: String,
    /// What to do about it
    pub solution: Option<String>,
    /// Documentation link
    pub learn_more: Option<String>,
}

impl FriendlyError {
    fn new(title: &str, message: impl Into<String>, solution: &str, learn_more: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            solution: Some(solution.to_string()),
            learn_more: Some(learn_more.to_string()),
        }
    }
}

/// Map an error to a user-facing explanation.
///
/// Purely presentational: the first matching category wins, and anything
/// unrecognized falls back to the error's own message.
pub fn friendly_error(error: &Error) -> FriendlyError {
    let message = error.message();
    let status = error.status_code();
    let code = error.code();

    if message.contains("UNIQUE constraint") || message.contains("already exists") {
        return FriendlyError::new(
            "❌ Duplicate Receipt",
            "A receipt with this transaction hash already exists.",
            "This transaction has already been recorded. Check your receipts list.",
            "https://docs.proofrails.com/errors/duplicate",
        );
    }

    if message.contains("insufficient funds") || message.contains("gas") {
        return FriendlyError::new(
            "❌ Middleware Wallet Needs Funding",
            "Your ProofRails middleware wallet doesn't have enough tokens to pay gas fees.",
            "Send 0.5-1.0 C2FLR tokens to your middleware wallet address (check your .env ANCHOR_PRIVATE_KEY).",
            "https://docs.proofrails.com/setup/funding",
        );
    }

    if code == Some(NETWORK_ERROR)
        || message.contains("network")
        || message.contains("ECONNREFUSED")
        || message.contains("error sending request")
    {
        return FriendlyError::new(
            "❌ Cannot Connect to Middleware",
            "Unable to reach the ProofRails middleware server.",
            "Make sure your middleware is running on the correct port (default: 8000). Check your base URL configuration.",
            "https://docs.proofrails.com/troubleshooting/connection",
        );
    }

    if code == Some(TIMEOUT) || message.contains("timeout") || message.contains("TIMEOUT") {
        return FriendlyError::new(
            "⏱️ Request Timed Out",
            "The middleware took too long to respond.",
            "The middleware might be processing a large request or experiencing issues. Try again in a moment.",
            "https://docs.proofrails.com/troubleshooting/timeout",
        );
    }

    if matches!(status, Some(401) | Some(403))
        || message.contains("unauthorized")
        || message.contains("forbidden")
    {
        return FriendlyError::new(
            "🔐 Authentication Failed",
            "Your API key is invalid or missing.",
            "Check that you've set your API key correctly. You can create a new one using ProofRails::create_project().",
            "https://docs.proofrails.com/setup/api-keys",
        );
    }

    if status == Some(404) || message.contains("not found") {
        return FriendlyError::new(
            "🔍 Not Found",
            "The requested resource doesn't exist.",
            "Double-check the receipt ID or resource identifier you're trying to access.",
            "https://docs.proofrails.com/troubleshooting/not-found",
        );
    }

    if status == Some(422) || message.contains("validation") || message.contains("invalid") {
        return FriendlyError::new(
            "⚠️ Invalid Data",
            "The data you provided is invalid or incomplete.",
            "Check that all required fields are filled correctly (amount, addresses, transaction hash, etc.).",
            "https://docs.proofrails.com/api/validation",
        );
    }

    if matches!(status, Some(500) | Some(502) | Some(503)) {
        return FriendlyError::new(
            "🔧 Server Error",
            "The middleware encountered an internal error.",
            "Check the middleware logs for details. The issue might be with database access or blockchain connectivity.",
            "https://docs.proofrails.com/troubleshooting/server-errors",
        );
    }

    FriendlyError::new(
        "❌ Error",
        message,
        "If this error persists, please check the documentation or contact support.",
        "https://docs.proofrails.com/troubleshooting",
    )
}

/// Render an error as a multi-line message for people.
pub fn format_error_for_display(error: &Error) -> String {
    let friendly = friendly_error(error);
    let mut output = format!("{}\n{}", friendly.title, friendly.message);

    if let Some(solution) = &friendly.solution {
        output.push_str(&format!("\n\n💡 Solution: {}", solution));
    }
    if let Some(learn_more) = &friendly.learn_more {
        output.push_str(&format!("\n📖 Learn more: {}", learn_more));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    fn api(status: u16, message: &str) -> Error {
        Error::Api {
            status,
            message: message.to_string(),
            code: None,
            details: serde_json::json!({}),
        }
    }

    #[rstest]
    #[case(api(400, "UNIQUE constraint failed: receipts.tip_tx_hash"), "❌ Duplicate Receipt")]
    #[case(api(500, "insufficient funds for gas * price + value"), "❌ Middleware Wallet Needs Funding")]
    #[case(Error::Network("error sending request for url".into()), "❌ Cannot Connect to Middleware")]
    #[case(Error::Timeout(Duration::from_secs(30)), "⏱️ Request Timed Out")]
    #[case(api(401, "Invalid API key"), "🔐 Authentication Failed")]
    #[case(api(403, "nope"), "🔐 Authentication Failed")]
    #[case(api(404, "Receipt missing"), "🔍 Not Found")]
    #[case(api(422, "Unprocessable Entity"), "⚠️ Invalid Data")]
    #[case(api(503, "HTTP 503: Service Unavailable"), "🔧 Server Error")]
    #[case(api(418, "I'm a teapot"), "❌ Error")]
    fn test_friendly_error_categories(#[case] error: Error, #[case] title: &str) {
        assert_eq!(friendly_error(&error).title, title);
    }

    #[test]
    fn test_generic_fallback_keeps_message() {
        let friendly = friendly_error(&api(418, "I'm a teapot"));

        assert_eq!(friendly.message, "I'm a teapot");
    }

    #[test]
    fn test_format_error_for_display() {
        let output = format_error_for_display(&api(404, "gone"));

        assert!(output.starts_with("🔍 Not Found\nThe requested resource doesn't exist."));
        assert!(output.contains("\n\n💡 Solution: "));
        assert!(output.ends_with("📖 Learn more: https://docs.proofrails.com/troubleshooting/not-found"));
    }
}
