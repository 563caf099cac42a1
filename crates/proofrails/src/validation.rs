//! Input validation helpers
//!
//! Pure checks for the values callers pass when recording receipts. None of
//! them touch the network. Each check reports the first problem it finds.
//!
//! # Examples
//!
//! ```rust
//! use proofrails::validation::{PaymentFields, validate_payment};
//!
//! let result = validate_payment(&PaymentFields {
//!     amount: "12.5",
//!     to: "0x52908400098527886E0F7030069857D2E4169EE7",
//!     purpose: "Coffee beans",
//!     transaction_hash: None,
//! });
//! assert!(result.is_ok());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Largest amount accepted (2^53 - 1).
pub const MAX_AMOUNT: f64 = 9_007_199_254_740_991.0;

/// Longest purpose text accepted, in characters.
pub const MAX_PURPOSE_LEN: usize = 500;

/// Shortest API key accepted.
pub const MIN_API_KEY_LEN: usize = 10;

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("Failed to compile address regex"));

static TX_HASH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0x[0-9a-fA-F]{64}$").expect("Failed to compile transaction hash regex")
});

/// A rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Which input failed
    pub field: &'static str,
    /// Why it failed
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Result of a validation check.
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// Validate an EVM wallet address.
pub fn validate_address(address: &str) -> ValidationResult {
    if address.is_empty() {
        return Err(ValidationError::new("address", "Address is required"));
    }
    if !address.starts_with("0x") {
        return Err(ValidationError::new("address", "Address must start with 0x"));
    }
    if address.len() != 42 {
        return Err(ValidationError::new(
            "address",
            "Address must be 42 characters long (0x + 40 hex digits)",
        ));
    }
    if !ADDRESS_PATTERN.is_match(address) {
        return Err(ValidationError::new(
            "address",
            "Address contains invalid characters (must be hexadecimal)",
        ));
    }
    Ok(())
}

/// Validate an amount given as text.
pub fn validate_amount(amount: &str) -> ValidationResult {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(ValidationError::new("amount", "Amount is required"));
    }

    match amount.parse::<f64>() {
        Ok(value) => validate_amount_value(value),
        Err(_) => Err(ValidationError::new("amount", "Amount must be a valid number")),
    }
}

/// Validate a numeric amount.
pub fn validate_amount_value(amount: f64) -> ValidationResult {
    if amount.is_nan() {
        return Err(ValidationError::new("amount", "Amount must be a valid number"));
    }
    if amount <= 0.0 {
        return Err(ValidationError::new("amount", "Amount must be greater than 0"));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::new("amount", "Amount is too large"));
    }
    Ok(())
}

/// Validate a transaction hash.
pub fn validate_transaction_hash(hash: &str) -> ValidationResult {
    if hash.is_empty() {
        return Err(ValidationError::new(
            "transaction_hash",
            "Transaction hash is required",
        ));
    }
    if !hash.starts_with("0x") {
        return Err(ValidationError::new(
            "transaction_hash",
            "Transaction hash must start with 0x",
        ));
    }
    if hash.len() != 66 {
        return Err(ValidationError::new(
            "transaction_hash",
            "Transaction hash must be 66 characters long (0x + 64 hex digits)",
        ));
    }
    if !TX_HASH_PATTERN.is_match(hash) {
        return Err(ValidationError::new(
            "transaction_hash",
            "Transaction hash contains invalid characters (must be hexadecimal)",
        ));
    }
    Ok(())
}

/// Validate the shape of an API key.
pub fn validate_api_key(api_key: &str) -> ValidationResult {
    if api_key.is_empty() {
        return Err(ValidationError::new("api_key", "API key is required"));
    }
    if api_key.chars().count() < MIN_API_KEY_LEN {
        return Err(ValidationError::new("api_key", "API key is too short"));
    }
    Ok(())
}

/// Validate payment purpose or reference text.
pub fn validate_purpose(purpose: &str) -> ValidationResult {
    if purpose.is_empty() {
        return Err(ValidationError::new("purpose", "Purpose is required"));
    }
    if purpose.trim().is_empty() {
        return Err(ValidationError::new("purpose", "Purpose cannot be empty"));
    }
    if purpose.chars().count() > MAX_PURPOSE_LEN {
        return Err(ValidationError::new(
            "purpose",
            "Purpose is too long (max 500 characters)",
        ));
    }
    Ok(())
}

/// Fields checked by [`validate_payment`].
#[derive(Debug, Clone, Copy)]
pub struct PaymentFields<'a> {
    /// Amount as text
    pub amount: &'a str,
    /// Recipient wallet address
    pub to: &'a str,
    /// What the payment is for
    pub purpose: &'a str,
    /// Transaction hash, checked when present
    pub transaction_hash: Option<&'a str>,
}

/// Validate a payment: amount, recipient, purpose, then the hash if given.
pub fn validate_payment(fields: &PaymentFields<'_>) -> ValidationResult {
    validate_amount(fields.amount)?;
    validate_address(fields.to)?;
    validate_purpose(fields.purpose)?;
    if let Some(hash) = fields.transaction_hash.filter(|h| !h.is_empty()) {
        validate_transaction_hash(hash)?;
    }
    Ok(())
}
