//! # ProofRails SDK
//!
//! Rust SDK for the ProofRails payment-receipt API:
//! - Record on-chain payments as ISO 20022 receipts
//! - Verify receipts and evidence bundles against their Flare anchors
//! - Generate camt.052 / camt.053 statements
//! - Follow receipt status live over server-sent events
//! - Automatic retries with exponential backoff and rate-limit tracking
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use proofrails::{PaymentTemplate, ProofRails};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProofRails::with_api_key("your-api-key")?;
//!
//!     let receipt = client
//!         .templates()
//!         .payment(&PaymentTemplate {
//!             amount: 12.5,
//!             from: "Alice".to_string(),
//!             to: "Bob".to_string(),
//!             purpose: "Coffee beans".to_string(),
//!             transaction_hash: "0x...".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("Recorded {} ({})", receipt.id, receipt.status);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{NewProject, ProofRails, ProofRailsBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, FriendlyError, Result, format_error_for_display, friendly_error};
pub use proofrails_transport::RateLimitSnapshot;
pub use resources::{
    DonationTemplate, EmbedOptions, EscrowTemplate, EventListener, GrantTemplate,
    PaymentTemplate, ReceiptTemplate, RefundTemplate, Theme, Widget,
};
pub use types::*;
pub use validation::ValidationError;

// Module declarations
pub mod chain;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod types;
pub mod validation;
