//! API resource endpoints
//!
//! Each resource wraps the shared transport and owns one area of the API.
//! Resources are cheap to clone and are handed out by [`ProofRails`](crate::ProofRails).

pub mod embed;
pub mod events;
pub mod projects;
pub mod receipts;
pub mod statements;
pub mod templates;
pub mod verification;

pub use embed::{Embed, EmbedOptions, Theme, Widget};
pub use events::{EventListener, Events};
pub use projects::{Admin, Projects};
pub use receipts::Receipts;
pub use statements::Statements;
pub use templates::{
    DonationTemplate, EscrowTemplate, GrantTemplate, PaymentTemplate, ReceiptTemplate,
    RefundTemplate, Templates,
};
pub use verification::Verification;

use proofrails_transport::HttpTransport;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the transport.
    fn transport(&self) -> &HttpTransport;
}
