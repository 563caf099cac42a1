//! Types shared across resources

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flare network a receipt is recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Coston2 testnet
    #[default]
    Coston2,
    /// Flare mainnet
    Flare,
}

impl Network {
    /// Wire name of the network.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Coston2 => "coston2",
            Network::Flare => "flare",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coston2" => Ok(Network::Coston2),
            "flare" => Ok(Network::Flare),
            other => Err(format!("unknown network: {}", other)),
        }
    }
}

/// Lifecycle state of a receipt.
///
/// Statuses the SDK does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReceiptStatus {
    /// Recorded, not yet anchored
    Pending,
    /// Bundle hash committed on-chain
    Anchored,
    /// Anchoring failed
    Failed,
    /// Any other status reported by the server
    Other(String),
}

impl ReceiptStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &str {
        match self {
            ReceiptStatus::Pending => "pending",
            ReceiptStatus::Anchored => "anchored",
            ReceiptStatus::Failed => "failed",
            ReceiptStatus::Other(status) => status,
        }
    }

    /// Whether the receipt has been anchored.
    pub fn is_anchored(&self) -> bool {
        matches!(self, ReceiptStatus::Anchored)
    }
}

impl From<&str> for ReceiptStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => ReceiptStatus::Pending,
            "anchored" => ReceiptStatus::Anchored,
            "failed" => ReceiptStatus::Failed,
            other => ReceiptStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ReceiptStatus {
    fn from(value: String) -> Self {
        ReceiptStatus::from(value.as_str())
    }
}

impl From<ReceiptStatus> for String {
    fn from(status: ReceiptStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Number of items returned
    pub total: usize,
    /// Page number requested (1-based)
    pub page: u32,
    /// Page size requested
    pub limit: u32,
}
