//! ISO 20022 message and statement types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated ISO 20022 message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoMessage {
    /// Message type, e.g. `pain.001` or `camt.054`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Message identifier
    #[serde(default, alias = "messageId")]
    pub message_id: Option<String>,
    /// Download URL
    #[serde(default)]
    pub url: String,
    /// Creation time (ISO 8601)
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

/// Statement flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// Intraday account report
    #[serde(rename = "camt.052")]
    Camt052,
    /// End-of-day account statement
    #[serde(rename = "camt.053")]
    Camt053,
}

impl StatementKind {
    /// ISO message name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Camt052 => "camt.052",
            StatementKind::Camt053 => "camt.053",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date range and account for a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementOptions {
    /// Start date (`YYYY-MM-DD`)
    pub date_from: Option<String>,
    /// End date (`YYYY-MM-DD`)
    pub date_to: Option<String>,
    /// Account to report on
    pub account_id: Option<String>,
}

/// A generated account statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement flavour
    pub kind: StatementKind,
    /// Statement location
    pub url: String,
    /// Download location (falls back to `url`)
    pub download_url: String,
    /// Message identifier
    pub message_id: String,
    /// Creation time (ISO 8601)
    pub created_at: String,
}
