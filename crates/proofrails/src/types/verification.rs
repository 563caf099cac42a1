//! Verification types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of verifying a receipt or evidence bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the evidence checks out
    #[serde(default)]
    pub valid: bool,
    /// Evidence bundle hash
    #[serde(default, alias = "bundleHash")]
    pub bundle_hash: String,
    /// Whether the bundle hash is anchored on-chain
    #[serde(default, alias = "onChain")]
    pub on_chain: bool,
    /// Anchor transaction hash
    #[serde(default, alias = "anchorTx")]
    pub anchor_tx: Option<String>,
    /// Block holding the anchor transaction
    #[serde(default, alias = "blockNumber")]
    pub block_number: Option<u64>,
    /// Anchoring time (ISO 8601)
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Server signature over the result
    #[serde(default)]
    pub signature: Option<String>,
    /// Extra verifier output
    #[serde(default)]
    pub details: Option<Value>,
}

/// Everything needed to check a receipt's anchoring independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationProof {
    /// Receipt identifier
    pub receipt_id: String,
    /// Evidence bundle hash
    pub bundle_hash: String,
    /// Anchor transaction hash
    pub anchor_tx: String,
    /// Block holding the anchor transaction (0 when unknown)
    pub block_number: u64,
    /// Anchoring time (ISO 8601)
    pub timestamp: String,
    /// Server signature (empty when unsigned)
    pub signature: String,
    /// Network name
    pub network: String,
    /// Anchoring contract (empty when unknown)
    pub contract_address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum VerifyRequest<'a> {
    BundleUrl(&'a str),
    BundleHash(&'a str),
}
