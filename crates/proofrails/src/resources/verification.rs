//! Verification endpoints

use super::{Receipts, Resource};
use crate::{
    error::Result,
    types::{VerificationProof, VerificationResult, record::Record, verification::VerifyRequest},
};
use proofrails_transport::HttpTransport;
use serde_json::Value;

const ANCHOR_TX_KEYS: &[&str] = &["flare_txid", "anchor_tx", "anchorTx"];

/// Verification resource.
#[derive(Clone)]
pub struct Verification {
    receipts: Receipts,
}

impl Verification {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self {
            receipts: Receipts::new(transport),
        }
    }

    /// Check a receipt's anchoring from its stored record.
    ///
    /// A receipt is valid once its status is `anchored`, and on-chain when
    /// any anchor transaction is recorded.
    pub async fn by_receipt_id(&self, receipt_id: &str) -> Result<VerificationResult> {
        let record = self.receipts.record(receipt_id).await?;
        Ok(result_from_record(&record))
    }

    /// Verify an evidence bundle by its download URL.
    pub async fn by_url(&self, bundle_url: &str) -> Result<VerificationResult> {
        self.verify(VerifyRequest::BundleUrl(bundle_url)).await
    }

    /// Verify an evidence bundle by its hash.
    pub async fn by_hash(&self, bundle_hash: &str) -> Result<VerificationResult> {
        self.verify(VerifyRequest::BundleHash(bundle_hash)).await
    }

    /// Collect the anchoring proof for a receipt.
    pub async fn proof(&self, receipt_id: &str) -> Result<VerificationProof> {
        let record = self.receipts.record(receipt_id).await?;
        Ok(proof_from_record(receipt_id, &record))
    }

    async fn verify(&self, request: VerifyRequest<'_>) -> Result<VerificationResult> {
        self.transport()
            .post("/v1/iso/verify", Some(&request), None)
            .await
    }
}

impl Resource for Verification {
    fn transport(&self) -> &HttpTransport {
        self.receipts.transport()
    }
}

fn result_from_record(value: &Value) -> VerificationResult {
    let record = Record::new(value);
    let anchor_tx = record.string(ANCHOR_TX_KEYS);

    VerificationResult {
        valid: record.string(&["status"]).as_deref() == Some("anchored"),
        bundle_hash: record.string_or_default(&["bundle_hash", "bundleHash"]),
        on_chain: anchor_tx.is_some(),
        anchor_tx,
        timestamp: record.string(&["anchored_at", "anchoredAt"]),
        ..Default::default()
    }
}

fn proof_from_record(receipt_id: &str, value: &Value) -> VerificationProof {
    let record = Record::new(value);

    VerificationProof {
        receipt_id: receipt_id.to_string(),
        bundle_hash: record.string_or_default(&["bundle_hash", "bundleHash"]),
        anchor_tx: record.string_or_default(ANCHOR_TX_KEYS),
        block_number: record.u64(&["block_number", "blockNumber"]).unwrap_or(0),
        timestamp: record.string_or_default(&["anchored_at", "anchoredAt"]),
        signature: record.string_or_default(&["signature"]),
        network: record.string_or_default(&["chain"]),
        contract_address: record.string_or_default(&["contract_address", "contractAddress"]),
    }
}
