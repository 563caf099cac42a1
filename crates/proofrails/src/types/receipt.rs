//! Receipt types

use super::common::{Network, ReceiptStatus};
use super::record::{Record, now_iso};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for recording a payment receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReceiptOptions {
    /// Hash of the payment transaction
    pub transaction_hash: String,
    /// Network the payment happened on
    pub chain: Network,
    /// Payment amount, as a decimal string
    pub amount: String,
    /// Currency symbol (e.g. `FLR`, `C2FLR`)
    pub currency: String,
    /// Sender wallet or name
    pub sender: String,
    /// Receiver wallet or name
    pub receiver: String,
    /// Free-form payment reference
    pub reference: String,
    /// URL the server notifies once the receipt is anchored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl CreateReceiptOptions {
    /// Request body for `POST /v1/iso/record-tip`.
    pub(crate) fn to_payload(&self) -> RecordTipRequest<'_> {
        RecordTipRequest {
            tip_tx_hash: &self.transaction_hash,
            chain: self.chain,
            amount: &self.amount,
            currency: &self.currency,
            sender_wallet: &self.sender,
            receiver_wallet: &self.receiver,
            reference: &self.reference,
            callback_url: self.callback_url.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RecordTipRequest<'a> {
    tip_tx_hash: &'a str,
    chain: Network,
    amount: &'a str,
    currency: &'a str,
    sender_wallet: &'a str,
    receiver_wallet: &'a str,
    reference: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordTipResponse {
    pub(crate) receipt_id: String,
    pub(crate) status: ReceiptStatus,
}

/// A payment receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt identifier
    pub id: String,
    /// Lifecycle state
    pub status: ReceiptStatus,
    /// Hash of the payment transaction
    pub transaction_hash: String,
    /// Network name
    pub chain: String,
    /// Payment amount, as a decimal string
    pub amount: String,
    /// Currency symbol
    pub currency: String,
    /// Sender wallet or name
    pub sender: String,
    /// Receiver wallet or name
    pub receiver: String,
    /// Payment reference
    pub reference: String,
    /// Creation time (ISO 8601)
    pub created_at: String,
    /// Anchoring time (ISO 8601)
    pub anchored_at: Option<String>,
    /// Anchor transaction hash
    pub anchor_tx: Option<String>,
    /// Evidence bundle hash
    pub bundle_hash: Option<String>,
    /// Evidence bundle download URL
    pub bundle_url: Option<String>,
    /// ISO 20022 XML download URL
    pub xml_url: Option<String>,
    /// Owning project
    pub project_id: Option<String>,
}

impl Receipt {
    /// Build a receipt from a server record.
    ///
    /// snake_case keys win over their camelCase forms; `flare_txid` carries
    /// the anchor transaction.
    pub fn from_record(value: &Value) -> Self {
        let record = Record::new(value);

        Self {
            id: record.string_or_default(&["id", "receipt_id"]),
            status: ReceiptStatus::from(record.string_or_default(&["status"])),
            transaction_hash: record.string_or_default(&["tip_tx_hash", "transactionHash"]),
            chain: record.string_or_default(&["chain"]),
            amount: record.string_or_default(&["amount"]),
            currency: record.string_or_default(&["currency"]),
            sender: record.string_or_default(&["sender_wallet", "sender"]),
            receiver: record.string_or_default(&["receiver_wallet", "receiver"]),
            reference: record.string_or_default(&["reference"]),
            created_at: record.string_or_default(&["created_at", "createdAt"]),
            anchored_at: record.string(&["anchored_at", "anchoredAt"]),
            anchor_tx: record.string(&["flare_txid", "anchorTx"]),
            bundle_hash: record.string(&["bundle_hash", "bundleHash"]),
            bundle_url: record.string(&["bundle_url"]),
            xml_url: record.string(&["xml_url"]),
            project_id: record.string(&["project_id"]),
        }
    }

    /// Build the receipt for a freshly recorded payment.
    pub(crate) fn from_created(options: &CreateReceiptOptions, response: RecordTipResponse) -> Self {
        Self {
            id: response.receipt_id,
            status: response.status,
            transaction_hash: options.transaction_hash.clone(),
            chain: options.chain.to_string(),
            amount: options.amount.clone(),
            currency: options.currency.clone(),
            sender: options.sender.clone(),
            receiver: options.receiver.clone(),
            reference: options.reference.clone(),
            created_at: now_iso(),
            anchored_at: None,
            anchor_tx: None,
            bundle_hash: None,
            bundle_url: None,
            xml_url: None,
            project_id: None,
        }
    }
}

/// Download locations for a receipt's ISO 20022 messages and evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptArtifacts {
    /// pain.001 (credit transfer initiation)
    pub pain001_url: Option<String>,
    /// pain.002 (payment status report)
    pub pain002_url: Option<String>,
    /// pain.007 (payment reversal)
    pub pain007_url: Option<String>,
    /// pain.008 (direct debit initiation)
    pub pain008_url: Option<String>,
    /// camt.054 (debit/credit notification)
    pub camt054_url: Option<String>,
    /// Evidence bundle archive
    pub bundle_url: String,
    /// Evidence manifest
    pub manifest_url: String,
}

/// Filters for listing receipts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReceiptsOptions {
    /// Page size
    pub limit: Option<u32>,
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Only receipts in this state
    pub status: Option<ReceiptStatus>,
}

impl ListReceiptsOptions {
    /// Query string for these filters, including the leading `?`.
    ///
    /// Only set filters appear, in `limit`, `page`, `status` order. Zero
    /// values count as unset.
    pub(crate) fn query(&self) -> String {
        let mut params = Vec::new();
        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            params.push(format!("limit={}", limit));
        }
        if let Some(page) = self.page.filter(|n| *n > 0) {
            params.push(format!("page={}", page));
        }
        if let Some(status) = self.status.as_ref().filter(|s| !s.as_str().is_empty()) {
            params.push(format!("status={}", status));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// A live status change pushed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptUpdate {
    /// Receipt identifier
    pub id: String,
    /// New lifecycle state
    pub status: ReceiptStatus,
    /// Anchor transaction hash, once anchored
    pub anchor_tx: Option<String>,
    /// Evidence bundle hash
    pub bundle_hash: Option<String>,
    /// Event time (ISO 8601)
    pub timestamp: String,
}

impl ReceiptUpdate {
    /// Parse an event payload for `receipt_id`.
    ///
    /// # Errors
    ///
    /// Fails when the payload is not a JSON object.
    pub fn from_event(receipt_id: &str, data: &str) -> serde_json::Result<Self> {
        let value = Value::Object(serde_json::from_str(data)?);
        let record = Record::new(&value);

        Ok(Self {
            id: receipt_id.to_string(),
            status: ReceiptStatus::from(record.string_or_default(&["status"])),
            anchor_tx: record.string(&["anchor_tx", "anchorTx"]),
            bundle_hash: record.string(&["bundle_hash", "bundleHash"]),
            timestamp: record.string(&["timestamp"]).unwrap_or_else(now_iso),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_record_snake_case() {
        let record = json!({
            "id": "r-1",
            "status": "anchored",
            "tip_tx_hash": "0xabc",
            "chain": "coston2",
            "amount": "10.5",
            "currency": "C2FLR",
            "sender_wallet": "0x01",
            "receiver_wallet": "0x02",
            "reference": "Payment: coffee",
            "created_at": "2025-01-01T00:00:00Z",
            "anchored_at": "2025-01-01T00:05:00Z",
            "flare_txid": "0xanchor",
            "bundle_hash": "0xbundle",
            "bundle_url": "https://files/r-1.zip",
            "xml_url": "https://files/r-1.xml",
            "project_id": "p-1"
        });

        let receipt = Receipt::from_record(&record);
        assert_eq!(receipt.id, "r-1");
        assert_eq!(receipt.status, ReceiptStatus::Anchored);
        assert_eq!(receipt.transaction_hash, "0xabc");
        assert_eq!(receipt.sender, "0x01");
        assert_eq!(receipt.receiver, "0x02");
        assert_eq!(receipt.anchor_tx.as_deref(), Some("0xanchor"));
        assert_eq!(receipt.bundle_hash.as_deref(), Some("0xbundle"));
        assert_eq!(receipt.project_id.as_deref(), Some("p-1"));
    }

    #[test]
    fn test_from_record_camel_case_fallbacks() {
        let record = json!({
            "id": "r-2",
            "status": "pending",
            "transactionHash": "0xdef",
            "sender": "alice",
            "receiver": "bob",
            "createdAt": "2025-02-01T00:00:00Z",
            "anchorTx": "0xa",
            "bundleHash": "0xb",
            "amount": 3
        });

        let receipt = Receipt::from_record(&record);
        assert_eq!(receipt.transaction_hash, "0xdef");
        assert_eq!(receipt.sender, "alice");
        assert_eq!(receipt.created_at, "2025-02-01T00:00:00Z");
        assert_eq!(receipt.anchor_tx.as_deref(), Some("0xa"));
        assert_eq!(receipt.amount, "3");
        assert_eq!(receipt.anchored_at, None);
    }

    #[test]
    fn test_record_tip_payload() {
        let options = CreateReceiptOptions {
            transaction_hash: "0xabc".to_string(),
            chain: Network::Coston2,
            amount: "5".to_string(),
            currency: "C2FLR".to_string(),
            sender: "0x01".to_string(),
            receiver: "0x02".to_string(),
            reference: "ref".to_string(),
            callback_url: None,
        };

        assert_eq!(
            serde_json::to_value(options.to_payload()).unwrap(),
            json!({
                "tip_tx_hash": "0xabc",
                "chain": "coston2",
                "amount": "5",
                "currency": "C2FLR",
                "sender_wallet": "0x01",
                "receiver_wallet": "0x02",
                "reference": "ref"
            })
        );
    }

    #[test]
    fn test_list_query() {
        assert_eq!(ListReceiptsOptions::default().query(), "");

        let options = ListReceiptsOptions {
            limit: Some(20),
            page: Some(0),
            status: Some(ReceiptStatus::Anchored),
        };
        assert_eq!(options.query(), "?limit=20&status=anchored");
    }

    #[test]
    fn test_update_from_event() {
        let update =
            ReceiptUpdate::from_event("r-1", r#"{"status":"anchored","anchorTx":"0xa","timestamp":"t"}"#)
                .unwrap();

        assert_eq!(update.id, "r-1");
        assert_eq!(update.status, ReceiptStatus::Anchored);
        assert_eq!(update.anchor_tx.as_deref(), Some("0xa"));
        assert_eq!(update.bundle_hash, None);
        assert_eq!(update.timestamp, "t");

        assert!(ReceiptUpdate::from_event("r-1", "not json").is_err());
        assert!(ReceiptUpdate::from_event("r-1", "[1]").is_err());
    }
}
