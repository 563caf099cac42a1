//! Receipts API endpoint

use super::Resource;
use crate::{
    error::Result,
    types::{
        CreateReceiptOptions, IsoMessage, ListReceiptsOptions, Paginated, Receipt,
        ReceiptArtifacts, receipt::RecordTipResponse,
    },
};
use proofrails_transport::HttpTransport;
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

/// Receipts API resource.
///
/// Records payments as ISO 20022 receipts and reads them back.
#[derive(Clone)]
pub struct Receipts {
    transport: HttpTransport,
}

/// Listing bodies come either bare or wrapped.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReceiptList {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(default)]
        items: Option<Vec<Value>>,
    },
}

impl ReceiptList {
    fn into_items(self) -> Vec<Value> {
        match self {
            ReceiptList::Bare(items) => items,
            ReceiptList::Wrapped { items } => items.unwrap_or_default(),
        }
    }
}

impl Receipts {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Record a payment.
    ///
    /// The returned receipt echoes the options with the server-assigned id
    /// and status; `created_at` is the local time of the call.
    pub async fn create(&self, options: &CreateReceiptOptions) -> Result<Receipt> {
        let response: RecordTipResponse = self
            .transport
            .post("/v1/iso/record-tip", Some(&options.to_payload()), None)
            .await?;

        Ok(Receipt::from_created(options, response))
    }

    /// Fetch a receipt by id.
    pub async fn get(&self, receipt_id: &str) -> Result<Receipt> {
        let record = self.record(receipt_id).await?;
        Ok(Receipt::from_record(&record))
    }

    /// List receipts.
    ///
    /// `total` is the number of items in this page; the server does not
    /// report an overall count.
    pub async fn list(&self, options: &ListReceiptsOptions) -> Result<Paginated<Receipt>> {
        let path = format!("/v1/iso/receipts{}", options.query());
        let list: ReceiptList = self.transport.get(&path, None).await?;

        let items: Vec<Receipt> = list
            .into_items()
            .iter()
            .map(Receipt::from_record)
            .collect();

        Ok(Paginated {
            total: items.len(),
            items,
            page: options.page.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE),
            limit: options.limit.filter(|n| *n > 0).unwrap_or(DEFAULT_LIMIT),
        })
    }

    /// Download locations for a receipt's ISO messages and evidence bundle.
    pub async fn artifacts(&self, receipt_id: &str) -> Result<ReceiptArtifacts> {
        let messages: Vec<IsoMessage> = self
            .transport
            .get(&format!("/v1/iso/messages/{}", receipt_id), None)
            .await?;

        let base_url = self.transport.base_url();
        let mut artifacts = ReceiptArtifacts {
            bundle_url: format!("{}/files/{}/evidence.zip", base_url, receipt_id),
            manifest_url: format!("{}/files/{}/manifest.json", base_url, receipt_id),
            ..Default::default()
        };

        for message in messages {
            let slot = match message.kind.as_str() {
                "pain.001" => &mut artifacts.pain001_url,
                "pain.002" => &mut artifacts.pain002_url,
                "pain.007" => &mut artifacts.pain007_url,
                "pain.008" => &mut artifacts.pain008_url,
                "camt.054" => &mut artifacts.camt054_url,
                _ => continue,
            };
            *slot = Some(message.url);
        }

        Ok(artifacts)
    }

    /// Raw receipt record, for resources that read fields `Receipt` drops.
    pub(crate) async fn record(&self, receipt_id: &str) -> Result<Value> {
        self.transport
            .get(&format!("/v1/iso/receipts/{}", receipt_id), None)
            .await
    }
}

impl Resource for Receipts {
    fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}
