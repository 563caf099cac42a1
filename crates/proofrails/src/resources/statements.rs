//! Statement generation endpoints

use super::Resource;
use crate::{
    error::Result,
    types::{Statement, StatementKind, StatementOptions, record::Record, record::now_iso},
};
use proofrails_transport::HttpTransport;
use serde::Serialize;
use serde_json::Value;

/// Statements resource.
///
/// Generates ISO 20022 account reports over recorded receipts.
#[derive(Clone)]
pub struct Statements {
    transport: HttpTransport,
}

#[derive(Serialize)]
struct IntradayRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date_from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<&'a str>,
}

#[derive(Serialize)]
struct EndOfDayRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<&'a str>,
}

impl Statements {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Generate an intraday report (camt.052).
    pub async fn intraday(&self, options: &StatementOptions) -> Result<Statement> {
        let request = IntradayRequest {
            date_from: options.date_from.as_deref(),
            date_to: options.date_to.as_deref(),
            account_id: options.account_id.as_deref(),
        };
        let response: Value = self
            .transport
            .post("/v1/iso/statement/camt052", Some(&request), None)
            .await?;

        Ok(statement_from_response(StatementKind::Camt052, &response))
    }

    /// Generate an end-of-day statement (camt.053).
    ///
    /// The statement covers `date_to`, or `date_from` when no end date is set.
    pub async fn end_of_day(&self, options: &StatementOptions) -> Result<Statement> {
        let request = EndOfDayRequest {
            date: options.date_to.as_deref().or(options.date_from.as_deref()),
            account_id: options.account_id.as_deref(),
        };
        let response: Value = self
            .transport
            .post("/v1/iso/statement/camt053", Some(&request), None)
            .await?;

        Ok(statement_from_response(StatementKind::Camt053, &response))
    }
}

impl Resource for Statements {
    fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}

fn statement_from_response(kind: StatementKind, value: &Value) -> Statement {
    let record = Record::new(value);
    let url = record.string_or_default(&["url"]);

    Statement {
        kind,
        download_url: record.string(&["download_url"]).unwrap_or_else(|| url.clone()),
        url,
        message_id: record.string_or_default(&["message_id", "messageId"]),
        created_at: record.string(&["created_at"]).unwrap_or_else(now_iso),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statement_fallbacks() {
        let statement = statement_from_response(
            StatementKind::Camt053,
            &json!({"url": "https://x/s.xml", "messageId": "m-1"}),
        );

        assert_eq!(statement.download_url, "https://x/s.xml");
        assert_eq!(statement.message_id, "m-1");
        assert!(!statement.created_at.is_empty());
    }

    #[test]
    fn test_end_of_day_request_prefers_date_to() {
        let request = EndOfDayRequest {
            date: Some("2025-01-31"),
            account_id: None,
        };

        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"date": "2025-01-31"}));
    }
}
