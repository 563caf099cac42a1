//! Integration tests for verification and statements using wiremock

mod common;

use pretty_assertions::assert_eq;
use proofrails::{StatementKind, StatementOptions};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_receipt(server: &MockServer, id: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/iso/receipts/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::load_response_fixture(fixture)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_verify_anchored_receipt() {
    let server = MockServer::start().await;
    mount_receipt(&server, "rcpt_01", "receipt_anchored").await;

    let result = common::test_client(&server.uri())
        .verify()
        .by_receipt_id("rcpt_01")
        .await
        .unwrap();

    assert!(result.valid);
    assert!(result.on_chain);
    assert_eq!(
        result.bundle_hash,
        "0x9a8b7c6d5e4f30211203f4e5d6c7b8a99a8b7c6d5e4f30211203f4e5d6c7b8a9"
    );
    assert_eq!(result.timestamp.as_deref(), Some("2025-03-01T10:02:30.000Z"));
}

#[tokio::test]
async fn test_verify_pending_receipt() {
    let server = MockServer::start().await;
    mount_receipt(&server, "rcpt_02", "receipt_pending").await;

    let result = common::test_client(&server.uri())
        .verify()
        .by_receipt_id("rcpt_02")
        .await
        .unwrap();

    assert!(!result.valid);
    assert!(!result.on_chain);
    assert_eq!(result.bundle_hash, "");
    assert_eq!(result.anchor_tx, None);
}

#[tokio::test]
async fn test_verify_by_hash_and_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/iso/verify"))
        .and(body_json(json!({"bundle_hash": "0xb"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": true,
            "bundle_hash": "0xb",
            "on_chain": true,
            "anchor_tx": "0xa",
            "block_number": 812
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/iso/verify"))
        .and(body_json(json!({"bundle_url": "https://files/e.zip"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"valid": false, "bundleHash": "0xc"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());

    let by_hash = client.verify().by_hash("0xb").await.unwrap();
    assert!(by_hash.valid);
    assert_eq!(by_hash.block_number, Some(812));

    let by_url = client.verify().by_url("https://files/e.zip").await.unwrap();
    assert!(!by_url.valid);
    assert_eq!(by_url.bundle_hash, "0xc");
}

#[tokio::test]
async fn test_proof_from_receipt() {
    let server = MockServer::start().await;
    mount_receipt(&server, "rcpt_01", "receipt_anchored").await;

    let proof = common::test_client(&server.uri())
        .verify()
        .proof("rcpt_01")
        .await
        .unwrap();

    assert_eq!(proof.receipt_id, "rcpt_01");
    assert_eq!(proof.block_number, 1_048_576);
    assert_eq!(proof.network, "coston2");
    assert_eq!(proof.signature, "0xsig");
    assert_eq!(proof.contract_address, "0x00000000000000000000000000000000000a11ce");
}

#[tokio::test]
async fn test_intraday_statement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/iso/statement/camt052"))
        .and(body_json(json!({
            "date_from": "2025-03-01",
            "date_to": "2025-03-02",
            "account_id": "acct-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://files/camt052.xml",
            "download_url": "https://files/camt052.xml?download=1",
            "message_id": "msg-52",
            "created_at": "2025-03-02T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let statement = common::test_client(&server.uri())
        .statements()
        .intraday(&StatementOptions {
            date_from: Some("2025-03-01".to_string()),
            date_to: Some("2025-03-02".to_string()),
            account_id: Some("acct-1".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(statement.kind, StatementKind::Camt052);
    assert_eq!(statement.download_url, "https://files/camt052.xml?download=1");
    assert_eq!(statement.message_id, "msg-52");
    assert_eq!(statement.created_at, "2025-03-02T12:00:00Z");
}

#[tokio::test]
async fn test_end_of_day_statement_uses_start_date_when_no_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/iso/statement/camt053"))
        .and(body_json(json!({"date": "2025-03-01"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"url": "https://files/camt053.xml", "messageId": "msg-53"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let statement = common::test_client(&server.uri())
        .statements()
        .end_of_day(&StatementOptions {
            date_from: Some("2025-03-01".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(statement.kind, StatementKind::Camt053);
    assert_eq!(statement.url, "https://files/camt053.xml");
    assert_eq!(statement.download_url, "https://files/camt053.xml");
    assert_eq!(statement.message_id, "msg-53");
}
