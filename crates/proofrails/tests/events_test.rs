//! Integration tests for live receipt updates over server-sent events

mod common;

use proofrails::{EventListener, ReceiptStatus, ReceiptUpdate};
use std::time::Duration;
use tokio::sync::mpsc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STREAM: &str = concat!(
    "data: {\"status\":\"pending\"}\n\n",
    "data: not json\n\n",
    "event: ping\ndata: {}\n\n",
    ": keep-alive\n\n",
    "data: {\"status\":\"anchored\",\"anchor_tx\":\"0xa\",\"bundle_hash\":\"0xb\",\"timestamp\":\"2025-03-01T10:02:30Z\"}\n\n",
);

async fn wait_until_finished(listener: &EventListener) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while listener.is_active() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("listener did not finish");
}

#[tokio::test]
async fn test_listen_delivers_parsed_updates() {
    common::init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/iso/events/rcpt_01"))
        .and(header("accept", "text/event-stream"))
        .and(header("x-api-key", common::test_api_key().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(STREAM, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel::<ReceiptUpdate>();
    let listener = common::test_client(&server.uri())
        .events()
        .listen("rcpt_01", move |update| {
            let _ = tx.send(update);
        });

    wait_until_finished(&listener).await;

    let first = rx.recv().await.unwrap();
    assert_eq!(first.id, "rcpt_01");
    assert_eq!(first.status, ReceiptStatus::Pending);
    assert!(!first.timestamp.is_empty());

    let second = rx.recv().await.unwrap();
    assert_eq!(second.status, ReceiptStatus::Anchored);
    assert_eq!(second.anchor_tx.as_deref(), Some("0xa"));
    assert_eq!(second.bundle_hash.as_deref(), Some("0xb"));
    assert_eq!(second.timestamp, "2025-03-01T10:02:30Z");

    // The consumer is dropped with the finished task, closing the channel.
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_rejected_subscription_ends_without_updates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/iso/events/rcpt_01"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel::<ReceiptUpdate>();
    let listener = common::test_client(&server.uri())
        .events()
        .listen("rcpt_01", move |update| {
            let _ = tx.send(update);
        });

    wait_until_finished(&listener).await;
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_stop_ends_subscription() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/iso/events/rcpt_01"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(STREAM, "text/event-stream")
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel::<ReceiptUpdate>();
    let listener = common::test_client(&server.uri())
        .events()
        .listen("rcpt_01", move |update| {
            let _ = tx.send(update);
        });
    assert!(listener.is_active());

    listener.stop();
    wait_until_finished(&listener).await;

    assert!(rx.recv().await.is_none());
}
