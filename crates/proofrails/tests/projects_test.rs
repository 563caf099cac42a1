//! Integration tests for project bootstrap, key management and auth headers

mod common;

use proofrails::{CreateApiKeyOptions, CreateProjectOptions, ProofRails, friendly_error};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_project_returns_keyed_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/public/api-keys"))
        .and(body_json(json!({"label": "coffee-shop"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "api_key": "pr_new_key_0123456789",
            "project_id": "proj_7"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/whoami"))
        .and(header("x-api-key", "pr_new_key_0123456789"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"projectId": "proj_7", "label": "coffee-shop"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let project = ProofRails::create_project(CreateProjectOptions {
        label: Some("coffee-shop".to_string()),
        base_url: Some(server.uri()),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(project.api_key, "pr_new_key_0123456789");
    assert_eq!(project.project_id, "proj_7");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-api-key").is_none());

    let info = project.client.project().info().await.unwrap();
    assert_eq!(info.project_id, "proj_7");
    assert_eq!(info.label.as_deref(), Some("coffee-shop"));
}

#[tokio::test]
async fn test_rotate_key_posts_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/api-keys/rotate"))
        .and(header("x-api-key", common::test_api_key().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiKey": "pr_rotated_0123456789",
            "projectId": "proj_1",
            "createdAt": "2025-03-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = common::test_client(&server.uri())
        .project()
        .rotate_key()
        .await
        .unwrap();

    assert_eq!(key.api_key, "pr_rotated_0123456789");
    assert_eq!(key.created_at.as_deref(), Some("2025-03-01T00:00:00Z"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_admin_requests_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/admin/api-keys"))
        .and(header("authorization", "Bearer admin-secret"))
        .and(body_json(json!({"project_id": "proj_1", "label": "ci"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"api_key": "pr_ci_0123456789", "project_id": "proj_1"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/admin/api-keys/key_9"))
        .and(header("authorization", "Bearer admin-secret"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ProofRails::builder()
        .admin_token("admin-secret")
        .base_url(server.uri())
        .build()
        .unwrap();

    let key = client
        .admin()
        .create_key(&CreateApiKeyOptions {
            project_id: "proj_1".to_string(),
            label: Some("ci".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(key.api_key, "pr_ci_0123456789");

    client.admin().delete_key("key_9").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.headers.get("x-api-key").is_none()));
}

#[tokio::test]
async fn test_credentials_set_after_construction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/whoami"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"project_id": "p"})))
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    client.project().info().await.unwrap();

    client.set_api_key("pr_second_0123456789");
    client.set_admin_token("admin-2");
    client.project().info().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let first = &requests[0].headers;
    assert_eq!(first.get("x-api-key").unwrap(), common::test_api_key().as_str());
    assert!(first.get("authorization").is_none());

    let second = &requests[1].headers;
    assert_eq!(second.get("x-api-key").unwrap(), "pr_second_0123456789");
    assert_eq!(second.get("authorization").unwrap(), "Bearer admin-2");
}

#[tokio::test]
async fn test_unauthorized_is_explained() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/whoami"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid API key"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ProofRails::builder()
        .api_key("pr_bad_0123456789")
        .base_url(server.uri())
        .retry_delay(Duration::from_millis(10))
        .build()
        .unwrap();
    let error = client.project().info().await.unwrap_err();

    assert_eq!(error.status_code(), Some(401));
    assert_eq!(error.message(), "Invalid API key");
    assert_eq!(friendly_error(&error).title, "🔐 Authentication Failed");
}
