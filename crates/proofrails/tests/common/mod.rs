//! Common test utilities and helpers

use proofrails::ProofRails;
use std::path::Path;
use std::time::Duration;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> serde_json::Value {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    let body = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    });
    serde_json::from_str(&body).expect("fixture is valid JSON")
}

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "pr_test_0123456789abcdef".to_string()
}

/// Client keyed with [`test_api_key`], pointed at a mock server, with
/// fast retries.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> ProofRails {
    ProofRails::builder()
        .api_key(test_api_key())
        .base_url(base_url)
        .max_retries(1)
        .retry_delay(Duration::from_millis(10))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build client")
}

/// Route SDK logs to the test output; honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
