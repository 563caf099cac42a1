//! Project and API key types

use super::common::Network;
use serde::{Deserialize, Serialize};

/// The project behind the current API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmI {
    /// Project identifier
    #[serde(default, alias = "projectId")]
    pub project_id: String,
    /// Project label
    #[serde(default)]
    pub label: Option<String>,
}

/// A project API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// The key itself
    #[serde(default, alias = "apiKey")]
    pub api_key: String,
    /// Project the key belongs to
    #[serde(default, alias = "projectId")]
    pub project_id: String,
    /// Key label
    #[serde(default)]
    pub label: Option<String>,
    /// Creation time (ISO 8601)
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

/// Options for self-serve project creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateProjectOptions {
    /// Project label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Network the project records on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    /// Middleware base URL for the bootstrap client
    #[serde(skip)]
    pub base_url: Option<String>,
}

/// Options for issuing an API key as an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateApiKeyOptions {
    /// Project the key is issued for
    pub project_id: String,
    /// Key label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_key_accepts_both_casings() {
        let snake: ApiKey =
            serde_json::from_value(json!({"api_key": "k1", "project_id": "p1"})).unwrap();
        let camel: ApiKey =
            serde_json::from_value(json!({"apiKey": "k1", "projectId": "p1", "label": "shop"}))
                .unwrap();

        assert_eq!(snake.api_key, "k1");
        assert_eq!(camel.project_id, "p1");
        assert_eq!(camel.label.as_deref(), Some("shop"));
    }

    #[test]
    fn test_create_project_body_skips_base_url() {
        let options = CreateProjectOptions {
            label: Some("shop".to_string()),
            network: Some(Network::Flare),
            base_url: Some("http://localhost:8000".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"label": "shop", "network": "flare"})
        );
    }
}
