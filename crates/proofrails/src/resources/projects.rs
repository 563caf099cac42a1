//! Project and API key endpoints

use super::Resource;
use crate::{
    error::Result,
    types::{ApiKey, CreateApiKeyOptions, CreateProjectOptions, WhoAmI},
};
use proofrails_transport::HttpTransport;
use serde::de::IgnoredAny;

/// Project resource, authenticated with the project API key.
#[derive(Clone)]
pub struct Projects {
    transport: HttpTransport,
}

impl Projects {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// The project behind the current API key.
    pub async fn info(&self) -> Result<WhoAmI> {
        self.transport.get("/v1/whoami", None).await
    }

    /// Replace the current API key with a fresh one.
    ///
    /// The client keeps using the old key until [`ProofRails::set_api_key`](crate::ProofRails::set_api_key)
    /// is called with the returned one.
    pub async fn rotate_key(&self) -> Result<ApiKey> {
        self.transport
            .post::<_, ()>("/v1/api-keys/rotate", None, None)
            .await
    }

    /// Create a project and its first API key. Needs no credentials.
    pub async fn create(&self, options: &CreateProjectOptions) -> Result<ApiKey> {
        self.transport
            .post("/v1/public/api-keys", Some(options), None)
            .await
    }
}

impl Resource for Projects {
    fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}

/// Administrative key management, authenticated with the admin token.
#[derive(Clone)]
pub struct Admin {
    transport: HttpTransport,
}

impl Admin {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Issue an API key for a project.
    pub async fn create_key(&self, options: &CreateApiKeyOptions) -> Result<ApiKey> {
        self.transport
            .post("/v1/admin/api-keys", Some(options), None)
            .await
    }

    /// Revoke an API key.
    pub async fn delete_key(&self, key_id: &str) -> Result<()> {
        let _: IgnoredAny = self
            .transport
            .delete(&format!("/v1/admin/api-keys/{}", key_id), None)
            .await?;
        Ok(())
    }
}

impl Resource for Admin {
    fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}
