//! Main client for the ProofRails API

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use proofrails_transport::{HttpTransport, RateLimitSnapshot};
use secrecy::SecretString;

use crate::{
    config::{ClientConfig, ClientConfigBuilder},
    error::Result,
    resources::{
        Admin, Embed, Events, Projects, Receipts, Statements, Templates, Verification,
    },
    types::{CreateProjectOptions, Network},
};

/// Main client for the ProofRails API.
///
/// Cloning is cheap; clones share the transport, credentials and the
/// rate-limit snapshot.
///
/// # Example
///
/// ```rust,no_run
/// use proofrails::ProofRails;
///
/// # fn example() -> proofrails::Result<()> {
/// let client = ProofRails::with_api_key("pr_live_...")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ProofRails {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: HttpTransport,
    network: Network,

    // Lazy-initialized resources
    project: OnceLock<Projects>,
    admin: OnceLock<Admin>,
    receipts: OnceLock<Receipts>,
    verify: OnceLock<Verification>,
    statements: OnceLock<Statements>,
    events: OnceLock<Events>,
    embed: OnceLock<Embed>,
    templates: OnceLock<Templates>,
}

/// A freshly created project and a client keyed for it.
#[derive(Debug, Clone)]
pub struct NewProject {
    /// Client authenticated with the new key
    pub client: ProofRails,
    /// The new API key
    pub api_key: String,
    /// The new project's identifier
    pub project_id: String,
}

impl ProofRails {
    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.transport_config())?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                network: config.network,
                project: OnceLock::new(),
                admin: OnceLock::new(),
                receipts: OnceLock::new(),
                verify: OnceLock::new(),
                statements: OnceLock::new(),
                events: OnceLock::new(),
                embed: OnceLock::new(),
                templates: OnceLock::new(),
            }),
        })
    }

    /// Create a client with a project API key and default settings.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::with_api_key(api_key))
    }

    /// Create a client from `PROOFRAILS_*` environment variables.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ProofRailsBuilder {
        ProofRailsBuilder::default()
    }

    /// Create a project and return a client keyed for it.
    ///
    /// The project is created without credentials; the returned client
    /// uses the new key, the requested network and base URL.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use proofrails::{CreateProjectOptions, ProofRails};
    ///
    /// # async fn example() -> proofrails::Result<()> {
    /// let project = ProofRails::create_project(CreateProjectOptions {
    ///     label: Some("coffee-shop".to_string()),
    ///     ..Default::default()
    /// })
    /// .await?;
    ///
    /// println!("Save this key: {}", project.api_key);
    /// let receipts = project.client.receipts().list(&Default::default()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_project(options: CreateProjectOptions) -> Result<NewProject> {
        let mut config = ClientConfig {
            network: options.network.unwrap_or_default(),
            base_url: options.base_url.clone(),
            ..Default::default()
        };

        let bootstrap = Self::new(config.clone())?;
        let key = bootstrap
            .project()
            .create(&CreateProjectOptions {
                label: options.label,
                ..Default::default()
            })
            .await?;

        config.api_key = Some(SecretString::new(key.api_key.clone().into_boxed_str()));
        let client = Self::new(config)?;

        Ok(NewProject {
            client,
            api_key: key.api_key,
            project_id: key.project_id,
        })
    }

    /// Replace the project API key for this client and its clones.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        self.inner.transport.set_api_key(api_key);
    }

    /// Replace the admin token for this client and its clones.
    pub fn set_admin_token(&self, admin_token: impl Into<String>) {
        self.inner.transport.set_admin_token(admin_token);
    }

    /// Quota state from the most recent response that reported one.
    pub fn rate_limit(&self) -> Option<RateLimitSnapshot> {
        self.inner.transport.rate_limit()
    }

    /// The resolved base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.inner.transport.base_url()
    }

    /// The configured network.
    pub fn network(&self) -> Network {
        self.inner.network
    }

    /// The underlying transport, for endpoints without a resource.
    pub fn transport(&self) -> &HttpTransport {
        &self.inner.transport
    }

    /// Project and API key endpoints.
    pub fn project(&self) -> &Projects {
        self.inner
            .project
            .get_or_init(|| Projects::new(self.inner.transport.clone()))
    }

    /// Administrative endpoints; need an admin token.
    pub fn admin(&self) -> &Admin {
        self.inner
            .admin
            .get_or_init(|| Admin::new(self.inner.transport.clone()))
    }

    /// Receipt endpoints.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use proofrails::ProofRails;
    /// # async fn example(client: ProofRails) -> proofrails::Result<()> {
    /// let receipt = client.receipts().get("receipt-id").await?;
    /// println!("{} is {}", receipt.id, receipt.status);
    /// # Ok(())
    /// # }
    /// ```
    pub fn receipts(&self) -> &Receipts {
        self.inner
            .receipts
            .get_or_init(|| Receipts::new(self.inner.transport.clone()))
    }

    /// Verification endpoints.
    pub fn verify(&self) -> &Verification {
        self.inner
            .verify
            .get_or_init(|| Verification::new(self.inner.transport.clone()))
    }

    /// Statement generation endpoints.
    pub fn statements(&self) -> &Statements {
        self.inner
            .statements
            .get_or_init(|| Statements::new(self.inner.transport.clone()))
    }

    /// Live receipt updates.
    pub fn events(&self) -> &Events {
        self.inner
            .events
            .get_or_init(|| Events::new(self.inner.transport.clone()))
    }

    /// Embeddable widgets.
    pub fn embed(&self) -> &Embed {
        self.inner
            .embed
            .get_or_init(|| Embed::new(self.inner.transport.clone()))
    }

    /// Receipt templates.
    pub fn templates(&self) -> &Templates {
        self.inner
            .templates
            .get_or_init(|| Templates::new(self.inner.transport.clone()))
    }
}

impl fmt::Debug for ProofRails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProofRails")
            .field("base_url", &self.base_url())
            .field("network", &self.inner.network)
            .field("has_api_key", &self.inner.transport.has_api_key())
            .finish()
    }
}

/// Builder for creating a configured client.
#[derive(Debug, Default)]
pub struct ProofRailsBuilder {
    config: ClientConfigBuilder,
}

impl ProofRailsBuilder {
    /// Set the project API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.api_key(api_key);
        self
    }

    /// Set the admin token.
    pub fn admin_token(mut self, admin_token: impl Into<String>) -> Self {
        self.config = self.config.admin_token(admin_token);
        self
    }

    /// Set the network.
    pub fn network(mut self, network: Network) -> Self {
        self.config = self.config.network(network);
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config = self.config.max_retries(max_retries);
        self
    }

    /// Set the delay before the first retry.
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.config = self.config.retry_delay(retry_delay);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<ProofRails> {
        ProofRails::new(self.config.build())
    }
}
