//! Configuration for the ProofRails client

use crate::types::Network;
use proofrails_transport::TransportConfig;
use secrecy::SecretString;
use std::time::Duration;

/// Environment variable holding the project API key.
pub const API_KEY_ENV: &str = "PROOFRAILS_API_KEY";
/// Environment variable holding the admin token.
pub const ADMIN_TOKEN_ENV: &str = "PROOFRAILS_ADMIN_TOKEN";
/// Environment variable selecting the network.
pub const NETWORK_ENV: &str = "PROOFRAILS_NETWORK";
/// Environment variable overriding the per-attempt timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "PROOFRAILS_TIMEOUT_MS";
/// Environment variable overriding the retry budget.
pub const MAX_RETRIES_ENV: &str = "PROOFRAILS_MAX_RETRIES";
/// Environment variable overriding the base retry delay, in milliseconds.
pub const RETRY_DELAY_ENV: &str = "PROOFRAILS_RETRY_DELAY_MS";

pub use proofrails_transport::{BASE_URL_ENV, DEFAULT_BASE_URL};

/// Configuration for the ProofRails client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Project API key (`X-API-Key`)
    pub api_key: Option<SecretString>,

    /// Admin token (`Authorization: Bearer`)
    pub admin_token: Option<SecretString>,

    /// Network receipts are recorded on
    pub network: Network,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Timeout for each request attempt
    pub timeout: Duration,

    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry; doubles for each one after
    pub retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let transport = TransportConfig::default();
        Self {
            api_key: None,
            admin_token: None,
            network: Network::default(),
            base_url: None,
            timeout: transport.timeout,
            max_retries: transport.max_retries,
            retry_delay: transport.retry_delay,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Create a new configuration with an admin token.
    pub fn with_admin_token(admin_token: impl Into<String>) -> Self {
        Self {
            admin_token: Some(SecretString::new(admin_token.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first; variables
    /// already set in the process take precedence. This will look for:
    /// - `PROOFRAILS_API_KEY` and `PROOFRAILS_ADMIN_TOKEN`
    /// - `PROOFRAILS_BASE_URL`
    /// - `PROOFRAILS_NETWORK` (`coston2` or `flare`)
    /// - `PROOFRAILS_TIMEOUT_MS`, `PROOFRAILS_MAX_RETRIES`, `PROOFRAILS_RETRY_DELAY_MS`
    ///
    /// Values that fail to parse are ignored.
    #[cfg(feature = "env")]
    pub fn from_env() -> Self {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(api_key) = env::var(API_KEY_ENV) {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }
        if let Ok(admin_token) = env::var(ADMIN_TOKEN_ENV) {
            config.admin_token = Some(SecretString::new(admin_token.into_boxed_str()));
        }

        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config.base_url = Some(base_url);
        }

        if let Ok(network) = env::var(NETWORK_ENV)
            && let Ok(network) = network.parse::<Network>()
        {
            config.network = network;
        }

        if let Ok(timeout) = env::var(TIMEOUT_ENV)
            && let Ok(timeout_ms) = timeout.trim().parse::<u64>()
        {
            config.timeout = Duration::from_millis(timeout_ms);
        }

        if let Ok(max_retries) = env::var(MAX_RETRIES_ENV)
            && let Ok(max_retries) = max_retries.trim().parse::<u32>()
        {
            config.max_retries = max_retries;
        }

        if let Ok(retry_delay) = env::var(RETRY_DELAY_ENV)
            && let Ok(retry_delay_ms) = retry_delay.trim().parse::<u64>()
        {
            config.retry_delay = Duration::from_millis(retry_delay_ms);
        }

        config
    }

    /// The transport settings for this configuration.
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            admin_token: self.admin_token.clone(),
            timeout: self.timeout,
            max_retries: self.max_retries,
            retry_delay: self.retry_delay,
        }
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the admin token.
    pub fn admin_token(mut self, admin_token: impl Into<String>) -> Self {
        self.config.admin_token = Some(SecretString::new(admin_token.into().into_boxed_str()));
        self
    }

    /// Set the network.
    pub fn network(mut self, network: Network) -> Self {
        self.config.network = network;
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the delay before the first retry.
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.config.retry_delay = retry_delay;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
