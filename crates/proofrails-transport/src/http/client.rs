//! HTTP transport client implementation
//!
//! Implements the Transport trait for the ProofRails API: auth header
//! injection, per-attempt timeouts, rate-limit tracking and retries with
//! exponential backoff.

use crate::error::{Error, Result};
use crate::observability::{self, RequestMetadata, RequestTimer, ResponseMetadata};
use crate::rate_limit::RateLimitSnapshot;
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

pub use super::retry::{FailureClass, RetryPolicy};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://proofrails-clone-middleware.onrender.com";

/// Environment variable consulted when no base URL is configured.
pub const BASE_URL_ENV: &str = "PROOFRAILS_BASE_URL";

const API_KEY_HEADER: &str = "x-api-key";

/// Stream of raw bytes from a long-lived response.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL override; falls back to `PROOFRAILS_BASE_URL`, then [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,

    /// Project API key, sent as `X-API-Key`
    pub api_key: Option<SecretString>,

    /// Admin token, sent as `Authorization: Bearer`
    pub admin_token: Option<SecretString>,

    /// Timeout for each individual attempt
    pub timeout: Duration,

    /// Retries allowed after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry; doubles for each one after
    pub retry_delay: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            admin_token: None,
            timeout: Duration::from_millis(30_000),
            max_retries: 3,
            retry_delay: Duration::from_millis(1_000),
        }
    }
}

impl TransportConfig {
    /// Resolve the effective base URL.
    ///
    /// Order: explicit override, then the environment, then the default.
    pub fn resolve_base_url(&self) -> String {
        self.base_url
            .clone()
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// Per-call options layered over the transport defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. Applied after `Content-Type` and before the auth headers.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Default)]
struct Credentials {
    api_key: Option<SecretString>,
    admin_token: Option<SecretString>,
}

#[derive(Debug)]
struct TransportInner {
    http_client: ReqwestClient,
    base_url: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
    credentials: RwLock<Credentials>,
    rate_limit: RwLock<Option<RateLimitSnapshot>>,
}

/// Result of one attempt.
enum AttemptOutcome {
    Success(HttpResponse),
    Failed { class: FailureClass, error: Error },
}

/// HTTP transport for the ProofRails API
///
/// Cloning is cheap and every clone shares credentials and the rate-limit
/// snapshot.
///
/// # Example
///
/// ```rust,no_run
/// use proofrails_transport::{HttpTransport, TransportConfig};
///
/// # async fn example() -> proofrails_transport::Result<()> {
/// let transport = HttpTransport::new(TransportConfig::default())?;
/// transport.set_api_key("pr_live_...");
///
/// let whoami: serde_json::Value = transport.get("/v1/whoami", None).await?;
/// println!("{whoami}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Arc<TransportInner>,
}

impl HttpTransport {
    /// Create a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for an empty or non-HTTP base URL and
    /// [`Error::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let base_url = config.resolve_base_url();
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err(Error::InvalidUrl("base URL is empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidUrl(format!(
                "base URL must use http or https: {}",
                base_url
            )));
        }

        let http_client = ReqwestClient::builder()
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(TransportInner {
                http_client,
                base_url,
                timeout: config.timeout,
                retry_policy: RetryPolicy::new(config.max_retries, config.retry_delay),
                credentials: RwLock::new(Credentials {
                    api_key: config.api_key,
                    admin_token: config.admin_token,
                }),
                rate_limit: RwLock::new(None),
            }),
        })
    }

    /// The resolved base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// The retry policy in effect.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.inner.retry_policy
    }

    /// Replace the API key for all subsequent requests.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        let mut credentials = self
            .inner
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        credentials.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
    }

    /// Replace the admin token for all subsequent requests.
    pub fn set_admin_token(&self, admin_token: impl Into<String>) {
        let mut credentials = self
            .inner
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        credentials.admin_token = Some(SecretString::new(admin_token.into().into_boxed_str()));
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.inner
            .credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .api_key
            .is_some()
    }

    /// The most recent rate-limit snapshot, if any response carried one.
    pub fn rate_limit(&self) -> Option<RateLimitSnapshot> {
        *self
            .inner
            .rate_limit
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// `GET` a path and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None, options).await
    }

    /// `POST` an optional JSON body and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        self.request(Method::POST, path, body, options).await
    }

    /// `PUT` an optional JSON body and decode the JSON response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        self.request(Method::PUT, path, body, options).await
    }

    /// `DELETE` a path and decode the JSON response.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, path, None, options)
            .await
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        let body = match body {
            Some(body) if method == Method::POST || method == Method::PUT => {
                Some(serde_json::to_vec(body)?)
            }
            _ => None,
        };

        let request = self.build_request(method, path, body, options.unwrap_or_default())?;
        self.send_http(request).await?.json()
    }

    /// Assemble one logical request.
    ///
    /// Header order: `Content-Type`, caller headers, `X-API-Key`,
    /// `Authorization`. Later entries replace earlier ones with the same name.
    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        options: RequestOptions,
    ) -> Result<HttpRequest> {
        let url = format!("{}{}", self.inner.base_url, path);
        let mut request = HttpRequest::new(method, url);

        request.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        for (name, value) in &options.headers {
            request = request.with_header(name, value)?;
        }

        self.apply_auth(&mut request.headers)?;

        if let Some(body) = body {
            request = request.with_body(body);
        }

        Ok(request)
    }

    fn apply_auth(&self, headers: &mut HeaderMap) -> Result<()> {
        let credentials = self
            .inner
            .credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(api_key) = &credentials.api_key {
            let value = HeaderValue::from_str(api_key.expose_secret())
                .map_err(|_| Error::InvalidHeader("API key is not a valid header value".to_string()))?;
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        if let Some(admin_token) = &credentials.admin_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", admin_token.expose_secret()))
                .map_err(|_| {
                    Error::InvalidHeader("admin token is not a valid header value".to_string())
                })?;
            headers.insert(header::AUTHORIZATION, value);
        }

        Ok(())
    }

    fn record_rate_limit(&self, headers: &HeaderMap) {
        if let Some(snapshot) = RateLimitSnapshot::from_headers(headers) {
            observability::log_rate_limit(&snapshot);
            *self
                .inner
                .rate_limit
                .write()
                .unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
        }
    }

    async fn try_send_request(&self, request: &HttpRequest) -> AttemptOutcome {
        let mut builder = self
            .inner
            .http_client
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(HttpResponse::new(status, headers, body.to_vec()))
        };

        match tokio::time::timeout(self.inner.timeout, exchange).await {
            Err(_) => AttemptOutcome::Failed {
                class: FailureClass::NoResponse,
                error: Error::Timeout(self.inner.timeout),
            },
            Ok(Err(e)) => AttemptOutcome::Failed {
                class: FailureClass::NoResponse,
                error: Error::from_network_message(e.to_string()),
            },
            Ok(Ok(response)) => {
                self.record_rate_limit(&response.headers);

                if response.is_success() {
                    AttemptOutcome::Success(response)
                } else {
                    AttemptOutcome::Failed {
                        class: FailureClass::HttpStatus(response.status.as_u16()),
                        error: Error::from_response(response.status, &response.body),
                    }
                }
            }
        }
    }

    /// Open a server-sent event stream at `path`.
    ///
    /// Sends a single `GET` with the auth headers and
    /// `Accept: text/event-stream`. The connection is long-lived, so no
    /// timeout or retry applies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-2xx answer and [`Error::EventStream`]
    /// if the connection cannot be established.
    pub async fn open_event_stream(&self, path: &str) -> Result<ByteStream> {
        let url = format!("{}{}", self.inner.base_url, path);
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/event-stream"));
        self.apply_auth(&mut headers)?;

        let response = self
            .inner
            .http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| Error::EventStream(e.to_string()))?;

        self.record_rate_limit(response.headers());

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(Error::from_response(status, &body));
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| Error::EventStream(e.to_string())))
            .boxed())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut metadata = RequestMetadata::new(request.method.as_str(), &request.url);
        if let Some(body) = &request.body {
            metadata = metadata.with_body_size(body.len());
        }

        let policy = &self.inner.retry_policy;
        let timer = RequestTimer::start();
        let mut attempt = 0;

        loop {
            metadata.log_attempt(attempt, policy.max_retries());

            match self.try_send_request(&request).await {
                AttemptOutcome::Success(response) => {
                    ResponseMetadata::new(Some(response.status.as_u16()), timer.elapsed())
                        .with_body_size(response.body.len())
                        .with_retries(attempt)
                        .log_success(&metadata);
                    return Ok(response);
                }
                AttemptOutcome::Failed { class, error } => {
                    if !policy.should_retry(class, attempt) {
                        ResponseMetadata::new(error.status_code(), timer.elapsed())
                            .with_retries(attempt)
                            .log_error(&metadata, &error.to_string());
                        return Err(error);
                    }

                    let delay = policy.calculate_delay(attempt);
                    metadata.log_backoff(attempt + 1, delay, &error.to_string());
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
