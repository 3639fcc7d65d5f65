//! HTTP client for exchange REST APIs.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;
use vela_core::error::NetworkError;

use super::config::RestConfig;
use super::rate_limiter::RateLimiter;
use super::signer::{RequestSigner, build_query_string};

/// HTTP client wrapper with signing and local rate limiting.
///
/// Each call through this client makes exactly one network attempt.
/// Failures are mapped to `NetworkError` and returned to the caller,
/// which decides what to do with them.
#[derive(Debug)]
pub struct RestClient {
    config: RestConfig,
    http_client: reqwest::Client,
    rate_limiter: RateLimiter,
    signer: Option<RequestSigner>,
}

impl RestClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the underlying HTTP client cannot be
    /// built (e.g., TLS backend initialization failure). No network
    /// traffic is generated.
    pub fn new(config: RestConfig) -> Result<Self, NetworkError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                NetworkError::ConnectionFailed {
                    reason: format!("Invalid user agent: {e}"),
                }
            })?,
        );

        if let Some(api_key) = &config.api_key {
            headers.insert(
                "X-MBX-APIKEY",
                HeaderValue::from_str(api_key).map_err(|e| NetworkError::ConnectionFailed {
                    reason: format!("Invalid API key header: {e}"),
                })?,
            );
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| NetworkError::ConnectionFailed {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;

        let rate_limiter = RateLimiter::per_second(config.rate_limit_per_second);
        let signer = config.api_secret.as_deref().map(RequestSigner::new);

        Ok(Self {
            config,
            http_client,
            rate_limiter,
            signer,
        })
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    /// Start building a POST request to `path`.
    #[must_use]
    pub fn post(&self, path: &str) -> RequestBuilder<'_> {
        RequestBuilder {
            client: self,
            method: reqwest::Method::POST,
            path: path.to_string(),
            query: Vec::new(),
            signed: false,
        }
    }

    fn build_url(&self, path: &str, query: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if query.is_empty() {
            format!("{base}{path}")
        } else {
            format!("{base}{path}?{query}")
        }
    }

    // Errors from `send()` never carry an HTTP status; statuses arrive
    // on the response, which the caller interprets.
    fn map_send_error(&self, error: &reqwest::Error) -> NetworkError {
        if error.is_timeout() {
            NetworkError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else if error.is_connect() {
            NetworkError::ConnectionFailed {
                reason: error.to_string(),
            }
        } else {
            NetworkError::InvalidResponse {
                reason: error.to_string(),
            }
        }
    }
}

/// Builder for a single REST request.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    client: &'a RestClient,
    method: reqwest::Method,
    path: String,
    query: Vec<(String, String)>,
    signed: bool,
}

impl RequestBuilder<'_> {
    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Mark the request as requiring an HMAC signature.
    #[must_use]
    pub fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    /// Execute the request, making exactly one network attempt.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` for transport-level failures. HTTP
    /// error statuses are not an error here; the response is returned
    /// for the caller to interpret.
    pub async fn send(self) -> Result<reqwest::Response, NetworkError> {
        let mut query_string = build_query_string(&self.query);

        if self.signed {
            let signer =
                self.client
                    .signer
                    .as_ref()
                    .ok_or_else(|| NetworkError::ConnectionFailed {
                        reason: "Signed request without an API secret configured".to_string(),
                    })?;
            let signature = signer.sign(&query_string)?;
            query_string = format!("{query_string}&signature={signature}");
        }

        let url = self.client.build_url(&self.path, &query_string);

        self.client.rate_limiter.acquire().await;
        debug!(method = %self.method, path = %self.path, "Sending REST request");

        self.client
            .http_client
            .request(self.method, &url)
            .send()
            .await
            .map_err(|e| self.client.map_send_error(&e))
    }
}
