//! REST client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_recv_window_ms() -> u64 {
    5_000
}

fn default_rate_limit() -> u32 {
    10
}

fn default_user_agent() -> String {
    format!("Vela/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration for a REST client instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// Base URL for the exchange REST API
    pub base_url: String,

    /// Exchange identifier (e.g., "binance")
    pub exchange: String,

    /// API key for authenticated requests
    #[serde(default)]
    pub api_key: Option<String>,

    /// API secret for request signing, never serialized
    #[serde(skip)]
    pub api_secret: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Receive window sent with signed requests, in milliseconds
    #[serde(default = "default_recv_window_ms")]
    pub recv_window_ms: u64,

    /// Maximum requests per second enforced locally
    #[serde(default = "default_rate_limit")]
    pub rate_limit_per_second: u32,

    /// Whether this configuration points at a testnet endpoint
    #[serde(default)]
    pub testnet: bool,

    /// User agent header for outgoing requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl RestConfig {
    /// Create a builder for the given base URL and exchange.
    #[must_use]
    pub fn builder(base_url: impl Into<String>, exchange: impl Into<String>) -> RestConfigBuilder {
        RestConfigBuilder::new(base_url, exchange)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether both API key and secret are configured.
    #[must_use]
    pub fn has_auth(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }
}

impl std::fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestConfig")
            .field("base_url", &self.base_url)
            .field("exchange", &self.exchange)
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_ms", &self.timeout_ms)
            .field("recv_window_ms", &self.recv_window_ms)
            .field("rate_limit_per_second", &self.rate_limit_per_second)
            .field("testnet", &self.testnet)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`RestConfig`].
#[derive(Debug, Clone)]
pub struct RestConfigBuilder {
    config: RestConfig,
}

impl RestConfigBuilder {
    fn new(base_url: impl Into<String>, exchange: impl Into<String>) -> Self {
        Self {
            config: RestConfig {
                base_url: base_url.into(),
                exchange: exchange.into(),
                api_key: None,
                api_secret: None,
                timeout_ms: default_timeout_ms(),
                recv_window_ms: default_recv_window_ms(),
                rate_limit_per_second: default_rate_limit(),
                testnet: false,
                user_agent: default_user_agent(),
            },
        }
    }

    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the API secret.
    #[must_use]
    pub fn api_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.api_secret = Some(secret.into());
        self
    }

    /// Set the request timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// Set the receive window in milliseconds.
    #[must_use]
    pub fn recv_window_ms(mut self, recv_window_ms: u64) -> Self {
        self.config.recv_window_ms = recv_window_ms;
        self
    }

    /// Set the local rate limit in requests per second.
    #[must_use]
    pub fn rate_limit_per_second(mut self, limit: u32) -> Self {
        self.config.rate_limit_per_second = limit;
        self
    }

    /// Mark this configuration as pointing at a testnet endpoint.
    #[must_use]
    pub fn testnet(mut self, testnet: bool) -> Self {
        self.config.testnet = testnet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> RestConfig {
        self.config
    }
}
