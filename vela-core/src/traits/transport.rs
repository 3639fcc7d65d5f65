//! Order transport trait and credential container.

use async_trait::async_trait;
use std::fmt;

use crate::data::{OrderAck, OrderRequest};
use crate::error::VelaError;

/// API credentials for exchange authentication.
///
/// The secret is a private field so it cannot leak through struct
/// literals or field access; `Debug` redacts it.
///
/// # Examples
///
/// ```
/// use vela_core::traits::Credentials;
///
/// let creds = Credentials::new("my_key", "my_secret");
/// assert_eq!(creds.api_key(), "my_key");
/// assert!(creds.is_complete());
/// assert!(!format!("{creds:?}").contains("my_secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the API secret.
    ///
    /// Callers must never log or display the returned value.
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Returns true if both key and secret are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Transport capability for placing orders on an exchange.
///
/// Implementations own endpoint selection and authentication. A call to
/// [`create_order`](OrderTransport::create_order) performs exactly one
/// submission attempt; implementations must not retry internally, since
/// a resubmitted order is a new order.
///
/// The error split carries the classification contract:
/// `VelaError::Exchange` means the exchange answered with a well-formed
/// refusal; `VelaError::Network` means no well-formed answer arrived.
#[async_trait]
pub trait OrderTransport: Send + Sync {
    /// Returns the exchange name, for logging.
    fn exchange(&self) -> &str;

    /// Submits a new order, performing exactly one network attempt.
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderAck, VelaError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_accessors() {
        let creds = Credentials::new("key123", "secret456");
        assert_eq!(creds.api_key(), "key123");
        assert_eq!(creds.api_secret(), "secret456");
    }

    #[test]
    fn test_credentials_is_complete() {
        assert!(Credentials::new("k", "s").is_complete());
        assert!(!Credentials::new("", "s").is_complete());
        assert!(!Credentials::new("k", "").is_complete());
        assert!(!Credentials::new("", "").is_complete());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("key123", "secret456");
        let debug = format!("{creds:?}");
        assert!(debug.contains("key123"));
        assert!(!debug.contains("secret456"));
        assert!(debug.contains("[REDACTED]"));
    }
}
