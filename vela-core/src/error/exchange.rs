//! Exchange-related error types.
//!
//! This module provides error types for well-formed exchange refusals:
//! the exchange received the request and answered with an application
//! error rather than an acknowledgement.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exchange error type covering authentication failures, rate limiting,
/// invalid parameters, and order rejection reasons.
///
/// # Examples
///
/// ```
/// use vela_core::error::ExchangeError;
///
/// let error = ExchangeError::RateLimited { retry_after_ms: 1000 };
/// assert!(error.to_string().contains("1000ms"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeError {
    /// Authentication with the exchange failed.
    #[error("[Exchange] Authentication failed: {reason}")]
    AuthenticationFailed {
        /// Reason for the authentication failure.
        reason: String,
    },

    /// API rate limit exceeded.
    #[error("[Exchange] Rate limited, retry after {retry_after_ms}ms")]
    RateLimited {
        /// Time to wait before retrying in milliseconds.
        retry_after_ms: u64,
    },

    /// Invalid parameter provided.
    #[error("[Exchange] Invalid parameter: {param} - {reason}")]
    InvalidParameter {
        /// Parameter name that was invalid.
        param: String,
        /// Reason why the parameter is invalid.
        reason: String,
    },

    /// Order was rejected by the exchange.
    #[error("[Exchange] Order rejected: {reason}")]
    OrderRejected {
        /// Reason for the order rejection, as reported by the exchange.
        reason: String,
        /// Optional error code from the exchange.
        code: Option<i32>,
    },

    /// Symbol is not supported or invalid.
    #[error("[Exchange] Invalid symbol: {symbol}")]
    InvalidSymbol {
        /// Symbol that is invalid.
        symbol: String,
    },

    /// Exchange is under maintenance.
    #[error("[Exchange] Exchange under maintenance: {message}")]
    Maintenance {
        /// Maintenance message from the exchange.
        message: String,
    },

    /// Exchange returned an unknown error.
    #[error("[Exchange] Unknown error: code={code}, message={message}")]
    Unknown {
        /// Error code from the exchange.
        code: i32,
        /// Error message from the exchange.
        message: String,
    },
}

impl ExchangeError {
    /// Returns true if this error is recoverable (can be retried).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Maintenance { .. })
    }

    /// Returns the severity level of this error.
    #[must_use]
    pub fn severity(&self) -> super::ErrorSeverity {
        use super::ErrorSeverity;
        match self {
            Self::AuthenticationFailed { .. } => ErrorSeverity::Fatal,
            Self::RateLimited { .. } | Self::Maintenance { .. } => ErrorSeverity::Recoverable,
            Self::OrderRejected { .. }
            | Self::InvalidParameter { .. }
            | Self::InvalidSymbol { .. }
            | Self::Unknown { .. } => ErrorSeverity::Warning,
        }
    }

    /// Returns a suggested retry delay in milliseconds, if applicable.
    #[must_use]
    pub fn suggested_retry_delay_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            Self::Maintenance { .. } => Some(60_000), // 1 minute
            _ => None,
        }
    }

    /// Returns the error code if available.
    #[must_use]
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::OrderRejected { code, .. } => *code,
            Self::Unknown { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the exchange's own message text, without the display prefix.
    ///
    /// The exchange's wording is preserved verbatim where it exists, so
    /// callers can surface it unchanged.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::AuthenticationFailed { reason } => reason.clone(),
            Self::RateLimited { retry_after_ms } => {
                format!("rate limited, retry after {retry_after_ms}ms")
            }
            Self::InvalidParameter { reason, .. } => reason.clone(),
            Self::OrderRejected { reason, .. } => reason.clone(),
            Self::InvalidSymbol { symbol } => format!("invalid symbol: {symbol}"),
            Self::Maintenance { message } | Self::Unknown { message, .. } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failed() {
        let error = ExchangeError::AuthenticationFailed {
            reason: "Invalid API key".to_string(),
        };
        assert!(error.to_string().contains("Invalid API key"));
        assert!(!error.is_recoverable());
        assert_eq!(error.detail(), "Invalid API key");
    }

    #[test]
    fn test_rate_limited() {
        let error = ExchangeError::RateLimited {
            retry_after_ms: 1000,
        };
        assert!(error.to_string().contains("1000ms"));
        assert!(error.is_recoverable());
        assert_eq!(error.suggested_retry_delay_ms(), Some(1000));
    }

    #[test]
    fn test_order_rejected() {
        let error = ExchangeError::OrderRejected {
            reason: "Margin is insufficient.".to_string(),
            code: Some(-2019),
        };
        assert!(error.to_string().contains("Margin is insufficient."));
        assert_eq!(error.error_code(), Some(-2019));
        assert_eq!(error.detail(), "Margin is insufficient.");
    }

    #[test]
    fn test_detail_strips_display_prefix() {
        let error = ExchangeError::Unknown {
            code: -1000,
            message: "An unknown error occurred".to_string(),
        };
        assert!(error.to_string().starts_with("[Exchange]"));
        assert_eq!(error.detail(), "An unknown error occurred");
    }

    #[test]
    fn test_serde_roundtrip() {
        let error = ExchangeError::RateLimited {
            retry_after_ms: 5000,
        };
        let json = serde_json::to_string(&error).unwrap();
        let parsed: ExchangeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, parsed);
    }
}
