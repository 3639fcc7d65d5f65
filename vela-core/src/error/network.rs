//! Network-related error types.
//!
//! This module provides error types for transport failures: the request
//! never produced a well-formed exchange answer. Connection failures,
//! timeouts, TLS errors, unexpected HTTP statuses, and unparseable
//! response bodies all land here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Network error type covering connection failures, timeouts, TLS errors,
/// and malformed responses.
///
/// # Examples
///
/// ```
/// use vela_core::error::NetworkError;
///
/// let error = NetworkError::ConnectionFailed {
///     reason: "Connection refused".to_string(),
/// };
/// assert!(error.to_string().contains("Connection refused"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkError {
    /// Connection to remote host failed.
    #[error("[Network] Connection failed: {reason}")]
    ConnectionFailed {
        /// Reason for the connection failure.
        reason: String,
    },

    /// Request timed out.
    #[error("[Network] Connection timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// TLS/SSL error occurred.
    #[error("[Network] TLS error: {reason}")]
    Tls {
        /// Reason for the TLS error.
        reason: String,
    },

    /// HTTP request failed.
    #[error("[Network] HTTP error: status {status_code} - {reason}")]
    Http {
        /// HTTP status code.
        status_code: u16,
        /// Reason for the HTTP error.
        reason: String,
    },

    /// Response body could not be interpreted.
    ///
    /// The exchange may or may not have processed the request; the caller
    /// must not assume either way.
    #[error("[Network] Invalid response: {reason}")]
    InvalidResponse {
        /// Reason the response could not be interpreted.
        reason: String,
    },
}

impl NetworkError {
    /// Returns true if this error is recoverable (can be retried).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::ConnectionFailed { .. })
    }

    /// Returns the severity level of this error.
    #[must_use]
    pub fn severity(&self) -> super::ErrorSeverity {
        use super::ErrorSeverity;
        match self {
            Self::Tls { .. } => ErrorSeverity::Fatal,
            Self::Timeout { .. } | Self::ConnectionFailed { .. } => ErrorSeverity::Recoverable,
            Self::Http { status_code, .. } if *status_code >= 500 => ErrorSeverity::Recoverable,
            Self::Http { .. } | Self::InvalidResponse { .. } => ErrorSeverity::Warning,
        }
    }

    /// Returns a suggested retry delay in milliseconds, if applicable.
    #[must_use]
    pub fn suggested_retry_delay_ms(&self) -> Option<u64> {
        match self {
            Self::Timeout { timeout_ms } => Some(*timeout_ms / 2),
            Self::ConnectionFailed { .. } => Some(1000),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed() {
        let error = NetworkError::ConnectionFailed {
            reason: "Connection refused".to_string(),
        };
        assert!(error.to_string().contains("Connection refused"));
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_timeout() {
        let error = NetworkError::Timeout { timeout_ms: 5000 };
        assert!(error.to_string().contains("5000ms"));
        assert!(error.is_recoverable());
        assert_eq!(error.suggested_retry_delay_ms(), Some(2500));
    }

    #[test]
    fn test_tls_error() {
        let error = NetworkError::Tls {
            reason: "Certificate expired".to_string(),
        };
        assert!(error.to_string().contains("Certificate expired"));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_http_severity_by_status() {
        let server = NetworkError::Http {
            status_code: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert!(server.severity().is_recoverable());

        let client = NetworkError::Http {
            status_code: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(client.severity(), crate::error::ErrorSeverity::Warning);
    }

    #[test]
    fn test_invalid_response_not_recoverable() {
        let error = NetworkError::InvalidResponse {
            reason: "body was not JSON".to_string(),
        };
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_serde_roundtrip() {
        let error = NetworkError::Timeout { timeout_ms: 3000 };
        let json = serde_json::to_string(&error).unwrap();
        let parsed: NetworkError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, parsed);
    }
}
