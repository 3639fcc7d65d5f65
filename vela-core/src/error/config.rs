//! Configuration-related error types.
//!
//! This module provides error types for configuration problems: missing
//! or empty credential material, invalid values, and bad environment
//! variables. These surface before any network activity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error type covering missing fields, invalid values,
/// and environment variable problems.
///
/// # Examples
///
/// ```
/// use vela_core::error::ConfigError;
///
/// let error = ConfigError::MissingField {
///     field: "api_key".to_string(),
///     section: Some("binance".to_string()),
/// };
/// assert!(error.to_string().contains("api_key"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    /// Required configuration field is missing.
    #[error("[Config] Missing field '{field}'{}", section.as_ref().map(|s| format!(" in section '{s}'")).unwrap_or_default())]
    MissingField {
        /// Name of the missing field.
        field: String,
        /// Optional section where the field should be.
        section: Option<String>,
    },

    /// Configuration value is invalid.
    #[error("[Config] Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Field with the invalid value.
        field: String,
        /// Reason why the value is invalid.
        reason: String,
    },

    /// Environment variable is missing.
    #[error("[Config] Missing environment variable: {name}")]
    MissingEnvVar {
        /// Name of the missing environment variable.
        name: String,
    },

    /// Environment variable has invalid value.
    #[error("[Config] Invalid environment variable '{name}': {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable.
        name: String,
        /// Reason why the value is invalid.
        reason: String,
    },
}

impl ConfigError {
    /// Returns the severity level of this error.
    #[must_use]
    pub fn severity(&self) -> super::ErrorSeverity {
        use super::ErrorSeverity;
        match self {
            Self::MissingField { .. } | Self::MissingEnvVar { .. } => ErrorSeverity::Fatal,
            Self::InvalidValue { .. } | Self::InvalidEnvVar { .. } => ErrorSeverity::Warning,
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            section: None,
        }
    }

    /// Creates a missing field error with section.
    #[must_use]
    pub fn missing_field_in_section(field: impl Into<String>, section: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            section: Some(section.into()),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let error = ConfigError::MissingField {
            field: "api_key".to_string(),
            section: None,
        };
        assert!(error.to_string().contains("api_key"));
        assert!(!error.to_string().contains("section"));
    }

    #[test]
    fn test_missing_field_with_section() {
        let error = ConfigError::MissingField {
            field: "api_key".to_string(),
            section: Some("binance".to_string()),
        };
        assert!(error.to_string().contains("api_key"));
        assert!(error.to_string().contains("binance"));
    }

    #[test]
    fn test_invalid_value() {
        let error = ConfigError::InvalidValue {
            field: "timeout_ms".to_string(),
            reason: "Must be positive".to_string(),
        };
        assert!(error.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let error = ConfigError::missing_field("api_secret");
        assert!(error.severity().is_fatal());
    }

    #[test]
    fn test_helper_methods() {
        let error = ConfigError::missing_field("api_secret");
        assert!(matches!(
            error,
            ConfigError::MissingField { section: None, .. }
        ));

        let error = ConfigError::missing_field_in_section("api_key", "binance");
        assert!(matches!(
            error,
            ConfigError::MissingField {
                section: Some(_),
                ..
            }
        ));

        let error = ConfigError::invalid_value("timeout", "Must be positive");
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_serde_roundtrip() {
        let error = ConfigError::MissingEnvVar {
            name: "BINANCE_API_KEY".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        let parsed: ConfigError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, parsed);
    }
}
