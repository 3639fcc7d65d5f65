//! # Vela Telemetry
//!
//! Structured logging setup and sensitive-data masking for the Vela
//! order submission toolkit.
//!
//! This crate provides:
//! - `LogConfig` / `LogFormat` and `init_logging` built on `tracing-subscriber`
//! - `Sensitive<T>` wrapper and `SensitiveDataMasker` for credential-safe output

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

/// Logging configuration and subscriber setup
pub mod logging;

/// Sensitive data masking
pub mod masking;

pub use logging::{LogConfig, LogFormat, TelemetryError, init_logging};
pub use masking::{Sensitive, SensitiveDataMasker};
