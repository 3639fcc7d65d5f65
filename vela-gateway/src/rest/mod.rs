//! REST client infrastructure.
//!
//! Provides a signed HTTP client shared by exchange adapters:
//!
//! - [`RestConfig`] - endpoint, credentials and timeout configuration
//! - [`RestClient`] - request building and execution (one attempt per call)
//! - [`RequestSigner`] - HMAC-SHA256 request signing
//! - [`RateLimiter`] - local sliding-window rate limiting

mod client;
mod config;
mod rate_limiter;
mod signer;

pub use client::{RequestBuilder, RestClient};
pub use config::{RestConfig, RestConfigBuilder};
pub use rate_limiter::RateLimiter;
pub use signer::{RequestSigner, build_query_string, timestamp_ms};
