//! # Vela Gateway
//!
//! Exchange connectivity for the Vela order submission toolkit.
//!
//! The gateway owns the REST plumbing (request signing, rate limiting,
//! error mapping), the Binance USDT-M futures adapter, and the
//! [`OrderSubmitter`](submit::OrderSubmitter) orchestrator that ties
//! validation and transport together.
//!
//! Every request makes exactly one network attempt. Order submission is
//! not idempotent, so nothing in this crate retries on the caller's
//! behalf; classification of the failure is surfaced instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

/// Binance USDT-M futures adapter
pub mod binance;

/// REST client infrastructure
pub mod rest;

/// Order submission orchestration
pub mod submit;

/// Commonly used gateway types
pub mod prelude {
    pub use crate::binance::{BinanceEnvironment, BinanceFutures};
    pub use crate::rest::{RestClient, RestConfig};
    pub use crate::submit::OrderSubmitter;
}
