//! Core trait definitions.
//!
//! The [`OrderTransport`] trait is the seam between the submission
//! orchestrator and a concrete exchange gateway.

mod transport;

pub use transport::{Credentials, OrderTransport};
