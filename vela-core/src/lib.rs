//! # Vela Core
//!
//! Core types, traits, and interfaces for the Vela futures order
//! submission toolkit.
//!
//! This crate provides:
//! - `NewType` wrappers for financial primitives (Price, Quantity, Symbol, `OrderId`)
//! - The canonical order request with table-driven field validation
//! - The three-way submission outcome classification
//! - Error types and handling framework
//! - The transport trait the orchestrator submits through

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]

/// Core type definitions and 'NewType' wrappers
pub mod types;

/// Order request and submission outcome structures
pub mod data;

/// Error types and handling
pub mod error;

/// Core trait definitions
pub mod traits;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::*;
    pub use crate::traits::*;
    pub use crate::types::*;
}
