//! Order request and submission outcome structures.
//!
//! This module provides:
//! - [`OrderRequest`] - Canonical, validated order request
//! - [`RawOrderFields`] - Untrusted input fields before validation
//! - [`OrderSide`], [`OrderType`], [`TimeInForce`] - Order enumerations
//! - [`SubmissionOutcome`] - Three-way result of a submission attempt
//! - [`OrderAck`] - Successful exchange acknowledgement

mod order;
mod outcome;

pub use order::{
    OrderRequest, OrderRequestBuilder, OrderSide, OrderType, OrderValidationError, RawOrderFields,
    TimeInForce,
};
pub use outcome::{OrderAck, SubmissionOutcome};
