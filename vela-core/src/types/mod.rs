//! NewType wrappers for financial primitives.
//!
//! This module provides type-safe wrappers around raw values
//! to prevent mixing incompatible types at compile time.
//!
//! # Types
//!
//! - [`Price`] - Order price values (strictly positive)
//! - [`Quantity`] - Order quantities (strictly positive)
//! - [`Symbol`] - Trading pair identifiers, uppercase-normalized
//! - [`OrderId`] - Exchange-assigned order identifiers

mod order_id;
mod price;
mod quantity;
mod symbol;

pub use order_id::OrderId;
pub use price::Price;
pub use quantity::Quantity;
pub use symbol::Symbol;

/// Validation error for `NewType` construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Price value is zero or negative
    #[error("price must be positive: {0}")]
    NonPositivePrice(rust_decimal::Decimal),

    /// Quantity value is zero or negative
    #[error("quantity must be positive: {0}")]
    NonPositiveQuantity(rust_decimal::Decimal),

    /// String could not be parsed as a decimal
    #[error("not a valid decimal: {0}")]
    InvalidDecimal(String),

    /// Symbol format is invalid
    #[error("invalid symbol format: {0}")]
    InvalidSymbol(String),

    /// Symbol is empty
    #[error("symbol cannot be empty")]
    EmptySymbol,

    /// Order ID is empty
    #[error("order ID cannot be empty")]
    EmptyOrderId,
}
