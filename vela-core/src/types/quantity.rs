//! Quantity type for representing order sizes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Quantity type - used for representing order sizes.
///
/// Wraps a `Decimal` value. Order quantities must be strictly positive;
/// direction is carried by the order side, not the sign.
///
/// # Examples
///
/// ```
/// use vela_core::types::Quantity;
/// use rust_decimal_macros::dec;
///
/// let qty = Quantity::new(dec!(0.5)).unwrap();
/// assert_eq!(qty.as_decimal(), dec!(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Creates a new `Quantity` from a `Decimal` value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveQuantity` if the value is zero
    /// or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use vela_core::types::Quantity;
    /// use rust_decimal_macros::dec;
    ///
    /// let qty = Quantity::new(dec!(1.5)).unwrap();
    /// assert!(Quantity::new(dec!(0)).is_err());
    /// ```
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity(value));
        }
        Ok(Self(value))
    }

    /// Creates a new `Quantity` without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the value is strictly positive.
    #[must_use]
    pub const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying `Decimal` value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s).map_err(|_| ValidationError::InvalidDecimal(s.to_string()))?;
        Self::new(decimal)
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quantity_new_valid() {
        let qty = Quantity::new(dec!(1.5)).unwrap();
        assert_eq!(qty.as_decimal(), dec!(1.5));
    }

    #[test]
    fn test_quantity_new_zero() {
        let result = Quantity::new(dec!(0));
        assert!(matches!(
            result,
            Err(ValidationError::NonPositiveQuantity(_))
        ));
    }

    #[test]
    fn test_quantity_new_negative() {
        let result = Quantity::new(dec!(-0.5));
        assert!(matches!(
            result,
            Err(ValidationError::NonPositiveQuantity(_))
        ));
    }

    #[test]
    fn test_quantity_from_str() {
        let qty: Quantity = "0.001".parse().unwrap();
        assert_eq!(qty.as_decimal(), dec!(0.001));
    }

    #[test]
    fn test_quantity_from_str_garbage() {
        let result = "abc".parse::<Quantity>();
        assert!(matches!(result, Err(ValidationError::InvalidDecimal(_))));
    }

    #[test]
    fn test_quantity_serde_roundtrip() {
        let qty = Quantity::new(dec!(0.001)).unwrap();
        let json = serde_json::to_string(&qty).unwrap();
        let parsed: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(qty, parsed);
    }
}
