//! Order types and request validation.
//!
//! This module provides order-related types including:
//! - [`OrderRequest`] - Canonical, validated request to create a new order
//! - [`RawOrderFields`] - Untrusted input fields before validation
//! - [`OrderSide`] - Buy or Sell direction
//! - [`OrderType`] - Market, Limit, or StopMarket
//! - [`TimeInForce`] - Order validity duration
//!
//! Validation is table-driven over the order type: each type declares
//! which optional fields it requires and every other optional field is
//! forbidden. A Market order carrying a price is rejected, not silently
//! stripped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{Price, Quantity, Symbol};

/// Order side - Buy or Sell direction.
///
/// # Examples
///
/// ```
/// use vela_core::data::OrderSide;
///
/// let side = OrderSide::Buy;
/// assert!(side.is_buy());
/// assert!(!side.is_sell());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order (long)
    Buy,
    /// Sell order (short)
    Sell,
}

impl OrderSide {
    /// Returns true if this is a buy order.
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns true if this is a sell order.
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }

    /// Returns the side as a static string in wire format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = OrderValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(OrderValidationError::new(
                "side",
                format!("unrecognized side '{other}', expected BUY or SELL"),
            )),
        }
    }
}

/// Order type - specifies how the order should be executed.
///
/// Each type declares which optional fields it requires; every other
/// optional field is forbidden for that type.
///
/// # Examples
///
/// ```
/// use vela_core::data::OrderType;
///
/// assert!(OrderType::Limit.requires_price());
/// assert!(!OrderType::Market.requires_price());
/// assert!(OrderType::StopMarket.requires_stop_price());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - executes immediately at best available price
    Market,
    /// Limit order - executes at specified price or better
    Limit,
    /// Stop market order - becomes market order when stop price is reached
    StopMarket,
}

impl OrderType {
    /// Returns true if this order type requires a limit price.
    #[must_use]
    pub const fn requires_price(&self) -> bool {
        matches!(self, Self::Limit)
    }

    /// Returns true if this order type requires a stop price.
    #[must_use]
    pub const fn requires_stop_price(&self) -> bool {
        matches!(self, Self::StopMarket)
    }

    /// Returns true if this order type takes a time-in-force.
    #[must_use]
    pub const fn requires_time_in_force(&self) -> bool {
        matches!(self, Self::Limit)
    }

    /// Returns the type as a static string in wire format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopMarket => "STOP_MARKET",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = OrderValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            "STOP_MARKET" => Ok(Self::StopMarket),
            other => Err(OrderValidationError::new(
                "type",
                format!("unrecognized order type '{other}', expected MARKET, LIMIT, or STOP_MARKET"),
            )),
        }
    }
}

/// Time in force - specifies how long an order remains active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good Till Cancel - remains active until filled or canceled
    #[default]
    Gtc,
    /// Immediate or Cancel - fills immediately, cancels unfilled portion
    Ioc,
    /// Fill or Kill - must be filled completely or canceled entirely
    Fok,
}

impl TimeInForce {
    /// Returns the time in force as a static string in wire format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
            Self::Ioc => "IOC",
            Self::Fok => "FOK",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validation error for order construction.
///
/// Names the offending field so callers can surface exactly which input
/// to fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("invalid order field '{field}': {reason}")]
pub struct OrderValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Why the field was rejected.
    pub reason: String,
}

impl OrderValidationError {
    /// Creates a validation error for the given field.
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    fn missing(field: &'static str, order_type: OrderType) -> Self {
        Self::new(
            field,
            format!("required for {order_type} orders but not provided"),
        )
    }

    fn forbidden(field: &'static str, order_type: OrderType) -> Self {
        Self::new(field, format!("not allowed for {order_type} orders"))
    }
}

/// Untrusted order fields, exactly as received from the caller.
///
/// No invariants hold on this type; [`OrderRequest::from_raw`] is the
/// only path to a validated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOrderFields {
    /// Trading symbol, any case.
    pub symbol: String,
    /// Order side, any case.
    pub side: String,
    /// Order type, any case.
    pub order_type: String,
    /// Order quantity.
    pub quantity: Decimal,
    /// Limit price, if given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Stop/trigger price, if given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
}

/// Order request - a validated order ready for submission.
///
/// Construction goes through [`OrderRequest::from_raw`] or the builder;
/// both enforce the per-type field table, so a value of this type always
/// satisfies it.
///
/// # Examples
///
/// ```
/// use vela_core::data::{OrderRequest, OrderSide, OrderType};
/// use vela_core::types::{Symbol, Price, Quantity};
/// use rust_decimal_macros::dec;
///
/// let request = OrderRequest::builder()
///     .symbol(Symbol::new("BTCUSDT").unwrap())
///     .side(OrderSide::Buy)
///     .order_type(OrderType::Limit)
///     .quantity(Quantity::new(dec!(0.1)).unwrap())
///     .price(Price::new(dec!(50000)).unwrap())
///     .build()
///     .unwrap();
/// assert!(request.time_in_force.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Trading symbol
    pub symbol: Symbol,
    /// Order side (Buy/Sell)
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Order quantity
    pub quantity: Quantity,
    /// Limit price (Limit orders only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Stop/trigger price (StopMarket orders only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Price>,
    /// Time in force (Limit orders only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

impl OrderRequest {
    /// Creates a new builder for `OrderRequest`.
    #[must_use]
    pub fn builder() -> OrderRequestBuilder {
        OrderRequestBuilder::default()
    }

    /// Validates raw order fields and constructs a canonical request.
    ///
    /// Checks run in a fixed order and the first failure wins:
    ///
    /// 1. `symbol` is non-empty and well-formed
    /// 2. `side` is a recognized side
    /// 3. `type` is a recognized order type
    /// 4. `quantity` is strictly positive
    /// 5. each optional field the type requires is present and positive
    /// 6. each optional field the type does not take is absent
    ///
    /// On success, `time_in_force` defaults to GTC for order types that
    /// take one.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderValidationError`] naming the first offending
    /// field.
    pub fn from_raw(raw: &RawOrderFields) -> Result<Self, OrderValidationError> {
        let symbol = Symbol::new(&raw.symbol)
            .map_err(|e| OrderValidationError::new("symbol", e.to_string()))?;
        let side: OrderSide = raw.side.parse()?;
        let order_type: OrderType = raw.order_type.parse()?;
        let quantity = Quantity::new(raw.quantity)
            .map_err(|e| OrderValidationError::new("quantity", e.to_string()))?;

        // Required/forbidden table over the optional price fields.
        let field_table = [
            ("price", raw.price, order_type.requires_price()),
            ("stop_price", raw.stop_price, order_type.requires_stop_price()),
        ];
        let mut checked: [Option<Price>; 2] = [None, None];
        for (slot, (field, value, required)) in checked.iter_mut().zip(field_table) {
            *slot = match (value, required) {
                (Some(v), true) => Some(
                    Price::new(v).map_err(|e| OrderValidationError::new(field, e.to_string()))?,
                ),
                (None, true) => return Err(OrderValidationError::missing(field, order_type)),
                (Some(_), false) => {
                    return Err(OrderValidationError::forbidden(field, order_type));
                }
                (None, false) => None,
            };
        }
        let [price, stop_price] = checked;

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
            stop_price,
            time_in_force: order_type.requires_time_in_force().then(TimeInForce::default),
        })
    }

    /// Re-checks the per-type field table on an already-constructed request.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is absent or a forbidden
    /// field is present.
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.order_type.requires_price() && self.price.is_none() {
            return Err(OrderValidationError::missing("price", self.order_type));
        }
        if !self.order_type.requires_price() && self.price.is_some() {
            return Err(OrderValidationError::forbidden("price", self.order_type));
        }
        if self.order_type.requires_stop_price() && self.stop_price.is_none() {
            return Err(OrderValidationError::missing("stop_price", self.order_type));
        }
        if !self.order_type.requires_stop_price() && self.stop_price.is_some() {
            return Err(OrderValidationError::forbidden(
                "stop_price",
                self.order_type,
            ));
        }
        if !self.order_type.requires_time_in_force() && self.time_in_force.is_some() {
            return Err(OrderValidationError::forbidden(
                "time_in_force",
                self.order_type,
            ));
        }
        Ok(())
    }

    /// Returns a short human-readable summary, e.g. `"BUY 0.01 BTCUSDT MARKET"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.side, self.quantity, self.symbol, self.order_type
        )
    }
}

/// Builder for `OrderRequest`.
#[derive(Debug, Default)]
pub struct OrderRequestBuilder {
    symbol: Option<Symbol>,
    side: Option<OrderSide>,
    order_type: Option<OrderType>,
    quantity: Option<Quantity>,
    price: Option<Price>,
    stop_price: Option<Price>,
    time_in_force: Option<TimeInForce>,
}

impl OrderRequestBuilder {
    /// Sets the trading symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Sets the order side.
    #[must_use]
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Sets the order type.
    #[must_use]
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Sets the order quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the limit price.
    #[must_use]
    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the stop/trigger price.
    #[must_use]
    pub fn stop_price(mut self, stop_price: Price) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    /// Sets the time in force.
    #[must_use]
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Builds the `OrderRequest`, running full validation.
    ///
    /// Fills in the default GTC time-in-force for order types that take
    /// one when none was set.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the per-type
    /// field table is violated.
    pub fn build(self) -> Result<OrderRequest, OrderValidationError> {
        let order_type = self
            .order_type
            .ok_or_else(|| OrderValidationError::new("type", "order type is required"))?;

        let time_in_force = if order_type.requires_time_in_force() {
            Some(self.time_in_force.unwrap_or_default())
        } else {
            self.time_in_force
        };

        let request = OrderRequest {
            symbol: self
                .symbol
                .ok_or_else(|| OrderValidationError::new("symbol", "symbol is required"))?,
            side: self
                .side
                .ok_or_else(|| OrderValidationError::new("side", "side is required"))?,
            order_type,
            quantity: self
                .quantity
                .ok_or_else(|| OrderValidationError::new("quantity", "quantity is required"))?,
            price: self.price,
            stop_price: self.stop_price,
            time_in_force,
        };

        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw_market() -> RawOrderFields {
        RawOrderFields {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            order_type: "MARKET".to_string(),
            quantity: dec!(0.01),
            price: None,
            stop_price: None,
        }
    }

    fn raw_limit() -> RawOrderFields {
        RawOrderFields {
            symbol: "BTCUSDT".to_string(),
            side: "SELL".to_string(),
            order_type: "LIMIT".to_string(),
            quantity: dec!(0.01),
            price: Some(dec!(50000)),
            stop_price: None,
        }
    }

    #[test]
    fn test_order_side_from_str() {
        assert_eq!("BUY".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!("sell".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert_eq!(" Buy ".parse::<OrderSide>().unwrap(), OrderSide::Buy);

        let err = "HOLD".parse::<OrderSide>().unwrap_err();
        assert_eq!(err.field, "side");
        assert!(err.reason.contains("HOLD"));
    }

    #[test]
    fn test_order_type_from_str() {
        assert_eq!("MARKET".parse::<OrderType>().unwrap(), OrderType::Market);
        assert_eq!("limit".parse::<OrderType>().unwrap(), OrderType::Limit);
        assert_eq!(
            "stop_market".parse::<OrderType>().unwrap(),
            OrderType::StopMarket
        );

        let err = "ICEBERG".parse::<OrderType>().unwrap_err();
        assert_eq!(err.field, "type");
    }

    #[test]
    fn test_order_type_field_table() {
        assert!(OrderType::Limit.requires_price());
        assert!(!OrderType::Limit.requires_stop_price());
        assert!(OrderType::Limit.requires_time_in_force());

        assert!(!OrderType::Market.requires_price());
        assert!(!OrderType::Market.requires_stop_price());

        assert!(!OrderType::StopMarket.requires_price());
        assert!(OrderType::StopMarket.requires_stop_price());
        assert!(!OrderType::StopMarket.requires_time_in_force());
    }

    #[test]
    fn test_display_wire_format() {
        assert_eq!(OrderSide::Buy.to_string(), "BUY");
        assert_eq!(OrderType::StopMarket.to_string(), "STOP_MARKET");
        assert_eq!(TimeInForce::Gtc.to_string(), "GTC");
    }

    #[test]
    fn test_from_raw_market_order() {
        let request = OrderRequest::from_raw(&raw_market()).unwrap();
        assert_eq!(request.symbol.as_str(), "BTCUSDT");
        assert_eq!(request.side, OrderSide::Buy);
        assert_eq!(request.order_type, OrderType::Market);
        assert_eq!(request.quantity.as_decimal(), dec!(0.01));
        assert!(request.price.is_none());
        assert!(request.stop_price.is_none());
        assert!(request.time_in_force.is_none());
    }

    #[test]
    fn test_from_raw_limit_order_defaults_gtc() {
        let request = OrderRequest::from_raw(&raw_limit()).unwrap();
        assert_eq!(request.order_type, OrderType::Limit);
        assert_eq!(request.price.unwrap().as_decimal(), dec!(50000));
        assert_eq!(request.time_in_force, Some(TimeInForce::Gtc));
    }

    #[test]
    fn test_from_raw_stop_market_order() {
        let raw = RawOrderFields {
            order_type: "STOP_MARKET".to_string(),
            stop_price: Some(dec!(45000)),
            price: None,
            ..raw_market()
        };
        let request = OrderRequest::from_raw(&raw).unwrap();
        assert_eq!(request.order_type, OrderType::StopMarket);
        assert_eq!(request.stop_price.unwrap().as_decimal(), dec!(45000));
        assert!(request.price.is_none());
        assert!(request.time_in_force.is_none());
    }

    #[test]
    fn test_from_raw_lowercase_inputs() {
        let raw = RawOrderFields {
            symbol: "btcusdt".to_string(),
            side: "buy".to_string(),
            order_type: "market".to_string(),
            ..raw_market()
        };
        let request = OrderRequest::from_raw(&raw).unwrap();
        assert_eq!(request.symbol.as_str(), "BTCUSDT");
        assert_eq!(request.side, OrderSide::Buy);
        assert_eq!(request.order_type, OrderType::Market);
    }

    #[test]
    fn test_from_raw_empty_symbol() {
        let raw = RawOrderFields {
            symbol: "  ".to_string(),
            ..raw_market()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "symbol");
    }

    #[test]
    fn test_from_raw_zero_quantity() {
        let raw = RawOrderFields {
            quantity: dec!(0),
            ..raw_market()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "quantity");
    }

    #[test]
    fn test_from_raw_negative_quantity() {
        let raw = RawOrderFields {
            quantity: dec!(-1),
            ..raw_market()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "quantity");
    }

    #[test]
    fn test_from_raw_limit_missing_price() {
        let raw = RawOrderFields {
            price: None,
            ..raw_limit()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "price");
        assert!(err.reason.contains("required for LIMIT"));
    }

    #[test]
    fn test_from_raw_limit_zero_price() {
        let raw = RawOrderFields {
            price: Some(dec!(0)),
            ..raw_limit()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "price");
    }

    #[test]
    fn test_from_raw_market_with_price_rejected() {
        let raw = RawOrderFields {
            price: Some(dec!(50000)),
            ..raw_market()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "price");
        assert!(err.reason.contains("not allowed for MARKET"));
    }

    #[test]
    fn test_from_raw_stop_market_missing_stop_price() {
        let raw = RawOrderFields {
            order_type: "STOP_MARKET".to_string(),
            ..raw_market()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "stop_price");
        assert!(err.reason.contains("required for STOP_MARKET"));
    }

    #[test]
    fn test_from_raw_limit_with_stop_price_rejected() {
        let raw = RawOrderFields {
            stop_price: Some(dec!(45000)),
            ..raw_limit()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "stop_price");
    }

    #[test]
    fn test_from_raw_first_failure_wins() {
        // Both symbol and quantity are bad; symbol is checked first.
        let raw = RawOrderFields {
            symbol: String::new(),
            quantity: dec!(0),
            ..raw_market()
        };
        let err = OrderRequest::from_raw(&raw).unwrap_err();
        assert_eq!(err.field, "symbol");
    }

    #[test]
    fn test_builder_limit_order() {
        let request = OrderRequest::builder()
            .symbol(Symbol::new("ETHUSDT").unwrap())
            .side(OrderSide::Sell)
            .order_type(OrderType::Limit)
            .quantity(Quantity::new(dec!(1)).unwrap())
            .price(Price::new(dec!(3000)).unwrap())
            .build()
            .unwrap();
        assert_eq!(request.time_in_force, Some(TimeInForce::Gtc));
    }

    #[test]
    fn test_builder_explicit_time_in_force() {
        let request = OrderRequest::builder()
            .symbol(Symbol::new("ETHUSDT").unwrap())
            .side(OrderSide::Sell)
            .order_type(OrderType::Limit)
            .quantity(Quantity::new(dec!(1)).unwrap())
            .price(Price::new(dec!(3000)).unwrap())
            .time_in_force(TimeInForce::Ioc)
            .build()
            .unwrap();
        assert_eq!(request.time_in_force, Some(TimeInForce::Ioc));
    }

    #[test]
    fn test_builder_missing_symbol() {
        let err = OrderRequest::builder()
            .side(OrderSide::Buy)
            .order_type(OrderType::Market)
            .quantity(Quantity::new(dec!(1)).unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err.field, "symbol");
    }

    #[test]
    fn test_builder_market_with_time_in_force_rejected() {
        let err = OrderRequest::builder()
            .symbol(Symbol::new("BTCUSDT").unwrap())
            .side(OrderSide::Buy)
            .order_type(OrderType::Market)
            .quantity(Quantity::new(dec!(1)).unwrap())
            .time_in_force(TimeInForce::Gtc)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "time_in_force");
    }

    #[test]
    fn test_validation_error_display_names_field() {
        let err = OrderValidationError::missing("price", OrderType::Limit);
        let display = err.to_string();
        assert!(display.contains("price"));
        assert!(display.contains("LIMIT"));
    }

    #[test]
    fn test_summary() {
        let request = OrderRequest::from_raw(&raw_market()).unwrap();
        assert_eq!(request.summary(), "BUY 0.01 BTCUSDT MARKET");
    }

    #[test]
    fn test_serde_roundtrip() {
        let request = OrderRequest::from_raw(&raw_limit()).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        let parsed: OrderRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, parsed);
    }
}
