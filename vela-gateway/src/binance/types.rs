//! Binance futures wire types.

use serde::{Deserialize, Serialize};

/// Binance deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinanceEnvironment {
    /// Futures testnet, the default for this toolkit
    #[default]
    Testnet,
    /// Production USDT-M futures
    Production,
}

impl BinanceEnvironment {
    /// REST base URL for this environment.
    #[must_use]
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Testnet => "https://testnet.binancefuture.com",
            Self::Production => "https://fapi.binance.com",
        }
    }

    /// Whether this is the testnet environment.
    #[must_use]
    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::Testnet)
    }

    /// Environment name for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Production => "production",
        }
    }
}

impl std::fmt::Display for BinanceEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BinanceEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "testnet" => Ok(Self::Testnet),
            "production" | "prod" | "mainnet" => Ok(Self::Production),
            other => Err(format!("Unknown environment: {other}")),
        }
    }
}

/// New order endpoint for USDT-M futures.
pub(crate) const ORDER_ENDPOINT: &str = "/fapi/v1/order";

/// Order side as Binance encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinanceOrderSide {
    /// Buy
    Buy,
    /// Sell
    Sell,
}

impl BinanceOrderSide {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// Order type as Binance futures encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinanceOrderType {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Stop-market order (futures vocabulary, not spot STOP_LOSS)
    StopMarket,
}

impl BinanceOrderType {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopMarket => "STOP_MARKET",
        }
    }
}

/// Time in force as Binance encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinanceTimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

impl BinanceTimeInForce {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
            Self::Ioc => "IOC",
            Self::Fok => "FOK",
        }
    }
}

/// Order status reported by Binance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinanceOrderStatus {
    /// Accepted, resting or pending fill
    New,
    /// Partially filled
    PartiallyFilled,
    /// Fully filled
    Filled,
    /// Cancelled
    Canceled,
    /// Rejected by the matching engine
    Rejected,
    /// Expired without filling
    Expired,
}

impl BinanceOrderStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::PartiallyFilled => "PARTIALLY_FILLED",
            Self::Filled => "FILLED",
            Self::Canceled => "CANCELED",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
        }
    }
}

impl std::fmt::Display for BinanceOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Successful new-order response from the futures API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceOrderResponse {
    /// Trading pair
    pub symbol: String,
    /// Exchange-assigned order id
    pub order_id: i64,
    /// Client order id assigned by the exchange when none was sent
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// Order status at acknowledgement time
    pub status: BinanceOrderStatus,
    /// Limit price, "0" for market orders
    #[serde(default)]
    pub price: Option<String>,
    /// Average fill price so far
    #[serde(default)]
    pub avg_price: Option<String>,
    /// Original order quantity
    #[serde(default)]
    pub orig_qty: Option<String>,
    /// Quantity filled so far
    #[serde(default)]
    pub executed_qty: Option<String>,
    /// Order side
    pub side: BinanceOrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: BinanceOrderType,
    /// Time in force, absent for market orders on some endpoints
    #[serde(default)]
    pub time_in_force: Option<BinanceTimeInForce>,
    /// Stop trigger price
    #[serde(default)]
    pub stop_price: Option<String>,
    /// Last update timestamp in milliseconds
    #[serde(default)]
    pub update_time: Option<i64>,
}

/// Error payload returned by Binance on failed requests.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceApiError {
    /// Binance error code, negative
    pub code: i32,
    /// Human-readable message
    pub msg: String,
}
