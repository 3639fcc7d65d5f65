//! Binance USDT-M futures adapter.
//!
//! Implements [`OrderTransport`](vela_core::traits::OrderTransport) over
//! the Binance futures REST API. Defaults to the testnet environment;
//! production must be selected explicitly.

mod trader;
mod types;

pub use trader::BinanceFutures;
pub use types::{
    BinanceApiError, BinanceEnvironment, BinanceOrderResponse, BinanceOrderSide,
    BinanceOrderStatus, BinanceOrderType, BinanceTimeInForce,
};
