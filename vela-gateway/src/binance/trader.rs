//! Binance USDT-M futures order transport.

use async_trait::async_trait;
use tracing::{debug, info};
use vela_core::data::{OrderAck, OrderRequest, OrderSide, OrderType, TimeInForce};
use vela_core::error::{ConfigError, ExchangeError, NetworkError, VelaError};
use vela_core::traits::{Credentials, OrderTransport};
use vela_core::types::{OrderId, Symbol};

use crate::rest::{RestClient, RestConfig, timestamp_ms};

use super::types::{
    BinanceApiError, BinanceEnvironment, BinanceOrderResponse, BinanceOrderSide, BinanceOrderType,
    BinanceTimeInForce, ORDER_ENDPOINT,
};

/// Order transport for Binance USDT-M futures.
///
/// Construction validates credentials and builds the HTTP client but
/// performs no network I/O; the first request happens on the first
/// order submission.
#[derive(Debug)]
pub struct BinanceFutures {
    environment: BinanceEnvironment,
    rest_client: RestClient,
}

impl BinanceFutures {
    /// Create a transport for the given credentials and environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if either credential is
    /// empty, before anything else happens.
    pub fn connect(
        credentials: &Credentials,
        environment: BinanceEnvironment,
    ) -> Result<Self, VelaError> {
        if credentials.api_key().is_empty() {
            return Err(ConfigError::missing_field("api_key").into());
        }
        if credentials.api_secret().is_empty() {
            return Err(ConfigError::missing_field("api_secret").into());
        }

        let config = RestConfig::builder(environment.rest_base_url(), "binance")
            .api_key(credentials.api_key())
            .api_secret(credentials.api_secret())
            .testnet(environment.is_testnet())
            .build();

        let rest_client = RestClient::new(config).map_err(VelaError::Network)?;

        debug!(environment = %environment, "Binance futures transport ready");

        Ok(Self {
            environment,
            rest_client,
        })
    }

    /// The environment this transport targets.
    #[must_use]
    pub fn environment(&self) -> BinanceEnvironment {
        self.environment
    }

    fn to_binance_side(side: OrderSide) -> BinanceOrderSide {
        match side {
            OrderSide::Buy => BinanceOrderSide::Buy,
            OrderSide::Sell => BinanceOrderSide::Sell,
        }
    }

    fn to_binance_order_type(order_type: OrderType) -> BinanceOrderType {
        match order_type {
            OrderType::Market => BinanceOrderType::Market,
            OrderType::Limit => BinanceOrderType::Limit,
            OrderType::StopMarket => BinanceOrderType::StopMarket,
        }
    }

    fn to_binance_time_in_force(tif: TimeInForce) -> BinanceTimeInForce {
        match tif {
            TimeInForce::Gtc => BinanceTimeInForce::Gtc,
            TimeInForce::Ioc => BinanceTimeInForce::Ioc,
            TimeInForce::Fok => BinanceTimeInForce::Fok,
        }
    }

    /// Map a validated order to its wire parameters.
    ///
    /// Timestamp and receive window are added at send time.
    fn wire_params(order: &OrderRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", order.symbol.as_str().to_string()),
            ("side", Self::to_binance_side(order.side).as_str().to_string()),
            (
                "type",
                Self::to_binance_order_type(order.order_type)
                    .as_str()
                    .to_string(),
            ),
            ("quantity", order.quantity.to_string()),
        ];

        if let Some(price) = &order.price {
            params.push(("price", price.to_string()));
        }
        if let Some(stop_price) = &order.stop_price {
            params.push(("stopPrice", stop_price.to_string()));
        }
        if let Some(tif) = order.time_in_force {
            params.push((
                "timeInForce",
                Self::to_binance_time_in_force(tif).as_str().to_string(),
            ));
        }

        params
    }

    /// Map a non-success HTTP response to an error.
    ///
    /// Bodies that parse as a Binance error payload become exchange
    /// errors; anything else is a transport-level HTTP error.
    fn parse_error(status: u16, body: &str, symbol: &Symbol) -> VelaError {
        match serde_json::from_str::<BinanceApiError>(body) {
            Ok(api_error) => VelaError::Exchange(Self::map_api_error(&api_error, symbol)),
            Err(_) => VelaError::Network(NetworkError::Http {
                status_code: status,
                reason: body.to_string(),
            }),
        }
    }

    fn map_api_error(error: &BinanceApiError, symbol: &Symbol) -> ExchangeError {
        match error.code {
            -1002 | -2014 | -2015 => ExchangeError::AuthenticationFailed {
                reason: error.msg.clone(),
            },
            -1003 | -1015 => ExchangeError::RateLimited {
                retry_after_ms: 60_000,
            },
            -1021 => ExchangeError::InvalidParameter {
                param: "timestamp".to_string(),
                reason: error.msg.clone(),
            },
            -1102..=-1100 => ExchangeError::InvalidParameter {
                param: "request".to_string(),
                reason: error.msg.clone(),
            },
            -1111 => ExchangeError::InvalidParameter {
                param: "precision".to_string(),
                reason: error.msg.clone(),
            },
            -1121 => ExchangeError::InvalidSymbol {
                symbol: symbol.as_str().to_string(),
            },
            -2010 | -2019 | -4164 => ExchangeError::OrderRejected {
                reason: error.msg.clone(),
                code: Some(error.code),
            },
            code => ExchangeError::Unknown {
                code,
                message: error.msg.clone(),
            },
        }
    }
}

#[async_trait]
impl OrderTransport for BinanceFutures {
    fn exchange(&self) -> &str {
        "binance"
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderAck, VelaError> {
        let mut builder = self.rest_client.post(ORDER_ENDPOINT);
        for (key, value) in Self::wire_params(request) {
            builder = builder.query(key, value);
        }
        builder = builder
            .query("timestamp", timestamp_ms().to_string())
            .query(
                "recvWindow",
                self.rest_client.config().recv_window_ms.to_string(),
            );

        let response = builder.signed().send().await.map_err(VelaError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            VelaError::Network(NetworkError::InvalidResponse {
                reason: format!("Failed to read response body: {e}"),
            })
        })?;

        if !status.is_success() {
            return Err(Self::parse_error(status.as_u16(), &body, &request.symbol));
        }

        let order: BinanceOrderResponse = serde_json::from_str(&body).map_err(|e| {
            VelaError::Network(NetworkError::InvalidResponse {
                reason: format!("Unexpected order response: {e}"),
            })
        })?;

        info!(
            environment = %self.environment,
            symbol = %request.symbol,
            order_id = order.order_id,
            status = %order.status,
            "Order acknowledged"
        );

        Ok(OrderAck {
            order_id: OrderId::from(order.order_id),
            symbol: request.symbol.clone(),
            status: order.status.to_string(),
            raw_response: body,
        })
    }
}
