//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::types::{OrderOption, OrderType, Side};

/// Request to place a new order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderRequest {
    /// Symbol (e.g. `btcusd`).
    pub symbol: String,
    /// Quantity.
    pub amount: Decimal,
    /// Limit price.
    pub price: Decimal,
    /// Side.
    pub side: Side,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Stop price for stop-limit orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    /// Client-supplied order id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    /// Execution options (at most one is accepted by the venue).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OrderOption>,
}

impl NewOrderRequest {
    /// Create a limit order request.
    pub fn limit(symbol: impl Into<String>, side: Side, amount: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            price,
            side,
            order_type: OrderType::ExchangeLimit,
            stop_price: None,
            client_order_id: None,
            options: Vec::new(),
        }
    }

    /// Set the client order id.
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Add an execution option.
    pub fn option(mut self, option: OrderOption) -> Self {
        self.options.push(option);
        self
    }

    /// Turn the order into a stop-limit order.
    pub fn stop_price(mut self, stop_price: Decimal) -> Self {
        self.order_type = OrderType::ExchangeStopLimit;
        self.stop_price = Some(stop_price);
        self
    }
}

/// Request referencing one order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrderIdRequest {
    /// Venue order id.
    pub order_id: i64,
}

/// Order status as returned by the order endpoints.
///
/// Only `order_id` is guaranteed; the venue trims the rest on some
/// responses.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Venue order id (sent as a string or a number).
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub order_id: i64,
    /// Client-supplied order id.
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// Symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Venue, always `gemini`.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Side.
    #[serde(default)]
    pub side: Option<Side>,
    /// Order type.
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,
    /// Limit price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Average execution price.
    #[serde(default)]
    pub avg_execution_price: Option<Decimal>,
    /// Original quantity.
    #[serde(default)]
    pub original_amount: Option<Decimal>,
    /// Executed quantity.
    #[serde(default)]
    pub executed_amount: Option<Decimal>,
    /// Remaining quantity.
    #[serde(default)]
    pub remaining_amount: Option<Decimal>,
    /// Whether the order is on the book.
    #[serde(default)]
    pub is_live: bool,
    /// Whether the order was cancelled.
    #[serde(default)]
    pub is_cancelled: bool,
    /// Whether the order is hidden.
    #[serde(default)]
    pub is_hidden: bool,
    /// Whether the order was forced.
    #[serde(default)]
    pub was_forced: bool,
    /// Creation time (milliseconds).
    #[serde(default)]
    pub timestampms: Option<i64>,
    /// Execution options.
    #[serde(default)]
    pub options: Vec<String>,
}

/// Response of the bulk cancel endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrdersResponse {
    /// `ok` on success.
    pub result: String,
    /// Cancelled and rejected order ids.
    pub details: CancelDetails,
}

/// Order ids affected by a bulk cancel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelDetails {
    /// Orders that were cancelled.
    #[serde(default)]
    pub cancelled_orders: Vec<i64>,
    /// Orders that could not be cancelled.
    #[serde(default)]
    pub cancel_rejects: Vec<i64>,
}

/// Request for past trades.
#[derive(Debug, Clone, Serialize)]
pub struct TradeHistoryRequest {
    /// Symbol.
    pub symbol: String,
    /// Only trades on or after this timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Maximum number of trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_trades: Option<u32>,
}

impl TradeHistoryRequest {
    /// Request trades for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp: None,
            limit_trades: None,
        }
    }

    /// Only return trades on or after `timestamp`.
    pub fn since(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A trade executed by the account.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct PastTrade {
    /// Price.
    pub price: Decimal,
    /// Quantity.
    pub amount: Decimal,
    /// Trade time (seconds).
    pub timestamp: i64,
    /// Trade time (milliseconds).
    pub timestampms: i64,
    /// Side.
    #[serde(rename = "type")]
    pub side: Side,
    /// Whether the account was the taker.
    #[serde(default)]
    pub aggressor: bool,
    /// Fee currency.
    pub fee_currency: String,
    /// Fee amount.
    pub fee_amount: Decimal,
    /// Trade id.
    pub tid: i64,
    /// Order id.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub order_id: i64,
    /// Venue, always `gemini`.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Whether the trade was an auction fill.
    #[serde(default)]
    pub is_auction_fill: bool,
    /// Client-supplied order id.
    #[serde(default)]
    pub client_order_id: Option<String>,
}

/// Trade volume for one symbol and day.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeVolume {
    /// Symbol.
    pub symbol: String,
    /// Base currency.
    pub base_currency: String,
    /// Notional currency.
    pub notional_currency: String,
    /// Day of the figures (`YYYY-MM-DD`).
    pub data_date: String,
    /// Total base volume.
    pub total_volume_base: Decimal,
    /// Maker buy/sell ratio.
    #[serde(default)]
    pub maker_buy_sell_ratio: Option<Decimal>,
    /// Maker buy volume in base currency.
    #[serde(default)]
    pub buy_maker_base: Option<Decimal>,
    /// Maker sell volume in base currency.
    #[serde(default)]
    pub sell_maker_base: Option<Decimal>,
    /// Taker buy volume in base currency.
    #[serde(default)]
    pub buy_taker_base: Option<Decimal>,
    /// Taker sell volume in base currency.
    #[serde(default)]
    pub sell_taker_base: Option<Decimal>,
}

/// Balance of one currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Account type, e.g. `exchange`.
    #[serde(rename = "type")]
    pub account_type: String,
    /// Currency code.
    pub currency: String,
    /// Total amount.
    pub amount: Decimal,
    /// Amount available for trading.
    pub available: Decimal,
    /// Amount available for withdrawal.
    pub available_for_withdrawal: Decimal,
}

/// Request for a new deposit address.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DepositAddressRequest {
    /// Label for the new address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A newly created deposit address.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// Currency code.
    pub currency: String,
    /// Address.
    pub address: String,
    /// Label given on creation.
    #[serde(default)]
    pub label: Option<String>,
}

/// Request to withdraw crypto to a whitelisted address.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawRequest {
    /// Destination address.
    pub address: String,
    /// Quantity.
    pub amount: Decimal,
}

impl WithdrawRequest {
    /// Create a withdrawal request.
    pub fn new(address: impl Into<String>, amount: Decimal) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Result of a withdrawal.
///
/// A body carrying a `message` but no `"result": "ok"` is read as a venue
/// error envelope and surfaces as [`GeminiError::Api`](crate::error::GeminiError::Api),
/// even when it describes an accepted transfer. Check the account's transfer
/// history before retrying such a withdrawal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    /// Destination address.
    pub address: String,
    /// Quantity.
    pub amount: Decimal,
    /// Fee charged.
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Venue withdrawal id.
    #[serde(default, alias = "withdrawalID")]
    pub withdrawal_id: Option<String>,
    /// Transaction hash, once broadcast.
    #[serde(default)]
    pub tx_hash: Option<String>,
}

/// Heartbeat acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct Heartbeat {
    /// `ok` on success.
    pub result: String,
}
