//! Types for public REST API endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

use crate::types::Side;

/// Ticker response from `pubticker/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Highest bid.
    pub bid: Decimal,
    /// Lowest ask.
    pub ask: Decimal,
    /// Last trade price.
    pub last: Decimal,
    /// Rolling 24 hour volume.
    pub volume: TickerVolume,
}

/// 24 hour volume, keyed by currency code (e.g. `BTC`, `USD`).
#[derive(Debug, Clone, Deserialize)]
pub struct TickerVolume {
    /// Time of the volume snapshot, milliseconds since epoch.
    pub timestamp: i64,
    /// Volume per currency.
    #[serde(flatten)]
    pub amounts: HashMap<String, Decimal>,
}

impl TickerVolume {
    /// Volume in the given currency (case-insensitive).
    pub fn in_currency(&self, currency: &str) -> Option<Decimal> {
        self.amounts
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(currency))
            .map(|(_, amount)| *amount)
    }
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderBookRequest {
    /// Maximum number of bids (default 50, 0 for all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_bids: Option<u32>,
    /// Maximum number of asks (default 50, 0 for all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_asks: Option<u32>,
}

/// Order book with bids and asks.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Bid levels, best first.
    pub bids: Vec<OrderBookEntry>,
    /// Ask levels, best first.
    pub asks: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Highest bid price.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Lowest ask price.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }
}

/// A single order book level.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBookEntry {
    /// Price.
    pub price: Decimal,
    /// Quantity.
    pub amount: Decimal,
    /// Timestamp (seconds), sent as a string.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub timestamp: i64,
}

/// Request parameters for recent trades.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradesRequest {
    /// Only trades after this timestamp (seconds or milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Maximum number of trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_trades: Option<u32>,
    /// Whether to include broken trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_breaks: Option<bool>,
}

/// A public trade.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Trade time (seconds).
    pub timestamp: i64,
    /// Trade time.
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub timestampms: OffsetDateTime,
    /// Trade identifier.
    pub tid: i64,
    /// Price.
    pub price: Decimal,
    /// Quantity.
    pub amount: Decimal,
    /// Venue, always `gemini`.
    pub exchange: String,
    /// Taker side.
    #[serde(rename = "type")]
    pub side: TradeType,
    /// Whether the trade was broken.
    #[serde(default)]
    pub broken: bool,
}

/// Kind of a public trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Buy taker
    Buy,
    /// Sell taker
    Sell,
    /// Auction fill
    Auction,
    /// Block trade
    Block,
}

impl TradeType {
    /// Side of the trade, if it came from the continuous book.
    pub fn side(&self) -> Option<Side> {
        match self {
            TradeType::Buy => Some(Side::Buy),
            TradeType::Sell => Some(Side::Sell),
            TradeType::Auction | TradeType::Block => None,
        }
    }
}

/// Current auction state from `auction/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Auction {
    /// Event id of the last auction.
    #[serde(default)]
    pub last_auction_eid: Option<i64>,
    /// Price of the last auction.
    #[serde(default)]
    pub last_auction_price: Option<Decimal>,
    /// Quantity of the last auction.
    #[serde(default)]
    pub last_auction_quantity: Option<Decimal>,
    /// Highest bid at the last auction.
    #[serde(default)]
    pub last_highest_bid_price: Option<Decimal>,
    /// Lowest ask at the last auction.
    #[serde(default)]
    pub last_lowest_ask_price: Option<Decimal>,
    /// Collar price of the last auction.
    #[serde(default)]
    pub last_collar_price: Option<Decimal>,
    /// Most recent indicative price.
    #[serde(default)]
    pub most_recent_indicative_price: Option<Decimal>,
    /// Most recent indicative quantity.
    #[serde(default)]
    pub most_recent_indicative_quantity: Option<Decimal>,
    /// Most recent highest bid.
    #[serde(default)]
    pub most_recent_highest_bid_price: Option<Decimal>,
    /// Most recent lowest ask.
    #[serde(default)]
    pub most_recent_lowest_ask_price: Option<Decimal>,
    /// Most recent collar price.
    #[serde(default)]
    pub most_recent_collar_price: Option<Decimal>,
    /// Start of the next auction (milliseconds).
    #[serde(default)]
    pub next_auction_ms: Option<i64>,
    /// Next indicative update (milliseconds).
    #[serde(default)]
    pub next_update_ms: Option<i64>,
}

/// Request parameters for auction history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuctionHistoryRequest {
    /// Only events after this timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Maximum number of events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_auction_results: Option<u32>,
    /// Whether to include indicative price publications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_indicative: Option<bool>,
}

/// A past auction event.
#[derive(Debug, Clone, Deserialize)]
pub struct AuctionHistory {
    /// Auction identifier.
    pub auction_id: i64,
    /// Event identifier.
    pub eid: i64,
    /// `auction` or `indicative`.
    pub event_type: String,
    /// `success` or `failure`.
    pub auction_result: String,
    /// Auction price.
    #[serde(default)]
    pub auction_price: Option<Decimal>,
    /// Auction quantity.
    #[serde(default)]
    pub auction_quantity: Option<Decimal>,
    /// Highest bid.
    #[serde(default)]
    pub highest_bid_price: Option<Decimal>,
    /// Lowest ask.
    #[serde(default)]
    pub lowest_ask_price: Option<Decimal>,
    /// Collar price.
    #[serde(default)]
    pub collar_price: Option<Decimal>,
    /// Event time (seconds).
    pub timestamp: i64,
    /// Event time (milliseconds).
    pub timestampms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_volume_by_currency() {
        let ticker: Ticker = serde_json::from_str(
            r#"{
                "bid": "977.59", "ask": "977.35", "last": "977.65",
                "volume": { "BTC": "2210.505328803", "USD": "2135477.463379586263", "timestamp": 1483018200000 }
            }"#,
        )
        .unwrap();
        assert_eq!(ticker.volume.timestamp, 1483018200000);
        assert_eq!(
            ticker.volume.in_currency("btc"),
            Some("2210.505328803".parse().unwrap())
        );
        assert!(ticker.volume.in_currency("eth").is_none());
    }

    #[test]
    fn test_order_book_entry_string_timestamp() {
        let book: OrderBook = serde_json::from_str(
            r#"{
                "bids": [{ "price": "3607.85", "amount": "6.643373", "timestamp": "1547147541" }],
                "asks": []
            }"#,
        )
        .unwrap();
        assert_eq!(book.bids[0].timestamp, 1547147541);
        assert_eq!(book.best_bid(), Some("3607.85".parse().unwrap()));
        assert!(book.best_ask().is_none());
    }

    #[test]
    fn test_trade_millisecond_timestamp() {
        let trade: Trade = serde_json::from_str(
            r#"{
                "timestamp": 1547146811, "timestampms": 1547146811357, "tid": 5335307668,
                "price": "3610.85", "amount": "0.27413495", "exchange": "gemini", "type": "buy"
            }"#,
        )
        .unwrap();
        assert_eq!(trade.timestampms.unix_timestamp(), 1547146811);
        assert_eq!(trade.side.side(), Some(Side::Buy));
        assert!(!trade.broken);
    }

    #[test]
    fn test_query_params_skip_unset() {
        let request = TradesRequest {
            limit_trades: Some(10),
            ..Default::default()
        };
        assert_eq!(serde_urlencoded::to_string(&request).unwrap(), "limit_trades=10");
    }
}
