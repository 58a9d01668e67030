//! Common domain types for Gemini API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
///
/// Market data uses lowercase names; the past-trades endpoint capitalizes
/// them, so both spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    #[serde(alias = "Buy")]
    Buy,
    /// Sell order
    #[serde(alias = "Sell")]
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Order type accepted by `order/new`.
///
/// Only limit orders are supported through the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Limit order on the exchange
    #[default]
    #[serde(rename = "exchange limit")]
    ExchangeLimit,
    /// Stop-limit order on the exchange
    #[serde(rename = "exchange stop limit")]
    ExchangeStopLimit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderType::ExchangeLimit => "exchange limit",
            OrderType::ExchangeStopLimit => "exchange stop limit",
        };
        write!(f, "{}", s)
    }
}

/// Execution options for a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderOption {
    /// Post-only: cancelled if it would take liquidity
    MakerOrCancel,
    /// Fill what is possible immediately, cancel the rest
    ImmediateOrCancel,
    /// Fill completely or cancel
    FillOrKill,
    /// Only participate in the next auction
    AuctionOnly,
    /// Block-trade indication of interest
    IndicationOfInterest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::ExchangeLimit).unwrap(),
            "\"exchange limit\""
        );
        assert_eq!(OrderType::ExchangeStopLimit.to_string(), "exchange stop limit");
    }

    #[test]
    fn test_side_accepts_capitalized() {
        let side: Side = serde_json::from_str("\"Sell\"").unwrap();
        assert_eq!(side, Side::Sell);
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
    }

    #[test]
    fn test_order_option_kebab_case() {
        assert_eq!(
            serde_json::to_string(&OrderOption::MakerOrCancel).unwrap(),
            "\"maker-or-cancel\""
        );
    }
}
