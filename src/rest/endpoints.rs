//! Gemini REST API endpoint constants.
//!
//! Paths are relative to `/v1/`; the client and the signer add the version
//! segment.

/// Base URL for the Gemini REST API.
pub const GEMINI_BASE_URL: &str = "https://api.gemini.com";

/// Base URL for the Gemini sandbox.
pub const GEMINI_SANDBOX_URL: &str = "https://api.sandbox.gemini.com";

/// API version segment.
pub const API_VERSION: &str = "1";

/// Authentication header names.
pub mod headers {
    pub const API_KEY: &str = "X-GEMINI-APIKEY";
    pub const PAYLOAD: &str = "X-GEMINI-PAYLOAD";
    pub const SIGNATURE: &str = "X-GEMINI-SIGNATURE";
}

/// Public endpoints (no authentication required).
pub mod public {
    /// List tradable symbols.
    pub const SYMBOLS: &str = "symbols";
    /// Ticker, followed by `/{symbol}`.
    pub const TICKER: &str = "pubticker";
    /// Order book, followed by `/{symbol}`.
    pub const BOOK: &str = "book";
    /// Recent trades, followed by `/{symbol}`.
    pub const TRADES: &str = "trades";
    /// Current auction, followed by `/{symbol}`.
    pub const AUCTION: &str = "auction";
    /// Suffix for auction history, `auction/{symbol}/history`.
    pub const AUCTION_HISTORY: &str = "history";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Place a new order.
    pub const ORDER_NEW: &str = "order/new";
    /// Cancel an order.
    pub const ORDER_CANCEL: &str = "order/cancel";
    /// Cancel all orders placed by this session.
    pub const ORDER_CANCEL_SESSION: &str = "order/cancel/session";
    /// Cancel all orders of the account.
    pub const ORDER_CANCEL_ALL: &str = "order/cancel/all";
    /// Order status.
    pub const ORDER_STATUS: &str = "order/status";
    /// Active orders.
    pub const ORDERS: &str = "orders";
    /// Past trades.
    pub const MY_TRADES: &str = "mytrades";
    /// Trade volume.
    pub const TRADE_VOLUME: &str = "tradevolume";
    /// Available balances.
    pub const BALANCES: &str = "balances";
    /// Deposit address prefix, `deposit/{currency}/newAddress`.
    pub const DEPOSIT: &str = "deposit";
    /// Deposit address suffix.
    pub const NEW_ADDRESS: &str = "newAddress";
    /// Withdrawal prefix, `withdraw/{currency}`.
    pub const WITHDRAW: &str = "withdraw";
    /// Session heartbeat.
    pub const HEARTBEAT: &str = "heartbeat";
}
