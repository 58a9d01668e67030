//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::GeminiError;
use crate::rest::GeminiRestClient;
use crate::rest::endpoints::public;

impl GeminiRestClient {
    /// Get all tradable symbols.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gemini_api_client::rest::GeminiRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = GeminiRestClient::new();
    ///     let symbols = client.get_symbols().await?;
    ///     println!("{} symbols", symbols.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_symbols(&self) -> Result<Vec<String>, GeminiError> {
        self.public_get(public::SYMBOLS).await
    }

    /// Get recent trading activity for a symbol (e.g. `"btcusd"`).
    pub async fn get_ticker(&self, symbol: &str) -> Result<Ticker, GeminiError> {
        self.public_get(&format!("{}/{}", public::TICKER, symbol))
            .await
    }

    /// Get the current order book for a symbol.
    pub async fn get_order_book(
        &self,
        symbol: &str,
        request: Option<&OrderBookRequest>,
    ) -> Result<OrderBook, GeminiError> {
        let path = format!("{}/{}", public::BOOK, symbol);
        match request {
            Some(req) => self.public_get_with_params(&path, req).await,
            None => self.public_get(&path).await,
        }
    }

    /// Get trades executed since an optional timestamp.
    pub async fn get_trades(
        &self,
        symbol: &str,
        request: Option<&TradesRequest>,
    ) -> Result<Vec<Trade>, GeminiError> {
        let path = format!("{}/{}", public::TRADES, symbol);
        match request {
            Some(req) => self.public_get_with_params(&path, req).await,
            None => self.public_get(&path).await,
        }
    }

    /// Get the current auction state for a symbol.
    pub async fn get_auction(&self, symbol: &str) -> Result<Auction, GeminiError> {
        self.public_get(&format!("{}/{}", public::AUCTION, symbol))
            .await
    }

    /// Get past auction events, optionally with indicative prices.
    pub async fn get_auction_history(
        &self,
        symbol: &str,
        request: Option<&AuctionHistoryRequest>,
    ) -> Result<Vec<AuctionHistory>, GeminiError> {
        let path = format!(
            "{}/{}/{}",
            public::AUCTION,
            symbol,
            public::AUCTION_HISTORY
        );
        match request {
            Some(req) => self.public_get_with_params(&path, req).await,
            None => self.public_get(&path).await,
        }
    }
}
