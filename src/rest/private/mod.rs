//! Private REST API endpoints (authentication required).
//!
//! These endpoints require an [`Account`](crate::auth::Account) bound to the
//! client. Order entry requires a session with the trader role; deposit
//! addresses and withdrawals require the fund manager role.

mod types;

pub use types::*;

use crate::auth::Role;
use crate::error::GeminiError;
use crate::rest::GeminiRestClient;
use crate::rest::endpoints::private;

impl GeminiRestClient {
    // ========== Orders ==========

    /// Place a new limit order.
    ///
    /// Requires a session with the [`Role::Trader`] role.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use gemini_api_client::auth::{Role, SessionRegistry};
    /// use gemini_api_client::rest::GeminiRestClient;
    /// use gemini_api_client::rest::private::NewOrderRequest;
    /// use gemini_api_client::types::Side;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let registry = Arc::new(SessionRegistry::new());
    ///     registry.add_session(1, "key", "secret", Role::Trader, false)?;
    ///     let client = GeminiRestClient::builder().account(registry.bind(1)?).build();
    ///
    ///     let request = NewOrderRequest::limit("btcusd", Side::Buy, "0.01".parse()?, "30000".parse()?);
    ///     let order = client.new_order(&request).await?;
    ///     println!("Placed order {}", order.order_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<Order, GeminiError> {
        self.private_post(private::ORDER_NEW, request, Some(Role::Trader))
            .await
    }

    /// Cancel an order. Cancelling an already cancelled order succeeds.
    ///
    /// Requires a session with the [`Role::Trader`] role.
    pub async fn cancel_order(&self, order_id: i64) -> Result<Order, GeminiError> {
        self.private_post(
            private::ORDER_CANCEL,
            &OrderIdRequest { order_id },
            Some(Role::Trader),
        )
        .await
    }

    /// Cancel all outstanding orders.
    ///
    /// With `session_only`, only orders placed with this API key are
    /// cancelled; otherwise every order of the account is, including ones
    /// placed through the UI. Requires the [`Role::Trader`] role.
    pub async fn cancel_all_orders(
        &self,
        session_only: bool,
    ) -> Result<CancelOrdersResponse, GeminiError> {
        let path = if session_only {
            private::ORDER_CANCEL_SESSION
        } else {
            private::ORDER_CANCEL_ALL
        };
        self.private_post(path, &(), Some(Role::Trader)).await
    }

    /// Get the status of an order.
    pub async fn get_order_status(&self, order_id: i64) -> Result<Order, GeminiError> {
        self.private_post(private::ORDER_STATUS, &OrderIdRequest { order_id }, None)
            .await
    }

    /// Get all active orders.
    pub async fn get_active_orders(&self) -> Result<Vec<Order>, GeminiError> {
        self.private_post(private::ORDERS, &(), None).await
    }

    // ========== Account ==========

    /// Get trades executed by the account.
    pub async fn get_trade_history(
        &self,
        request: &TradeHistoryRequest,
    ) -> Result<Vec<PastTrade>, GeminiError> {
        self.private_post(private::MY_TRADES, request, None).await
    }

    /// Get trade volume, one list per account.
    pub async fn get_trade_volume(&self) -> Result<Vec<Vec<TradeVolume>>, GeminiError> {
        self.private_post(private::TRADE_VOLUME, &(), None).await
    }

    /// Get available balances in all supported currencies.
    pub async fn get_balances(&self) -> Result<Vec<Balance>, GeminiError> {
        self.private_post(private::BALANCES, &(), None).await
    }

    // ========== Funding ==========

    /// Create a new deposit address for `currency` (e.g. `"btc"`).
    ///
    /// Requires a session with the [`Role::FundManager`] role.
    pub async fn new_deposit_address(
        &self,
        currency: &str,
        request: &DepositAddressRequest,
    ) -> Result<DepositAddress, GeminiError> {
        let path = format!("{}/{}/{}", private::DEPOSIT, currency, private::NEW_ADDRESS);
        self.private_post(&path, request, Some(Role::FundManager))
            .await
    }

    /// Withdraw crypto to a whitelisted address.
    ///
    /// Requires a session with the [`Role::FundManager`] role.
    pub async fn withdraw_crypto(
        &self,
        currency: &str,
        request: &WithdrawRequest,
    ) -> Result<Withdrawal, GeminiError> {
        let path = format!("{}/{}", private::WITHDRAW, currency);
        self.private_post(&path, request, Some(Role::FundManager))
            .await
    }

    // ========== Session ==========

    /// Send a heartbeat for a key created with "requires heartbeat".
    ///
    /// Without one, the venue cancels the key's orders after 30 seconds of
    /// inactivity.
    pub async fn post_heartbeat(&self) -> Result<Heartbeat, GeminiError> {
        self.private_post(private::HEARTBEAT, &(), None).await
    }
}
