//! The client and its endpoint catalog.
//!
//! [`BitstampClient`] holds one shared HTTP client; every API operation
//! is a method wiring an endpoint descriptor, its request parameters,
//! and a normalization rule through the same two call paths, public and
//! signed. Credentials are borrowed per signed call, never stored.

use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::errors::{BitstampError, Result};
use crate::models::*;
use crate::normalize::{self, Rule};
use crate::transport::{self, Endpoint, Params};

/// Asynchronous client for the Bitstamp v2 REST API.
#[derive(Debug, Clone)]
pub struct BitstampClient {
    http: Client,
    config: ClientConfig,
}

impl BitstampClient {
    /// Create a client against the production service with defaults.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = Client::builder().timeout(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let http = builder.build().expect("failed to build HTTP client");
        Self { http, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Call core
    // -----------------------------------------------------------------------

    /// One public round-trip: send, decode, normalize.
    async fn call<T>(&self, endpoint: Endpoint, params: Params, rule: Rule<T>) -> Result<T> {
        let value = transport::send(&self.http, &self.config.base_url, &endpoint, &params).await?;
        Ok(rule(value)?)
    }

    /// One signed round-trip: inject key/signature/nonce, then [`call`](Self::call).
    async fn call_signed<T>(
        &self,
        credentials: &Credentials,
        endpoint: Endpoint,
        mut params: Params,
        rule: Rule<T>,
    ) -> Result<T> {
        credentials.sign_into(&mut params);
        self.call(endpoint, params, rule).await
    }

    // -----------------------------------------------------------------------
    // Market data
    // -----------------------------------------------------------------------

    /// GET ticker/ - Daily ticker snapshots for every traded pair.
    pub async fn ticker_all(&self) -> Result<Vec<Ticker>> {
        debug!("api.ticker_all");
        self.call(Endpoint::get("ticker/"), Params::new(), Ticker::list_from_value)
            .await
    }

    /// GET ticker/{pair}/ - Daily ticker for one pair.
    pub async fn ticker(&self, pair: &str) -> Result<Ticker> {
        debug!("api.ticker pair={}", pair);
        self.call(
            Endpoint::get(format!("ticker/{pair}/")),
            Params::new(),
            Ticker::from_value,
        )
        .await
    }

    /// GET ticker_hour/{pair}/ - Hourly ticker for one pair.
    pub async fn ticker_hour(&self, pair: &str) -> Result<Ticker> {
        debug!("api.ticker_hour pair={}", pair);
        self.call(
            Endpoint::get(format!("ticker_hour/{pair}/")),
            Params::new(),
            Ticker::from_value,
        )
        .await
    }

    /// GET order_book/{pair}/ - Order book snapshot.
    ///
    /// With `group` set, orders at the same price are merged into one
    /// level, which is also the service's own default.
    pub async fn order_book(&self, pair: &str, group: bool) -> Result<OrderBook> {
        debug!("api.order_book pair={} group={}", pair, group);
        let group = if group { "1" } else { "0" };
        self.call(
            Endpoint::get(format!("order_book/{pair}/")),
            vec![("group", group.to_string())],
            OrderBook::from_value,
        )
        .await
    }

    /// GET transactions/{pair}/ - Recent public trades.
    ///
    /// `interval` bounds the window; the service defaults to a day.
    pub async fn transactions(
        &self,
        pair: &str,
        interval: Option<TransactionInterval>,
    ) -> Result<Vec<Transaction>> {
        debug!("api.transactions pair={} interval={:?}", pair, interval);
        let mut params = Params::new();
        if let Some(interval) = interval {
            params.push(("time", interval.as_str().to_string()));
        }
        self.call(
            Endpoint::get(format!("transactions/{pair}/")),
            params,
            Transaction::list_from_value,
        )
        .await
    }

    /// GET trading-pairs-info/ - Trading pair metadata, untyped.
    pub async fn trading_pairs_info(&self) -> Result<Value> {
        debug!("api.trading_pairs_info");
        self.call(
            Endpoint::get("trading-pairs-info/"),
            Params::new(),
            normalize::raw,
        )
        .await
    }

    /// GET ohlc/{pair}/ - Candle history, untyped.
    ///
    /// `limit` is the number of candles, 1 through 1000; values outside
    /// that range fail before any request is made.
    pub async fn ohlc(&self, pair: &str, step: CandleStep, limit: u32) -> Result<Value> {
        debug!(
            "api.ohlc pair={} step={} limit={}",
            pair,
            step.seconds(),
            limit
        );
        if !(1..=1000).contains(&limit) {
            return Err(BitstampError::InvalidParameter(format!(
                "ohlc limit must be between 1 and 1000, got {limit}"
            )));
        }
        self.call(
            Endpoint::get(format!("ohlc/{pair}/")),
            vec![
                ("step", step.seconds().to_string()),
                ("limit", limit.to_string()),
            ],
            normalize::raw,
        )
        .await
    }

    /// GET eur_usd/ - EUR/USD conversion rate.
    pub async fn eur_usd_conversion_rate(&self) -> Result<ConversionRate> {
        debug!("api.eur_usd_conversion_rate");
        self.call(
            Endpoint::get("eur_usd/"),
            Params::new(),
            ConversionRate::from_value,
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    /// POST buy/{pair}/ - Place a limit buy order.
    pub async fn buy_limit_order(
        &self,
        credentials: &Credentials,
        pair: &str,
        amount: Decimal,
        price: Decimal,
    ) -> Result<PlacedOrder> {
        debug!(
            "api.buy_limit_order pair={} amount={} price={}",
            pair, amount, price
        );
        self.call_signed(
            credentials,
            Endpoint::signed(format!("buy/{pair}/")),
            vec![
                ("amount", amount.to_string()),
                ("price", price.to_string()),
            ],
            PlacedOrder::from_value,
        )
        .await
    }

    /// POST sell/{pair}/ - Place a limit sell order.
    pub async fn sell_limit_order(
        &self,
        credentials: &Credentials,
        pair: &str,
        amount: Decimal,
        price: Decimal,
    ) -> Result<PlacedOrder> {
        debug!(
            "api.sell_limit_order pair={} amount={} price={}",
            pair, amount, price
        );
        self.call_signed(
            credentials,
            Endpoint::signed(format!("sell/{pair}/")),
            vec![
                ("amount", amount.to_string()),
                ("price", price.to_string()),
            ],
            PlacedOrder::from_value,
        )
        .await
    }

    /// POST open_orders/all/ - Orders resting on the book, all pairs.
    pub async fn open_orders(&self, credentials: &Credentials) -> Result<Vec<OpenOrder>> {
        debug!("api.open_orders");
        self.call_signed(
            credentials,
            Endpoint::signed("open_orders/all/"),
            Params::new(),
            OpenOrder::list_from_value,
        )
        .await
    }

    /// POST cancel_order/ - Cancel an open order, untyped response.
    pub async fn cancel_order(&self, credentials: &Credentials, order_id: &str) -> Result<Value> {
        debug!("api.cancel_order id={}", order_id);
        self.call_signed(
            credentials,
            Endpoint::signed("cancel_order/"),
            vec![("id", order_id.to_string())],
            normalize::raw,
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------------

    /// POST account_balances/ - Balances for every currency.
    pub async fn account_balances(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<AccountBalance>> {
        debug!("api.account_balances");
        self.call_signed(
            credentials,
            Endpoint::signed("account_balances/"),
            Params::new(),
            AccountBalance::list_from_value,
        )
        .await
    }

    /// POST user_transactions/ - Paginated account history.
    ///
    /// Defaults when `None`: offset 0, limit 100, newest first.
    pub async fn user_transactions(
        &self,
        credentials: &Credentials,
        offset: Option<u64>,
        limit: Option<u64>,
        sort: Option<SortDirection>,
    ) -> Result<Vec<UserTransaction>> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(100);
        let sort = sort.unwrap_or(SortDirection::Descending);
        debug!(
            "api.user_transactions offset={} limit={} sort={}",
            offset,
            limit,
            sort.as_str()
        );
        self.call_signed(
            credentials,
            Endpoint::signed("user_transactions/"),
            vec![
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
                ("sort", sort.as_str().to_string()),
            ],
            UserTransaction::list_from_value,
        )
        .await
    }

    // -----------------------------------------------------------------------
    // Deposits and withdrawals
    // -----------------------------------------------------------------------

    /// POST btc_address/ - Bitcoin deposit address, untyped.
    pub async fn bitcoin_deposit_address(&self, credentials: &Credentials) -> Result<Value> {
        debug!("api.bitcoin_deposit_address");
        self.call_signed(
            credentials,
            Endpoint::signed("btc_address/"),
            Params::new(),
            normalize::raw,
        )
        .await
    }

    /// POST btc_unconfirmed/ - Bitcoin deposits awaiting confirmation.
    pub async fn unconfirmed_bitcoin_deposits(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<UnconfirmedDeposit>> {
        debug!("api.unconfirmed_bitcoin_deposits");
        self.call_signed(
            credentials,
            Endpoint::signed("btc_unconfirmed/"),
            Params::new(),
            UnconfirmedDeposit::list_from_value,
        )
        .await
    }

    /// POST btc_withdrawal/ - Request a bitcoin withdrawal, untyped response.
    pub async fn bitcoin_withdrawal(
        &self,
        credentials: &Credentials,
        amount: Decimal,
        address: &str,
    ) -> Result<Value> {
        debug!("api.bitcoin_withdrawal amount={} address={}", amount, address);
        self.call_signed(
            credentials,
            Endpoint::signed("btc_withdrawal/"),
            vec![
                ("amount", amount.to_string()),
                ("address", address.to_string()),
            ],
            normalize::raw,
        )
        .await
    }

    /// POST ripple_address/ - Ripple deposit address, untyped.
    pub async fn ripple_deposit_address(&self, credentials: &Credentials) -> Result<Value> {
        debug!("api.ripple_deposit_address");
        self.call_signed(
            credentials,
            Endpoint::signed("ripple_address/"),
            Params::new(),
            normalize::raw,
        )
        .await
    }

    /// POST ripple_withdrawal/ - Request a ripple withdrawal.
    ///
    /// The request carries only the signing fields; amount, address, and
    /// currency are accepted here but not transmitted.
    pub async fn ripple_withdrawal(
        &self,
        credentials: &Credentials,
        _amount: Decimal,
        _address: &str,
        _currency: &str,
    ) -> Result<Value> {
        debug!("api.ripple_withdrawal");
        self.call_signed(
            credentials,
            Endpoint::signed("ripple_withdrawal/"),
            Params::new(),
            normalize::raw,
        )
        .await
    }

    /// POST withdrawal-requests/ - Withdrawal requests from the recent window.
    pub async fn withdrawal_requests(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<WithdrawalRequest>> {
        debug!("api.withdrawal_requests");
        self.call_signed(
            credentials,
            Endpoint::signed("withdrawal-requests/"),
            Params::new(),
            WithdrawalRequest::list_from_value,
        )
        .await
    }
}

impl Default for BitstampClient {
    fn default() -> Self {
        Self::new()
    }
}
