/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Configured client for the IEX Cloud API
//!
//! Every endpoint exists twice: as a free function in
//! [`crate::application::services`] taking explicit [`RequestOptions`], and as
//! a method on [`Client`] that fills in the configured token and version and
//! forwards to that function.
//!
//! # Example
//! ```ignore
//! use iex_client::prelude::*;
//!
//! let client = Client::new(Config::with_token("pk_..."))?;
//! let tickers = client.symbols_list().await?;
//! let book = client.book("AAPL".into(), None).await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::deep::DeepService;
use crate::application::interfaces::stats::StatsService;
use crate::application::interfaces::symbols::SymbolsService;
use crate::application::interfaces::tops::TopsService;
use crate::application::services::{deep, stats, symbols, tops};
use crate::error::AppError;
use crate::model::http::{HttpClient, Transport};
use crate::model::requests::{DateArg, RequestOptions, SymbolArg};
use crate::model::responses::FxSymbolsList;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Client holding a token, a version and a transport
///
/// Cloning is cheap and clones share the transport. Calls do not interact.
pub struct Client<T: Transport = HttpClient> {
    config: Arc<Config>,
    transport: Arc<T>,
}

impl Client<HttpClient> {
    /// Creates a client backed by `reqwest`
    ///
    /// # Errors
    /// `AppError::Transport` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = HttpClient::new(&config.rest_api)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client from environment configuration
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client with a custom transport
    pub fn with_transport(config: Config, transport: T) -> Self {
        debug!("Client created for API version {}", config.version);
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sets a new configuration; subsequent calls use it
    pub fn set_config(&mut self, config: Config) {
        self.config = Arc::new(config);
    }

    /// Gets the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request options for one call with this client's credentials
    pub fn options(&self, filter: Option<&str>) -> RequestOptions {
        self.config.request_options().with_filter_opt(filter)
    }
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

#[async_trait]
impl<T: Transport + 'static> SymbolsService for Client<T> {
    async fn symbols(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::symbols(self.transport(), &self.options(filter)).await
    }

    async fn iex_symbols(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::iex_symbols(self.transport(), &self.options(filter)).await
    }

    async fn mutual_fund_symbols(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::mutual_fund_symbols(self.transport(), &self.options(filter)).await
    }

    async fn otc_symbols(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::otc_symbols(self.transport(), &self.options(filter)).await
    }

    async fn fx_symbols(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::fx_symbols(self.transport(), &self.options(filter)).await
    }

    async fn options_symbols(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::options_symbols(self.transport(), &self.options(filter)).await
    }

    async fn crypto_symbols(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::crypto_symbols(self.transport(), &self.options(filter)).await
    }

    async fn international_symbols(
        &self,
        region: Option<&str>,
        exchange: Option<&str>,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        symbols::international_symbols(self.transport(), region, exchange, &self.options(filter))
            .await
    }

    async fn exchanges(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::exchanges(self.transport(), &self.options(filter)).await
    }

    async fn international_exchanges(&self, filter: Option<&str>) -> Result<Value, AppError> {
        symbols::international_exchanges(self.transport(), &self.options(filter)).await
    }

    async fn symbols_list(&self) -> Result<Vec<String>, AppError> {
        symbols::symbols_list(self.transport(), &self.options(None)).await
    }

    async fn iex_symbols_list(&self) -> Result<Vec<String>, AppError> {
        symbols::iex_symbols_list(self.transport(), &self.options(None)).await
    }

    async fn mutual_fund_symbols_list(&self) -> Result<Vec<String>, AppError> {
        symbols::mutual_fund_symbols_list(self.transport(), &self.options(None)).await
    }

    async fn otc_symbols_list(&self) -> Result<Vec<String>, AppError> {
        symbols::otc_symbols_list(self.transport(), &self.options(None)).await
    }

    async fn crypto_symbols_list(&self) -> Result<Vec<String>, AppError> {
        symbols::crypto_symbols_list(self.transport(), &self.options(None)).await
    }

    async fn options_symbols_list(&self) -> Result<Vec<String>, AppError> {
        symbols::options_symbols_list(self.transport(), &self.options(None)).await
    }

    async fn international_symbols_list(
        &self,
        region: Option<&str>,
        exchange: Option<&str>,
    ) -> Result<Vec<String>, AppError> {
        symbols::international_symbols_list(self.transport(), region, exchange, &self.options(None))
            .await
    }

    async fn fx_symbols_list(&self) -> Result<FxSymbolsList, AppError> {
        symbols::fx_symbols_list(self.transport(), &self.options(None)).await
    }
}

#[async_trait]
impl<T: Transport + 'static> DeepService for Client<T> {
    async fn deep(&self, symbol: SymbolArg, filter: Option<&str>) -> Result<Value, AppError> {
        deep::deep(self.transport(), symbol, &self.options(filter)).await
    }

    async fn auction(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError> {
        deep::auction(self.transport(), symbols, &self.options(filter)).await
    }

    async fn book(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError> {
        deep::book(self.transport(), symbols, &self.options(filter)).await
    }

    async fn op_halt_status(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        deep::op_halt_status(self.transport(), symbols, &self.options(filter)).await
    }

    async fn official_price(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        deep::official_price(self.transport(), symbols, &self.options(filter)).await
    }

    async fn security_event(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        deep::security_event(self.transport(), symbols, &self.options(filter)).await
    }

    async fn ssr_status(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        deep::ssr_status(self.transport(), symbols, &self.options(filter)).await
    }

    async fn system_event(&self, filter: Option<&str>) -> Result<Value, AppError> {
        deep::system_event(self.transport(), &self.options(filter)).await
    }

    async fn trades(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError> {
        deep::trades(self.transport(), symbols, &self.options(filter)).await
    }

    async fn trade_break(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        deep::trade_break(self.transport(), symbols, &self.options(filter)).await
    }

    async fn trading_status(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        deep::trading_status(self.transport(), symbols, &self.options(filter)).await
    }
}

#[async_trait]
impl<T: Transport + 'static> TopsService for Client<T> {
    async fn tops(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError> {
        tops::tops(self.transport(), symbols, &self.options(filter)).await
    }

    async fn last(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError> {
        tops::last(self.transport(), symbols, &self.options(filter)).await
    }

    async fn hist(&self, date: Option<DateArg>, filter: Option<&str>) -> Result<Value, AppError> {
        tops::hist(self.transport(), date, &self.options(filter)).await
    }
}

#[async_trait]
impl<T: Transport + 'static> StatsService for Client<T> {
    async fn stats_intraday(&self, filter: Option<&str>) -> Result<Value, AppError> {
        stats::stats_intraday(self.transport(), &self.options(filter)).await
    }

    async fn stats_recent(&self, filter: Option<&str>) -> Result<Value, AppError> {
        stats::stats_recent(self.transport(), &self.options(filter)).await
    }

    async fn stats_records(&self, filter: Option<&str>) -> Result<Value, AppError> {
        stats::stats_records(self.transport(), &self.options(filter)).await
    }

    async fn stats_summary(
        &self,
        date: Option<DateArg>,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        stats::stats_summary(self.transport(), date, &self.options(filter)).await
    }

    async fn stats_daily(
        &self,
        date: Option<DateArg>,
        last: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Value, AppError> {
        stats::stats_daily(self.transport(), date, last, &self.options(filter)).await
    }
}
