use crate::error::AppError;
use crate::model::responses::FxSymbolsList;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the reference data service
///
/// `filter` selects response fields server-side; `None` returns every field.
#[async_trait]
pub trait SymbolsService: Send + Sync {
    /// All symbols supported by the API
    async fn symbols(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Symbols traded on IEX
    async fn iex_symbols(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Mutual fund symbols
    async fn mutual_fund_symbols(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// OTC symbols
    async fn otc_symbols(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// FX currencies and pairs
    async fn fx_symbols(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Option expirations keyed by underlying
    async fn options_symbols(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Crypto symbols
    async fn crypto_symbols(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Symbols of an international region or exchange
    ///
    /// # Arguments
    /// * `region` - region code, takes precedence over `exchange`
    /// * `exchange` - exchange code
    /// * `filter` - optional field selection
    async fn international_symbols(
        &self,
        region: Option<&str>,
        exchange: Option<&str>,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;

    /// US exchanges
    async fn exchanges(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// International exchanges
    async fn international_exchanges(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Tickers of every supported symbol
    async fn symbols_list(&self) -> Result<Vec<String>, AppError>;

    /// Tickers traded on IEX
    async fn iex_symbols_list(&self) -> Result<Vec<String>, AppError>;

    /// Mutual fund tickers
    async fn mutual_fund_symbols_list(&self) -> Result<Vec<String>, AppError>;

    /// OTC tickers
    async fn otc_symbols_list(&self) -> Result<Vec<String>, AppError>;

    /// Crypto tickers
    async fn crypto_symbols_list(&self) -> Result<Vec<String>, AppError>;

    /// Underlyings with listed options
    async fn options_symbols_list(&self) -> Result<Vec<String>, AppError>;

    /// Tickers of an international region or exchange
    async fn international_symbols_list(
        &self,
        region: Option<&str>,
        exchange: Option<&str>,
    ) -> Result<Vec<String>, AppError>;

    /// Currency codes and currency pairs
    async fn fx_symbols_list(&self) -> Result<FxSymbolsList, AppError>;
}
