use crate::error::AppError;
use crate::model::requests::SymbolArg;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the DEEP service
///
/// Methods taking a [`SymbolArg`] accept one symbol or a list; with a list of
/// more than one symbol the filter is not sent.
#[async_trait]
pub trait DeepService: Send + Sync {
    /// Aggregated DEEP data; fails with `AppError::TypeArgument` for a list
    async fn deep(&self, symbol: SymbolArg, filter: Option<&str>) -> Result<Value, AppError>;

    /// Auction information
    async fn auction(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError>;

    /// Bids and asks
    async fn book(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError>;

    /// Operational halt status
    async fn op_halt_status(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Official opening and closing prices
    async fn official_price(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Security events
    async fn security_event(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Short sale price test status
    async fn ssr_status(&self, symbols: SymbolArg, filter: Option<&str>)
    -> Result<Value, AppError>;

    /// Current system event
    async fn system_event(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Recent trades
    async fn trades(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError>;

    /// Broken trades
    async fn trade_break(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Trading status
    async fn trading_status(
        &self,
        symbols: SymbolArg,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;
}
