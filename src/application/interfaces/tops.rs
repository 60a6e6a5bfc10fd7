use crate::error::AppError;
use crate::model::requests::{DateArg, SymbolArg};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the TOPS and HIST service
#[async_trait]
pub trait TopsService: Send + Sync {
    /// Top-of-book quotes
    async fn tops(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError>;

    /// Last sale
    async fn last(&self, symbols: SymbolArg, filter: Option<&str>) -> Result<Value, AppError>;

    /// HIST file listing, for one day when `date` is given
    async fn hist(&self, date: Option<DateArg>, filter: Option<&str>) -> Result<Value, AppError>;
}
