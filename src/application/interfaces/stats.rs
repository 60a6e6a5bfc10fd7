use crate::error::AppError;
use crate::model::requests::DateArg;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the statistics service
#[async_trait]
pub trait StatsService: Send + Sync {
    /// Intraday statistics
    async fn stats_intraday(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Recent trading days
    async fn stats_recent(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Records
    async fn stats_records(&self, filter: Option<&str>) -> Result<Value, AppError>;

    /// Monthly summary
    async fn stats_summary(
        &self,
        date: Option<DateArg>,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Daily statistics for a date, or for the `last` n days
    async fn stats_daily(
        &self,
        date: Option<DateArg>,
        last: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Value, AppError>;
}
