/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::services::types::{JsonResult, get_path};
use crate::error::AppError;
use crate::model::http::{Transport, get_json};
use crate::model::requests::{DateArg, RequestDescriptor, RequestOptions};
use crate::utils::validation::{str_or_date, str_or_month};

/// Intraday IEX trading statistics
pub async fn stats_intraday<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "stats/intraday", options).await
}

/// Statistics for the most recent trading days
pub async fn stats_recent<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "stats/recent", options).await
}

/// Record volume statistics
pub async fn stats_records<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "stats/records", options).await
}

/// Path for the monthly historical summary
pub fn stats_summary_path(date: Option<DateArg>) -> Result<String, AppError> {
    Ok(match date {
        Some(date) => format!("stats/historical?date={}", str_or_month(date)?),
        None => "stats/historical".to_string(),
    })
}

/// Monthly historical summary, for the given month or the current one
pub async fn stats_summary<T: Transport + ?Sized>(
    transport: &T,
    date: Option<DateArg>,
    options: &RequestOptions,
) -> JsonResult {
    let path = stats_summary_path(date)?;
    get_json(transport, &RequestDescriptor::new(path, options)).await
}

/// Path for daily historical statistics
///
/// A date takes precedence over `last`; `last` must be between 1 and 90.
pub fn stats_daily_path(date: Option<DateArg>, last: Option<u32>) -> Result<String, AppError> {
    match (date, last) {
        (Some(date), _) => Ok(format!("stats/historical/daily?date={}", str_or_date(date)?)),
        (None, Some(last)) if (1..=90).contains(&last) => {
            Ok(format!("stats/historical/daily?last={last}"))
        }
        (None, Some(last)) => Err(AppError::InvalidInput(format!(
            "last must be between 1 and 90, got {last}"
        ))),
        (None, None) => Ok("stats/historical/daily".to_string()),
    }
}

/// Daily historical statistics
pub async fn stats_daily<T: Transport + ?Sized>(
    transport: &T,
    date: Option<DateArg>,
    last: Option<u32>,
    options: &RequestOptions,
) -> JsonResult {
    let path = stats_daily_path(date, last)?;
    get_json(transport, &RequestDescriptor::new(path, options)).await
}
