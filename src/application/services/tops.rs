/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! TOPS top-of-book quotes, last sale and HIST file listings

use crate::application::services::types::{JsonResult, get_by_symbols};
use crate::error::AppError;
use crate::model::http::{Transport, get_json};
use crate::model::requests::{DateArg, RequestDescriptor, RequestOptions, SymbolArg};
use crate::utils::validation::str_or_date;

/// Top-of-book quotes; no symbol returns every symbol
pub async fn tops<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "tops", symbols, options).await
}

/// Last sale price, size and time
pub async fn last<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "tops/last", symbols, options).await
}

/// Path for HIST, qualified by a date when one is given
///
/// # Errors
/// `AppError::InvalidDate` when the date cannot be parsed.
pub fn hist_path(date: Option<DateArg>) -> Result<String, AppError> {
    Ok(match date {
        Some(date) => format!("hist?date={}", str_or_date(date)?),
        None => "hist".to_string(),
    })
}

/// Downloadable HIST files, for one day or all available days
pub async fn hist<T: Transport + ?Sized>(
    transport: &T,
    date: Option<DateArg>,
    options: &RequestOptions,
) -> JsonResult {
    let path = hist_path(date)?;
    get_json(transport, &RequestDescriptor::new(path, options)).await
}
