/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! DEEP: real-time depth of book and market event feeds
//!
//! `deep` only takes one symbol. The other symbol-qualified endpoints accept a
//! list; with more than one symbol the filter is not sent because the API
//! does not honor it on batch requests.

use crate::application::services::types::{JsonResult, get_by_symbols, get_path};
use crate::error::AppError;
use crate::model::http::{Transport, get_json};
use crate::model::requests::{RequestDescriptor, RequestOptions, SymbolArg};
use crate::utils::validation::{raise_if_not_str, symbols_param};

/// Path for the aggregated DEEP endpoint
///
/// # Errors
/// `AppError::TypeArgument` when `symbol` is a list.
pub fn deep_path(symbol: &SymbolArg) -> Result<String, AppError> {
    Ok(match raise_if_not_str(symbol)? {
        Some(s) => format!("deep?symbols={}", symbols_param(&[s.to_string()])),
        None => "deep".to_string(),
    })
}

/// Aggregated DEEP data for a single symbol
///
/// An empty symbol requests the unqualified `deep` endpoint.
pub async fn deep<T: Transport + ?Sized>(
    transport: &T,
    symbol: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    let path = deep_path(&symbol.into())?;
    get_json(transport, &RequestDescriptor::new(path, options)).await
}

/// Auction information
pub async fn auction<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/auction", symbols, options).await
}

/// Bids and asks per symbol
pub async fn book<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/book", symbols, options).await
}

/// Operational halt status
pub async fn op_halt_status<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/op-halt-status", symbols, options).await
}

/// Official opening and closing prices
pub async fn official_price<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/official-price", symbols, options).await
}

/// Security events (market open / close per symbol)
pub async fn security_event<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/security-event", symbols, options).await
}

/// Short sale price test status
pub async fn ssr_status<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/ssr-status", symbols, options).await
}

/// Current system event
pub async fn system_event<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "deep/system-event", options).await
}

/// Recent trades
pub async fn trades<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/trades", symbols, options).await
}

/// Trades broken during the day
pub async fn trade_break<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/trade-breaks", symbols, options).await
}

/// Trading status
pub async fn trading_status<T: Transport + ?Sized>(
    transport: &T,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult {
    get_by_symbols(transport, "deep/trading-status", symbols, options).await
}
