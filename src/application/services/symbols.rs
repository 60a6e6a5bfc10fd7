/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Reference data: symbol directories and exchanges
//!
//! Each `*_symbols` function returns the decoded JSON untouched. The matching
//! `*_symbols_list` helper requests only the `symbol` field and flattens the
//! records into a list of tickers.

use crate::application::services::types::{JsonResult, get_path};
use crate::constants::{DEFAULT_REGION, SYMBOL_FIELD};
use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::requests::RequestOptions;
use crate::model::responses::{FxSymbolsList, object_keys, project_field};
use tracing::debug;

/// All symbols supported by the API
pub async fn symbols<T: Transport + ?Sized>(transport: &T, options: &RequestOptions) -> JsonResult {
    get_path(transport, "ref-data/symbols", options).await
}

/// Symbols traded on IEX
pub async fn iex_symbols<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "ref-data/iex/symbols", options).await
}

/// Mutual fund symbols
pub async fn mutual_fund_symbols<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "ref-data/mutual-funds/symbols", options).await
}

/// OTC symbols
pub async fn otc_symbols<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "ref-data/otc/symbols", options).await
}

/// FX currencies and currency pairs
pub async fn fx_symbols<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "ref-data/fx/symbols", options).await
}

/// Option expirations keyed by underlying symbol
pub async fn options_symbols<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "ref-data/options/symbols", options).await
}

/// Crypto symbols
pub async fn crypto_symbols<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "ref-data/crypto/symbols", options).await
}

/// Path for international symbols
///
/// Region wins over exchange; with neither, the `us` region is used.
pub fn international_symbols_path(region: Option<&str>, exchange: Option<&str>) -> String {
    let region = region.map(str::trim).filter(|r| !r.is_empty());
    let exchange = exchange.map(str::trim).filter(|e| !e.is_empty());
    match (region, exchange) {
        (Some(region), _) => format!("ref-data/region/{}/symbols", region.to_lowercase()),
        (None, Some(exchange)) => format!("ref-data/exchange/{}/symbols", exchange.to_lowercase()),
        (None, None) => format!("ref-data/region/{DEFAULT_REGION}/symbols"),
    }
}

/// Symbols of an international region or exchange
///
/// # Arguments
/// * `region` - two letter region code, takes precedence over `exchange`
/// * `exchange` - exchange code, used only when no region is given
pub async fn international_symbols<T: Transport + ?Sized>(
    transport: &T,
    region: Option<&str>,
    exchange: Option<&str>,
    options: &RequestOptions,
) -> JsonResult {
    let path = international_symbols_path(region, exchange);
    get_path(transport, &path, options).await
}

/// US exchanges
pub async fn exchanges<T: Transport + ?Sized>(transport: &T, options: &RequestOptions) -> JsonResult {
    get_path(transport, "ref-data/market/us/exchanges", options).await
}

/// International exchanges
pub async fn international_exchanges<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> JsonResult {
    get_path(transport, "ref-data/exchanges", options).await
}

fn symbol_filtered(options: &RequestOptions) -> RequestOptions {
    options.clone().with_filter(SYMBOL_FIELD)
}

/// Tickers of every supported symbol
pub async fn symbols_list<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> Result<Vec<String>, AppError> {
    let value = symbols(transport, &symbol_filtered(options)).await?;
    let list = project_field(&value, SYMBOL_FIELD)?;
    debug!("Symbols list with {} entries", list.len());
    Ok(list)
}

/// Tickers traded on IEX
pub async fn iex_symbols_list<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> Result<Vec<String>, AppError> {
    let value = iex_symbols(transport, &symbol_filtered(options)).await?;
    project_field(&value, SYMBOL_FIELD)
}

/// Mutual fund tickers
pub async fn mutual_fund_symbols_list<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> Result<Vec<String>, AppError> {
    let value = mutual_fund_symbols(transport, &symbol_filtered(options)).await?;
    project_field(&value, SYMBOL_FIELD)
}

/// OTC tickers
pub async fn otc_symbols_list<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> Result<Vec<String>, AppError> {
    let value = otc_symbols(transport, &symbol_filtered(options)).await?;
    project_field(&value, SYMBOL_FIELD)
}

/// Crypto tickers
pub async fn crypto_symbols_list<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> Result<Vec<String>, AppError> {
    let value = crypto_symbols(transport, &symbol_filtered(options)).await?;
    project_field(&value, SYMBOL_FIELD)
}

/// Tickers of an international region or exchange
pub async fn international_symbols_list<T: Transport + ?Sized>(
    transport: &T,
    region: Option<&str>,
    exchange: Option<&str>,
    options: &RequestOptions,
) -> Result<Vec<String>, AppError> {
    let value =
        international_symbols(transport, region, exchange, &symbol_filtered(options)).await?;
    project_field(&value, SYMBOL_FIELD)
}

/// Underlying symbols that have listed options
pub async fn options_symbols_list<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> Result<Vec<String>, AppError> {
    let value = options_symbols(transport, options).await?;
    object_keys(&value)
}

/// Currency codes and concatenated currency pairs
///
/// A response `{"currencies":[{"code":"USD"}],"pairs":[{"fromCurrency":"USD","toCurrency":"JPY"}]}`
/// yields `(["USD"], ["USDJPY"])`.
pub async fn fx_symbols_list<T: Transport + ?Sized>(
    transport: &T,
    options: &RequestOptions,
) -> Result<FxSymbolsList, AppError> {
    let value = fx_symbols(transport, options).await?;
    FxSymbolsList::from_value(&value)
}
