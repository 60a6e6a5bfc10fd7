/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Argument normalization shared by every endpoint function

use crate::error::AppError;
use crate::model::requests::{DateArg, SymbolArg, encode_csv};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y%m%d";
const ACCEPTED_DATE_FORMATS: [&str; 3] = ["%Y%m%d", "%Y-%m-%d", "%Y/%m/%d"];

/// Ensures a symbol argument is a single string
///
/// Returns `None` for a blank string or an empty list so callers can fall
/// back to the unqualified endpoint. The symbol is returned trimmed.
///
/// # Errors
/// `AppError::TypeArgument` when a non-empty sequence is given.
pub fn raise_if_not_str(value: &SymbolArg) -> Result<Option<&str>, AppError> {
    if value.is_empty() {
        return Ok(None);
    }
    match value {
        SymbolArg::One(s) => Ok(Some(s.trim())),
        SymbolArg::Many(v) => Err(AppError::TypeArgument(format!(
            "expected a single symbol, got a list of {}",
            v.len()
        ))),
    }
}

/// Normalizes a date argument to `YYYYMMDD`
///
/// # Errors
/// `AppError::InvalidDate` when a string matches none of the accepted layouts.
pub fn str_or_date(value: impl Into<DateArg>) -> Result<String, AppError> {
    Ok(parse_date(value.into())?.format(DATE_FORMAT).to_string())
}

/// Same as [`str_or_date`] but truncated to `YYYYMM`
pub fn str_or_month(value: impl Into<DateArg>) -> Result<String, AppError> {
    let value = value.into();
    if let DateArg::Str(s) = &value {
        let s = s.trim();
        if s.len() == 6 && s.chars().all(|c| c.is_ascii_digit()) {
            return str_or_date(format!("{s}01")).map(|d| d[..6].to_string());
        }
    }
    Ok(parse_date(value)?.format("%Y%m").to_string())
}

fn parse_date(value: DateArg) -> Result<NaiveDate, AppError> {
    match value {
        DateArg::Date(d) => Ok(d),
        DateArg::DateTime(dt) => Ok(dt.date()),
        DateArg::Str(s) => {
            let trimmed = s.trim();
            ACCEPTED_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .ok_or(AppError::InvalidDate(s))
        }
    }
}

/// Normalizes a symbol argument to an ordered list
pub fn str_to_list(value: impl Into<SymbolArg>) -> Vec<String> {
    match value.into() {
        SymbolArg::One(s) => vec![s],
        SymbolArg::Many(v) => v,
    }
}

/// Query value for a list of symbols: each percent-encoded, joined by commas
///
/// Symbols carrying a `+` (e.g. warrants) go out as `%2B`.
pub fn symbols_param(symbols: &[String]) -> String {
    encode_csv(symbols.iter().filter(|s| !s.trim().is_empty()))
}
