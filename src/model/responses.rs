/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// FX reference data reduced to plain codes
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FxSymbolsList {
    /// Currency codes, in response order
    pub currencies: Vec<String>,
    /// Concatenated `from` + `to` currency codes, in response order
    pub pairs: Vec<String>,
}

impl FxSymbolsList {
    /// Builds the lists from a decoded `ref-data/fx/symbols` response
    ///
    /// # Errors
    /// `AppError::Decode` if `currencies` or `pairs` is missing or not an array.
    pub fn from_value(value: &Value) -> Result<Self, AppError> {
        let currencies = array_field(value, "currencies")?
            .iter()
            .filter_map(|c| c.get("code").and_then(Value::as_str))
            .map(String::from)
            .collect();
        let pairs = array_field(value, "pairs")?
            .iter()
            .filter_map(|p| {
                let from = p.get("fromCurrency").and_then(Value::as_str)?;
                let to = p.get("toCurrency").and_then(Value::as_str)?;
                Some(format!("{from}{to}"))
            })
            .collect();
        Ok(Self { currencies, pairs })
    }
}

impl From<FxSymbolsList> for (Vec<String>, Vec<String>) {
    fn from(value: FxSymbolsList) -> Self {
        (value.currencies, value.pairs)
    }
}

fn array_field<'a>(value: &'a Value, key: &str) -> Result<&'a Vec<Value>, AppError> {
    value
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Decode(format!("expected an array under `{key}`")))
}

/// Projects every record of a JSON array onto one string field
///
/// Records without the field, or where it is not a string, are skipped.
///
/// # Errors
/// `AppError::Decode` if `value` is not an array.
pub fn project_field(value: &Value, field: &str) -> Result<Vec<String>, AppError> {
    let records = value
        .as_array()
        .ok_or_else(|| AppError::Decode("expected an array of records".to_string()))?;
    Ok(records
        .iter()
        .filter_map(|r| r.get(field).and_then(Value::as_str))
        .map(String::from)
        .collect())
}

/// Keys of a JSON object
///
/// # Errors
/// `AppError::Decode` if `value` is not an object.
pub fn object_keys(value: &Value) -> Result<Vec<String>, AppError> {
    value
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .ok_or_else(|| AppError::Decode("expected an object".to_string()))
}
