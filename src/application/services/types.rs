use crate::error::AppError;
use crate::model::http::{Transport, get_json};
use crate::model::requests::{RequestDescriptor, RequestOptions, SymbolArg};
use crate::utils::validation::{str_to_list, symbols_param};
use serde_json::Value;
use tracing::debug;

/// Result type for endpoints returning undecoded JSON
pub type JsonResult = Result<Value, AppError>;

/// Shape of a symbol-qualified request after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolQuery {
    /// No symbol: the bare endpoint
    Unqualified,
    /// Exactly one symbol: the filter is honored
    Single(String),
    /// Several symbols: the remote API ignores the filter
    Batch(Vec<String>),
}

impl SymbolQuery {
    /// Classifies a symbol argument, dropping blank entries
    pub fn from_arg(symbols: impl Into<SymbolArg>) -> Self {
        let mut list: Vec<String> = str_to_list(symbols)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        match list.len() {
            0 => SymbolQuery::Unqualified,
            1 => SymbolQuery::Single(list.remove(0)),
            _ => SymbolQuery::Batch(list),
        }
    }

    /// Builds the descriptor for `path` in the matching URL form
    pub fn descriptor(&self, path: &str, options: &RequestOptions) -> RequestDescriptor {
        match self {
            SymbolQuery::Unqualified => RequestDescriptor::new(path, options),
            SymbolQuery::Single(symbol) => RequestDescriptor::new(
                format!("{path}?symbols={}", symbols_param(std::slice::from_ref(symbol))),
                options,
            ),
            SymbolQuery::Batch(symbols) => {
                if options.filter.is_some() {
                    debug!("Filter dropped for batch request on {}", path);
                }
                RequestDescriptor::new(format!("{path}?symbols={}", symbols_param(symbols)), options)
                    .without_filter()
            }
        }
    }
}

/// GETs `path` qualified by `symbols`, following the single/batch split
pub(crate) async fn get_by_symbols<T>(
    transport: &T,
    path: &str,
    symbols: impl Into<SymbolArg>,
    options: &RequestOptions,
) -> JsonResult
where
    T: Transport + ?Sized,
{
    let request = SymbolQuery::from_arg(symbols).descriptor(path, options);
    get_json(transport, &request).await
}

/// GETs a fixed path
pub(crate) async fn get_path<T>(transport: &T, path: &str, options: &RequestOptions) -> JsonResult
where
    T: Transport + ?Sized,
{
    get_json(transport, &RequestDescriptor::new(path, options)).await
}
