use iex_client::error::AppError;
use iex_client::model::responses::{FxSymbolsList, object_keys, project_field};
use serde_json::json;

#[test]
fn test_project_field_symbols() {
    let value = json!([{"symbol": "AAPL"}, {"symbol": "MSFT"}]);
    let list = project_field(&value, "symbol").unwrap();
    assert_eq!(list, vec!["AAPL", "MSFT"]);
}

#[test]
fn test_project_field_skips_records_without_field() {
    let value = json!([{"symbol": "AAPL"}, {"name": "no symbol"}, {"symbol": 12}]);
    let list = project_field(&value, "symbol").unwrap();
    assert_eq!(list, vec!["AAPL"]);
}

#[test]
fn test_project_field_rejects_object() {
    let value = json!({"symbol": "AAPL"});
    assert!(matches!(
        project_field(&value, "symbol"),
        Err(AppError::Decode(_))
    ));
}

#[test]
fn test_fx_symbols_list_from_value() {
    let value = json!({
        "currencies": [{"code": "USD", "name": "U.S. Dollar"}],
        "pairs": [{"fromCurrency": "USD", "toCurrency": "JPY"}]
    });
    let list = FxSymbolsList::from_value(&value).unwrap();
    assert_eq!(list.currencies, vec!["USD"]);
    assert_eq!(list.pairs, vec!["USDJPY"]);

    let (currencies, pairs): (Vec<String>, Vec<String>) = list.into();
    assert_eq!(currencies, vec!["USD"]);
    assert_eq!(pairs, vec!["USDJPY"]);
}

#[test]
fn test_fx_symbols_list_missing_pairs() {
    let value = json!({"currencies": []});
    match FxSymbolsList::from_value(&value) {
        Err(AppError::Decode(msg)) => assert!(msg.contains("pairs")),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_fx_symbols_list_display() {
    let list = FxSymbolsList {
        currencies: vec!["EUR".to_string()],
        pairs: vec!["EURUSD".to_string()],
    };
    let display = format!("{}", list);
    assert!(display.contains("EURUSD"));
}

#[test]
fn test_object_keys() {
    let value = json!({"AAPL": ["20190621"], "MSFT": ["20190719"]});
    let mut keys = object_keys(&value).unwrap();
    keys.sort();
    assert_eq!(keys, vec!["AAPL", "MSFT"]);
    assert!(object_keys(&json!([])).is_err());
}
