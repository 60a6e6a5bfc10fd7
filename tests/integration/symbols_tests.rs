use crate::common::{TEST_TOKEN, create_test_client, create_test_options};
use assert_json_diff::assert_json_eq;
use iex_client::application::services::symbols;
use iex_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_symbols_list_against_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/stable/ref-data/symbols")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), TEST_TOKEN.into()),
            Matcher::UrlEncoded("filter".into(), "symbol".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"symbol":"AAPL"},{"symbol":"MSFT"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let list = client.symbols_list().await.expect("symbols_list failed");

    assert_eq!(list, vec!["AAPL", "MSFT"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_symbols_returns_json_untouched() {
    let mut server = Server::new_async().await;
    let body = json!([
        {"symbol": "A", "name": "Agilent Technologies Inc.", "isEnabled": true},
        {"symbol": "AA", "name": "Alcoa Corp.", "isEnabled": true}
    ]);
    let mock = server
        .mock("GET", "/stable/ref-data/iex/symbols")
        .match_query(Matcher::UrlEncoded("token".into(), TEST_TOKEN.into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let value = symbols::iex_symbols(
        &HttpClient::new(&RestApiConfig::default()).unwrap(),
        &create_test_options(&server.url()),
    )
    .await
    .expect("iex_symbols failed");

    assert_json_eq!(value, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fx_symbols_list_against_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/stable/ref-data/fx/symbols")
        .match_query(Matcher::UrlEncoded("token".into(), TEST_TOKEN.into()))
        .with_status(200)
        .with_body(
            r#"{"currencies":[{"code":"USD","name":"U.S. Dollar"},{"code":"JPY","name":"Japanese Yen"}],
                "pairs":[{"fromCurrency":"USD","toCurrency":"JPY"},{"fromCurrency":"JPY","toCurrency":"USD"}]}"#,
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let list = client.fx_symbols_list().await.expect("fx_symbols_list failed");

    assert_eq!(list.currencies, vec!["USD", "JPY"]);
    assert_eq!(list.pairs, vec!["USDJPY", "JPYUSD"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_international_symbols_by_exchange() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/stable/ref-data/exchange/tsx/symbols")
        .match_query(Matcher::UrlEncoded("token".into(), TEST_TOKEN.into()))
        .with_status(200)
        .with_body(r#"[{"symbol":"RY-CT"},{"symbol":"TD-CT"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let list = client
        .international_symbols_list(None, Some("TSX"))
        .await
        .expect("international_symbols_list failed");

    assert_eq!(list, vec!["RY-CT", "TD-CT"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_forbidden_is_request_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/stable/ref-data/symbols")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("The API key provided is not valid.")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client.symbols(None).await.err().expect("should be Err");

    match err {
        AppError::Request { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("not valid"));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_of_wrong_shape_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/stable/ref-data/otc/symbols")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"symbol":"AAPL"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client.otc_symbols_list().await.err().expect("should be Err");
    assert!(matches!(err, AppError::Decode(_)));
}
