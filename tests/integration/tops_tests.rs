use crate::common::{TEST_TOKEN, create_test_client};
use chrono::NaiveDate;
use iex_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_tops_all_symbols() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/stable/tops")
        .match_query(Matcher::Exact(format!("token={TEST_TOKEN}")))
        .with_status(200)
        .with_body(r#"[{"symbol":"AAPL","bidPrice":150.1}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let value = client.tops(SymbolArg::default(), None).await.expect("tops failed");

    assert_eq!(value[0]["symbol"], "AAPL");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_hist_for_date() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/stable/hist")
        .match_query(Matcher::UrlEncoded("date".into(), "20170515".into()))
        .with_status(200)
        .with_body(r#"[{"link":"https://example.com/hist.gz","date":"20170515","feed":"TOPS"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let date = NaiveDate::from_ymd_opt(2017, 5, 15).unwrap();
    let value = client.hist(Some(date.into()), None).await.expect("hist failed");

    assert_eq!(value[0]["feed"], "TOPS");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stats_daily_last() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/stable/stats/historical/daily")
        .match_query(Matcher::UrlEncoded("last".into(), "3".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client
        .stats_daily(None, Some(3), None)
        .await
        .expect("stats_daily failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/stable/tops/last")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .last("AAPL".into(), None)
        .await
        .err()
        .expect("should be Err");
    assert!(matches!(err, AppError::Decode(_)));
}
