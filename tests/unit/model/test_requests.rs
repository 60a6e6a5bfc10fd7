use iex_client::model::requests::{RequestDescriptor, RequestOptions, SymbolArg};

#[test]
fn test_request_options_defaults() {
    let options = RequestOptions::new("tok");
    assert_eq!(options.token, "tok");
    assert_eq!(options.version, "stable");
    assert_eq!(options.filter, None);
    assert_eq!(options.url_prefix(), "https://cloud.iexapis.com/stable");
}

#[test]
fn test_request_options_empty_version_falls_back() {
    let options = RequestOptions::new("tok").with_version("");
    assert_eq!(options.version, "stable");
}

#[test]
fn test_request_options_sandbox_prefix() {
    let options = RequestOptions::new("Tsk_tok").with_version("sandbox");
    assert_eq!(options.url_prefix(), "https://sandbox.iexapis.com/stable");
}

#[test]
fn test_request_options_custom_version_and_host() {
    let options = RequestOptions::new("tok")
        .with_version("beta")
        .with_base_url("http://127.0.0.1:1234/");
    assert_eq!(options.url_prefix(), "http://127.0.0.1:1234/beta");
}

#[test]
fn test_request_options_filter_opt_ignores_empty() {
    let options = RequestOptions::new("tok").with_filter_opt(Some(""));
    assert_eq!(options.filter, None);
    let options = options.with_filter_opt(Some("symbol"));
    assert_eq!(options.filter.as_deref(), Some("symbol"));
}

#[test]
fn test_descriptor_url_without_filter() {
    let options = RequestOptions::new("tok");
    let request = RequestDescriptor::new("ref-data/symbols", &options);
    assert_eq!(
        request.url(),
        "https://cloud.iexapis.com/stable/ref-data/symbols?token=tok"
    );
}

#[test]
fn test_descriptor_url_with_filter() {
    let options = RequestOptions::new("tok").with_filter("symbol,name");
    let request = RequestDescriptor::new("ref-data/symbols", &options);
    assert_eq!(
        request.url(),
        "https://cloud.iexapis.com/stable/ref-data/symbols?token=tok&filter=symbol,name"
    );
}

#[test]
fn test_descriptor_url_path_with_query() {
    let options = RequestOptions::new("tok").with_filter("bids");
    let request = RequestDescriptor::new("deep/book?symbols=AAPL", &options);
    assert_eq!(
        request.url(),
        "https://cloud.iexapis.com/stable/deep/book?symbols=AAPL&token=tok&filter=bids"
    );
}

#[test]
fn test_descriptor_strips_leading_slash() {
    let options = RequestOptions::new("tok");
    let request = RequestDescriptor::new("/deep", &options);
    assert_eq!(request.url(), "https://cloud.iexapis.com/stable/deep?token=tok");
}

#[test]
fn test_descriptor_without_filter() {
    let options = RequestOptions::new("tok").with_filter("symbol");
    let request = RequestDescriptor::new("tops", &options).without_filter();
    assert_eq!(request.filter, None);
    assert!(!request.url().contains("filter"));
}

#[test]
fn test_descriptor_display_redacts_token() {
    let options = RequestOptions::new("secret_token");
    let request = RequestDescriptor::new("deep", &options);
    let shown = request.to_string();
    assert!(!shown.contains("secret_token"));
    assert!(shown.ends_with("deep?token=***"));
}

#[test]
fn test_symbol_arg_conversions() {
    assert_eq!(SymbolArg::from("AAPL"), SymbolArg::One("AAPL".to_string()));
    assert_eq!(
        SymbolArg::from(vec!["AAPL", "MSFT"]),
        SymbolArg::Many(vec!["AAPL".to_string(), "MSFT".to_string()])
    );
    assert_eq!(SymbolArg::from(None::<&str>), SymbolArg::default());
    assert!(SymbolArg::default().is_empty());
    assert!(!SymbolArg::from(["AAPL"]).is_empty());
    assert!(SymbolArg::from(" ").is_empty());
    assert!(SymbolArg::Many(vec![]).is_empty());
}

#[test]
fn test_symbol_arg_deserializes_untagged() {
    let one: SymbolArg = serde_json::from_str(r#""AAPL""#).unwrap();
    let many: SymbolArg = serde_json::from_str(r#"["AAPL","MSFT"]"#).unwrap();
    assert_eq!(one, SymbolArg::from("AAPL"));
    assert_eq!(many, SymbolArg::from(["AAPL", "MSFT"]));
}
