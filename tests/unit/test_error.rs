use iex_client::error::AppError;

#[test]
fn test_app_error_display_type_argument() {
    let error = AppError::TypeArgument("expected a single symbol".to_string());
    assert_eq!(
        error.to_string(),
        "type argument error: expected a single symbol"
    );
}

#[test]
fn test_app_error_display_invalid_date() {
    let error = AppError::InvalidDate("2019-13-45".to_string());
    assert_eq!(error.to_string(), "invalid date: 2019-13-45");
}

#[test]
fn test_app_error_display_request() {
    let error = AppError::Request {
        status: 403,
        body: "Forbidden".to_string(),
    };
    assert_eq!(error.to_string(), "request failed with status 403: Forbidden");
    assert_eq!(error.status(), Some(403));
}

#[test]
fn test_app_error_display_decode() {
    let error = AppError::Decode("expected value".to_string());
    assert_eq!(error.to_string(), "decode error: expected value");
    assert_eq!(error.status(), None);
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("last must be between 1 and 90".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: last must be between 1 and 90"
    );
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}
