use mpesa_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_authentication_failure() {
    let error = AppError::AuthenticationFailure {
        status: StatusCode::UNAUTHORIZED,
        body: "invalid credentials".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("401"));
    assert!(message.contains("invalid credentials"));
}

#[test]
fn test_app_error_display_invalid_request() {
    let error = AppError::InvalidRequest("an HTTP method is required".to_string());
    assert_eq!(error.to_string(), "invalid request: an HTTP method is required");
}

#[test]
fn test_app_error_display_invalid_argument_lists_allowed_values() {
    let error = AppError::invalid_argument("trx_code", "XX", ["BG", "WA", "PB"]);
    assert_eq!(
        error.to_string(),
        "invalid argument trx_code: \"XX\" is not one of [BG, WA, PB]"
    );
}

#[test]
fn test_app_error_display_encryption() {
    let error = AppError::Encryption("bad certificate".to_string());
    assert_eq!(error.to_string(), "encryption error: bad certificate");
}

#[test]
fn test_app_error_missing_config_names_variable() {
    let error = AppError::missing_config("MPESA_RESULT_URL");
    assert!(matches!(error, AppError::Config(_)));
    assert_eq!(
        error.to_string(),
        "missing configuration: MPESA_RESULT_URL is not set"
    );
}

// reqwest::Error cannot be easily constructed in tests
// This conversion is tested through integration tests

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::Io(_)));
    assert!(app_error.to_string().contains("missing"));
}
