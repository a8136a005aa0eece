use crate::ClientError;

use serde_json::json;

#[test]
fn given_invalid_credentials_body_when_is_invalid_credentials_then_true() {
    let err = ClientError::api_error(400, json!({"error": "Invalid credentials"}));

    assert!(err.is_invalid_credentials());
    assert_eq!(err.api_reason(), Some("Invalid credentials"));
}

#[test]
fn given_other_reason_when_is_invalid_credentials_then_false() {
    let err = ClientError::api_error(403, json!({"error": "Account locked"}));

    assert!(!err.is_invalid_credentials());
    assert_eq!(err.api_reason(), Some("Account locked"));
}

#[test]
fn given_non_api_error_when_api_reason_then_none() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from(json_err);

    assert!(err.api_reason().is_none());
    assert!(err.validation_message().is_none());
    assert!(!err.is_invalid_credentials());
}

#[test]
fn given_field_errors_when_validation_message_then_first_message() {
    let err = ClientError::api_error(400, json!({"username": ["already taken"]}));

    assert_eq!(err.validation_message().as_deref(), Some("already taken"));
}

#[test]
fn given_api_error_when_display_then_includes_status() {
    let err = ClientError::api_error(500, json!("Internal Server Error"));

    assert!(err.to_string().contains("500"));
}

#[test]
fn given_server_error_with_field_body_when_validation_message_then_none() {
    let err = ClientError::api_error(500, json!({"username": ["already taken"]}));

    assert!(err.validation_message().is_none());
}
