use crate::first_field_message;

use serde_json::json;

#[test]
fn given_username_list_when_first_field_message_then_first_entry() {
    let body = json!({"username": ["already taken", "too short"]});

    assert_eq!(first_field_message(&body).as_deref(), Some("already taken"));
}

#[test]
fn given_several_fields_when_first_field_message_then_form_order_wins() {
    let body = json!({
        "email": ["Enter a valid email address."],
        "phone_number": ["Invalid phone number"],
        "username": ["already taken"]
    });

    assert_eq!(first_field_message(&body).as_deref(), Some("already taken"));
}

#[test]
fn given_only_unknown_keys_when_first_field_message_then_none() {
    assert_eq!(first_field_message(&json!({"detail": "Registration is closed"})), None);
    assert_eq!(first_field_message(&json!({"error": "Service unavailable"})), None);
}

#[test]
fn given_non_field_errors_when_first_field_message_then_used() {
    let body = json!({"detail": "ignored", "non_field_errors": ["Passwords do not match"]});

    assert_eq!(
        first_field_message(&body).as_deref(),
        Some("Passwords do not match")
    );
}

#[test]
fn given_plain_string_field_when_first_field_message_then_used() {
    let body = json!({"password": "too common"});

    assert_eq!(first_field_message(&body).as_deref(), Some("too common"));
}

#[test]
fn given_empty_messages_when_first_field_message_then_skipped() {
    let body = json!({"username": [], "email": [""], "company_name": ["required"]});

    assert_eq!(first_field_message(&body).as_deref(), Some("required"));
}

#[test]
fn given_no_messages_when_first_field_message_then_none() {
    assert_eq!(first_field_message(&json!({})), None);
    assert_eq!(first_field_message(&json!({"count": 3})), None);
    assert_eq!(first_field_message(&json!("Bad Request")), None);
    assert_eq!(first_field_message(&json!(null)), None);
}
