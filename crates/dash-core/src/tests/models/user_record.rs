use crate::{CoreError, UserRecord};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, pat};
use serde_json::json;

#[test]
fn given_full_record_when_decode_then_maps_snake_case_fields() {
    let raw = json!({
        "id": 1,
        "username": "alice",
        "full_name": "Alice Liddell",
        "phone_number": "+15550001",
        "email": "alice@example.com",
        "company_name": "Wonderland LLC",
        "available_funds": 1500.5,
        "monthly_fee": "99.00",
        "debit_amount": 0
    });

    let result = UserRecord::decode(raw);

    assert_that!(result, ok(anything()));
    let user = result.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "alice");
    assert_eq!(user.full_name.as_deref(), Some("Alice Liddell"));
    assert_eq!(user.phone_number.as_deref(), Some("+15550001"));
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user.company_name.as_deref(), Some("Wonderland LLC"));
    assert_eq!(user.available_funds, Some(1500.5));
    assert_eq!(user.monthly_fee, Some(99.0));
    assert_eq!(user.debit_amount, Some(0.0));
}

#[test]
fn given_minimal_record_when_decode_then_optional_fields_none() {
    let user = UserRecord::decode(json!({"id": 2, "username": "bob", "email": null})).unwrap();

    assert!(user.full_name.is_none());
    assert!(user.email.is_none());
    assert!(user.available_funds.is_none());
}

#[test]
fn given_missing_username_when_decode_then_json_error() {
    let result = UserRecord::decode(json!({"id": 3}));

    assert_that!(result, err(pat!(CoreError::Json { .. })));
    assert!(result.unwrap_err().to_string().contains("username"));
}

#[test]
fn given_blank_username_when_decode_then_decode_error_names_field() {
    let result = UserRecord::decode(json!({"id": 3, "username": "  "}));

    match result {
        Err(CoreError::Decode { field, .. }) => assert_that!(field, eq("username")),
        other => panic!("Expected Decode error, got {other:?}"),
    }
}

#[test]
fn given_non_numeric_amount_when_decode_then_decode_error_names_field() {
    let result = UserRecord::decode(json!({
        "id": 4,
        "username": "carol",
        "monthly_fee": "lots"
    }));

    match result {
        Err(CoreError::Decode { field, .. }) => assert_that!(field, eq("monthly_fee")),
        other => panic!("Expected Decode error, got {other:?}"),
    }
}

#[test]
fn given_amount_of_wrong_type_when_decode_then_decode_error() {
    let result = UserRecord::decode(json!({
        "id": 5,
        "username": "dave",
        "debit_amount": {"value": 1}
    }));

    assert_that!(result, err(anything()));
}
