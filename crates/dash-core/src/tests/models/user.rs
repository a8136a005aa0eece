use crate::User;

fn sample_user() -> User {
    User {
        id: 42,
        username: "alice".into(),
        full_name: Some("Alice Liddell".into()),
        phone_number: Some("+15550001".into()),
        email: Some("alice@example.com".into()),
        company_name: Some("Wonderland LLC".into()),
        available_funds: Some(1500.5),
        monthly_fee: Some(99.0),
        debit_amount: None,
    }
}

#[test]
fn given_user_when_to_stored_then_uses_camel_case_keys() {
    let json = sample_user().to_stored().unwrap();

    assert!(json.contains("\"fullName\""));
    assert!(json.contains("\"phoneNumber\""));
    assert!(json.contains("\"companyName\""));
    assert!(json.contains("\"availableFunds\""));
    assert!(json.contains("\"monthlyFee\""));
    assert!(json.contains("\"debitAmount\""));
    assert!(!json.contains("full_name"));
}

#[test]
fn given_stored_user_when_from_stored_then_preserves_all_fields() {
    let original = sample_user();

    let restored = User::from_stored(&original.to_stored().unwrap()).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn given_garbage_when_from_stored_then_error() {
    assert!(User::from_stored("{not json").is_err());
    assert!(User::from_stored("null").is_err());
}
