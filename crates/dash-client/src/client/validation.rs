use serde_json::Value;

/// Registration fields in the order their messages are reported.
const FIELD_ORDER: &[&str] = &[
    "username",
    "phone_number",
    "password",
    "email",
    "company_name",
    "first_name",
    "last_name",
    "non_field_errors",
];

/// Picks the first field-level validation message out of an error body
/// shaped like `{"username": ["already taken"], "email": "invalid"}`.
///
/// Only registration form fields and `non_field_errors` are read, in form
/// order. Other keys (`detail`, `error`) are not validation messages.
pub fn first_field_message(body: &Value) -> Option<String> {
    let fields = body.as_object()?;

    FIELD_ORDER
        .iter()
        .filter_map(|name| fields.get(*name))
        .find_map(message_of)
}

fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(message_of),
        _ => None,
    }
}
