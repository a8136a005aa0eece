use crate::AuthScheme;

#[test]
fn test_bearer_header_value() {
    assert_eq!(AuthScheme::Bearer.header_value("abc"), "Bearer abc");
}

#[test]
fn test_token_header_value() {
    assert_eq!(AuthScheme::Token.header_value("abc"), "Token abc");
}
