use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/api/");
    assert_eq!(client.base_url, "http://localhost:8000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000/api");
    assert_eq!(client.base_url, "http://localhost:8000/api");
}

#[test]
fn test_base_url_surrounding_whitespace_trimmed() {
    let client = Client::new("  http://localhost:8000/api/ \n");
    assert_eq!(client.base_url, "http://localhost:8000/api");
}
