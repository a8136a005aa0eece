/// `Authorization` header scheme. The service expects `Bearer` on the
/// profile endpoint and `Token` on the comment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Bearer,
    Token,
}

impl AuthScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
            Self::Token => "Token",
        }
    }

    /// Full header value for `token`.
    pub fn header_value(&self, token: &str) -> String {
        format!("{} {}", self.as_str(), token)
    }
}
