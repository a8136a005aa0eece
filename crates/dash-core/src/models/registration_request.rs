use serde::Serialize;

/// Body of `POST /registration/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationRequest {
    pub phone_number: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl RegistrationRequest {
    /// Request with only the mandatory fields set.
    pub fn new(
        phone_number: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            username: username.into(),
            password: password.into(),
            email: None,
            company_name: None,
            first_name: None,
            last_name: None,
        }
    }
}
