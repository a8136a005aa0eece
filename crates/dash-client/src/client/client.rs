use crate::{AuthScheme, ClientError, ClientResult, LoginResponse};

use dash_core::{Comment, ProfileUpdate, RegistrationRequest, User, UserRecord};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, header::AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the auth service REST API
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL every endpoint is appended to (e.g., "http://127.0.0.1:8000/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    fn authorized(
        &self,
        method: Method,
        path: &str,
        scheme: AuthScheme,
        token: &str,
    ) -> reqwest::RequestBuilder {
        self.request(method, path)
            .header(AUTHORIZATION, scheme.header_value(token))
    }

    /// Execute request and handle errors.
    ///
    /// Non-2xx responses become [`ClientError::Api`] carrying the body (JSON
    /// if it parses, the raw text otherwise). An empty 2xx body is `Null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Exchange credentials for a session token and user
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { username, password };
        let req = self.request(Method::POST, "/login/").json(&body);
        let response = self.execute(req).await?;
        LoginResponse::decode(response)
    }

    /// Register a new account. Does not log in.
    pub async fn register(&self, registration: &RegistrationRequest) -> ClientResult<()> {
        let req = self
            .request(Method::POST, "/registration/")
            .json(registration);
        self.execute(req).await?;
        Ok(())
    }

    /// Apply a partial profile change; returns the service's view of the user
    pub async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> ClientResult<User> {
        let req = self
            .authorized(Method::PUT, "/profile/", AuthScheme::Bearer, token)
            .json(update);
        let response = self.execute(req).await?;
        Ok(UserRecord::decode(response)?)
    }

    /// Post a comment; returns the comment as stored by the service
    pub async fn create_comment(&self, token: &str, comment: &Comment) -> ClientResult<Comment> {
        let req = self
            .authorized(Method::POST, "/create_comment/", AuthScheme::Token, token)
            .json(comment);
        let response = self.execute(req).await?;
        Ok(Comment::from_value(response)?)
    }
}
