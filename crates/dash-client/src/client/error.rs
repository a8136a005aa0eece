use crate::first_field_message;

use dash_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Service-reported reason for a rejected login.
pub(crate) const INVALID_CREDENTIALS_REASON: &str = "Invalid credentials";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: status {status}: {body} {location}")]
    Api {
        status: u16,
        body: Value,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response decode error: {source} {location}")]
    Decode {
        location: ErrorLocation,
        #[source]
        source: CoreError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, body: Value) -> Self {
        ClientError::Api {
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The `error` string of an API error body, if the service sent one.
    pub fn api_reason(&self) -> Option<&str> {
        match self {
            ClientError::Api { body, .. } => body.get("error").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Whether the service rejected a login because of bad credentials.
    pub fn is_invalid_credentials(&self) -> bool {
        self.api_reason() == Some(INVALID_CREDENTIALS_REASON)
    }

    /// First field-level validation message of a 4xx API error body.
    pub fn validation_message(&self) -> Option<String> {
        match self {
            ClientError::Api { status, body, .. } if (400..500).contains(status) => {
                first_field_message(body)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        ClientError::Decode {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
