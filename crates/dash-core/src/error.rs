use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Decode error in field `{field}`: {message} {location}")]
    Decode {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON decode error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Decode error for a single field at caller location.
    #[track_caller]
    pub fn decode(field: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
