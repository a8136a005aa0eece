use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] dash_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] dash_store::StoreError),

    #[error("Invalid input: {0}")]
    Input(#[from] dash_core::CoreError),

    #[error("{message}")]
    Session {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Error serializing output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// A session operation reported failure; `message` is what the user sees.
    #[track_caller]
    pub fn session<S: Into<String>>(message: S) -> Self {
        CliError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
