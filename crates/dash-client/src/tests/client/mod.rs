mod auth_scheme;
mod client;
mod error;
mod validation;
