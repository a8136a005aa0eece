//! HTTP client for the dashboard auth service.
//!
//! Thin wrapper over `reqwest`: one method per endpoint, JSON in and out,
//! non-2xx responses surfaced as [`ClientError::Api`] with the raw body so
//! callers can inspect service-reported reasons.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{AuthScheme, Client, ClientError, ClientResult, LoginResponse};
pub use client::validation::first_field_message;
