pub(crate) mod auth_scheme;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod login_response;
pub(crate) mod validation;

pub use auth_scheme::AuthScheme;
pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use login_response::LoginResponse;
