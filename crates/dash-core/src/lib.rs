pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::comment::Comment;
pub use models::error_message::ErrorMessage;
pub use models::profile_update::ProfileUpdate;
pub use models::registration_request::RegistrationRequest;
pub use models::theme::Theme;
pub use models::user::User;
pub use models::user_record::UserRecord;

/// Shown in the account menu when nobody is logged in.
pub const DEFAULT_DISPLAY_NAME: &str = "Новый пользователь";
