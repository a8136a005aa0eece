pub mod comment;
pub mod error_message;
pub mod profile_update;
pub mod registration_request;
pub mod theme;
pub mod user;
pub mod user_record;
