mod comment;
mod theme;
mod user;
mod user_record;
