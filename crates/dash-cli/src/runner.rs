use crate::{
    CliErrorResult, comment_commands::CommentCommands, commands::Commands, error::CliError,
    profile_commands::ProfileCommands, theme_commands::ThemeCommands,
};

use dash_core::{Comment, ProfileUpdate, RegistrationRequest};
use dash_session::SessionManager;
use dash_store::{KeyValueStore, ThemePreference};

use serde_json::{Value, json};

/// Shown when a session operation fails without leaving an error message.
const NOT_LOGGED_IN: &str = "Not logged in";

/// Run one command against the session and return the JSON to print.
///
/// Session operations report failure through their `error` slot; that
/// message becomes a [`CliError::Session`].
pub async fn execute<S: KeyValueStore>(
    command: Commands,
    session: &mut SessionManager<S>,
    theme: &ThemePreference<S>,
) -> CliErrorResult<Value> {
    match command {
        Commands::Login { username, password } => {
            if !session.login(&username, &password).await {
                return Err(failure(session));
            }
            session_json(session)
        }

        Commands::Register {
            phone_number,
            username,
            password,
            email,
            company_name,
            first_name,
            last_name,
        } => {
            let registration = RegistrationRequest {
                email,
                company_name,
                first_name,
                last_name,
                ..RegistrationRequest::new(phone_number, username, password)
            };

            if !session.register(&registration).await {
                return Err(failure(session));
            }
            Ok(json!({ "registered": registration.username }))
        }

        Commands::Logout => {
            session.logout();
            session_json(session)
        }

        Commands::Whoami => session_json(session),

        Commands::Profile { action } => match action {
            ProfileCommands::Update {
                full_name,
                phone_number,
                email,
                company_name,
            } => {
                let update = ProfileUpdate {
                    full_name,
                    phone_number,
                    email,
                    company_name,
                };

                if update.is_empty() {
                    return Err(CliError::session("Nothing to update"));
                }
                if session.user().is_none() || !session.is_authenticated() {
                    return Err(CliError::session(NOT_LOGGED_IN));
                }

                session.update_user_profile(&update).await;
                if session.error().is_some() {
                    return Err(failure(session));
                }
                session_json(session)
            }
        },

        Commands::Comment { action } => match action {
            CommentCommands::Add { json } => {
                let payload: Value = serde_json::from_str(&json)?;
                let comment = Comment::from_value(payload)?;

                if !session.add_comment(&comment).await {
                    return Err(failure(session));
                }
                Ok(serde_json::to_value(session.comments().last())?)
            }
        },

        Commands::Theme { action } => {
            let current = match action {
                ThemeCommands::Show => theme.current(),
                ThemeCommands::Set { theme: next } => {
                    theme.set(next)?;
                    next
                }
                ThemeCommands::Toggle => theme.toggle()?,
            };
            Ok(json!({ "theme": current.as_str() }))
        }
    }
}

fn session_json<S: KeyValueStore>(session: &SessionManager<S>) -> CliErrorResult<Value> {
    Ok(json!({
        "state": session.state().as_str(),
        "displayName": session.display_name(),
        "user": serde_json::to_value(session.user())?,
    }))
}

#[track_caller]
fn failure<S: KeyValueStore>(session: &SessionManager<S>) -> CliError {
    CliError::session(session.error().unwrap_or(NOT_LOGGED_IN))
}
