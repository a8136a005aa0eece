use crate::SessionState;
use crate::hydration::hydrate;

use dash_client::Client;
use dash_config::CommentRetention;
use dash_core::{
    Comment, DEFAULT_DISPLAY_NAME, ErrorMessage, ProfileUpdate, RegistrationRequest, Theme, User,
};
use dash_store::{KeyValueStore, ThemeSetter, keys};

use log::{debug, error, info};

/// Owns the logged-in user, the auth token, the posted comments and the
/// error string the UI displays.
///
/// Operations write memory first, then the durable store. Store failures
/// are logged and never undo the in-memory change; the next start
/// reconciles through hydration.
pub struct SessionManager<S> {
    client: Client,
    store: S,
    theme: Box<dyn ThemeSetter + Send + Sync>,
    comment_retention: CommentRetention,

    user: Option<User>,
    token: Option<String>,
    error: Option<String>,
    comments: Vec<Comment>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Create a manager, restoring token and user from `store`.
    pub fn new(client: Client, store: S, theme: impl ThemeSetter + Send + Sync + 'static) -> Self {
        let hydrated = hydrate(&store);

        Self {
            client,
            store,
            theme: Box::new(theme),
            comment_retention: CommentRetention::default(),
            user: hydrated.user,
            token: hydrated.token,
            error: None,
            comments: Vec::new(),
        }
    }

    /// What [`SessionManager::logout`] does with the comment list.
    pub fn with_comment_retention(mut self, comment_retention: CommentRetention) -> Self {
        self.comment_retention = comment_retention;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Comments confirmed by the service, oldest first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Name for the account menu header.
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map_or(DEFAULT_DISPLAY_NAME, |user| user.username.as_str())
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Exchange credentials for a session. Durable writes happen only on success.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        let result = self.client.login(username, password).await;

        match result {
            Ok(response) => {
                self.token = Some(response.token);
                self.user = Some(response.user);
                self.error = None;

                self.persist_token();
                self.persist_user();

                info!("Logged in as '{username}'");
                true
            }
            Err(e) => {
                error!("Login failed: {e}");
                let message = if e.is_invalid_credentials() {
                    ErrorMessage::InvalidCredentials
                } else {
                    ErrorMessage::LoginFailed
                };
                self.error = Some(message.into());
                false
            }
        }
    }

    /// Create an account. Does not log in and persists nothing.
    pub async fn register(&mut self, registration: &RegistrationRequest) -> bool {
        let result = self.client.register(registration).await;

        match result {
            Ok(()) => {
                self.error = None;
                info!("Registered '{}'", registration.username);
                true
            }
            Err(e) => {
                error!("Registration failed: {e}");
                self.error = Some(
                    e.validation_message()
                        .unwrap_or_else(|| ErrorMessage::RegistrationFailed.into()),
                );
                false
            }
        }
    }

    /// Tear down the session. Makes no network call and cannot fail.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.error = None;

        for key in [keys::SHOP_STORAGE, keys::TOKEN, keys::USER] {
            if let Err(e) = self.store.remove(key) {
                error!("Failed to remove '{key}' on logout: {e}");
            }
        }

        self.theme.set_theme(Theme::Light);

        if self.comment_retention == CommentRetention::Clear {
            self.comments.clear();
        }

        info!("Logged out");
    }

    /// Apply a partial profile change. Silently does nothing without an
    /// active session.
    pub async fn update_user_profile(&mut self, update: &ProfileUpdate) {
        let (Some(token), Some(_)) = (self.token.as_deref(), self.user.as_ref()) else {
            debug!("Profile update skipped: no active session");
            return;
        };

        let result = self.client.update_profile(token, update).await;

        match result {
            Ok(user) => {
                self.user = Some(user);
                self.error = None;
                self.persist_user();
                info!("Profile updated");
            }
            Err(e) => {
                error!("Profile update failed: {e}");
                self.error = Some(ErrorMessage::ProfileUpdateFailed.into());
            }
        }
    }

    /// Post a comment and append the service's copy to the list.
    pub async fn add_comment(&mut self, comment: &Comment) -> bool {
        let Some(token) = self.token.as_deref() else {
            error!("Cannot add a comment: token is not available");
            return false;
        };

        let result = self.client.create_comment(token, comment).await;

        match result {
            Ok(created) => {
                self.comments.push(created);
                self.error = None;
                true
            }
            Err(e) => {
                error!("Adding comment failed: {e}");
                self.error = Some(ErrorMessage::CommentFailed.into());
                false
            }
        }
    }

    // =========================================================================
    // Durable store
    // =========================================================================

    fn persist_token(&self) {
        if let Some(token) = &self.token
            && let Err(e) = self.store.set(keys::TOKEN, token)
        {
            error!("Failed to persist token: {e}");
        }
    }

    fn persist_user(&self) {
        let Some(user) = &self.user else {
            return;
        };

        let stored = match user.to_stored() {
            Ok(stored) => stored,
            Err(e) => {
                error!("Failed to serialize user for storage: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(keys::USER, &stored) {
            error!("Failed to persist user: {e}");
        }
    }
}
