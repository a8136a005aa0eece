use dash_core::User;
use dash_store::{KeyValueStore, keys};

use std::fmt::Display;

use log::{debug, error, warn};

/// Token and user recovered from the durable store at startup.
#[derive(Debug, Default)]
pub(crate) struct Hydrated {
    pub(crate) token: Option<String>,
    pub(crate) user: Option<User>,
}

/// Read the previous session back from the store.
///
/// An empty token counts as absent. A stored user that cannot be read or
/// no longer parses is removed so the next start does not trip over it again.
pub(crate) fn hydrate<S: KeyValueStore>(store: &S) -> Hydrated {
    let token = match store.get(keys::TOKEN) {
        Ok(Some(token)) if !token.is_empty() => Some(token),
        Ok(_) => None,
        Err(e) => {
            error!("Failed to read stored token: {e}");
            None
        }
    };

    let user = match store.get(keys::USER) {
        Ok(Some(raw)) => match User::from_stored(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                discard_user(store, &e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            discard_user(store, &e);
            None
        }
    };

    debug!(
        "Hydrated session: token={}, user={}",
        token.is_some(),
        user.as_ref().map_or("none", |u| u.username.as_str())
    );

    Hydrated { token, user }
}

fn discard_user<S: KeyValueStore>(store: &S, reason: &dyn Display) {
    warn!("Discarding unreadable stored user: {reason}");
    if let Err(e) = store.remove(keys::USER) {
        error!("Failed to remove unreadable stored user: {e}");
    }
}
