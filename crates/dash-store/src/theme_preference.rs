use crate::{KeyValueStore, StoreResult, keys};

use dash_core::Theme;

use log::{error, warn};

/// Receives theme changes made on the user's behalf (logout resets it).
pub trait ThemeSetter {
    fn set_theme(&self, theme: Theme);
}

/// Theme preference persisted under [`keys::THEME`].
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme; missing or unreadable values fall back to the default.
    pub fn current(&self) -> Theme {
        match self.store.get(keys::THEME) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored theme '{raw}': {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Failed to read theme preference: {e}");
                Theme::default()
            }
        }
    }

    pub fn set(&self, theme: Theme) -> StoreResult<()> {
        self.store.set(keys::THEME, theme.as_str())
    }

    /// Switches between dark and light, returning the new theme.
    pub fn toggle(&self) -> StoreResult<Theme> {
        let next = self.current().toggled();
        self.set(next)?;
        Ok(next)
    }
}

impl<S: KeyValueStore> ThemeSetter for ThemePreference<S> {
    fn set_theme(&self, theme: Theme) {
        if let Err(e) = self.set(theme) {
            error!("Failed to save theme preference '{theme}': {e}");
        }
    }
}
