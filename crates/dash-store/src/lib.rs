//! Durable key/value storage for the client session.
//!
//! Values are plain strings keyed by short names, the same model as browser
//! local storage. [`FileStore`] keeps one file per key; [`MemoryStore`] is
//! the in-process variant used by tests and ephemeral sessions.

pub(crate) mod error;
pub(crate) mod file_store;
pub mod keys;
pub(crate) mod memory_store;
pub(crate) mod theme_preference;


pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use theme_preference::{ThemePreference, ThemeSetter};

use std::sync::Arc;

/// Synchronous string key/value storage.
///
/// Methods take `&self`; implementations handle their own interior state so
/// one store can be shared between the session manager and the theme
/// preference.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
