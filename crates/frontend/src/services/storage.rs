//! Session token persistence in localStorage

use signup_core::{StorageError, TokenStore};
use web_sys::Storage;

/// Stores the raw token string under a single localStorage key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// Get localStorage
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
