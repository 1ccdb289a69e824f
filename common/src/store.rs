//! Persisted authentication-token storage.
//!
//! The session gate only needs three primitive operations on a single
//! string slot.  The browser build backs them with `localStorage`; tests and
//! native builds use [`MemoryStore`].

use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Key under which the token is persisted.
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage backend exists in this environment (e.g. server-side render).
    #[error("token storage unavailable: {0}")]
    Unavailable(String),

    #[error("token storage error: {0}")]
    Backend(String),

    #[error("token storage lock poisoned")]
    Poisoned,
}

/// A single persisted token slot.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, token: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process token slot.  Clones share the same slot, so a second gate
/// built over a clone sees what the first one persisted (a "reload").
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if a previous visit logged in.
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let guard = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let mut guard = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        (**self).save(token)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.save("shared").unwrap();
        assert_eq!(b.load().unwrap().as_deref(), Some("shared"));
        b.clear().unwrap();
        assert_eq!(a.load().unwrap(), None);
    }

    #[test]
    fn test_clear_on_empty_store_is_ok() {
        let store = MemoryStore::new();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
