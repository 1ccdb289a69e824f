//! `localStorage`-backed token store for the browser build.
//!
//! Outside the hydrated client there is no browser storage; every call
//! reports [`StoreError::Unavailable`] so the session gate fails closed.

use farm_common::store::{StoreError, TokenStore};
#[cfg(feature = "hydrate")]
use farm_common::store::AUTH_TOKEN_KEY;

/// Handle to `window.localStorage`.  Holds no state of its own; the storage
/// object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Backend(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(AUTH_TOKEN_KEY)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(AUTH_TOKEN_KEY)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}

#[cfg(not(feature = "hydrate"))]
impl TokenStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("not running in a browser".into()))
    }

    fn save(&self, _token: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("not running in a browser".into()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("not running in a browser".into()))
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;
    use farm_common::session::{Credentials, SessionGate, SessionStatus};

    #[test]
    fn test_server_side_store_fails_closed() {
        let mut gate = SessionGate::new(BrowserStore);
        assert_eq!(gate.initialize(), SessionStatus::Unauthenticated);
        assert!(gate.login(&Credentials::new("admin", "0000")).is_err());
        gate.logout();
        assert!(!gate.authenticated());
    }
}
