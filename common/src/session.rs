//! Session gate: owns the authenticated/unauthenticated state and the
//! login/logout lifecycle over a persisted token.
//!
//! The gate is a plain value owned by whoever drives the UI.  It starts in
//! [`SessionStatus::Unknown`] and resolves on the first call to
//! [`SessionGate::initialize`].
//!
//! The accepted password is a fixed demo value; there is no credential
//! verification behind it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::store::{StoreError, TokenStore};

/// The single password the demo login accepts.
pub const ACCEPTED_PASSWORD: &str = "0000";

/// Value written to the store on a successful login.  Only its presence matters.
pub const SESSION_TOKEN: &str = "dummy-token";

// ─── Types ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub role: String,
    pub name: String,
}

impl User {
    /// The fixed administrator identity restored from a token.
    pub fn administrator() -> Self {
        Self {
            id: 1,
            username: "admin".into(),
            role: "admin".into(),
            name: "Administrator".into(),
        }
    }
}

/// Login form input.  Never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Startup check not yet performed.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl SessionStatus {
    pub fn is_loading(self) -> bool {
        self == SessionStatus::Unknown
    }

    pub fn is_authenticated(self) -> bool {
        self == SessionStatus::Authenticated
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid password.")]
    InvalidCredentials,

    #[error("An error occurred during login.")]
    Storage(#[source] StoreError),
}

// ─── Gate ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct SessionGate<S> {
    store: S,
    status: SessionStatus,
    user: Option<User>,
}

impl<S: TokenStore> SessionGate<S> {
    /// A gate in the `Unknown` state.  Nothing is read until [`initialize`](Self::initialize).
    pub fn new(store: S) -> Self {
        Self {
            store,
            status: SessionStatus::Unknown,
            user: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the startup state from the persisted token.
    ///
    /// Only acts while `Unknown`; a resolved gate returns its current status.
    /// A storage failure or an empty token resolves to `Unauthenticated`.
    pub fn initialize(&mut self) -> SessionStatus {
        if self.status != SessionStatus::Unknown {
            debug!("Session already resolved as {:?}", self.status);
            return self.status;
        }

        match self.store.load() {
            Ok(Some(token)) if !token.is_empty() => {
                self.status = SessionStatus::Authenticated;
                self.user = Some(User::administrator());
                info!("Session restored from persisted token");
            }
            Ok(_) => {
                self.status = SessionStatus::Unauthenticated;
                self.user = None;
                debug!("No persisted token; session unauthenticated");
            }
            Err(e) => {
                self.status = SessionStatus::Unauthenticated;
                self.user = None;
                warn!("Cannot read persisted token, treating session as unauthenticated: {e}");
            }
        }
        self.status
    }

    /// Check `credentials` and, on success, persist a token.
    ///
    /// On any failure nothing is written and the state is left as it was.
    pub fn login(&mut self, credentials: &Credentials) -> Result<User, LoginError> {
        if credentials.password != ACCEPTED_PASSWORD {
            info!("Login rejected for user {:?}", credentials.username);
            return Err(LoginError::InvalidCredentials);
        }

        if let Err(e) = self.store.save(SESSION_TOKEN) {
            warn!("Cannot persist session token: {e}");
            return Err(LoginError::Storage(e));
        }

        let user = User::administrator();
        self.status = SessionStatus::Authenticated;
        self.user = Some(user.clone());
        info!("User {:?} logged in", user.username);
        Ok(user)
    }

    /// Clear the persisted token and reset to `Unauthenticated`.  Idempotent.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Cannot clear persisted token: {e}");
        }
        if self.status == SessionStatus::Authenticated {
            info!("User logged out");
        }
        self.status = SessionStatus::Unauthenticated;
        self.user = None;
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{decide, GuardDecision};
    use crate::store::MemoryStore;

    /// Store whose operations can be made to fail independently.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_load: bool,
        fail_save: bool,
        fail_clear: bool,
    }

    impl TokenStore for FlakyStore {
        fn load(&self) -> Result<Option<String>, StoreError> {
            if self.fail_load {
                return Err(StoreError::Backend("read failed".into()));
            }
            self.inner.load()
        }

        fn save(&self, token: &str) -> Result<(), StoreError> {
            if self.fail_save {
                return Err(StoreError::Backend("quota exceeded".into()));
            }
            self.inner.save(token)
        }

        fn clear(&self) -> Result<(), StoreError> {
            if self.fail_clear {
                return Err(StoreError::Backend("clear failed".into()));
            }
            self.inner.clear()
        }
    }

    fn resolved(store: MemoryStore) -> SessionGate<MemoryStore> {
        let mut gate = SessionGate::new(store);
        gate.initialize();
        gate
    }

    #[test]
    fn test_fresh_load_without_token() {
        let mut gate = SessionGate::new(MemoryStore::new());
        assert!(gate.loading());
        assert_eq!(decide(gate.status()), GuardDecision::Wait);

        assert_eq!(gate.initialize(), SessionStatus::Unauthenticated);
        assert!(!gate.loading());
        assert!(!gate.authenticated());
        assert!(gate.user().is_none());
        assert_eq!(decide(gate.status()), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn test_initialize_restores_administrator_from_token() {
        let gate = resolved(MemoryStore::with_token("anything"));
        assert!(gate.authenticated());
        assert_eq!(gate.user(), Some(&User::administrator()));
        assert_eq!(decide(gate.status()), GuardDecision::Allow);
    }

    #[test]
    fn test_empty_token_is_unauthenticated() {
        let gate = resolved(MemoryStore::with_token(""));
        assert_eq!(gate.status(), SessionStatus::Unauthenticated);
        assert!(gate.user().is_none());
        assert_eq!(decide(gate.status()), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn test_initialize_fails_closed_on_read_error() {
        let store = FlakyStore {
            fail_load: true,
            ..Default::default()
        };
        store.inner.save(SESSION_TOKEN).unwrap();

        let mut gate = SessionGate::new(store);
        assert_eq!(gate.initialize(), SessionStatus::Unauthenticated);
        assert!(!gate.loading());
    }

    #[test]
    fn test_initialize_is_one_shot() {
        let store = MemoryStore::new();
        let mut gate = resolved(store.clone());
        gate.login(&Credentials::new("admin", "0000")).unwrap();

        // Token disappearing behind the gate's back does not log it out.
        store.clear().unwrap();
        assert_eq!(gate.initialize(), SessionStatus::Authenticated);
    }

    #[test]
    fn test_login_with_accepted_password() {
        let store = MemoryStore::new();
        let mut gate = resolved(store.clone());

        let user = gate.login(&Credentials::new("admin", "0000")).unwrap();
        assert_eq!(user.name, "Administrator");
        assert!(gate.authenticated());
        assert_eq!(store.load().unwrap().as_deref(), Some(SESSION_TOKEN));
        assert_eq!(decide(gate.status()), GuardDecision::Allow);
    }

    #[test]
    fn test_login_accepts_any_username() {
        let mut gate = resolved(MemoryStore::new());
        assert!(gate.login(&Credentials::new("", "0000")).is_ok());
    }

    #[test]
    fn test_login_with_wrong_password() {
        let store = MemoryStore::new();
        let mut gate = resolved(store.clone());

        let err = gate.login(&Credentials::new("admin", "wrong")).unwrap_err();
        assert_eq!(err, LoginError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid password.");
        assert!(!gate.authenticated());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_rejected_passwords_leave_state_unchanged() {
        let candidates = ["", "000", "00000", " 0000", "0000 ", "O000", "password", "1234"];

        let mut anonymous = resolved(MemoryStore::new());
        let store = MemoryStore::new();
        let mut signed_in = resolved(store.clone());
        signed_in.login(&Credentials::new("admin", "0000")).unwrap();

        for pw in candidates {
            let creds = Credentials::new("admin", pw);
            assert!(anonymous.login(&creds).is_err(), "{pw:?} accepted");
            assert_eq!(anonymous.status(), SessionStatus::Unauthenticated);

            assert!(signed_in.login(&creds).is_err(), "{pw:?} accepted");
            assert_eq!(signed_in.status(), SessionStatus::Authenticated);
        }
        assert_eq!(store.load().unwrap().as_deref(), Some(SESSION_TOKEN));
    }

    #[test]
    fn test_login_storage_failure_is_reported() {
        let store = FlakyStore {
            fail_save: true,
            ..Default::default()
        };
        let mut gate = SessionGate::new(store);
        gate.initialize();

        let err = gate.login(&Credentials::new("admin", "0000")).unwrap_err();
        assert!(matches!(err, LoginError::Storage(_)));
        assert_eq!(err.to_string(), "An error occurred during login.");
        assert!(!gate.authenticated());
    }

    #[test]
    fn test_logout_then_reload() {
        let store = MemoryStore::new();
        let mut gate = resolved(store.clone());
        gate.login(&Credentials::new("admin", "0000")).unwrap();

        gate.logout();
        assert!(!gate.authenticated());
        assert!(gate.user().is_none());
        assert_eq!(store.load().unwrap(), None);

        let reloaded = resolved(store);
        assert!(!reloaded.authenticated());
    }

    #[test]
    fn test_login_survives_reload() {
        let store = MemoryStore::new();
        let mut gate = resolved(store.clone());
        gate.login(&Credentials::new("admin", "0000")).unwrap();

        let reloaded = resolved(store);
        assert!(reloaded.authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = MemoryStore::new();
        let mut once = resolved(store.clone());
        once.login(&Credentials::new("admin", "0000")).unwrap();
        once.logout();
        let after_once = (once.status(), once.user().cloned(), store.load().unwrap());

        once.logout();
        let after_twice = (once.status(), once.user().cloned(), store.load().unwrap());
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn test_logout_resets_state_even_if_clear_fails() {
        let store = FlakyStore {
            fail_clear: true,
            ..Default::default()
        };
        let mut gate = SessionGate::new(store);
        gate.initialize();
        gate.login(&Credentials::new("admin", "0000")).unwrap();

        gate.logout();
        assert_eq!(gate.status(), SessionStatus::Unauthenticated);
        assert!(gate.user().is_none());
    }

    #[test]
    fn test_logout_from_unknown_resolves() {
        let mut gate = SessionGate::new(MemoryStore::with_token(SESSION_TOKEN));
        gate.logout();
        assert_eq!(gate.status(), SessionStatus::Unauthenticated);
        assert_eq!(gate.store().load().unwrap(), None);
    }

    #[test]
    fn test_gate_over_borrowed_store() {
        let store = MemoryStore::new();
        let mut gate = SessionGate::new(&store);
        gate.initialize();
        gate.login(&Credentials::new("admin", "0000")).unwrap();
        assert!(store.load().unwrap().is_some());
    }
}
