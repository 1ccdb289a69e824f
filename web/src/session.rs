//! Reactive wrapper around the one [`SessionGate`] the app owns.
//!
//! The gate lives in a [`StoredValue`]; its status and user are mirrored into
//! signals after every operation so the guard and the sidebar re-render.

use leptos::prelude::*;

use farm_common::session::{Credentials, LoginError, SessionGate, SessionStatus, User};
use farm_common::store::StoreError;

use crate::store::BrowserStore;

#[derive(Clone, Copy)]
pub struct SessionContext {
    gate: StoredValue<SessionGate<BrowserStore>>,
    status: RwSignal<SessionStatus>,
    user: RwSignal<Option<User>>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            gate: StoredValue::new(SessionGate::new(BrowserStore)),
            status: RwSignal::new(SessionStatus::Unknown),
            user: RwSignal::new(None),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn loading(&self) -> bool {
        self.status.get().is_loading()
    }

    pub fn authenticated(&self) -> bool {
        self.status.get().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Resolve the startup state from `localStorage`.
    pub fn initialize(&self) -> SessionStatus {
        self.with_gate(|gate| gate.initialize())
            .unwrap_or(SessionStatus::Unauthenticated)
    }

    pub fn login(&self, credentials: &Credentials) -> Result<User, LoginError> {
        self.with_gate(|gate| gate.login(credentials))
            .unwrap_or_else(|| {
                Err(LoginError::Storage(StoreError::Unavailable("session disposed".into())))
            })
    }

    pub fn logout(&self) {
        self.with_gate(|gate| gate.logout());
    }

    fn with_gate<U>(&self, f: impl FnOnce(&mut SessionGate<BrowserStore>) -> U) -> Option<U> {
        let out = self.gate.try_update_value(f);
        if let Some((status, user)) = self
            .gate
            .try_with_value(|gate| (gate.status(), gate.user().cloned()))
        {
            self.status.set(status);
            self.user.set(user);
        }
        out
    }
}

/// Create the session context for the whole app and schedule the startup
/// check.  Effects only run in the browser, so server-rendered HTML always
/// shows the waiting state and hydration starts from it.
pub fn provide_session() -> SessionContext {
    let session = SessionContext::new();
    provide_context(session);

    Effect::new(move |_| {
        session.initialize();
    });

    session
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
