//! Route table and the guard decision for protected screens.

use serde::{Deserialize, Serialize};

use crate::session::SessionStatus;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// What a protected route should do for the current session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup check still pending: show a neutral waiting state, do not navigate.
    Wait,
    /// Navigate (replacing history) to the given path.
    Redirect(&'static str),
    /// Render the protected content.
    Allow,
}

pub fn decide(status: SessionStatus) -> GuardDecision {
    match status {
        SessionStatus::Unknown => GuardDecision::Wait,
        SessionStatus::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
        SessionStatus::Authenticated => GuardDecision::Allow,
    }
}

/// Every screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Dashboard,
    Monitor,
    Analyze,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Login, Route::Dashboard, Route::Monitor, Route::Analyze];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Dashboard => HOME_PATH,
            Route::Monitor => "/monitor",
            Route::Analyze => "/analyze",
        }
    }

    /// Router segment for [`Route::path`], without the leading slash.
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }

    /// Menu label for protected screens.
    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Monitor => "Monitor",
            Route::Analyze => "Analyze",
        }
    }

    /// Every screen behind the guard, in menu order.
    pub fn protected() -> impl Iterator<Item = Route> {
        Route::ALL.into_iter().filter(|r| r.is_protected())
    }

    /// Exact-match lookup; a trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalised = if trimmed.is_empty() { HOME_PATH } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalised)
    }

    /// The login screen is never guarded, otherwise a redirect would loop.
    pub fn is_protected(self) -> bool {
        self != Route::Login
    }
}

/// Full navigation outcome for an arbitrary path: unknown paths go home,
/// the login screen always renders, everything else goes through [`decide`].
pub fn resolve(path: &str, status: SessionStatus) -> GuardDecision {
    match Route::from_path(path) {
        None => GuardDecision::Redirect(HOME_PATH),
        Some(route) if !route.is_protected() => GuardDecision::Allow,
        Some(_) => decide(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_per_status() {
        assert_eq!(decide(SessionStatus::Unknown), GuardDecision::Wait);
        assert_eq!(
            decide(SessionStatus::Unauthenticated),
            GuardDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(decide(SessionStatus::Authenticated), GuardDecision::Allow);
    }

    #[test]
    fn test_route_lookup() {
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path(""), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/monitor/"), Some(Route::Monitor));
        assert_eq!(Route::from_path("/analyze"), Some(Route::Analyze));
        assert_eq!(Route::from_path("/login"), Some(Route::Login));
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn test_login_never_redirects() {
        for status in [
            SessionStatus::Unknown,
            SessionStatus::Unauthenticated,
            SessionStatus::Authenticated,
        ] {
            assert_eq!(resolve("/login", status), GuardDecision::Allow);
        }
    }

    #[test]
    fn test_no_redirect_loop() {
        // Following a redirect from any path must land on an unguarded route
        // or stop, for every status.
        for status in [SessionStatus::Unauthenticated, SessionStatus::Authenticated] {
            for start in ["/", "/monitor", "/analyze", "/nowhere", "/login"] {
                let mut path = start;
                let mut hops = 0;
                while let GuardDecision::Redirect(next) = resolve(path, status) {
                    path = next;
                    hops += 1;
                    assert!(hops <= 2, "redirect loop from {start} as {status:?}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_path_goes_home() {
        assert_eq!(
            resolve("/cameras/7", SessionStatus::Authenticated),
            GuardDecision::Redirect(HOME_PATH)
        );
    }

    #[test]
    fn test_protected_routes() {
        let protected: Vec<_> = Route::protected().collect();
        assert_eq!(protected, vec![Route::Dashboard, Route::Monitor, Route::Analyze]);
    }

    #[test]
    fn test_segments_round_trip_through_lookup() {
        assert_eq!(Route::Dashboard.segment(), "");
        assert_eq!(Route::Login.segment(), "login");
        for route in Route::ALL {
            assert_eq!(Route::from_path(&format!("/{}", route.segment())), Some(route));
        }
    }

    #[test]
    fn test_protected_route_follows_session() {
        for route in Route::protected() {
            assert_eq!(resolve(route.path(), SessionStatus::Unknown), GuardDecision::Wait);
            assert_eq!(
                resolve(route.path(), SessionStatus::Unauthenticated),
                GuardDecision::Redirect(LOGIN_PATH)
            );
            assert_eq!(
                resolve(route.path(), SessionStatus::Authenticated),
                GuardDecision::Allow
            );
        }
    }
}
