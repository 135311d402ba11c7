//! Route resolution.
//!
//! One pure function decides which screen is visible. The reducer and the
//! view both go through it, so there is a single authority on what an
//! unauthenticated or still-initializing session may see.

use super::session::SessionState;

/// A requested destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    /// Maps a path to a route. Unknown paths land on the protected area,
    /// which the guard then bounces to login when unauthenticated.
    pub fn parse(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            _ => Route::Dashboard,
        }
    }
}

/// The screen that should actually be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Bootstrap still in flight; show neither screen yet.
    Loading,
    Login,
    Dashboard,
}

/// Resolves a requested route against the current session.
///
/// While initializing, everything is `Loading`. Once settled, the guard
/// sends unauthenticated sessions to login and authenticated sessions away
/// from it.
pub fn resolve(route: Route, session: &SessionState) -> RouteDecision {
    if session.is_initializing() {
        return RouteDecision::Loading;
    }
    if session.is_authenticated() {
        RouteDecision::Dashboard
    } else {
        match route {
            Route::Login | Route::Dashboard => RouteDecision::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use orthowatch_core::session::{Role, User};

    use super::*;

    fn authed_session() -> SessionState {
        let mut session = SessionState::new();
        session.mark_ready();
        session.set_auth(
            User {
                id: "u-1".to_string(),
                email: "a@b.example".to_string(),
                role: Role::Admin,
                full_name: "Ada Admin".to_string(),
            },
            "jwt".to_string(),
        );
        session
    }

    fn anon_session() -> SessionState {
        let mut session = SessionState::new();
        session.mark_ready();
        session
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/login/"), Route::Login);
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/no/such/page"), Route::Dashboard);
    }

    #[test]
    fn test_initializing_always_loads() {
        let session = SessionState::new();
        assert_eq!(resolve(Route::Login, &session), RouteDecision::Loading);
        assert_eq!(resolve(Route::Dashboard, &session), RouteDecision::Loading);
    }

    #[test]
    fn test_guard_bounces_unauthenticated() {
        let session = anon_session();
        assert_eq!(resolve(Route::Dashboard, &session), RouteDecision::Login);
        assert_eq!(resolve(Route::Login, &session), RouteDecision::Login);
    }

    #[test]
    fn test_authenticated_never_sees_login() {
        let session = authed_session();
        assert_eq!(resolve(Route::Login, &session), RouteDecision::Dashboard);
        assert_eq!(resolve(Route::Dashboard, &session), RouteDecision::Dashboard);
    }
}
