//! In-memory session store.
//!
//! The reducer is the only writer. Fields are private so the pairing
//! invariant holds by construction: a session is authenticated exactly when
//! both the user and the access token are present, and the two are always
//! set or cleared together. Nothing here is persisted; a restart starts
//! over from the refresh cookie.

use orthowatch_core::session::User;

/// Startup lifecycle of the session.
///
/// Moves strictly forward: `Uninitialized` before the first bootstrap
/// attempt, `Initializing` while it is in flight, `Ready` forever after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLifecycle {
    Uninitialized,
    Initializing,
    Ready,
}

#[derive(Debug)]
pub struct SessionState {
    lifecycle: SessionLifecycle,
    user: Option<User>,
    access_token: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            lifecycle: SessionLifecycle::Uninitialized,
            user: None,
            access_token: None,
        }
    }

    pub fn lifecycle(&self) -> SessionLifecycle {
        self.lifecycle
    }

    /// True until the initial bootstrap attempt has settled.
    pub fn is_initializing(&self) -> bool {
        self.lifecycle != SessionLifecycle::Ready
    }

    pub fn begin_initializing(&mut self) {
        if self.lifecycle == SessionLifecycle::Uninitialized {
            self.lifecycle = SessionLifecycle::Initializing;
        }
    }

    /// Marks the bootstrap attempt settled, whatever its outcome.
    pub fn mark_ready(&mut self) {
        self.lifecycle = SessionLifecycle::Ready;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Stores an authenticated session. User and token land together.
    pub fn set_auth(&mut self, user: User, access_token: String) {
        self.user = Some(user);
        self.access_token = Some(access_token);
    }

    /// Drops the session. User and token clear together.
    pub fn clear_auth(&mut self) {
        self.user = None;
        self.access_token = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
