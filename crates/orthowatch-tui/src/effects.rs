//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks itself; it decides, the
//! runtime does.

use orthowatch_core::session::Credentials;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Push the session's access token into the HTTP transport.
    /// `None` removes the Authorization header from future requests.
    SyncAccessToken { token: Option<String> },

    /// Spawn the silent refresh that restores a session at startup.
    StartBootstrap { task: TaskId },

    /// Spawn a login request with validated credentials.
    SubmitLogin {
        task: TaskId,
        credentials: Credentials,
    },

    /// Spawn a logout request.
    SubmitLogout { task: TaskId },

    /// Cancel an in-flight task.
    CancelTask { token: Option<CancellationToken> },
}
