//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, the tick clock, task
//! lifecycle notifications, and auth operation results arriving via the
//! inbox channel.

use orthowatch_core::api::ApiError;
use orthowatch_core::session::AuthResult;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives the spinner and caps the render rate.
    Tick,
    /// Raw terminal event (keys, paste, resize).
    Terminal(crossterm::event::Event),
    /// An async task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; carries its result event.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
    /// Silent session restore settled.
    BootstrapResult(Result<AuthResult, ApiError>),
    /// Login request settled.
    LoginResult(Result<AuthResult, ApiError>),
    /// Logout request settled.
    LogoutResult(Result<(), ApiError>),
}
