//! Application state.
//!
//! All fields are mutated only by the reducer in `update.rs`; the runtime
//! and the renderer read them.

use crate::common::{TaskSeq, Tasks};
use crate::features::login::LoginFormState;
use crate::features::router::Route;
use crate::features::session::SessionState;

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Requested destination; the route guard decides what is shown.
    pub route: Route,
    /// In-memory session store.
    pub session: SessionState,
    /// Login form state.
    pub login: LoginFormState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(initial_route: Route) -> Self {
        Self {
            should_quit: false,
            route: initial_route,
            session: SessionState::new(),
            login: LoginFormState::new(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }
}
