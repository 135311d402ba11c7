//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth
//! for how events modify state, including every session transition.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::dashboard;
use crate::features::login::{self, LoginAction, LoginPhase};
use crate::features::router::{self, Route, RouteDecision};
use crate::state::AppState;

/// Kicks off the silent session restore. Called once by the runtime before
/// the event loop; the lifecycle guarantees it has no effect afterwards.
pub fn bootstrap(app: &mut AppState) -> Vec<UiEffect> {
    app.session.begin_initializing();
    let task = app.task_seq.next_id();
    vec![UiEffect::StartBootstrap { task }]
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                // A newer task superseded this one; drop the stale result.
                vec![]
            }
        }
        UiEvent::BootstrapResult(result) => {
            app.session.mark_ready();
            match result {
                Ok(auth) => {
                    let token = auth.access_token.clone();
                    app.session.set_auth(auth.user, auth.access_token);
                    vec![UiEffect::SyncAccessToken { token: Some(token) }]
                }
                Err(err) => {
                    // No valid refresh cookie is the normal cold-start case.
                    debug!(target: "orthowatch::session", kind = %err.kind, "bootstrap did not restore a session");
                    vec![]
                }
            }
        }
        UiEvent::LoginResult(result) => {
            app.login.phase = LoginPhase::Editing;
            match result {
                Ok(auth) => {
                    let token = auth.access_token.clone();
                    app.session.set_auth(auth.user, auth.access_token);
                    app.login.reset();
                    app.route = Route::Dashboard;
                    vec![UiEffect::SyncAccessToken { token: Some(token) }]
                }
                Err(err) => {
                    // Field values survive; only the banner changes.
                    app.login.form_error = Some(err.message);
                    vec![]
                }
            }
        }
        UiEvent::LogoutResult(result) => {
            if let Err(err) = result {
                // Server-side revocation failed; the local session goes anyway.
                warn!(target: "orthowatch::session", error = %err, "logout request failed");
            }
            expire_session(app)
        }
    }
}

/// Tears down the local session and lands on the login screen.
///
/// The single place a session ends: logout (whatever the server said) and
/// any rejected credential funnel through here.
fn expire_session(app: &mut AppState) -> Vec<UiEffect> {
    app.session.clear_auth();
    app.route = Route::Login;
    vec![UiEffect::SyncAccessToken { token: None }]
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if router::resolve(app.route, &app.session) == RouteDecision::Login {
                login::handle_paste(&mut app.login, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from any screen.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    match router::resolve(app.route, &app.session) {
        RouteDecision::Loading => vec![],
        RouteDecision::Login => match login::handle_key(&mut app.login, key) {
            LoginAction::None => vec![],
            LoginAction::Submit(credentials) => {
                app.login.phase = LoginPhase::Submitting;
                let task = app.task_seq.next_id();
                vec![UiEffect::SubmitLogin { task, credentials }]
            }
            LoginAction::CancelSubmit => {
                let token = app.tasks.login.cancel.clone();
                // Clearing the task state gates out the late completion.
                app.tasks.login.clear();
                app.login.phase = LoginPhase::Editing;
                vec![UiEffect::CancelTask { token }]
            }
        },
        RouteDecision::Dashboard => match dashboard::handle_key(key) {
            dashboard::DashboardAction::None => vec![],
            dashboard::DashboardAction::Quit => vec![UiEffect::Quit],
            dashboard::DashboardAction::Logout => {
                if app.tasks.logout.is_running() {
                    return vec![];
                }
                let task = app.task_seq.next_id();
                vec![UiEffect::SubmitLogout { task }]
            }
        },
    }
}
