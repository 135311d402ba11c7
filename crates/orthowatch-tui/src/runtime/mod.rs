//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s directly to `inbox_tx`; the runtime
//! drains `inbox_rx` each frame. Spawned work follows a uniform
//! `TaskStarted`/`TaskCompleted` lifecycle so the reducer can gate stale
//! results by task id.

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use orthowatch_core::api::AuthApi;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::router::Route;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll cadence while a request is in flight (drives the spinner).
pub const ACTIVE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Poll cadence when idle.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state, and the API handle. Terminal state is
/// restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: AuthApi,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    pub fn new(api: AuthApi, initial_route: Route) -> Result<Self> {
        // Set up the panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(initial_route);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            api,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        // Kick off the silent session restore before the first frame.
        let effects = update::bootstrap(&mut self.state);
        self.execute_effects(effects);

        let result = self.event_loop();

        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers a render; terminal events batch to the
                // next tick, capping the frame rate at the tick cadence.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the inbox and the terminal, then emits Tick
    /// when the cadence is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast cadence only while something is in flight.
        let tick_interval = if self.state.tasks.is_any_running() {
            ACTIVE_POLL_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due, unless events are already
        // waiting to be processed.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform `TaskStarted`/`TaskCompleted`
    /// lifecycle. Handlers are pure async functions returning `UiEvent`.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SyncAccessToken { token } => {
                self.api.client().set_access_token(token);
            }
            UiEffect::StartBootstrap { task } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::Bootstrap, task, false, move |_| {
                    handlers::bootstrap(api)
                });
            }
            UiEffect::SubmitLogin { task, credentials } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::Login, task, true, move |cancel| {
                    handlers::login(api, credentials, cancel)
                });
            }
            UiEffect::SubmitLogout { task } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::Logout, task, false, move |_| handlers::logout(api));
            }
            UiEffect::CancelTask { token } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
