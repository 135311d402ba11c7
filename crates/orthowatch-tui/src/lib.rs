//! Full-screen TUI for the OrthoWatch client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod render_utils;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use orthowatch_core::api::{ApiClient, AuthApi};
use orthowatch_core::config::Config;
pub use runtime::TuiRuntime;

pub use crate::features::router::Route;

/// Runs the interactive client.
pub async fn run(config: &Config, initial_route: Route) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("OrthoWatch requires a terminal.");
    }

    let client = ApiClient::new(&config.base_url, config.request_timeout())?;
    let api = AuthApi::new(client);

    let mut runtime = TuiRuntime::new(api, initial_route)?;
    runtime.run()?;

    // Terminal is restored at this point.
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
