//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use orthowatch_core::config::{self, Config};
use orthowatch_tui::Route;

#[derive(Parser)]
#[command(name = "orthowatch")]
#[command(version = "0.1")]
#[command(about = "OrthoWatch terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial destination inside the app (e.g. "/login")
    #[arg(long, default_value = "/")]
    path: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                println!("{}", config::paths::config_path().display());
                Ok(())
            }
            ConfigCommands::Init => {
                let config_path = config::paths::config_path();
                Config::init(&config_path)
                    .with_context(|| format!("init config at {}", config_path.display()))?;
                println!("Created config at {}", config_path.display());
                Ok(())
            }
        },
        // Default: launch the TUI.
        None => {
            let config = Config::load().context("load config")?;
            // Logs go to files; the TUI owns the terminal. The guard flushes
            // on exit.
            let _log_guard = orthowatch_core::logging::init()?;
            tracing::info!(base_url = %config.base_url, "starting OrthoWatch client");

            orthowatch_tui::run(&config, Route::parse(&cli.path)).await
        }
    }
}
