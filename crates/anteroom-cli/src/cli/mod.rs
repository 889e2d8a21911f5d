//! CLI entry and dispatch.

use anteroom_core::config::Config;
use anteroom_tui::StartPage;
use anyhow::{Context, Result};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "anteroom")]
#[command(version = "0.1")]
#[command(about = "Terminal sign-in and sign-up forms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the sign-in page (default)
    Login,

    /// Open the sign-up page
    Signup,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli) })
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
        Some(Commands::Signup) => open_page(StartPage::Signup),
        Some(Commands::Login) | None => open_page(StartPage::Login),
    }
}

fn open_page(page: StartPage) -> Result<()> {
    let config = Config::load().context("load config")?;

    // The TUI owns the terminal, so logs go to a file. The guard must
    // outlive the UI loop or buffered lines are dropped.
    let _log_guard = commands::logging::init(&config)?;

    anteroom_tui::run(&config, page)
}
