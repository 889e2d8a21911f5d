//! Full-screen TUI implementation for Anteroom.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anteroom_core::config::Config;
use anyhow::Result;
pub use runtime::TuiRuntime;
pub use state::StartPage;

/// Runs the interactive form loop for the requested page.
pub fn run(config: &Config, page: StartPage) -> Result<()> {
    // The forms require a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("Anteroom requires a terminal.");
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    match page {
        StartPage::Login => writeln!(err, "Anteroom · Sign in")?,
        StartPage::Signup => writeln!(err, "Anteroom · Create account")?,
    }
    err.flush()?;

    let mut runtime = TuiRuntime::new(config, page)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
