//! `task-admin` — terminal dashboard for task records served by a REST
//! backend. Lists tasks with server-side sorting; Enter shows one task's
//! full record.

mod config;
mod dashboard;
mod provider;
mod task;
#[cfg(test)]
mod testutil;
mod ui;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use dashboard::Dashboard;
use provider::DataProvider;

/// Task dashboard CLI.
#[derive(Parser, Debug)]
#[command(name = "task-admin", about = "Terminal dashboard for a task REST backend")]
struct Cli {
    /// Backend base URL (overrides TASK_ADMIN_API_URL).
    #[arg(long = "api-url")]
    api_url: Option<String>,

    /// Resource collection to browse.
    #[arg(long, default_value = "tasks")]
    resource: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let api_url = config::resolve_api_url(cli.api_url.as_deref());
    let provider = DataProvider::new(&api_url);
    let mut board = Dashboard::new(cli.resource);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut board, &provider);

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
