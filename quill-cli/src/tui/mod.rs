//! TUI module for quill.
//!
//! Provides a terminal interface with a transcript pane, prompt line,
//! slash-command palette, and the create wizard dialog.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

use app::App;
use quill_core::QuillConfig;
use std::path::PathBuf;

/// Run the TUI application.
pub async fn run(config: QuillConfig, workspace: PathBuf) -> anyhow::Result<()> {
    // Setup terminal
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen
    )?;

    let backend = ratatui::backend::CrosstermBackend::new(std::io::stdout());
    let mut terminal = ratatui::Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let mut app = App::new(config, workspace);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
