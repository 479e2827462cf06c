//! Bottom status bar with keybinding hints for the current mode.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Input focus of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Prompt line focused.
    Normal,
    /// A modal dialog is mounted and receives all keys.
    Dialog,
}

impl InputMode {
    fn hints(&self) -> &'static str {
        match self {
            InputMode::Normal => " Enter send · / commands · Ctrl+D quit ",
            InputMode::Dialog => " Enter confirm · Esc cancel ",
        }
    }
}

/// Render the single-line status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, mode: InputMode, theme: &Theme) {
    let line = Line::from(Span::styled(mode.hints(), theme.status_bar_style()));
    frame.render_widget(Paragraph::new(line).style(theme.status_bar_style()), area);
}
