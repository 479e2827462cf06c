//! Header bar: application name, workspace, and command count.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data shown in the header bar.
#[derive(Debug, Clone, Default)]
pub struct HeaderData {
    /// Display name of the workspace directory.
    pub workspace: String,
    /// Number of registered slash commands.
    pub commands: usize,
}

/// Render the single-line header.
pub fn render_header(frame: &mut Frame, area: Rect, data: &HeaderData, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " quill ",
            theme.header_style().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", data.workspace), theme.header_style()),
        Span::styled(
            format!(" {} commands ", data.commands),
            theme.header_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme.header_style()), area);
}
