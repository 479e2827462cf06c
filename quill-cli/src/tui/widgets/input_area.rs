//! Single-line input widget wrapping tui-textarea.
//!
//! Used both for the main prompt line and for the text steps of the create
//! wizard dialog. The wizard steps accept empty submissions (no validation
//! happens there); the main prompt does not.

use crate::tui::theme::Theme;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

/// Result of processing an input event.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// User pressed Enter to submit the input.
    Submit(String),
    /// Input was consumed by the textarea.
    Consumed,
}

/// Line editor state.
pub struct InputWidget {
    textarea: TextArea<'static>,
    allow_empty_submit: bool,
}

impl InputWidget {
    pub fn new(theme: &Theme) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_style(Style::default().fg(theme.fg).bg(theme.bg));
        textarea.set_block(
            Block::default()
                .title(" > ")
                .borders(Borders::TOP)
                .border_style(theme.border_style()),
        );

        Self {
            textarea,
            allow_empty_submit: false,
        }
    }

    /// Borderless variant for embedding inside a dialog, accepting empty
    /// submissions.
    pub fn bare(theme: &Theme) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_style(Style::default().fg(theme.fg).bg(theme.bg));

        Self {
            textarea,
            allow_empty_submit: true,
        }
    }

    /// Get the current input text.
    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    /// Check if input is empty.
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|l| l.is_empty())
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Replace the input text.
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(text);
    }

    /// Process a crossterm event. Returns the resulting action.
    pub fn handle_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }) => {
                let text = self.text();
                if text.trim().is_empty() && !self.allow_empty_submit {
                    return InputAction::Consumed;
                }
                self.clear();
                InputAction::Submit(text)
            }
            _ => {
                self.textarea.input(event.clone());
                InputAction::Consumed
            }
        }
    }

    /// Render the input line.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(input: &mut InputWidget, text: &str) {
        for c in text.chars() {
            input.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_text() {
        let theme = Theme::dark();
        let mut input = InputWidget::new(&theme);
        type_str(&mut input, "hello");
        assert_eq!(input.text(), "hello");
        assert!(!input.is_empty());
    }

    #[test]
    fn test_enter_submits_and_clears() {
        let theme = Theme::dark();
        let mut input = InputWidget::new(&theme);
        type_str(&mut input, "/create");
        let action = input.handle_event(&key(KeyCode::Enter));
        assert_eq!(action, InputAction::Submit("/create".to_string()));
        assert!(input.is_empty());
    }

    #[test]
    fn test_empty_enter_consumed_by_default() {
        let theme = Theme::dark();
        let mut input = InputWidget::new(&theme);
        let action = input.handle_event(&key(KeyCode::Enter));
        assert_eq!(action, InputAction::Consumed);
    }

    #[test]
    fn test_bare_accepts_empty_submit() {
        let theme = Theme::dark();
        let mut input = InputWidget::bare(&theme);
        let action = input.handle_event(&key(KeyCode::Enter));
        assert_eq!(action, InputAction::Submit(String::new()));
    }

    #[test]
    fn test_backspace() {
        let theme = Theme::dark();
        let mut input = InputWidget::new(&theme);
        type_str(&mut input, "ab");
        input.handle_event(&key(KeyCode::Backspace));
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_set_text_replaces() {
        let theme = Theme::dark();
        let mut input = InputWidget::new(&theme);
        type_str(&mut input, "old");
        input.set_text("/help");
        assert_eq!(input.text(), "/help");
    }

    #[test]
    fn test_render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let mut input = InputWidget::new(&theme);
        type_str(&mut input, "hello");
        terminal
            .draw(|frame| {
                let area = frame.area();
                input.render(frame, area);
            })
            .unwrap();
    }
}
