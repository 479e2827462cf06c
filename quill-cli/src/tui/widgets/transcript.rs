//! Transcript pane: the scrolling record of prompts and messages.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Kind of a transcript entry, controlling its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A prompt sent by the user (typed or expanded from a command).
    User,
    /// Informational output from the shell itself.
    Info,
    Error,
}

/// One entry in the transcript. Multi-line text is split at render time.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Transcript state.
#[derive(Debug, Default)]
pub struct TranscriptState {
    entries: Vec<TranscriptEntry>,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(EntryKind::User, text);
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Info, text);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(EntryKind::Error, text);
    }

    fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            kind,
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lines<'a>(&'a self, theme: &Theme) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for entry in &self.entries {
            let style = match entry.kind {
                EntryKind::User => theme.user_style(),
                EntryKind::Info => theme.info_style(),
                EntryKind::Error => theme.error_style(),
            };
            let prefix = match entry.kind {
                EntryKind::User => "> ",
                EntryKind::Info | EntryKind::Error => "",
            };
            for (i, text_line) in entry.text.lines().enumerate() {
                let head = if i == 0 { prefix } else { "" };
                lines.push(Line::from(vec![
                    Span::styled(head, style),
                    Span::styled(text_line, style),
                ]));
            }
            if entry.text.is_empty() {
                lines.push(Line::from(Span::styled(prefix, style)));
            }
        }
        lines
    }

    /// Render the transcript, pinned to the most recent lines.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::NONE)
            .style(theme.base_style());
        let inner_height = area.height as usize;

        let lines = self.lines(theme);
        let skip = lines.len().saturating_sub(inner_height);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_clear() {
        let mut transcript = TranscriptState::new();
        assert!(transcript.is_empty());

        transcript.push_user("hello");
        transcript.push_info("world");
        assert_eq!(transcript.entries().len(), 2);
        assert_eq!(transcript.entries()[0].kind, EntryKind::User);
        assert_eq!(transcript.entries()[1].kind, EntryKind::Info);

        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_multiline_entry_splits_into_lines() {
        let mut transcript = TranscriptState::new();
        transcript.push_info("line one\nline two\nline three");
        let theme = Theme::dark();
        assert_eq!(transcript.lines(&theme).len(), 3);
    }

    #[test]
    fn test_empty_entry_still_produces_a_line() {
        let mut transcript = TranscriptState::new();
        transcript.push_user("");
        let theme = Theme::dark();
        assert_eq!(transcript.lines(&theme).len(), 1);
    }

    #[test]
    fn test_render_does_not_panic_when_overflowing() {
        let backend = ratatui::backend::TestBackend::new(40, 5);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let mut transcript = TranscriptState::new();
        for i in 0..50 {
            transcript.push_info(format!("entry {i}"));
        }
        terminal
            .draw(|frame| {
                let area = frame.area();
                transcript.render(frame, area, &theme);
            })
            .unwrap();
    }
}
