//! Slash command palette popup.
//!
//! Activated while the prompt line starts with `/`. Entries come from the
//! command registry, so user-created commands appear as soon as the wizard
//! registers them.

use crate::tui::theme::Theme;
use quill_core::CommandRegistry;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

/// A palette entry.
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    /// The slash command including the slash, e.g. "/create".
    pub command: String,
    /// Short description from the descriptor.
    pub description: String,
}

/// State for the command palette.
pub struct CommandPalette {
    entries: Vec<PaletteEntry>,
    filtered: Vec<usize>,
    query: String,
    selected: usize,
    active: bool,
}

impl CommandPalette {
    /// Build a palette from the registry's current descriptors.
    pub fn from_registry(registry: &CommandRegistry) -> Self {
        let entries: Vec<PaletteEntry> = registry
            .all()
            .iter()
            .map(|cmd| PaletteEntry {
                command: format!("/{}", cmd.name),
                description: cmd.description.clone(),
            })
            .collect();
        let filtered = (0..entries.len()).collect();

        Self {
            entries,
            filtered,
            query: String::new(),
            selected: 0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate with the query typed after the slash.
    pub fn activate(&mut self, query: &str) {
        self.active = true;
        self.update_query(query);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.query.clear();
        self.selected = 0;
        self.filtered = (0..self.entries.len()).collect();
    }

    /// Update the query and refresh the filtered list.
    pub fn update_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.filter();
    }

    pub fn filtered_entries(&self) -> Vec<&PaletteEntry> {
        self.filtered.iter().map(|&i| &self.entries[i]).collect()
    }

    pub fn selected_entry(&self) -> Option<&PaletteEntry> {
        self.filtered.get(self.selected).map(|&i| &self.entries[i])
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if !self.filtered.is_empty() && self.selected < self.filtered.len() - 1 {
            self.selected += 1;
        }
    }

    /// Accept the selected entry, deactivating the palette. Returns the
    /// command string to place in the prompt line.
    pub fn accept(&mut self) -> Option<String> {
        let result = self.selected_entry().map(|e| e.command.clone());
        self.deactivate();
        result
    }

    fn filter(&mut self) {
        self.selected = 0;
        let query = self.query.to_lowercase();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                query.is_empty()
                    || entry.command.trim_start_matches('/').contains(&query)
                    || entry.description.to_lowercase().contains(&query)
            })
            .map(|(i, _)| i)
            .collect();
    }

    /// Render the palette popup above the input area anchor.
    pub fn render(&self, frame: &mut Frame, anchor: Rect, theme: &Theme) {
        if !self.active || self.filtered.is_empty() {
            return;
        }

        let height = (self.filtered.len() as u16 + 2).min(12);
        let width = anchor.width.saturating_sub(1).min(50);
        let popup_y = anchor.y.saturating_sub(height);
        // Clamp to the frame: rendering outside the buffer panics.
        let popup =
            Rect::new(anchor.x + 1, popup_y, width, height).intersection(frame.area());
        if popup.is_empty() {
            return;
        }

        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = self
            .filtered
            .iter()
            .enumerate()
            .map(|(i, &idx)| {
                let entry = &self.entries[idx];
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(theme.fg)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", entry.command), style),
                    Span::styled(entry.description.clone(), theme.dim_style()),
                ]))
            })
            .collect();

        let block = Block::default()
            .title(" Commands ")
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .style(Style::default().bg(theme.bg));

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(List::new(items).block(block), popup, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn palette() -> CommandPalette {
        CommandPalette::from_registry(&CommandRegistry::with_builtins())
    }

    #[test]
    fn test_inactive_by_default() {
        let palette = palette();
        assert!(!palette.is_active());
        assert!(!palette.entries.is_empty());
    }

    #[test]
    fn test_activate_with_empty_query_lists_all() {
        let mut palette = palette();
        palette.activate("");
        assert!(palette.is_active());
        assert_eq!(palette.filtered_entries().len(), palette.entries.len());
    }

    #[test]
    fn test_filter_by_name() {
        let mut palette = palette();
        palette.activate("cre");
        let filtered = palette.filtered_entries();
        assert!(filtered.iter().any(|e| e.command == "/create"));
        assert!(!filtered.iter().any(|e| e.command == "/quit"));
    }

    #[test]
    fn test_filter_by_description() {
        let mut palette = palette();
        palette.activate("wizard");
        assert!(
            palette
                .filtered_entries()
                .iter()
                .any(|e| e.command == "/create")
        );
    }

    #[test]
    fn test_accept_returns_selected_command() {
        let mut palette = palette();
        palette.activate("create");
        let accepted = palette.accept();
        assert_eq!(accepted, Some("/create".to_string()));
        assert!(!palette.is_active());
    }

    #[test]
    fn test_move_selection_clamped() {
        let mut palette = palette();
        palette.activate("");
        palette.move_up();
        assert_eq!(palette.selected, 0);
        palette.move_down();
        assert_eq!(palette.selected, 1);
        for _ in 0..20 {
            palette.move_down();
        }
        assert_eq!(palette.selected, palette.filtered.len() - 1);
    }

    #[test]
    fn test_user_commands_appear_after_rebuild() {
        let mut registry = CommandRegistry::with_builtins();
        registry.register_user_command("standup", "Write my standup notes");
        let mut palette = CommandPalette::from_registry(&registry);
        palette.activate("standup");
        assert_eq!(palette.filtered_entries().len(), 1);
    }

    #[test]
    fn test_render_on_narrow_terminal_stays_in_bounds() {
        let backend = ratatui::backend::TestBackend::new(40, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let mut palette = palette();
        palette.activate("");
        terminal
            .draw(|frame| {
                let anchor = Rect::new(0, 20, 40, 3);
                palette.render(frame, anchor, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_on_tiny_terminal_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(30, 5);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let mut palette = palette();
        palette.activate("");
        terminal
            .draw(|frame| {
                let anchor = Rect::new(0, 4, 30, 1);
                palette.render(frame, anchor, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let mut palette = palette();
        palette.activate("");
        terminal
            .draw(|frame| {
                let anchor = Rect::new(0, 20, 80, 3);
                palette.render(frame, anchor, &theme);
            })
            .unwrap();
    }
}
