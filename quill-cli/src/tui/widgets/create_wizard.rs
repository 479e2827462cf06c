//! Modal dialog hosting the create wizard.
//!
//! Wraps the pure `CreateWizard` state machine with terminal concerns: a
//! selection cursor, a text input for the name/prompt steps, per-step
//! rendering, and the escape-key cancel observed at every non-terminal
//! step before any per-step key handling.

use crate::tui::theme::Theme;
use crate::tui::widgets::input_area::{InputAction, InputWidget};
use crossterm::event::{Event, KeyCode, KeyEvent};
use quill_core::wizard::{
    COMING_SOON, CreateWizard, OnComplete, TOTAL_STEPS, WIZARD_OPTIONS, WizardStep,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

/// Dialog state for the create wizard.
pub struct CreateWizardDialog {
    wizard: CreateWizard,
    cursor: usize,
    input: InputWidget,
}

impl CreateWizardDialog {
    /// Mount a fresh wizard. `on_complete` fires exactly once with the
    /// collected result or `None` on cancellation.
    pub fn new(theme: &Theme, on_complete: OnComplete) -> Self {
        Self {
            wizard: CreateWizard::new(on_complete),
            cursor: 0,
            input: InputWidget::bare(theme),
        }
    }

    /// Whether the wizard has finished and the dialog can be unmounted.
    pub fn is_done(&self) -> bool {
        self.wizard.is_done()
    }

    /// Route a key event to the wizard. The dialog is modal: the caller
    /// sends every key here while it is mounted.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.wizard.is_done() {
            return;
        }

        // Shared interrupt, checked before per-step handling.
        if key.code == KeyCode::Esc {
            self.wizard.cancel();
            return;
        }

        match self.wizard.step() {
            WizardStep::Selection => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.cursor = self.cursor.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.cursor = (self.cursor + 1).min(WIZARD_OPTIONS.len() - 1);
                }
                KeyCode::Enter => {
                    self.wizard.select(WIZARD_OPTIONS[self.cursor]);
                }
                _ => {}
            },
            WizardStep::CommandName | WizardStep::CommandPrompt => {
                if let InputAction::Submit(text) = self.input.handle_event(&Event::Key(key)) {
                    self.wizard.submit(&text);
                }
            }
            WizardStep::Done => {}
        }
    }

    /// Render the dialog centered over `area`. Renders nothing once done.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let step = self.wizard.step();
        let Some(position) = step.position() else {
            return;
        };

        let popup = centered_rect(area, 70, 10);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Create New... ")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.dialog_border_style())
            .style(Style::default().bg(theme.bg));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [indicator_area, prompt_area, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(2),
        ])
        .areas(inner);

        let indicator = Line::from(Span::styled(
            format!("Step {position} of {TOTAL_STEPS}"),
            theme.dim_style(),
        ));
        frame.render_widget(Paragraph::new(indicator), indicator_area);

        let prompt = Paragraph::new(Span::styled(step.prompt(), theme.accent_style()))
            .wrap(Wrap { trim: true });
        frame.render_widget(prompt, prompt_area);

        match step {
            WizardStep::Selection => self.render_options(frame, body_area, theme),
            WizardStep::CommandName | WizardStep::CommandPrompt => {
                self.input.render(frame, body_area);
            }
            WizardStep::Done => {}
        }
    }

    fn render_options(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = WIZARD_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let selected = i == self.cursor;
                let mut style = if selected {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(theme.fg)
                };
                if !option.enabled {
                    style = Style::default()
                        .fg(theme.dim)
                        .add_modifier(Modifier::CROSSED_OUT);
                    if selected {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                }

                let mut spans = vec![Span::styled(format!(" {} ", option.label), style)];
                if !option.enabled {
                    spans.push(Span::styled(format!("{COMING_SOON} "), theme.dim_style()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(List::new(items), area, &mut state);
    }
}

/// A rectangle centered in `area` with the given width percentage and
/// fixed height, clamped to the available space.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    // Multiply in u32: u16 overflows past ~936 columns.
    let width = ((u32::from(area.width) * u32::from(percent_x) / 100) as u16).min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
