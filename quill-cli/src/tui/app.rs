//! Main TUI application: state, event loop, and top-level draw function.

use crate::tui::event::{Action, EventHandler, map_global_key};
use crate::tui::theme::Theme;
use crate::tui::widgets::command_palette::CommandPalette;
use crate::tui::widgets::create_wizard::CreateWizardDialog;
use crate::tui::widgets::header::{HeaderData, render_header};
use crate::tui::widgets::input_area::{InputAction, InputWidget};
use crate::tui::widgets::status_bar::{InputMode, render_status_bar};
use crate::tui::widgets::transcript::TranscriptState;
use crossterm::event::{Event, KeyCode, KeyEvent};
use quill_core::commands::{CommandContext, CommandOutcome, CommandRegistry, Dialog};
use quill_core::config::QuillConfig;
use quill_core::wizard::WizardResult;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Events posted back to the application from callbacks running inside the
/// same event-handling turn.
#[derive(Debug)]
pub enum AppEvent {
    /// The create wizard finished: `Some(result)` or `None` on cancel.
    WizardDone(Option<WizardResult>),
}

/// The main TUI application state.
pub struct App {
    transcript: TranscriptState,
    input: InputWidget,
    palette: CommandPalette,
    registry: CommandRegistry,
    ctx: CommandContext,
    theme: Theme,
    dialog: Option<CreateWizardDialog>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    should_quit: bool,
}

impl App {
    /// Create a new TUI application.
    pub fn new(config: QuillConfig, workspace: PathBuf) -> Self {
        let theme = Theme::from_name(&config.ui.theme);
        let registry = CommandRegistry::with_builtins();
        let palette = CommandPalette::from_registry(&registry);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut transcript = TranscriptState::new();
        transcript.push_info("Welcome to quill. Type /help for commands, /create to make your own.");

        Self {
            transcript,
            input: InputWidget::new(&theme),
            palette,
            registry,
            ctx: CommandContext { workspace },
            theme,
            dialog: None,
            events_tx,
            events_rx,
            should_quit: false,
        }
    }

    /// Whether the application has been asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_handler = EventHandler::new();
        let tick_rate = std::time::Duration::from_millis(100);

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                event = event_handler.next() => {
                    if let Some(event) = event {
                        self.handle_terminal_event(event);
                        self.drain_app_events();
                    }
                }
                _ = tokio::time::sleep(tick_rate) => {}
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the full UI.
    pub fn draw(&self, frame: &mut Frame) {
        let [header_area, transcript_area, input_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = HeaderData {
            workspace: self
                .ctx
                .workspace
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.ctx.workspace.display().to_string()),
            commands: self.registry.len(),
        };
        render_header(frame, header_area, &header, &self.theme);

        self.transcript.render(frame, transcript_area, &self.theme);
        self.input.render(frame, input_area);
        render_status_bar(frame, status_area, self.mode(), &self.theme);

        // Popups and dialogs render last, on top.
        if self.palette.is_active() {
            self.palette.render(frame, input_area, &self.theme);
        }
        if let Some(dialog) = &self.dialog {
            let area = frame.area();
            dialog.render(frame, area, &self.theme);
        }
    }

    fn mode(&self) -> InputMode {
        if self.dialog.is_some() {
            InputMode::Dialog
        } else {
            InputMode::Normal
        }
    }

    /// Handle a terminal event (keyboard, mouse, resize).
    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Resize(_, _) => {} // ratatui redraws on next frame
            _ => {}
        }
    }

    /// Handle a key event.
    fn handle_key_event(&mut self, key: KeyEvent) {
        // A mounted dialog is modal: every key goes to it first.
        if let Some(dialog) = &mut self.dialog {
            dialog.handle_key(key);
            if dialog.is_done() {
                self.dialog = None;
            }
            return;
        }

        if let Some(action) = map_global_key(&key) {
            match action {
                Action::Quit | Action::Interrupt => self.should_quit = true,
            }
            return;
        }

        if key.code == KeyCode::Esc {
            if self.palette.is_active() {
                self.palette.deactivate();
                self.input.clear();
            }
            return;
        }

        // Palette navigation while it is open.
        if self.palette.is_active() {
            match key.code {
                KeyCode::Up => {
                    self.palette.move_up();
                    return;
                }
                KeyCode::Down => {
                    self.palette.move_down();
                    return;
                }
                KeyCode::Tab => {
                    if let Some(command) = self.palette.accept() {
                        self.input.set_text(&command);
                    }
                    return;
                }
                _ => {}
            }
        }

        match self.input.handle_event(&Event::Key(key)) {
            InputAction::Submit(text) => {
                self.palette.deactivate();
                self.handle_submit(&text);
            }
            InputAction::Consumed => self.sync_palette(),
        }
    }

    /// Keep the palette in step with the prompt line: open while the line
    /// is a bare `/query`, closed otherwise.
    fn sync_palette(&mut self) {
        let text = self.input.text();
        match text.strip_prefix('/') {
            Some(query) if !query.contains(' ') => self.palette.activate(query),
            _ => self.palette.deactivate(),
        }
    }

    /// Handle a submitted prompt line.
    fn handle_submit(&mut self, line: &str) {
        match self.registry.dispatch(line, &self.ctx) {
            Some(outcome) => self.apply_outcome(outcome),
            None => {
                // Not a slash command: record the prompt. Model routing is
                // a concern of the surrounding assistant, not this shell.
                self.transcript.push_user(line);
            }
        }
    }

    /// Interpret a command outcome.
    fn apply_outcome(&mut self, outcome: CommandOutcome) {
        match outcome {
            CommandOutcome::OpenDialog(dialog) => self.open_dialog(dialog),
            CommandOutcome::Message(message) => self.transcript.push_info(message),
            CommandOutcome::ShowHelp => self.transcript.push_info(self.registry.help_text()),
            CommandOutcome::SubmitPrompt(prompt) => self.transcript.push_user(prompt),
            CommandOutcome::SwitchTheme(name) => {
                self.theme = Theme::from_name(&name);
                self.input = InputWidget::new(&self.theme);
                self.transcript
                    .push_info(format!("Theme switched to {}.", self.theme.name));
            }
            CommandOutcome::ClearTranscript => self.transcript.clear(),
            CommandOutcome::Quit => self.should_quit = true,
        }
    }

    /// Mount the named modal dialog.
    fn open_dialog(&mut self, dialog: Dialog) {
        tracing::info!(dialog = dialog.name(), "opening dialog");
        match dialog {
            Dialog::Create => {
                let tx = self.events_tx.clone();
                self.dialog = Some(CreateWizardDialog::new(
                    &self.theme,
                    Box::new(move |result| {
                        let _ = tx.send(AppEvent::WizardDone(result));
                    }),
                ));
            }
        }
    }

    /// Drain events posted by callbacks during the current turn. Callbacks
    /// fire synchronously inside key handling, so this runs right after
    /// each terminal event.
    pub fn drain_app_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WizardDone(Some(result)) => {
                self.registry
                    .register_user_command(&result.name, &result.prompt);
                self.palette = CommandPalette::from_registry(&self.registry);
                self.transcript
                    .push_info(format!("Created /{}. Try it!", result.name));
            }
            AppEvent::WizardDone(None) => {
                self.transcript.push_info("Create wizard cancelled.");
            }
        }
    }
}
