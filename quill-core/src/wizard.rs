//! Create wizard state machine.
//!
//! A linear four-step form that collects either nothing (cancelled) or a
//! complete name/prompt pair for a new slash command. The machine does no
//! I/O of its own: frontends (the TUI dialog, the REPL) render the current
//! step and deliver inputs one at a time.
//!
//! The completion callback fires exactly once per wizard lifetime. That is
//! enforced structurally: the callback is an `FnOnce` taken out of an
//! `Option`, every firing transition lands in [`WizardStep::Done`], and
//! `Done` ignores all further input.

/// Steps of the create wizard, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Choosing what to create.
    Selection,
    /// Entering the new command's name.
    CommandName,
    /// Entering the prompt the command expands to.
    CommandPrompt,
    /// Terminal state; nothing is rendered and all input is ignored.
    Done,
}

/// Number of visible wizard steps.
pub const TOTAL_STEPS: usize = 3;

impl WizardStep {
    /// 1-based position of this step out of [`TOTAL_STEPS`]; `None` once done.
    pub fn position(&self) -> Option<usize> {
        match self {
            WizardStep::Selection => Some(1),
            WizardStep::CommandName => Some(2),
            WizardStep::CommandPrompt => Some(3),
            WizardStep::Done => None,
        }
    }

    /// Prompt text shown above this step's input.
    pub fn prompt(&self) -> &'static str {
        match self {
            WizardStep::Selection => "Let's create something! What would you like to create?",
            WizardStep::CommandName => {
                "Enter the name of your slash command, e.g: summarize-project:"
            }
            WizardStep::CommandPrompt => {
                "What should the command do? Enter the prompt to be executed \
                 when this slash command is used:"
            }
            WizardStep::Done => "",
        }
    }
}

/// What the user can choose to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardChoice {
    Command,
    Agent,
}

/// A selectable entry on the selection step.
///
/// Disabled options are shown struck through with [`COMING_SOON`] appended
/// and cancel the wizard when chosen; behavior branches on `enabled`, never
/// on the label text.
#[derive(Debug, Clone, Copy)]
pub struct WizardOption {
    pub label: &'static str,
    pub choice: WizardChoice,
    pub enabled: bool,
}

/// Options shown on the selection step, in display order.
pub const WIZARD_OPTIONS: &[WizardOption] = &[
    WizardOption {
        label: "Custom slash command",
        choice: WizardChoice::Command,
        enabled: true,
    },
    WizardOption {
        label: "Agent",
        choice: WizardChoice::Agent,
        enabled: false,
    },
];

/// Suffix rendered after disabled options.
pub const COMING_SOON: &str = "(Coming soon)";

/// Completed wizard output. No validation is applied to either field;
/// empty strings pass through as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardResult {
    pub name: String,
    pub prompt: String,
}

/// Completion callback, invoked exactly once with `Some(result)` on
/// success or `None` on cancellation.
pub type OnComplete = Box<dyn FnOnce(Option<WizardResult>) + Send>;

/// Internal wizard state. Each variant carries exactly the data its step
/// needs: the entered name exists only once the prompt step is reached.
enum StepState {
    Selection,
    CommandName,
    CommandPrompt { name: String },
    Done,
}

/// The create wizard. Owns the current state and the completion callback
/// supplied at construction.
pub struct CreateWizard {
    state: StepState,
    on_complete: Option<OnComplete>,
}

impl CreateWizard {
    /// Start a new wizard at the selection step.
    pub fn new(on_complete: OnComplete) -> Self {
        Self {
            state: StepState::Selection,
            on_complete: Some(on_complete),
        }
    }

    /// The currently active step.
    pub fn step(&self) -> WizardStep {
        match self.state {
            StepState::Selection => WizardStep::Selection,
            StepState::CommandName => WizardStep::CommandName,
            StepState::CommandPrompt { .. } => WizardStep::CommandPrompt,
            StepState::Done => WizardStep::Done,
        }
    }

    /// Whether the wizard has reached its terminal state.
    pub fn is_done(&self) -> bool {
        matches!(self.state, StepState::Done)
    }

    /// Handle a selection on the selection step. Ignored in any other step.
    pub fn select(&mut self, option: WizardOption) {
        if !matches!(self.state, StepState::Selection) {
            return;
        }
        if !option.enabled {
            // Deliberately unimplemented, not a failure: same as cancel.
            self.finish(None);
            return;
        }
        match option.choice {
            WizardChoice::Command => self.state = StepState::CommandName,
            WizardChoice::Agent => self.finish(None),
        }
    }

    /// Handle a submitted line of text on one of the text steps. Ignored
    /// in the selection and terminal steps.
    pub fn submit(&mut self, text: &str) {
        match &mut self.state {
            StepState::CommandName => {
                self.state = StepState::CommandPrompt {
                    name: text.to_string(),
                };
            }
            StepState::CommandPrompt { name } => {
                let result = WizardResult {
                    name: std::mem::take(name),
                    prompt: text.to_string(),
                };
                self.finish(Some(result));
            }
            StepState::Selection | StepState::Done => {}
        }
    }

    /// Cancel the wizard from any non-terminal step, discarding partial
    /// input. Frontends map the escape key here before per-step handling.
    pub fn cancel(&mut self) {
        if !self.is_done() {
            self.finish(None);
        }
    }

    fn finish(&mut self, result: Option<WizardResult>) {
        self.state = StepState::Done;
        if let Some(on_complete) = self.on_complete.take() {
            on_complete(result);
        }
    }
}

impl std::fmt::Debug for CreateWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateWizard")
            .field("step", &self.step())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<Option<WizardResult>>>>;

    fn recording_wizard() -> (CreateWizard, Calls) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let wizard = CreateWizard::new(Box::new(move |result| {
            sink.lock().unwrap().push(result);
        }));
        (wizard, calls)
    }

    fn option(choice: WizardChoice) -> WizardOption {
        *WIZARD_OPTIONS
            .iter()
            .find(|o| o.choice == choice)
            .expect("option present")
    }

    #[test]
    fn test_happy_path_collects_name_and_prompt() {
        let (mut wizard, calls) = recording_wizard();
        assert_eq!(wizard.step(), WizardStep::Selection);

        wizard.select(option(WizardChoice::Command));
        assert_eq!(wizard.step(), WizardStep::CommandName);
        assert!(calls.lock().unwrap().is_empty());

        wizard.submit("foo");
        assert_eq!(wizard.step(), WizardStep::CommandPrompt);
        assert!(calls.lock().unwrap().is_empty());

        wizard.submit("bar");
        assert_eq!(wizard.step(), WizardStep::Done);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            Some(WizardResult {
                name: "foo".to_string(),
                prompt: "bar".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_strings_pass_through_unvalidated() {
        let (mut wizard, calls) = recording_wizard();
        wizard.select(option(WizardChoice::Command));
        wizard.submit("");
        wizard.submit("");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            Some(WizardResult {
                name: String::new(),
                prompt: String::new(),
            })
        );
    }

    #[test]
    fn test_cancel_from_selection() {
        let (mut wizard, calls) = recording_wizard();
        wizard.cancel();
        assert!(wizard.is_done());
        assert_eq!(*calls.lock().unwrap(), vec![None]);
    }

    #[test]
    fn test_cancel_from_command_name() {
        let (mut wizard, calls) = recording_wizard();
        wizard.select(option(WizardChoice::Command));
        wizard.cancel();
        assert!(wizard.is_done());
        assert_eq!(*calls.lock().unwrap(), vec![None]);
    }

    #[test]
    fn test_cancel_from_command_prompt_discards_name() {
        let (mut wizard, calls) = recording_wizard();
        wizard.select(option(WizardChoice::Command));
        wizard.submit("half-entered");
        wizard.cancel();
        assert!(wizard.is_done());
        assert_eq!(*calls.lock().unwrap(), vec![None]);
    }

    #[test]
    fn test_disabled_agent_selection_is_a_cancel() {
        let (mut wizard, calls) = recording_wizard();
        wizard.select(option(WizardChoice::Agent));
        assert!(wizard.is_done());
        assert_eq!(*calls.lock().unwrap(), vec![None]);
    }

    #[test]
    fn test_selecting_command_fires_no_callback() {
        let (mut wizard, calls) = recording_wizard();
        wizard.select(option(WizardChoice::Command));
        assert_eq!(wizard.step(), WizardStep::CommandName);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_done_is_a_dead_state() {
        let (mut wizard, calls) = recording_wizard();
        wizard.cancel();
        assert_eq!(calls.lock().unwrap().len(), 1);

        // Any further input events must not fire the callback again.
        wizard.cancel();
        wizard.submit("late");
        wizard.select(option(WizardChoice::Command));
        wizard.select(option(WizardChoice::Agent));
        assert_eq!(calls.lock().unwrap().len(), 1);
        assert_eq!(wizard.step(), WizardStep::Done);
    }

    #[test]
    fn test_no_second_callback_after_completion() {
        let (mut wizard, calls) = recording_wizard();
        wizard.select(option(WizardChoice::Command));
        wizard.submit("name");
        wizard.submit("prompt");
        assert_eq!(calls.lock().unwrap().len(), 1);

        wizard.submit("extra");
        wizard.cancel();
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_submit_ignored_on_selection_step() {
        let (mut wizard, calls) = recording_wizard();
        wizard.submit("too early");
        assert_eq!(wizard.step(), WizardStep::Selection);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_step_positions() {
        assert_eq!(WizardStep::Selection.position(), Some(1));
        assert_eq!(WizardStep::CommandName.position(), Some(2));
        assert_eq!(WizardStep::CommandPrompt.position(), Some(3));
        assert_eq!(WizardStep::Done.position(), None);
    }

    #[test]
    fn test_step_prompts_nonempty_until_done() {
        assert!(!WizardStep::Selection.prompt().is_empty());
        assert!(!WizardStep::CommandName.prompt().is_empty());
        assert!(!WizardStep::CommandPrompt.prompt().is_empty());
        assert!(WizardStep::Done.prompt().is_empty());
    }

    #[test]
    fn test_option_table_shape() {
        assert_eq!(WIZARD_OPTIONS.len(), 2);
        assert!(option(WizardChoice::Command).enabled);
        assert!(!option(WizardChoice::Agent).enabled);
        assert_eq!(option(WizardChoice::Agent).label, "Agent");
    }
}
