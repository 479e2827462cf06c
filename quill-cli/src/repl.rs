//! Line-based REPL for terminals where the TUI is unavailable or disabled.
//!
//! Drives the same command registry and create wizard as the TUI, over
//! plain stdin/stdout.

use quill_core::commands::{CommandContext, CommandOutcome, CommandRegistry, Dialog};
use quill_core::config::QuillConfig;
use quill_core::wizard::{
    COMING_SOON, CreateWizard, TOTAL_STEPS, WIZARD_OPTIONS, WizardResult, WizardStep,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Run the interactive REPL on stdin/stdout.
pub fn run_interactive(config: QuillConfig, workspace: PathBuf) -> anyhow::Result<()> {
    println!(
        "\x1b[1;35mquill\x1b[0m | theme: {} | workspace: {}",
        config.ui.theme,
        workspace.display()
    );
    println!("Type /help for commands, /create to make your own, /quit to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    repl_loop(&mut reader, &mut writer, workspace)
}

/// The REPL proper, generic over its streams.
fn repl_loop<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    workspace: PathBuf,
) -> anyhow::Result<()> {
    let mut registry = CommandRegistry::with_builtins();
    let ctx = CommandContext { workspace };

    loop {
        write!(writer, "> ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match registry.dispatch(line, &ctx) {
            Some(CommandOutcome::OpenDialog(Dialog::Create)) => {
                if let Some(result) = run_create_wizard(reader, writer)? {
                    registry.register_user_command(&result.name, &result.prompt);
                    writeln!(writer, "Created /{}. Try it!", result.name)?;
                } else {
                    writeln!(writer, "Create wizard cancelled.")?;
                }
            }
            Some(CommandOutcome::Message(message)) => writeln!(writer, "{message}")?,
            Some(CommandOutcome::ShowHelp) => writeln!(writer, "{}", registry.help_text())?,
            Some(CommandOutcome::SubmitPrompt(prompt)) => writeln!(writer, "> {prompt}")?,
            Some(CommandOutcome::SwitchTheme(name)) => {
                writeln!(writer, "Theme switched to {name}.")?
            }
            Some(CommandOutcome::ClearTranscript) => write!(writer, "\x1b[2J\x1b[H")?,
            Some(CommandOutcome::Quit) => {
                writeln!(writer, "Goodbye!")?;
                break;
            }
            None => {
                // Plain prompt. Model routing is out of scope for this shell.
                writeln!(writer, "> {line}")?;
            }
        }
    }

    Ok(())
}

/// Run the create wizard as a numbered-menu dialog over the REPL streams.
///
/// Returns `Ok(None)` when the wizard was cancelled (blank selection, a
/// disabled option, or EOF mid-flight).
fn run_create_wizard<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<Option<WizardResult>> {
    let outcome: Arc<Mutex<Option<Option<WizardResult>>>> = Arc::new(Mutex::new(None));
    let outcome_clone = Arc::clone(&outcome);
    let mut wizard = CreateWizard::new(Box::new(move |result| {
        *outcome_clone.lock().unwrap() = Some(result);
    }));

    while !wizard.is_done() {
        match wizard.step() {
            WizardStep::Selection => {
                writeln!(writer, "\nCreate New... (step 1 of {TOTAL_STEPS})")?;
                writeln!(writer, "{}", wizard.step().prompt())?;
                for (i, option) in WIZARD_OPTIONS.iter().enumerate() {
                    if option.enabled {
                        writeln!(writer, "  {}. {}", i + 1, option.label)?;
                    } else {
                        writeln!(writer, "  {}. {} {COMING_SOON}", i + 1, option.label)?;
                    }
                }
                write!(writer, "Choice (blank to cancel): ")?;
                writer.flush()?;

                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    wizard.cancel();
                    break;
                }
                match line.trim().parse::<usize>() {
                    Ok(n) if (1..=WIZARD_OPTIONS.len()).contains(&n) => {
                        wizard.select(WIZARD_OPTIONS[n - 1]);
                    }
                    _ => wizard.cancel(),
                }
            }
            step @ (WizardStep::CommandName | WizardStep::CommandPrompt) => {
                let position = step.position().unwrap_or(0);
                writeln!(writer, "\nStep {position} of {TOTAL_STEPS}")?;
                write!(writer, "{} ", step.prompt())?;
                writer.flush()?;

                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    wizard.cancel();
                    break;
                }
                wizard.submit(line.trim_end_matches(['\r', '\n']));
            }
            WizardStep::Done => break,
        }
    }

    let result = outcome.lock().unwrap().take().flatten();
    Ok(result)
}
