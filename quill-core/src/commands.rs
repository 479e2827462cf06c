//! Slash command model and registry.
//!
//! Every `/command` is described by a [`SlashCommand`] descriptor: name,
//! aliases, description, kind, and an action. Built-in commands ship with
//! Quill and carry a handler function; user commands are registered at
//! runtime by the create wizard and expand to a stored prompt. Actions
//! never perform I/O themselves — they return a [`CommandOutcome`] that
//! the frontend interprets.

use std::fmt;
use std::path::PathBuf;

/// Single source of truth for the `create` command description, shared by
/// the descriptor and its tests.
pub const CREATE_DESCRIPTION: &str = "Show a wizard to create something new.";

/// Whether a command is shipped with Quill or created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Builtin,
    User,
}

impl CommandKind {
    pub fn label(&self) -> &'static str {
        match self {
            CommandKind::Builtin => "Built-in",
            CommandKind::User => "User-defined",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Modal dialogs the host frontend knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// The create wizard.
    Create,
}

impl Dialog {
    /// Name the frontend uses to identify the dialog.
    pub fn name(&self) -> &'static str {
        match self {
            Dialog::Create => "create",
        }
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the frontend should do after a command action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Mount the named modal dialog.
    OpenDialog(Dialog),
    /// Show an informational message in the transcript.
    Message(String),
    /// Render the categorized command help.
    ShowHelp,
    /// Send the given prompt as if the user had typed it.
    SubmitPrompt(String),
    /// Switch the color theme.
    SwitchTheme(String),
    /// Clear the transcript.
    ClearTranscript,
    /// Exit the application.
    Quit,
}

/// Invocation context passed to built-in command handlers. The `create`
/// handler ignores it entirely.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Workspace directory the frontend was started in.
    pub workspace: PathBuf,
}

/// How a command produces its outcome.
#[derive(Debug, Clone)]
pub enum CommandAction {
    /// Built-in handler function.
    Handler(fn(&CommandContext, &str) -> CommandOutcome),
    /// Expand to a stored prompt (user-created commands).
    ExpandPrompt(String),
}

/// Descriptor for a single slash command.
#[derive(Debug, Clone)]
pub struct SlashCommand {
    /// Bare name without the slash, e.g. "create".
    pub name: String,
    /// Alternative lookup names, e.g. ["q"] for "quit".
    pub aliases: Vec<&'static str>,
    /// One-line description shown in /help and the palette.
    pub description: String,
    /// Usage pattern, e.g. "/theme dark|light".
    pub usage: String,
    pub kind: CommandKind,
    pub action: CommandAction,
}

impl SlashCommand {
    /// Run this command's action.
    pub fn run(&self, ctx: &CommandContext, args: &str) -> CommandOutcome {
        match &self.action {
            CommandAction::Handler(handler) => handler(ctx, args),
            CommandAction::ExpandPrompt(prompt) => CommandOutcome::SubmitPrompt(prompt.clone()),
        }
    }
}

// -- Built-in handlers --

fn create_action(_ctx: &CommandContext, _args: &str) -> CommandOutcome {
    CommandOutcome::OpenDialog(Dialog::Create)
}

fn help_action(_ctx: &CommandContext, _args: &str) -> CommandOutcome {
    CommandOutcome::ShowHelp
}

fn quit_action(_ctx: &CommandContext, _args: &str) -> CommandOutcome {
    CommandOutcome::Quit
}

fn clear_action(_ctx: &CommandContext, _args: &str) -> CommandOutcome {
    CommandOutcome::ClearTranscript
}

fn theme_action(_ctx: &CommandContext, args: &str) -> CommandOutcome {
    let name = args.trim();
    if name.is_empty() {
        CommandOutcome::Message("Usage: /theme dark|light".to_string())
    } else {
        CommandOutcome::SwitchTheme(name.to_string())
    }
}

/// Registry holding all slash commands with their descriptors.
pub struct CommandRegistry {
    commands: Vec<SlashCommand>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a registry pre-populated with the built-in commands.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register a single command.
    pub fn register(&mut self, command: SlashCommand) {
        self.commands.push(command);
    }

    /// Register a user-created command that expands to `prompt`. This is
    /// how the host routes a successful wizard result; the definition
    /// lives in memory only.
    pub fn register_user_command(&mut self, name: &str, prompt: &str) {
        tracing::debug!(name, "registering user-defined command");
        self.register(SlashCommand {
            name: name.to_string(),
            aliases: Vec::new(),
            description: "User-defined command".to_string(),
            usage: format!("/{name}"),
            kind: CommandKind::User,
            action: CommandAction::ExpandPrompt(prompt.to_string()),
        });
    }

    fn register_builtins(&mut self) {
        self.register(SlashCommand {
            name: "create".to_string(),
            aliases: Vec::new(),
            description: CREATE_DESCRIPTION.to_string(),
            usage: "/create".to_string(),
            kind: CommandKind::Builtin,
            action: CommandAction::Handler(create_action),
        });
        self.register(SlashCommand {
            name: "help".to_string(),
            aliases: vec!["?"],
            description: "Show available commands".to_string(),
            usage: "/help".to_string(),
            kind: CommandKind::Builtin,
            action: CommandAction::Handler(help_action),
        });
        self.register(SlashCommand {
            name: "quit".to_string(),
            aliases: vec!["exit", "q"],
            description: "Exit Quill".to_string(),
            usage: "/quit".to_string(),
            kind: CommandKind::Builtin,
            action: CommandAction::Handler(quit_action),
        });
        self.register(SlashCommand {
            name: "clear".to_string(),
            aliases: Vec::new(),
            description: "Clear the transcript".to_string(),
            usage: "/clear".to_string(),
            kind: CommandKind::Builtin,
            action: CommandAction::Handler(clear_action),
        });
        self.register(SlashCommand {
            name: "theme".to_string(),
            aliases: Vec::new(),
            description: "Switch color theme".to_string(),
            usage: "/theme dark|light".to_string(),
            kind: CommandKind::Builtin,
            action: CommandAction::Handler(theme_action),
        });
    }

    /// Look up a command by name or alias, with or without a leading slash.
    pub fn lookup(&self, input: &str) -> Option<&SlashCommand> {
        let name = input.strip_prefix('/').unwrap_or(input);
        self.commands
            .iter()
            .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
    }

    /// Dispatch a submitted line. Returns `None` when the line is not a
    /// slash command; unknown commands produce a message with a
    /// did-you-mean suggestion.
    pub fn dispatch(&self, line: &str, ctx: &CommandContext) -> Option<CommandOutcome> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match self.lookup(name) {
            Some(command) => {
                tracing::debug!(command = %command.name, "dispatching slash command");
                Some(command.run(ctx, args))
            }
            None => {
                let message = match self.suggest(name) {
                    Some(suggestion) => {
                        format!("Unknown command /{name}. Did you mean /{suggestion}?")
                    }
                    None => format!("Unknown command /{name}. Type /help for a list."),
                };
                Some(CommandOutcome::Message(message))
            }
        }
    }

    /// Return `/name` completions matching a prefix (with or without the
    /// leading slash), sorted.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.strip_prefix('/').unwrap_or(prefix);
        let mut results: Vec<String> = Vec::new();
        for cmd in &self.commands {
            if cmd.name.starts_with(prefix) {
                results.push(format!("/{}", cmd.name));
            }
            for alias in &cmd.aliases {
                if alias.starts_with(prefix) {
                    results.push(format!("/{alias}"));
                }
            }
        }
        results.sort();
        results
    }

    /// Suggest the closest command name for an unknown input.
    pub fn suggest(&self, input: &str) -> Option<&str> {
        let input = input.strip_prefix('/').unwrap_or(input);
        let mut best: Option<(&str, usize)> = None;

        for cmd in &self.commands {
            for candidate in std::iter::once(cmd.name.as_str()).chain(cmd.aliases.iter().copied())
            {
                let distance = edit_distance(input, candidate);
                if distance <= 3 && best.is_none_or(|(_, d)| distance < d) {
                    best = Some((candidate, distance));
                }
            }
        }

        best.map(|(name, _)| name)
    }

    /// Generate help text grouped by command kind.
    pub fn help_text(&self) -> String {
        let mut output = String::from("\nAvailable commands:\n");

        for kind in [CommandKind::Builtin, CommandKind::User] {
            let commands: Vec<&SlashCommand> =
                self.commands.iter().filter(|c| c.kind == kind).collect();
            if commands.is_empty() {
                continue;
            }

            output.push_str(&format!("\n  {}:\n", kind.label()));
            for cmd in commands {
                let aliases = if cmd.aliases.is_empty() {
                    String::new()
                } else {
                    format!(
                        " ({})",
                        cmd.aliases
                            .iter()
                            .map(|a| format!("/{a}"))
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                };
                output.push_str(&format!(
                    "    {:<24} {}{}\n",
                    cmd.usage, cmd.description, aliases
                ));
            }
        }

        output
    }

    /// Return all registered commands.
    pub fn all(&self) -> &[SlashCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Levenshtein edit distance over characters, for command suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != *b_char);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
