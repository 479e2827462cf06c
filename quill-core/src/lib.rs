//! Quill core library.
//!
//! Frontend-independent building blocks for the Quill terminal assistant:
//! the slash command model and registry, the create wizard state machine,
//! layered configuration, and shared error types. Terminal rendering and
//! input live in the `quill` binary crate.

pub mod commands;
pub mod config;
pub mod error;
pub mod wizard;

pub use commands::{
    CommandContext, CommandKind, CommandOutcome, CommandRegistry, Dialog, SlashCommand,
};
pub use config::{QuillConfig, UiConfig, config_exists, load_config};
pub use error::ConfigError;
pub use wizard::{CreateWizard, WizardChoice, WizardResult, WizardStep};
