//! Error types for the Quill core library.
//!
//! Uses `thiserror` for the public API. The command and wizard modules have
//! no error taxonomy of their own: every input either advances their state
//! or produces a well-defined outcome.

/// Errors from loading layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Extract(String),
}
