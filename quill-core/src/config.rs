//! Configuration system for Quill.
//!
//! Uses `figment` for layered configuration: defaults -> global config file
//! -> workspace config file -> environment. Configuration is read from
//! `~/.config/quill/config.toml` and/or `.quill/config.toml` in the
//! workspace directory; `QUILL_*` environment variables override both.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Top-level configuration for Quill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuillConfig {
    pub ui: UiConfig,
}

/// User interface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme name ("dark" or "light").
    pub theme: String,
    /// Start the full-screen TUI; false drops to the plain REPL.
    pub use_tui: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_tui: true,
        }
    }
}

/// Path of the workspace-local config file.
pub fn workspace_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".quill").join("config.toml")
}

/// Path of the global config file, if a home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "quill", "quill")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Check whether a configuration file exists for this workspace.
pub fn config_exists(workspace: &Path) -> bool {
    workspace_config_path(workspace).exists()
        || global_config_path().is_some_and(|path| path.exists())
}

/// Load configuration with layered precedence:
/// defaults < global file < workspace file < `QUILL_*` environment.
pub fn load_config(workspace: Option<&Path>) -> Result<QuillConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(QuillConfig::default()));

    if let Some(global) = global_config_path()
        && global.exists()
    {
        figment = figment.merge(Toml::file(&global));
    }

    if let Some(workspace) = workspace {
        let path = workspace_config_path(workspace);
        if path.exists() {
            figment = figment.merge(Toml::file(&path));
        }
    }

    figment = figment.merge(Env::prefixed("QUILL_").split("__"));

    figment
        .extract()
        .map_err(|e| ConfigError::Extract(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = QuillConfig::default();
        assert_eq!(config.ui.theme, "dark");
        assert!(config.ui.use_tui);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config.ui.theme, "dark");
        assert!(config.ui.use_tui);
    }

    #[test]
    fn test_workspace_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".quill");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[ui]\ntheme = \"light\"\nuse_tui = false\n",
        )
        .unwrap();

        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config.ui.theme, "light");
        assert!(!config.ui.use_tui);
    }

    #[test]
    fn test_partial_workspace_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".quill");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[ui]\ntheme = \"light\"\n").unwrap();

        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config.ui.theme, "light");
        assert!(config.ui.use_tui);
    }

    #[test]
    fn test_config_exists_detects_workspace_file() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".quill");
        std::fs::create_dir_all(&config_dir).unwrap();

        assert!(!workspace_config_path(dir.path()).exists());
        std::fs::write(config_dir.join("config.toml"), "[ui]\ntheme = \"dark\"\n").unwrap();
        assert!(config_exists(dir.path()));
    }

    #[test]
    fn test_invalid_toml_is_an_extract_error() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".quill");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[ui\ntheme = 3\n").unwrap();

        let err = load_config(Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
