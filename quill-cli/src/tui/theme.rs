//! Theme system for the Quill TUI.
//!
//! Provides dark and light color palettes, selected via `UiConfig.theme`.

use ratatui::style::{Color, Modifier, Style};

/// Complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    /// Muted color for hints, step indicators, and disabled entries.
    pub dim: Color,

    // Transcript colors
    pub user_fg: Color,
    pub info_fg: Color,
    pub error_fg: Color,

    // UI chrome
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub border_color: Color,
    /// Border color for modal dialogs.
    pub dialog_border: Color,
}

impl Theme {
    /// Create the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            bg: Color::Rgb(30, 30, 46),
            fg: Color::Rgb(205, 214, 244),
            accent: Color::Rgb(137, 220, 235),
            dim: Color::Rgb(127, 132, 156),

            user_fg: Color::Rgb(78, 205, 126),
            info_fg: Color::Rgb(166, 173, 200),
            error_fg: Color::Rgb(243, 139, 168),

            header_bg: Color::Rgb(24, 24, 37),
            header_fg: Color::Rgb(205, 214, 244),
            status_bar_bg: Color::Rgb(24, 24, 37),
            status_bar_fg: Color::Rgb(166, 173, 200),
            border_color: Color::Rgb(69, 71, 90),
            dialog_border: Color::Rgb(203, 166, 247),
        }
    }

    /// Create the light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            bg: Color::Rgb(239, 241, 245),
            fg: Color::Rgb(76, 79, 105),
            accent: Color::Rgb(23, 146, 153),
            dim: Color::Rgb(140, 143, 161),

            user_fg: Color::Rgb(64, 160, 43),
            info_fg: Color::Rgb(92, 95, 119),
            error_fg: Color::Rgb(210, 15, 57),

            header_bg: Color::Rgb(220, 224, 232),
            header_fg: Color::Rgb(76, 79, 105),
            status_bar_bg: Color::Rgb(220, 224, 232),
            status_bar_fg: Color::Rgb(92, 95, 119),
            border_color: Color::Rgb(172, 176, 190),
            dialog_border: Color::Rgb(136, 57, 239),
        }
    }

    /// Load a theme by name. Falls back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    // -- Convenience style constructors --

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .fg(self.status_bar_fg)
            .bg(self.status_bar_bg)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn user_style(&self) -> Style {
        Style::default()
            .fg(self.user_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info_fg)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border_color)
    }

    pub fn dialog_border_style(&self) -> Style {
        Style::default().fg(self.dialog_border)
    }
}
