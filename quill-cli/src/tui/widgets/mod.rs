//! TUI widgets.

pub mod command_palette;
pub mod create_wizard;
pub mod header;
pub mod input_area;
pub mod status_bar;
pub mod transcript;
