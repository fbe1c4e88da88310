//! ttytint — an interactive editor for the 16-color Linux console palette.
//!
//! The editor runs a modal full-screen UI for tweaking palette slots,
//! applying presets, picking a console font, and adjusting the cursor, then
//! persists the result as a small shell script. Installing registers one
//! loader line in the shell init file so the theme is re-applied on login.
//!
//! # Quick start
//!
//! ```no_run
//! use ttytint::config::load_config;
//! use ttytint::console::TtyConsole;
//! use ttytint::editor::Editor;
//!
//! let config = load_config(None).unwrap();
//! let mut editor = Editor::new(config, Vec::new());
//! let mut console = TtyConsole;
//! ttytint::tui::run(&mut editor, &mut console, true).unwrap();
//! ```

pub mod color;
pub mod config;
pub mod console;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod fonts;
pub mod install;
pub mod palette;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod tui;
