//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak glyphs, layout offsets, and chrome
//! colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const TITLE_ROW: u16 = 1;
pub const LIST_X: u16 = 2;
pub const LIST_START_Y: u16 = 3;
pub const SWATCH_X: u16 = 52;
pub const DETAIL_X: u16 = 58;
pub const DETAIL_Y: u16 = 5;
pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;

// ---------------------------------------------------------------------------
// Glyphs / markers
// ---------------------------------------------------------------------------

pub const ROW_CURSOR_PREFIX: &str = " >";
pub const ROW_EDITING_PREFIX: &str = " *";
pub const ROW_PLAIN_PREFIX: &str = "  ";

pub const PICKER_SELECTED: &str = "▶";
pub const PICKER_UNSELECTED: &str = "·";

pub const SWATCH: &str = "██";
pub const EDIT_PREVIEW: &str = "██████████";
pub const EDIT_PREVIEW_ROWS: u16 = 3;

pub const BAR_WIDTH: usize = 20;
pub const BAR_FILLED: &str = "█";
pub const BAR_EMPTY: &str = "░";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_TITLE: Color = Color::White;
pub const COLOR_SECTION: Color = Color::Yellow;
pub const COLOR_STATUS: Color = Color::Grey;
pub const COLOR_PICKER_SELECTED: Color = Color::Cyan;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
