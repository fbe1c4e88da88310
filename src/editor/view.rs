//! Render model produced for each frame.
//!
//! The frontend draws exactly what is here; nothing in this module touches
//! the terminal. Keeping the model plain data also makes frame contents easy
//! to assert in tests.

use crate::editor::mode::CursorField;

/// Visible rows in the font picker window.
pub const FONT_WINDOW_ROWS: usize = 10;

/// One row of the slot list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub index: usize,
    pub name: &'static str,
    pub hex: String,
    pub hint: &'static str,
    pub marker: RowMarker,
}

/// Selection marker for a slot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMarker {
    None,
    /// List cursor rests on this row.
    Cursor,
    /// This row's color is open in the edit panel.
    Editing,
}

/// One channel bar in the edit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBar {
    pub label: &'static str,
    pub value: u8,
    pub active: bool,
}

/// Mode-specific detail panel content.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    None,
    Edit {
        slot: usize,
        bars: [ChannelBar; 3],
    },
    Presets {
        entries: Vec<&'static str>,
        selected: usize,
    },
    Fonts {
        entries: Vec<String>,
        selected: usize,
        window_start: usize,
    },
    Cursor {
        shape: &'static str,
        blink: bool,
        field: CursorField,
    },
    Install {
        theme_file: String,
        init_file: String,
    },
}

/// Complete render model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: &'static str,
    pub rows: Vec<SlotRow>,
    pub detail: Detail,
    pub brightness: f32,
    pub status: String,
}

/// First visible entry so `selected` stays inside a window of
/// [`FONT_WINDOW_ROWS`] rows.
pub fn window_start(selected: usize, total: usize) -> usize {
    if total <= FONT_WINDOW_ROWS {
        return 0;
    }
    let max_start = total - FONT_WINDOW_ROWS;
    selected.saturating_sub(FONT_WINDOW_ROWS / 2).min(max_start)
}
