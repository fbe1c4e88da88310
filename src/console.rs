//! The console side-effect port.
//!
//! Palette pushes, font changes, and cursor changes all go through the
//! [`Console`] trait so the state machine stays testable and the physical
//! terminal stays behind one seam. Slot and cursor pushes are fire-and-forget
//! (a failed write to stdout is not worth interrupting the session for);
//! font changes shell out to `setfont` and do report failure so the UI can
//! show it.

use std::io::{self, Write};
use std::process::Command;

use crate::color::Color;
use crate::cursor::CursorConfig;
use crate::palette::Slot;
use crate::theme::{cursor_blink_sequence, cursor_shape_sequence, slot_sequence};

/// Abstract console the editor pushes visual state to.
pub trait Console {
    /// Set one palette slot. Fire-and-forget.
    fn set_slot(&mut self, slot: Slot, color: Color);

    /// Load a console font by name.
    fn apply_font(&mut self, name: &str) -> io::Result<()>;

    /// Apply cursor shape and blink. Fire-and-forget.
    fn apply_cursor(&mut self, cursor: CursorConfig);
}

/// Real console: escape sequences on stdout, `setfont` for fonts.
#[derive(Debug, Default)]
pub struct TtyConsole;

impl Console for TtyConsole {
    fn set_slot(&mut self, slot: Slot, color: Color) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(slot_sequence(slot, color).as_bytes());
        let _ = stdout.flush();
    }

    fn apply_font(&mut self, name: &str) -> io::Result<()> {
        let status = Command::new("setfont").arg(name).status()?;
        if !status.success() {
            return Err(io::Error::other(format!(
                "setfont {name} exited with {status}"
            )));
        }
        Ok(())
    }

    fn apply_cursor(&mut self, cursor: CursorConfig) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(cursor_shape_sequence(cursor).as_bytes());
        let _ = stdout.write_all(cursor_blink_sequence(cursor.blink).as_bytes());
        let _ = stdout.flush();
    }
}

/// Console that drops everything. Used by tests and dry runs.
#[derive(Debug, Default)]
pub struct NullConsole;

impl Console for NullConsole {
    fn set_slot(&mut self, _slot: Slot, _color: Color) {}

    fn apply_font(&mut self, _name: &str) -> io::Result<()> {
        Ok(())
    }

    fn apply_cursor(&mut self, _cursor: CursorConfig) {}
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingConsole;
    use super::*;
    use crate::palette::{PaletteStore, SLOT_COUNT};

    #[test]
    fn preset_application_pushes_all_sixteen_slots() {
        let mut store = PaletteStore::new();
        let mut console = RecordingConsole::default();
        store.apply_preset("Matrix", &mut console).unwrap();
        assert_eq!(console.slots.len(), SLOT_COUNT);
        assert_eq!(console.slots[0], (0, "000000".to_string()));
        assert_eq!(console.slots[2], (2, "00CC00".to_string()));
    }

    #[test]
    fn single_edit_pushes_one_slot() {
        let mut store = PaletteStore::new();
        let mut console = RecordingConsole::default();
        store.set_base_color(
            Slot::new(9).unwrap(),
            Color::rgb(0x10, 0x20, 0x30),
            &mut console,
        );
        assert_eq!(console.slots, vec![(9, "102030".to_string())]);
    }

    #[test]
    fn null_console_swallows_everything() {
        let mut console = NullConsole;
        console.set_slot(Slot::new(0).unwrap(), Color::rgb(1, 2, 3));
        console.apply_cursor(CursorConfig::default());
        assert!(console.apply_font("lat9w-16").is_ok());
    }
}
