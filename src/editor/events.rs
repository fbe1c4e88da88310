//! Abstract input events consumed by the state machine.
//!
//! The terminal frontend decodes key presses into these; the state machine
//! never sees raw key codes.

/// One abstract input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Quit,
    Save,
    OpenPresets,
    OpenFonts,
    OpenCursor,
    OpenInstall,
    Brighten,
    Dim,
    InstallConfirm,
    UninstallConfirm,
    /// Direct selection in the font list: jump to the first entry starting
    /// with this character.
    JumpTo(char),
}

/// Whether the session continues after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
