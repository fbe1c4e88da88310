//! Interaction modes.
//!
//! Each mode carries only the data that exists while it is active, so stale
//! cross-mode state cannot be observed. `List` is the initial mode, the only
//! mode that can quit, and the mode every cancel returns to.

use crate::color::{Channel, Color};

/// Which cursor-config field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorField {
    Shape,
    Blink,
}

impl CursorField {
    pub fn toggled(self) -> CursorField {
        match self {
            Self::Shape => Self::Blink,
            Self::Blink => Self::Shape,
        }
    }
}

/// The current interaction mode with its mode-local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Edit { buffer: Color, channel: Channel },
    Presets { index: usize },
    Fonts { index: usize },
    Cursor { field: CursorField },
    Install,
}

/// Payload-free mode discriminant, used by the key decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTag {
    List,
    Edit,
    Presets,
    Fonts,
    Cursor,
    Install,
}

impl Mode {
    pub fn tag(&self) -> ModeTag {
        match self {
            Self::List => ModeTag::List,
            Self::Edit { .. } => ModeTag::Edit,
            Self::Presets { .. } => ModeTag::Presets,
            Self::Fonts { .. } => ModeTag::Fonts,
            Self::Cursor { .. } => ModeTag::Cursor,
            Self::Install => ModeTag::Install,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_field_toggles_between_two_fields() {
        assert_eq!(CursorField::Shape.toggled(), CursorField::Blink);
        assert_eq!(CursorField::Blink.toggled(), CursorField::Shape);
    }

    #[test]
    fn tags_match_variants() {
        assert_eq!(Mode::List.tag(), ModeTag::List);
        assert_eq!(Mode::Install.tag(), ModeTag::Install);
        assert_eq!(Mode::Presets { index: 2 }.tag(), ModeTag::Presets);
    }
}
