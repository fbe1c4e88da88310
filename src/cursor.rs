//! Console cursor shape and blink settings.
//!
//! Shapes map to the Linux softcursor codes (`ESC [ ? <n> c`, n in 0..=6).
//! Blink is tracked independently and emitted as the `ESC [ ? 12 h/l`
//! cursor-blinking toggle.

/// The seven named Linux console cursor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Default,
    Invisible,
    Underscore,
    LowerThird,
    LowerHalf,
    TwoThirds,
    Block,
}

impl CursorShape {
    pub const ALL: [CursorShape; 7] = [
        CursorShape::Default,
        CursorShape::Invisible,
        CursorShape::Underscore,
        CursorShape::LowerThird,
        CursorShape::LowerHalf,
        CursorShape::TwoThirds,
        CursorShape::Block,
    ];

    /// Softcursor parameter for this shape.
    pub fn code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Invisible => 1,
            Self::Underscore => 2,
            Self::LowerThird => 3,
            Self::LowerHalf => 4,
            Self::TwoThirds => 5,
            Self::Block => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Invisible => "Invisible",
            Self::Underscore => "Underscore",
            Self::LowerThird => "Lower Third",
            Self::LowerHalf => "Lower Half",
            Self::TwoThirds => "Two Thirds",
            Self::Block => "Block",
        }
    }

    /// Next shape in catalog order, wrapping around.
    pub fn next(self) -> CursorShape {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous shape in catalog order, wrapping around.
    pub fn prev(self) -> CursorShape {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Cursor shape plus blink flag, persisted alongside the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorConfig {
    pub shape: CursorShape,
    pub blink: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            shape: CursorShape::Default,
            blink: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_cycling_wraps_in_both_directions() {
        assert_eq!(CursorShape::Block.next(), CursorShape::Default);
        assert_eq!(CursorShape::Default.prev(), CursorShape::Block);
        assert_eq!(CursorShape::Default.next(), CursorShape::Invisible);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut shape = CursorShape::Underscore;
        for _ in 0..CursorShape::ALL.len() {
            shape = shape.next();
        }
        assert_eq!(shape, CursorShape::Underscore);
    }

    #[test]
    fn codes_cover_zero_through_six() {
        let codes: Vec<u8> = CursorShape::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn default_config_blinks() {
        let cfg = CursorConfig::default();
        assert_eq!(cfg.shape, CursorShape::Default);
        assert!(cfg.blink);
    }
}
