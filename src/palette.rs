//! The 16-slot console palette: static slot/preset tables and the mutable
//! session store.
//!
//! The store keeps two parallel palettes. `base` is what the user edits;
//! `display` is `scale(base[i], brightness)` for every slot and is the only
//! thing ever pushed to the console or serialized. The two are never allowed
//! to drift: every mutation recomputes the affected `display` entries.

use crate::color::{scale, Color};
use crate::console::Console;
use crate::error::PaletteError;

pub const SLOT_COUNT: usize = 16;

pub const BRIGHTNESS_MIN: f32 = 0.1;
pub const BRIGHTNESS_MAX: f32 = 2.0;

/// A validated palette slot index (0..=15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(u8);

impl Slot {
    pub const ZERO: Slot = Slot(0);

    pub fn new(index: u8) -> Result<Self, PaletteError> {
        if index as usize >= SLOT_COUNT {
            return Err(PaletteError::SlotOutOfRange(index));
        }
        Ok(Self(index))
    }

    /// All sixteen slots in order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT as u8).map(Slot)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase hex digit used in slot directives (`0`..`F`).
    pub fn hex_digit(self) -> char {
        char::from_digit(u32::from(self.0), 16)
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('0')
    }

    /// Inverse of [`Slot::hex_digit`], accepting either case.
    pub fn from_hex_digit(digit: char) -> Option<Slot> {
        digit.to_digit(16).map(|v| Slot(v as u8))
    }

    pub fn name(self) -> &'static str {
        SLOT_NAMES[self.index()]
    }

    pub fn usage_hint(self) -> &'static str {
        USAGE_HINTS[self.index()]
    }
}

pub const SLOT_NAMES: [&str; SLOT_COUNT] = [
    "Black",
    "Red",
    "Green",
    "Brown/Yellow",
    "Blue",
    "Magenta",
    "Cyan",
    "Light Gray",
    "Dark Gray",
    "Light Red",
    "Light Green",
    "Light Yellow",
    "Light Blue",
    "Light Magenta",
    "Light Cyan",
    "White",
];

pub const USAGE_HINTS: [&str; SLOT_COUNT] = [
    "Background",
    "Archives/Err",
    "Executables",
    "Pipes/Devs",
    "Directories",
    "Images",
    "Symlinks",
    "Text/Normal",
    "Comments",
    "Bold Red",
    "Bold Green",
    "Bold Yellow",
    "Bold Blue",
    "Bold Magenta",
    "Bold Cyan",
    "Bold White",
];

/// Standard Linux console colors, used as the startup palette.
pub const DEFAULT_COLORS: [Color; SLOT_COUNT] = [
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0xAA, 0x00, 0x00),
    Color::rgb(0x00, 0xAA, 0x00),
    Color::rgb(0xAA, 0x55, 0x00),
    Color::rgb(0x00, 0x00, 0xAA),
    Color::rgb(0xAA, 0x00, 0xAA),
    Color::rgb(0x00, 0xAA, 0xAA),
    Color::rgb(0xAA, 0xAA, 0xAA),
    Color::rgb(0x55, 0x55, 0x55),
    Color::rgb(0xFF, 0x55, 0x55),
    Color::rgb(0x55, 0xFF, 0x55),
    Color::rgb(0xFF, 0xFF, 0x55),
    Color::rgb(0x55, 0x55, 0xFF),
    Color::rgb(0xFF, 0x55, 0xFF),
    Color::rgb(0x55, 0xFF, 0xFF),
    Color::rgb(0xFF, 0xFF, 0xFF),
];

/// Immutable preset catalog: name plus a full 16-color palette.
pub const PRESETS: [(&str, [Color; SLOT_COUNT]); 5] = [
    ("Default", DEFAULT_COLORS),
    (
        "Matrix",
        [
            Color::rgb(0x00, 0x00, 0x00),
            Color::rgb(0xFF, 0x00, 0x00),
            Color::rgb(0x00, 0xCC, 0x00),
            Color::rgb(0xFF, 0xFF, 0x00),
            Color::rgb(0x00, 0x00, 0xFF),
            Color::rgb(0xFF, 0x00, 0xFF),
            Color::rgb(0x00, 0xFF, 0xFF),
            Color::rgb(0x00, 0xFF, 0x00),
            Color::rgb(0x55, 0x55, 0x55),
            Color::rgb(0xFF, 0x55, 0x55),
            Color::rgb(0x55, 0xFF, 0x55),
            Color::rgb(0xFF, 0xFF, 0x55),
            Color::rgb(0x55, 0x55, 0xFF),
            Color::rgb(0xFF, 0x55, 0xFF),
            Color::rgb(0x55, 0xFF, 0xFF),
            Color::rgb(0xCC, 0xFF, 0xCC),
        ],
    ),
    (
        "Dracula",
        [
            Color::rgb(0x21, 0x22, 0x2C),
            Color::rgb(0xFF, 0x55, 0x55),
            Color::rgb(0x50, 0xFA, 0x7B),
            Color::rgb(0xF1, 0xFA, 0x8C),
            Color::rgb(0xBD, 0x93, 0xF9),
            Color::rgb(0xFF, 0x79, 0xC6),
            Color::rgb(0x8B, 0xE9, 0xFD),
            Color::rgb(0xF8, 0xF8, 0xF2),
            Color::rgb(0x62, 0x72, 0xA4),
            Color::rgb(0xFF, 0x6E, 0x6E),
            Color::rgb(0x69, 0xFF, 0x94),
            Color::rgb(0xFF, 0xFF, 0xA5),
            Color::rgb(0xD6, 0xAC, 0xFF),
            Color::rgb(0xFF, 0x92, 0xDF),
            Color::rgb(0xA4, 0xFF, 0xFF),
            Color::rgb(0xFF, 0xFF, 0xFF),
        ],
    ),
    (
        "Gruvbox",
        [
            Color::rgb(0x28, 0x28, 0x28),
            Color::rgb(0xCC, 0x24, 0x1D),
            Color::rgb(0x98, 0x97, 0x1A),
            Color::rgb(0xD7, 0x99, 0x21),
            Color::rgb(0x45, 0x85, 0x88),
            Color::rgb(0xB1, 0x62, 0x86),
            Color::rgb(0x68, 0x9D, 0x6A),
            Color::rgb(0xA8, 0x99, 0x84),
            Color::rgb(0x92, 0x83, 0x74),
            Color::rgb(0xFB, 0x49, 0x34),
            Color::rgb(0xB8, 0xBB, 0x26),
            Color::rgb(0xFA, 0xBD, 0x2F),
            Color::rgb(0x83, 0xA5, 0x98),
            Color::rgb(0xD3, 0x86, 0x9B),
            Color::rgb(0x8E, 0xC0, 0x7C),
            Color::rgb(0xEB, 0xDB, 0xB2),
        ],
    ),
    (
        "Solarized",
        [
            Color::rgb(0x07, 0x36, 0x42),
            Color::rgb(0xDC, 0x32, 0x2F),
            Color::rgb(0x85, 0x99, 0x00),
            Color::rgb(0xB5, 0x89, 0x00),
            Color::rgb(0x26, 0x8B, 0xD2),
            Color::rgb(0xD3, 0x36, 0x82),
            Color::rgb(0x2A, 0xA1, 0x98),
            Color::rgb(0xEE, 0xE8, 0xD5),
            Color::rgb(0x00, 0x2B, 0x36),
            Color::rgb(0xCB, 0x4B, 0x16),
            Color::rgb(0x58, 0x6E, 0x75),
            Color::rgb(0x65, 0x7B, 0x83),
            Color::rgb(0x83, 0x94, 0x96),
            Color::rgb(0x6C, 0x71, 0xC4),
            Color::rgb(0x93, 0xA1, 0xA1),
            Color::rgb(0xFD, 0xF6, 0xE3),
        ],
    ),
];

/// Preset names in catalog order, for the picker UI.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

fn preset_colors(name: &str) -> Option<&'static [Color; SLOT_COUNT]> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, colors)| colors)
}

/// Mutable palette state for one editing session.
#[derive(Debug, Clone)]
pub struct PaletteStore {
    base: [Color; SLOT_COUNT],
    display: [Color; SLOT_COUNT],
    brightness: f32,
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteStore {
    pub fn new() -> Self {
        Self {
            base: DEFAULT_COLORS,
            display: DEFAULT_COLORS,
            brightness: 1.0,
        }
    }

    pub fn base(&self) -> &[Color; SLOT_COUNT] {
        &self.base
    }

    pub fn display(&self) -> &[Color; SLOT_COUNT] {
        &self.display
    }

    pub fn base_color(&self, slot: Slot) -> Color {
        self.base[slot.index()]
    }

    pub fn display_color(&self, slot: Slot) -> Color {
        self.display[slot.index()]
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Replace the whole base palette with a named preset and push all slots.
    pub fn apply_preset(
        &mut self,
        name: &str,
        console: &mut dyn Console,
    ) -> Result<(), PaletteError> {
        let colors = preset_colors(name)
            .ok_or_else(|| PaletteError::UnknownPreset(name.to_string()))?;
        self.base = *colors;
        for slot in Slot::all() {
            self.refresh_slot(slot, console);
        }
        tracing::debug!(preset = name, "applied preset");
        Ok(())
    }

    /// Set one base color, recompute its display value, push that slot.
    pub fn set_base_color(&mut self, slot: Slot, color: Color, console: &mut dyn Console) {
        self.base[slot.index()] = color;
        self.refresh_slot(slot, console);
    }

    /// Clamp brightness to its valid range and re-derive every display slot.
    pub fn set_brightness(&mut self, value: f32, console: &mut dyn Console) {
        self.brightness = value.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
        for slot in Slot::all() {
            self.refresh_slot(slot, console);
        }
    }

    /// Import scanned (slot, color) pairs from a theme document.
    ///
    /// Later pairs win for a repeated slot; untouched slots keep their prior
    /// values. Imported palettes are treated as final, so brightness resets
    /// to 1.0 and display entries take the imported colors verbatim.
    pub fn import_from_document(
        &mut self,
        pairs: &[(Slot, Color)],
        console: &mut dyn Console,
    ) -> usize {
        self.brightness = 1.0;
        for (slot, color) in pairs {
            self.base[slot.index()] = *color;
            self.display[slot.index()] = *color;
            console.set_slot(*slot, *color);
        }
        // Slots untouched by the document still need their display values
        // re-derived under the reset brightness.
        for slot in Slot::all() {
            if !pairs.iter().any(|(s, _)| *s == slot) {
                self.refresh_slot(slot, console);
            }
        }
        tracing::debug!(pairs = pairs.len(), "imported theme document");
        pairs.len()
    }

    fn refresh_slot(&mut self, slot: Slot, console: &mut dyn Console) {
        let derived = scale(self.base[slot.index()], self.brightness);
        self.display[slot.index()] = derived;
        console.set_slot(slot, derived);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::NullConsole;

    fn slot(i: u8) -> Slot {
        Slot::new(i).unwrap()
    }

    #[test]
    fn slot_rejects_out_of_range() {
        assert!(Slot::new(15).is_ok());
        assert!(Slot::new(16).is_err());
    }

    #[test]
    fn slot_hex_digit_round_trips() {
        for s in Slot::all() {
            assert_eq!(Slot::from_hex_digit(s.hex_digit()).unwrap(), s);
        }
        assert_eq!(slot(10).hex_digit(), 'A');
        assert_eq!(Slot::from_hex_digit('f').unwrap(), slot(15));
        assert!(Slot::from_hex_digit('g').is_none());
    }

    #[test]
    fn new_store_starts_at_defaults() {
        let store = PaletteStore::new();
        assert_eq!(store.base(), &DEFAULT_COLORS);
        assert_eq!(store.display(), &DEFAULT_COLORS);
        assert!((store.brightness() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn apply_preset_is_stable_and_rejects_unknown() {
        let mut store = PaletteStore::new();
        let mut console = NullConsole;
        store.apply_preset("Dracula", &mut console).unwrap();
        let first = *store.base();
        store.apply_preset("Dracula", &mut console).unwrap();
        assert_eq!(store.base(), &first);
        assert!(matches!(
            store.apply_preset("Neon", &mut console),
            Err(PaletteError::UnknownPreset(_))
        ));
        // Failed preset application must not mutate anything.
        assert_eq!(store.base(), &first);
    }

    #[test]
    fn brightness_then_edit_scales_only_the_edited_slot() {
        let mut store = PaletteStore::new();
        let mut console = NullConsole;
        store.set_brightness(0.5, &mut console);
        let snapshot = *store.display();
        store.set_base_color(slot(3), Color::parse_hex("FF0000").unwrap(), &mut console);
        assert_eq!(store.display_color(slot(3)).hex(), "7F0000");
        for s in Slot::all() {
            if s.index() != 3 {
                assert_eq!(store.display_color(s), snapshot[s.index()]);
            }
        }
    }

    #[test]
    fn brightness_clamps_to_valid_range() {
        let mut store = PaletteStore::new();
        let mut console = NullConsole;
        store.set_brightness(5.0, &mut console);
        assert!((store.brightness() - BRIGHTNESS_MAX).abs() < f32::EPSILON);
        store.set_brightness(0.0, &mut console);
        assert!((store.brightness() - BRIGHTNESS_MIN).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_import_keeps_other_slots_and_resets_brightness() {
        let mut store = PaletteStore::new();
        let mut console = NullConsole;
        store.set_brightness(0.5, &mut console);
        let before = *store.base();
        let pairs = vec![
            (slot(2), Color::parse_hex("112233").unwrap()),
            (slot(5), Color::parse_hex("445566").unwrap()),
        ];
        let imported = store.import_from_document(&pairs, &mut console);
        assert_eq!(imported, 2);
        assert!((store.brightness() - 1.0).abs() < f32::EPSILON);
        assert_eq!(store.base_color(slot(2)).hex(), "112233");
        assert_eq!(store.display_color(slot(5)).hex(), "445566");
        for s in Slot::all() {
            if s.index() != 2 && s.index() != 5 {
                assert_eq!(store.base_color(s), before[s.index()]);
                // Display re-derives under the reset brightness.
                assert_eq!(store.display_color(s), before[s.index()]);
            }
        }
    }

    #[test]
    fn import_last_write_wins_per_slot() {
        let mut store = PaletteStore::new();
        let mut console = NullConsole;
        let pairs = vec![
            (slot(0), Color::parse_hex("AAAAAA").unwrap()),
            (slot(0), Color::parse_hex("BBBBBB").unwrap()),
        ];
        store.import_from_document(&pairs, &mut console);
        assert_eq!(store.base_color(slot(0)).hex(), "BBBBBB");
    }

    #[test]
    fn preset_catalog_shape() {
        let names = preset_names();
        assert_eq!(
            names,
            vec!["Default", "Matrix", "Dracula", "Gruvbox", "Solarized"]
        );
        for (_, colors) in PRESETS {
            assert_eq!(colors.len(), SLOT_COUNT);
        }
    }
}
