//! Theme script codec.
//!
//! A theme is a small shell script: one slot-set directive per palette slot
//! in order 0..15, an optional `setfont` line, a cursor-shape directive, a
//! blink toggle, and a final `clear`. Replaying the script top to bottom
//! reproduces the session's visual state.
//!
//! Reading is deliberately permissive: the scanner picks `]P<slot><RRGGBB>`
//! windows out of arbitrary surrounding text, so hand-edited scripts and
//! scripts with extra commands stay loadable. Scanning never fails; an empty
//! result just means nothing was recognized.

use crate::color::Color;
use crate::cursor::CursorConfig;
use crate::fonts::FontSelection;
use crate::palette::{Slot, SLOT_COUNT};

/// Raw escape sequence that sets one console palette slot.
pub fn slot_sequence(slot: Slot, color: Color) -> String {
    format!("\x1b]P{}{}", slot.hex_digit(), color.hex())
}

/// Raw escape sequence selecting a softcursor shape.
pub fn cursor_shape_sequence(cursor: CursorConfig) -> String {
    format!("\x1b[?{}c", cursor.shape.code())
}

/// Raw escape sequence toggling cursor blink.
pub fn cursor_blink_sequence(blink: bool) -> String {
    format!("\x1b[?12{}", if blink { 'h' } else { 'l' })
}

/// Render the full theme script for a display palette.
pub fn render_script(
    display: &[Color; SLOT_COUNT],
    font: &FontSelection,
    cursor: CursorConfig,
) -> String {
    let mut script = String::new();
    script.push_str("#!/bin/sh\n");
    script.push_str("# Auto-generated TTY theme\n");
    for slot in Slot::all() {
        let color = display[slot.index()];
        script.push_str(&format!(
            "echo -en \"\\033]P{}{}\"\n",
            slot.hex_digit(),
            color.hex()
        ));
    }
    if let Some(name) = font.name() {
        script.push_str(&format!("setfont {name}\n"));
    }
    script.push_str(&format!(
        "echo -en \"\\033[?{}c\"\n",
        cursor.shape.code()
    ));
    script.push_str(&format!(
        "echo -en \"\\033[?12{}\"\n",
        if cursor.blink { 'h' } else { 'l' }
    ));
    script.push_str("clear\n");
    script
}

/// Scan a theme document for slot-set directives, in document order.
///
/// Matches `]P` followed by one hex digit (the slot) and exactly six hex
/// digits (the color), anywhere in the text. Matches do not overlap; the
/// scan resumes after each matched window.
pub fn scan_script(text: &str) -> Vec<(Slot, Color)> {
    let bytes = text.as_bytes();
    let mut pairs = Vec::new();
    let mut i = 0;
    while i + 9 <= bytes.len() {
        if bytes[i] != b']' || bytes[i + 1] != b'P' {
            i += 1;
            continue;
        }
        let window = &bytes[i + 2..i + 9];
        if !window.iter().all(u8::is_ascii_hexdigit) {
            i += 1;
            continue;
        }
        // Window bytes are hex by construction, so these cannot fail.
        let slot = Slot::from_hex_digit(window[0] as char);
        let color = Color::parse_hex(std::str::from_utf8(&window[1..]).unwrap_or("")).ok();
        if let (Some(slot), Some(color)) = (slot, color) {
            pairs.push((slot, color));
        }
        i += 9;
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CursorShape;
    use crate::palette::DEFAULT_COLORS;

    fn slot(i: u8) -> Slot {
        Slot::new(i).unwrap()
    }

    #[test]
    fn script_orders_directives_per_contract() {
        let cursor = CursorConfig {
            shape: CursorShape::Underscore,
            blink: false,
        };
        let script = render_script(
            &DEFAULT_COLORS,
            &FontSelection::Named("lat9w-16".into()),
            cursor,
        );
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "#!/bin/sh");
        assert_eq!(lines[2], "echo -en \"\\033]P0000000\"");
        assert_eq!(lines[17], "echo -en \"\\033]PFFFFFFF\"");
        assert_eq!(lines[18], "setfont lat9w-16");
        assert_eq!(lines[19], "echo -en \"\\033[?2c\"");
        assert_eq!(lines[20], "echo -en \"\\033[?12l\"");
        assert_eq!(lines[21], "clear");
    }

    #[test]
    fn default_font_omits_setfont_line() {
        let script = render_script(
            &DEFAULT_COLORS,
            &FontSelection::Default,
            CursorConfig::default(),
        );
        assert!(!script.contains("setfont"));
        assert!(script.ends_with("clear\n"));
    }

    #[test]
    fn full_script_round_trips_all_sixteen_slots() {
        let script = render_script(
            &DEFAULT_COLORS,
            &FontSelection::Named("drdos8x8".into()),
            CursorConfig::default(),
        );
        let pairs = scan_script(&script);
        assert_eq!(pairs.len(), SLOT_COUNT);
        for (i, (slot, color)) in pairs.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(*color, DEFAULT_COLORS[i]);
        }
    }

    #[test]
    fn scanner_tolerates_surrounding_noise() {
        let text = "#!/bin/sh\n# my theme\nfoo ]P1AA0000 bar\nnot-a-match ]PZ123456\n]P2"
            .to_string()
            + "00aa00 trailing";
        let pairs = scan_script(&text);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, slot(1));
        assert_eq!(pairs[0].1.hex(), "AA0000");
        assert_eq!(pairs[1].0, slot(2));
        assert_eq!(pairs[1].1.hex(), "00AA00");
    }

    #[test]
    fn scanner_preserves_document_order_for_duplicates() {
        let pairs = scan_script("]P0AAAAAA then later ]P0BBBBBB");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1.hex(), "AAAAAA");
        assert_eq!(pairs[1].1.hex(), "BBBBBB");
    }

    #[test]
    fn scanner_returns_empty_on_unrecognized_input() {
        assert!(scan_script("").is_empty());
        assert!(scan_script("no directives here").is_empty());
        assert!(scan_script("]P0AA00").is_empty()); // too short
    }

    #[test]
    fn raw_sequences_match_script_directives() {
        assert_eq!(
            slot_sequence(slot(10), Color::rgb(0x12, 0x34, 0x56)),
            "\x1b]PA123456"
        );
        let cursor = CursorConfig {
            shape: CursorShape::Block,
            blink: true,
        };
        assert_eq!(cursor_shape_sequence(cursor), "\x1b[?6c");
        assert_eq!(cursor_blink_sequence(true), "\x1b[?12h");
        assert_eq!(cursor_blink_sequence(false), "\x1b[?12l");
    }
}
