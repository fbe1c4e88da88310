//! Key decoding: crossterm key events to abstract input events.
//!
//! Decoding is mode-aware because a few keys are overloaded: `i` opens the
//! install prompt from the list but confirms installation inside it, and
//! printable keys are jump targets only inside the font picker.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::{InputEvent, ModeTag};

/// Block until the next decodable key event.
pub fn next_event(tag: ModeTag) -> io::Result<InputEvent> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }
        if let Some(decoded) = decode(key, tag) {
            return Ok(decoded);
        }
    }
}

/// Map one key press to an abstract event, or `None` if the key is unbound.
pub fn decode(key: KeyEvent, tag: ModeTag) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        // Ctrl-C backs out of modal states; from the list it quits.
        return Some(if tag == ModeTag::List {
            InputEvent::Quit
        } else {
            InputEvent::Cancel
        });
    }

    match key.code {
        KeyCode::Up => return Some(InputEvent::Up),
        KeyCode::Down => return Some(InputEvent::Down),
        KeyCode::Left => return Some(InputEvent::Left),
        KeyCode::Right => return Some(InputEvent::Right),
        KeyCode::Enter => return Some(InputEvent::Confirm),
        KeyCode::Esc => return Some(InputEvent::Cancel),
        _ => {}
    }

    let KeyCode::Char(ch) = key.code else {
        return None;
    };

    match tag {
        ModeTag::List => match ch.to_ascii_lowercase() {
            'q' => Some(InputEvent::Quit),
            's' => Some(InputEvent::Save),
            'p' => Some(InputEvent::OpenPresets),
            'f' => Some(InputEvent::OpenFonts),
            'c' => Some(InputEvent::OpenCursor),
            'i' => Some(InputEvent::OpenInstall),
            '+' | '=' => Some(InputEvent::Brighten),
            '-' => Some(InputEvent::Dim),
            _ => None,
        },
        ModeTag::Install => match ch.to_ascii_lowercase() {
            'i' => Some(InputEvent::InstallConfirm),
            'u' => Some(InputEvent::UninstallConfirm),
            _ => None,
        },
        ModeTag::Fonts if ch.is_ascii_alphanumeric() => Some(InputEvent::JumpTo(ch)),
        _ => None,
    }
}
