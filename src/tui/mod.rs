//! Terminal frontend: raw-mode session management and the synchronous
//! event loop.

mod input;
mod screen;
pub mod settings;

pub use input::{decode, next_event};
pub use screen::draw;

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::QueueableCommand;

use crate::console::Console;
use crate::editor::{Editor, Flow};

/// Raw mode + alternate screen lifetime guard so the terminal is restored on
/// any return path.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.queue(EnterAlternateScreen)?;
        stdout.queue(Hide)?;
        stdout.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.queue(Show);
        let _ = stdout.queue(LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive session until the user quits.
///
/// One event is fully processed (state transition, side effects, repaint)
/// before the next is read.
pub fn run(editor: &mut Editor, console: &mut dyn Console, color: bool) -> io::Result<()> {
    let _guard = TerminalGuard::acquire()?;
    let mut stdout = io::stdout();
    loop {
        draw(&mut stdout, &editor.frame(), color)?;
        let event = next_event(editor.mode().tag())?;
        if editor.handle(event, console) == Flow::Quit {
            break;
        }
    }
    Ok(())
}
