//! CLI entry point for ttytint.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use ttytint::config::load_config;
use ttytint::console::TtyConsole;
use ttytint::editor::Editor;
use ttytint::fonts::list_fonts;
use ttytint::tui;

fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Font enumeration failure only costs the picker its entries.
    let fonts = match list_fonts(&config.fonts_dir) {
        Ok(fonts) => fonts,
        Err(e) => {
            tracing::debug!(dir = %config.fonts_dir.display(), error = %e, "font enumeration failed");
            Vec::new()
        }
    };

    let mut console = TtyConsole;
    let mut editor = Editor::new(config, fonts);

    if let Some(path) = args.theme.as_deref() {
        match std::fs::read_to_string(path) {
            Ok(text) => editor.import_script(&text, &mut console),
            Err(e) => {
                eprintln!("error: failed to read {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = tui::run(&mut editor, &mut console, !args.no_color) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Log to the file named by `TTYTINT_LOG`, if set.
///
/// A full-screen UI cannot share stderr with a fmt subscriber, so logging is
/// off unless explicitly routed to a file.
fn init_tracing() {
    let Ok(path) = std::env::var("TTYTINT_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::options().create(true).append(true).open(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}
