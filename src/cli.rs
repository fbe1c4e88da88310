//! CLI argument parsing via clap.

use clap::Parser;

/// Interactive palette, font, and cursor editor for the Linux console.
#[derive(Debug, Parser)]
#[command(name = "ttytint", version)]
pub struct Args {
    /// Existing theme file to import at startup.
    pub theme: Option<String>,

    /// Path to config file (default: ./ttytint.toml or ~/.config/ttytint/ttytint.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
