//! Permanent-install plumbing: theme file writes and the shell init hook.
//!
//! Installing writes the current theme script to a per-user file and appends
//! one sentinel-marked loader line to the shell init file. The loader line is
//! upserted, never duplicated: re-installing refreshes the theme file and
//! leaves the init file alone. Uninstalling strips the loader line but keeps
//! the theme file on disk.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::PersistError;

/// Marker identifying our loader line inside the shell init file.
pub const SENTINEL: &str = "TTY_TINT_LOADER";

/// Result of a register call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Loader line appended.
    Installed,
    /// Sentinel already present; init file untouched.
    AlreadyInstalled,
}

/// Overwrite `path` with a rendered theme script.
pub fn write_theme_file(path: &Path, script: &str) -> Result<(), PersistError> {
    std::fs::write(path, script)?;
    tracing::debug!(path = %path.display(), "wrote theme file");
    Ok(())
}

/// The loader line referencing `theme_file`, including the sentinel comment.
pub fn loader_line(theme_file: &Path) -> String {
    format!(
        "[ -f \"{theme}\" ] && sh \"{theme}\" # {SENTINEL}",
        theme = theme_file.display()
    )
}

/// Idempotently register the autoload line in `init_file`.
///
/// A missing init file is treated as empty. After any number of calls the
/// init file contains at most one sentinel-marked line.
pub fn register_autoload(
    init_file: &Path,
    theme_file: &Path,
) -> Result<InstallOutcome, PersistError> {
    let existing = read_or_empty(init_file)?;
    if existing.contains(SENTINEL) {
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push('\n');
    updated.push_str(&loader_line(theme_file));
    updated.push('\n');
    std::fs::write(init_file, updated)?;
    tracing::debug!(init = %init_file.display(), "registered autoload line");
    Ok(InstallOutcome::Installed)
}

/// Remove every sentinel-marked line from `init_file`.
///
/// Missing file or missing sentinel is a no-op, not an error.
pub fn unregister_autoload(init_file: &Path) -> Result<(), PersistError> {
    let existing = read_or_empty(init_file)?;
    if !existing.contains(SENTINEL) {
        return Ok(());
    }

    let kept: Vec<&str> = existing
        .lines()
        .filter(|line| !line.contains(SENTINEL))
        .collect();
    let mut updated = kept.join("\n");
    if !updated.is_empty() {
        updated.push('\n');
    }
    std::fs::write(init_file, updated)?;
    tracing::debug!(init = %init_file.display(), "unregistered autoload line");
    Ok(())
}

fn read_or_empty(path: &Path) -> Result<String, PersistError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(PersistError::Io(e)),
    }
}
