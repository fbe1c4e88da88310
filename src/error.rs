//! Unified error types for the palette editor.

use std::fmt;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors from parsing textual color input.
#[derive(Debug)]
pub enum ColorError {
    /// Input is not exactly six hex digits.
    MalformedHex(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHex(input) => write!(f, "malformed hex color: {input:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// PaletteError
// ---------------------------------------------------------------------------

/// Errors from palette-store operations.
#[derive(Debug)]
pub enum PaletteError {
    /// Requested preset is not in the catalog.
    UnknownPreset(String),
    /// Slot index outside 0..=15.
    SlotOutOfRange(u8),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(name) => write!(f, "unknown preset: {name}"),
            Self::SlotOutOfRange(index) => write!(f, "slot index out of range: {index}"),
        }
    }
}

impl std::error::Error for PaletteError {}

// ---------------------------------------------------------------------------
// PersistError
// ---------------------------------------------------------------------------

/// Errors when writing theme files or editing the shell init file.
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Invalid(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Invalid(msg) => write!(f, "invalid persist target: {msg}"),
        }
    }
}

impl std::error::Error for PersistError {}

impl From<std::io::Error> for PersistError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        assert_eq!(
            ColorError::MalformedHex("xyz".into()).to_string(),
            "malformed hex color: \"xyz\""
        );
    }

    #[test]
    fn palette_error_display_variants() {
        assert_eq!(
            PaletteError::UnknownPreset("Neon".into()).to_string(),
            "unknown preset: Neon"
        );
        assert_eq!(
            PaletteError::SlotOutOfRange(16).to_string(),
            "slot index out of range: 16"
        );
    }

    #[test]
    fn persist_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = PersistError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("denied"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }
}
