//! Console font discovery.
//!
//! Fonts are whatever `setfont` can load: `.psf`/`.psfu` files (optionally
//! gzipped) under the consolefonts directory. Enumeration failures are not
//! fatal; the picker just shows an empty list.

use std::path::Path;

/// The user's font choice: the console default, or a named console font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSelection {
    Default,
    Named(String),
}

impl FontSelection {
    pub fn label(&self) -> &str {
        match self {
            Self::Default => "(default)",
            Self::Named(name) => name,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Named(name) => Some(name),
        }
    }
}

const FONT_SUFFIXES: [&str; 4] = [".psfu.gz", ".psf.gz", ".psfu", ".psf"];

/// List console font names under `dir`, sorted and deduplicated.
///
/// Names are file stems with the font suffix stripped, which is the form
/// `setfont` accepts.
pub fn list_fonts(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(stem) = strip_font_suffix(file_name) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    names.dedup();
    Ok(names)
}

fn strip_font_suffix(file_name: &str) -> Option<&str> {
    FONT_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn selection_labels() {
        assert_eq!(FontSelection::Default.label(), "(default)");
        assert_eq!(FontSelection::Named("lat9w-16".into()).label(), "lat9w-16");
        assert_eq!(FontSelection::Default.name(), None);
        assert_eq!(
            FontSelection::Named("lat9w-16".into()).name(),
            Some("lat9w-16")
        );
    }

    #[test]
    fn strips_known_suffixes_only() {
        assert_eq!(strip_font_suffix("lat9w-16.psfu.gz"), Some("lat9w-16"));
        assert_eq!(strip_font_suffix("lat9w-16.psf"), Some("lat9w-16"));
        assert_eq!(strip_font_suffix("README"), None);
        assert_eq!(strip_font_suffix(".psf"), None);
    }

    #[test]
    fn lists_sorted_and_dedupes_stems() {
        let dir = TestTempDir::new("fonts");
        dir.write_text("zap-ext.psf.gz", "");
        dir.write_text("lat9w-16.psfu.gz", "");
        dir.write_text("lat9w-16.psf", "");
        dir.write_text("notes.txt", "");
        let fonts = list_fonts(dir.path()).unwrap();
        assert_eq!(fonts, vec!["lat9w-16".to_string(), "zap-ext".to_string()]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TestTempDir::new("fonts-missing");
        assert!(list_fonts(&dir.child("nope")).is_err());
    }
}
