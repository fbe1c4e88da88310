//! Configuration loading from TOML files.
//!
//! Config is looked up in this order (first hit wins):
//! 1. TOML file specified via the --config CLI flag
//! 2. ./ttytint.toml in the current directory
//! 3. ~/.config/ttytint/ttytint.toml
//! 4. Built-in defaults
//!
//! Only filesystem paths are configurable; everything else about the editor
//! is fixed behavior.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target of the quick-save action.
    pub save_file: PathBuf,
    /// Per-user theme file written by the installer.
    pub theme_file: PathBuf,
    /// Shell init file that receives the autoload line.
    pub init_file: PathBuf,
    /// Directory scanned for console fonts.
    pub fonts_dir: PathBuf,
}

/// On-disk config shape. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    paths: PathsConfig,
}

#[derive(Debug, Default, Deserialize)]
struct PathsConfig {
    save_file: Option<String>,
    theme_file: Option<String>,
    init_file: Option<String>,
    fonts_dir: Option<String>,
}

const LOCAL_CONFIG: &str = "ttytint.toml";
const DEFAULT_FONTS_DIR: &str = "/usr/share/consolefonts";
const DEFAULT_SAVE_FILE: &str = "my_theme.sh";

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from the --config flag);
/// when given, failure to read it is an error rather than a silent fallback.
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        dirs::home_dir,
        dirs::config_dir,
    )
}

fn load_config_from_sources<FRead, FHome, FConfigDir>(
    path_override: Option<&str>,
    read_file: FRead,
    home_dir: FHome,
    config_dir: FConfigDir,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FHome: Fn() -> Option<PathBuf>,
    FConfigDir: Fn() -> Option<PathBuf>,
{
    let file_config = if let Some(explicit) = path_override {
        let text = read_file(Path::new(explicit))?;
        toml::from_str::<FileConfig>(&text)?
    } else {
        let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_root) = config_dir() {
            candidates.push(config_root.join("ttytint").join(LOCAL_CONFIG));
        }
        let mut found = FileConfig::default();
        for candidate in candidates {
            match read_file(&candidate) {
                Ok(text) => {
                    found = toml::from_str::<FileConfig>(&text)?;
                    break;
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ConfigError::Io(e)),
            }
        }
        found
    };

    let home = home_dir()
        .ok_or_else(|| ConfigError::Invalid("unable to resolve home directory".to_string()))?;
    let paths = file_config.paths;
    Ok(Config {
        save_file: paths
            .save_file
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE)),
        theme_file: paths
            .theme_file
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".tty_theme_current.sh")),
        init_file: paths
            .init_file
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".bashrc")),
        fonts_dir: paths
            .fonts_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONTS_DIR)),
    })
}
