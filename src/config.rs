//! Theme discovery and loading.

use std::path::{Path, PathBuf};

use crate::error::{Result, ThemeError};
use crate::theme::Theme;

/// Directory name used under the working directory and the user config dir
const APP_DIR: &str = "sprintboard";

/// File name of a theme inside `APP_DIR`
const THEME_FILE: &str = "theme.json";

/// Where the active theme came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    File(PathBuf),
    BuiltIn,
}

impl ThemeSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ThemeSource::File(path) => Some(path),
            ThemeSource::BuiltIn => None,
        }
    }
}

/// Find the theme file in order of priority:
/// 1. Explicit path (CLI flag or environment)
/// 2. ./sprintboard/theme.json (local project customization)
/// 3. <config dir>/sprintboard/theme.json (global user config)
/// 4. Built-in theme
pub fn find_theme_source(explicit: Option<&Path>) -> ThemeSource {
    if let Some(path) = explicit {
        return ThemeSource::File(path.to_path_buf());
    }

    let local_path = PathBuf::from(APP_DIR).join(THEME_FILE);
    if local_path.is_file() {
        return ThemeSource::File(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global_path = config_dir.join(APP_DIR).join(THEME_FILE);
        if global_path.is_file() {
            return ThemeSource::File(global_path);
        }
    }

    ThemeSource::BuiltIn
}

/// Read and parse a theme file
pub fn load_theme_file(path: &Path) -> Result<Theme> {
    let text = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Theme::from_json(&text, path)
}

/// Resolve the theme source and load it
pub fn load_theme(source: &ThemeSource) -> Result<Theme> {
    match source {
        ThemeSource::File(path) => load_theme_file(path),
        ThemeSource::BuiltIn => Ok(Theme::default()),
    }
}
