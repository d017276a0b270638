//! Error types for theme loading and palette lookups.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a theme or resolving palette colors.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("unknown palette color: {0}")]
    UnknownPaletteColor(String),

    #[error("invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),

    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse theme file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = ThemeError> = std::result::Result<T, E>;
