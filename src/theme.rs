//! Theme module for sprintboard
//!
//! Holds the named palette used by stat cards, chart bars, timeline dots
//! and gauges, plus the surface colors the shell paints behind everything.
//! Themes can be loaded from a JSON file; anything left out of the file's
//! surface section falls back to the built-in defaults.

use std::collections::BTreeMap;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::{Result, ThemeError};

// ============================================================================
// Surface Colors
// ============================================================================

/// Page background (#0a0e14)
pub const BG_DEFAULT: Color = Color::Rgb(10, 14, 20);

/// Card background (#12161c)
pub const BG_PAPER: Color = Color::Rgb(18, 22, 28);

/// Card borders and separators (#1e2530)
pub const DIVIDER: Color = Color::Rgb(30, 37, 48);

/// Headline text (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Labels, subtitles and captions (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

// ============================================================================
// Palette
// ============================================================================

/// Built-in palette entries as (key, main, light)
const DEFAULT_PALETTE: [(&str, Color, Color); 6] = [
    ("primary", Color::Rgb(25, 118, 210), Color::Rgb(66, 165, 245)),
    ("secondary", Color::Rgb(156, 39, 176), Color::Rgb(186, 104, 200)),
    ("success", Color::Rgb(46, 125, 50), Color::Rgb(76, 175, 80)),
    ("warning", Color::Rgb(237, 108, 2), Color::Rgb(255, 152, 0)),
    ("error", Color::Rgb(211, 47, 47), Color::Rgb(239, 83, 80)),
    ("info", Color::Rgb(2, 136, 209), Color::Rgb(3, 169, 244)),
];

/// A named palette entry with its two shades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub main: Color,
    pub light: Color,
}

/// Active visual theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    palette: BTreeMap<String, PaletteColor>,
    pub background: Color,
    pub paper: Color,
    pub divider: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let palette = DEFAULT_PALETTE
            .iter()
            .map(|&(key, main, light)| (key.to_string(), PaletteColor { main, light }))
            .collect();

        Self {
            palette,
            background: BG_DEFAULT,
            paper: BG_PAPER,
            divider: DIVIDER,
            text_primary: TEXT_PRIMARY,
            text_secondary: TEXT_SECONDARY,
        }
    }
}

impl Theme {
    /// Look up a palette entry by key
    pub fn color(&self, key: &str) -> Result<&PaletteColor> {
        self.palette
            .get(key)
            .ok_or_else(|| ThemeError::UnknownPaletteColor(key.to_string()))
    }

    /// Palette keys in sorted order
    pub fn palette_keys(&self) -> impl Iterator<Item = &str> {
        self.palette.keys().map(String::as_str)
    }

    /// Parse a theme from JSON text. `path` is only used for error reporting.
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        let file: ThemeFile = serde_json::from_str(text).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        file.into_theme()
    }
}

/// On-disk representation, colors still as hex strings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    palette: BTreeMap<String, ShadesFile>,
    background: Option<String>,
    paper: Option<String>,
    divider: Option<String>,
    text_primary: Option<String>,
    text_secondary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShadesFile {
    main: String,
    light: String,
}

impl ThemeFile {
    fn into_theme(self) -> Result<Theme> {
        let mut palette = BTreeMap::new();
        for (key, shades) in self.palette {
            let color = PaletteColor {
                main: parse_hex_color(&shades.main)?,
                light: parse_hex_color(&shades.light)?,
            };
            palette.insert(key, color);
        }

        Ok(Theme {
            palette,
            background: surface_or(self.background, BG_DEFAULT)?,
            paper: surface_or(self.paper, BG_PAPER)?,
            divider: surface_or(self.divider, DIVIDER)?,
            text_primary: surface_or(self.text_primary, TEXT_PRIMARY)?,
            text_secondary: surface_or(self.text_secondary, TEXT_SECONDARY)?,
        })
    }
}

fn surface_or(value: Option<String>, fallback: Color) -> Result<Color> {
    match value {
        Some(hex) => parse_hex_color(&hex),
        None => Ok(fallback),
    }
}

/// Parse a `#rrggbb` string into an RGB color
pub fn parse_hex_color(value: &str) -> Result<Color> {
    let invalid = || ThemeError::InvalidColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_has_expected_keys() {
        let theme = Theme::default();
        let keys: Vec<&str> = theme.palette_keys().collect();
        assert_eq!(
            keys,
            vec!["error", "info", "primary", "secondary", "success", "warning"]
        );
    }

    #[test]
    fn test_color_lookup_unknown_key() {
        let theme = Theme::default();
        let err = theme.color("tertiary").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPaletteColor(ref key) if key == "tertiary"));
        assert_eq!(err.to_string(), "unknown palette color: tertiary");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#1976d2").unwrap(), Color::Rgb(25, 118, 210));
        assert_eq!(parse_hex_color("#FFFFFF").unwrap(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        for bad in ["1976d2", "#1976d", "#1976d2ff", "#zz76d2", "", "#"] {
            assert!(
                matches!(parse_hex_color(bad), Err(ThemeError::InvalidColor(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_from_json_surface_defaults() {
        let json = r##"{ "palette": { "primary": { "main": "#000001", "light": "#000002" } } }"##;
        let theme = Theme::from_json(json, Path::new("inline.json")).unwrap();

        assert_eq!(theme.background, BG_DEFAULT);
        assert_eq!(theme.text_secondary, TEXT_SECONDARY);
        assert_eq!(
            *theme.color("primary").unwrap(),
            PaletteColor {
                main: Color::Rgb(0, 0, 1),
                light: Color::Rgb(0, 0, 2),
            }
        );
        // Palette is taken as written, nothing merged in
        assert!(theme.color("success").is_err());
    }

    #[test]
    fn test_from_json_surface_override() {
        let json = r##"{ "palette": {}, "background": "#ffffff", "divider": "#101010" }"##;
        let theme = Theme::from_json(json, Path::new("inline.json")).unwrap();
        assert_eq!(theme.background, Color::Rgb(255, 255, 255));
        assert_eq!(theme.divider, Color::Rgb(16, 16, 16));
        assert_eq!(theme.paper, BG_PAPER);
    }

    #[test]
    fn test_from_json_invalid_color() {
        let json = r##"{ "palette": { "primary": { "main": "blue", "light": "#42a5f5" } } }"##;
        let err = Theme::from_json(json, Path::new("inline.json")).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor(ref v) if v == "blue"));
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = Theme::from_json("{ not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
