//! Headline numbers: stat cards and progress bars.

use serde::Serialize;

/// Summary card with a title, headline value and subtitle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    /// Palette key for the headline value
    pub color: &'static str,
}

/// Labelled gauge with a fixed percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressBar {
    pub label: &'static str,
    pub value: u16,
    /// Palette key: `main` fills the bar, `light` is the track
    pub color: &'static str,
}
