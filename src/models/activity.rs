//! Recent activity entries for the timeline.

use serde::Serialize;

/// What kind of event an activity records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Story,
    Sprint,
    Task,
}

impl ActivityKind {
    /// Palette key for the timeline dot
    pub fn dot_color(&self) -> &'static str {
        match self {
            ActivityKind::Story => "primary",
            ActivityKind::Sprint => "success",
            ActivityKind::Task => "warning",
        }
    }
}

/// One timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}
