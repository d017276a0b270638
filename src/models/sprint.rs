//! Sprint progress records for the bar chart.

use serde::Serialize;

/// Completed vs planned percentage for one sprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SprintProgress {
    pub name: &'static str,
    pub completed: u64,
    pub planned: u64,
}

impl SprintProgress {
    pub const fn new(name: &'static str, completed: u64, planned: u64) -> Self {
        Self {
            name,
            completed,
            planned,
        }
    }

    /// Tooltip line shown for the selected sprint
    pub fn tooltip(&self) -> String {
        format!(
            "{} · completed: {} · planned: {}",
            self.name, self.completed, self.planned
        )
    }
}
