//! Width breakpoints for the dashboard grid.

use ratatui::prelude::*;

/// Terminal width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Narrow: everything stacked
    Xs,
    /// Medium: 2x2 stat cards, chart and activities stacked
    Sm,
    /// Wide: full row of stat cards, chart beside activities
    Md,
}

impl Breakpoint {
    pub const SM_MIN_WIDTH: u16 = 60;
    pub const MD_MIN_WIDTH: u16 = 100;

    pub fn from_width(width: u16) -> Self {
        if width >= Self::MD_MIN_WIDTH {
            Breakpoint::Md
        } else if width >= Self::SM_MIN_WIDTH {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }
}

/// Split `area` into `count` equal-width columns
pub fn columns(area: Rect, count: u32) -> Vec<Rect> {
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}
