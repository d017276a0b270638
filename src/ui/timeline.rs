//! Recent activity timeline

use ratatui::{
    prelude::*,
    widgets::{Padding, Paragraph},
};

use super::helpers::{card_block, card_title, truncate, wrap_text};
use crate::error::Result;
use crate::models::Activity;
use crate::theme::Theme;

pub const DOT: &str = "●";
pub const CONNECTOR: &str = "│";

/// Content lines are indented to sit right of the dot
const INDENT: &str = "  ";

/// Build the timeline lines: each entry starts with a colored dot, and a
/// connector line joins each entry to the next. The last entry gets no
/// trailing connector.
pub fn timeline_lines(
    activities: &[Activity],
    theme: &Theme,
    width: usize,
) -> Result<Vec<Line<'static>>> {
    let text_width = width.saturating_sub(INDENT.len());
    let muted = Style::default().fg(theme.text_secondary);
    let mut lines = Vec::new();

    for (index, activity) in activities.iter().enumerate() {
        let dot = theme.color(activity.kind.dot_color())?;

        lines.push(Line::from(vec![
            Span::styled(format!("{} ", DOT), Style::default().fg(dot.main)),
            Span::styled(
                truncate(activity.title, text_width),
                Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD),
            ),
        ]));

        for text in wrap_text(activity.description, text_width) {
            lines.push(Line::from(vec![Span::raw(INDENT), Span::styled(text, muted)]));
        }

        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(activity.time.to_string(), muted.add_modifier(Modifier::DIM)),
        ]));

        if index < activities.len() - 1 {
            lines.push(Line::from(Span::styled(
                CONNECTOR,
                Style::default().fg(theme.divider),
            )));
        }
    }

    Ok(lines)
}

/// Render the "Recent Activities" card
pub fn render_activity_timeline(
    area: Rect,
    activities: &[Activity],
    theme: &Theme,
    buf: &mut Buffer,
) -> Result<()> {
    let block = card_block(theme)
        .title(card_title("Recent Activities", theme))
        .padding(Padding::horizontal(1));

    let width = block.inner(area).width as usize;
    let lines = timeline_lines(activities, theme, width)?;

    Paragraph::new(lines).block(block).render(area, buf);
    Ok(())
}
