//! Team performance gauges

use ratatui::{
    prelude::*,
    widgets::{Gauge, Padding, Paragraph},
};

use super::helpers::{card_block, card_title};
use super::layout::{columns, Breakpoint};
use crate::error::Result;
use crate::models::ProgressBar;
use crate::theme::Theme;

/// Label line plus gauge line
const BAR_HEIGHT: u16 = 2;

/// Outer height of the performance card
pub fn performance_height(count: usize, breakpoint: Breakpoint) -> u16 {
    let rows = match breakpoint {
        Breakpoint::Md => 1,
        _ => count as u16,
    };
    rows * BAR_HEIGHT + 2
}

/// Gauge for one progress bar: `main` fill over a `light` track
pub fn progress_gauge(bar: &ProgressBar, theme: &Theme) -> Result<Gauge<'static>> {
    let color = theme.color(bar.color)?;
    Ok(Gauge::default()
        .gauge_style(Style::default().fg(color.main).bg(color.light))
        .percent(bar.value.min(100))
        .label(Span::styled(
            format!("{}%", bar.value),
            Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD),
        )))
}

/// Render the "Team Performance" card
pub fn render_performance(
    area: Rect,
    bars: &[ProgressBar],
    breakpoint: Breakpoint,
    theme: &Theme,
    buf: &mut Buffer,
) -> Result<()> {
    let block = card_block(theme)
        .title(card_title("Team Performance", theme))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    block.render(area, buf);

    let cells: Vec<Rect> = match breakpoint {
        Breakpoint::Md => columns(inner, bars.len().max(1) as u32)
            .into_iter()
            .map(|cell| Rect {
                width: cell.width.saturating_sub(2),
                ..cell
            })
            .collect(),
        _ => (0..bars.len())
            .map(|i| {
                let y = inner.y + i as u16 * BAR_HEIGHT;
                Rect::new(inner.x, y, inner.width, BAR_HEIGHT).intersection(inner)
            })
            .collect(),
    };

    for (bar, cell) in bars.iter().zip(cells) {
        if cell.height < BAR_HEIGHT {
            continue;
        }

        let label = Paragraph::new(Line::from(Span::styled(
            bar.label,
            Style::default().fg(theme.text_secondary).add_modifier(Modifier::BOLD),
        )));
        label.render(Rect { height: 1, ..cell }, buf);
        progress_gauge(bar, theme)?.render(
            Rect {
                y: cell.y + 1,
                height: 1,
                ..cell
            },
            buf,
        );
    }

    Ok(())
}
