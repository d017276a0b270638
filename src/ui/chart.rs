//! Sprint progress bar chart

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use super::helpers::{card_block, card_title};
use crate::error::Result;
use crate::models::SprintProgress;
use crate::theme::Theme;

/// Upper bound of the value axis (percent)
pub const CHART_MAX: u64 = 100;

const BAR_WIDTH: u16 = 4;
const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 3;

/// The two series drawn per sprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Completed,
    Planned,
}

impl Series {
    pub fn label(&self) -> &'static str {
        match self {
            Series::Completed => "completed",
            Series::Planned => "planned",
        }
    }
}

/// One category on the shared axis with its bar values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartCategory {
    pub label: &'static str,
    pub bars: [(Series, u64); 2],
}

/// Map the dataset to chart categories, one per row in order
pub fn chart_categories(data: &[SprintProgress]) -> Vec<ChartCategory> {
    data.iter()
        .map(|row| ChartCategory {
            label: row.name,
            bars: [
                (Series::Completed, row.completed),
                (Series::Planned, row.planned),
            ],
        })
        .collect()
}

/// Render the chart card: bars, legend and tooltip line
pub fn render_sprint_chart(
    area: Rect,
    data: &[SprintProgress],
    selected: Option<usize>,
    theme: &Theme,
    buf: &mut Buffer,
) -> Result<()> {
    let primary = *theme.color("primary")?;
    let series_color = |series: Series| match series {
        Series::Completed => primary.main,
        Series::Planned => primary.light,
    };

    let block = card_block(theme).title(card_title("Sprint Progress", theme));

    let inner = block.inner(area);
    block.render(area, buf);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Bars with category labels
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Tooltip
        ])
        .split(inner);

    let mut chart = BarChart::default()
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP)
        .max(CHART_MAX)
        .value_style(Style::default().fg(theme.background).add_modifier(Modifier::BOLD));

    for (index, category) in chart_categories(data).iter().enumerate() {
        let label_style = if selected == Some(index) {
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        let bars: Vec<Bar> = category
            .bars
            .iter()
            .map(|&(series, value)| {
                Bar::default()
                    .value(value)
                    .style(Style::default().fg(series_color(series)))
            })
            .collect();

        chart = chart.data(
            BarGroup::default()
                .label(Line::from(category.label).style(label_style))
                .bars(&bars),
        );
    }

    chart.render(sections[0], buf);

    let legend = Line::from(vec![
        Span::styled("■ ", Style::default().fg(series_color(Series::Completed))),
        Span::styled(Series::Completed.label(), Style::default().fg(theme.text_secondary)),
        Span::raw("   "),
        Span::styled("■ ", Style::default().fg(series_color(Series::Planned))),
        Span::styled(Series::Planned.label(), Style::default().fg(theme.text_secondary)),
    ]);
    Paragraph::new(legend).render(sections[1], buf);

    let tooltip = match selected.and_then(|index| data.get(index)) {
        Some(row) => Line::from(Span::styled(
            row.tooltip(),
            Style::default().fg(theme.text_primary),
        )),
        None => Line::from(Span::styled(
            "←/→ to inspect a sprint",
            Style::default().fg(theme.text_secondary).add_modifier(Modifier::ITALIC),
        )),
    };
    Paragraph::new(tooltip).render(sections[2], buf);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::buffer_lines;
    use crate::ui::SPRINT_PROGRESS;

    #[test]
    fn test_four_categories_with_two_bars_each() {
        let categories = chart_categories(&SPRINT_PROGRESS);
        assert_eq!(categories.len(), 4);

        for (category, row) in categories.iter().zip(SPRINT_PROGRESS.iter()) {
            assert_eq!(category.label, row.name);
            assert_eq!(
                category.bars,
                [(Series::Completed, row.completed), (Series::Planned, row.planned)]
            );
        }
    }

    #[test]
    fn test_categories_keep_dataset_order() {
        let labels: Vec<&str> = chart_categories(&SPRINT_PROGRESS)
            .iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["Sprint 1", "Sprint 2", "Sprint 3", "Sprint 4"]);
    }

    fn render(selected: Option<usize>) -> Vec<String> {
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 16));
        render_sprint_chart(buf.area, &SPRINT_PROGRESS, selected, &theme, &mut buf).unwrap();
        buffer_lines(&buf)
    }

    #[test]
    fn test_tooltip_shows_selected_sprint() {
        let lines = render(Some(2));
        assert!(lines.iter().any(|l| l.contains("Sprint 3 · completed: 75 · planned: 100")));
    }

    #[test]
    fn test_tooltip_hint_without_selection() {
        let lines = render(None);
        assert!(lines.iter().any(|l| l.contains("to inspect a sprint")));
        assert!(lines.iter().any(|l| l.contains("completed") && l.contains("planned")));
    }
}
