//! Dashboard page: stat cards, sprint chart, activity timeline and
//! team performance gauges, all fed from fixed data.

use std::rc::Rc;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::chart::render_sprint_chart;
use super::layout::Breakpoint;
use super::performance::{performance_height, render_performance};
use super::stats::{render_stat_cards, stat_grid_height};
use super::timeline::{render_activity_timeline, timeline_lines};
use crate::error::Result;
use crate::models::{Activity, ActivityKind, ProgressBar, SprintProgress, StatCard};
use crate::theme::Theme;

pub const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        title: "Active Projects",
        value: "12",
        subtitle: "3 projects completed this month",
        color: "primary",
    },
    StatCard {
        title: "Team Velocity",
        value: "85%",
        subtitle: "+5% from last sprint",
        color: "success",
    },
    StatCard {
        title: "Open Tasks",
        value: "24",
        subtitle: "8 tasks due this week",
        color: "warning",
    },
    StatCard {
        title: "Team Members",
        value: "8",
        subtitle: "2 new members this month",
        color: "secondary",
    },
];

pub const SPRINT_PROGRESS: [SprintProgress; 4] = [
    SprintProgress::new("Sprint 1", 85, 100),
    SprintProgress::new("Sprint 2", 90, 100),
    SprintProgress::new("Sprint 3", 75, 100),
    SprintProgress::new("Sprint 4", 95, 100),
];

// Most recent first, in the order given here
pub const RECENT_ACTIVITIES: [Activity; 3] = [
    Activity {
        title: "New User Story Created",
        description: "User authentication system implementation",
        time: "2 hours ago",
        kind: ActivityKind::Story,
    },
    Activity {
        title: "Sprint Completed",
        description: "Sprint 4 completed with 95% success rate",
        time: "1 day ago",
        kind: ActivityKind::Sprint,
    },
    Activity {
        title: "Task Assigned",
        description: "Password reset functionality assigned to John",
        time: "2 days ago",
        kind: ActivityKind::Task,
    },
];

pub const PERFORMANCE_BARS: [ProgressBar; 2] = [
    ProgressBar {
        label: "Sprint Velocity",
        value: 85,
        color: "primary",
    },
    ProgressBar {
        label: "Code Quality",
        value: 92,
        color: "success",
    },
];

/// Minimum height of the sprint chart card
const CHART_HEIGHT: u16 = 14;

/// Outer height of the timeline card at the given card width
fn timeline_height(width: u16, theme: &Theme) -> Result<u16> {
    // Borders (2) and horizontal padding (2) around the timeline text
    let text_width = width.saturating_sub(4) as usize;
    let rows = timeline_lines(&RECENT_ACTIVITIES, theme, text_width)?.len();
    Ok(rows as u16 + 2)
}

/// Chart on the left two thirds, timeline on the right third
fn split_middle(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(area)
}

/// Height of the wide layout's chart/timeline row
fn middle_height(width: u16, theme: &Theme) -> Result<u16> {
    let timeline_width = split_middle(Rect::new(0, 0, width, 1))[1].width;
    Ok(CHART_HEIGHT.max(timeline_height(timeline_width, theme)?))
}

/// Rows the whole page needs to show every section in full
pub fn dashboard_height(width: u16, breakpoint: Breakpoint, theme: &Theme) -> Result<u16> {
    let stats_height = stat_grid_height(STAT_CARDS.len(), breakpoint);
    let perf_height = performance_height(PERFORMANCE_BARS.len(), breakpoint);
    let body_height = match breakpoint {
        Breakpoint::Md => middle_height(width, theme)?,
        Breakpoint::Sm | Breakpoint::Xs => CHART_HEIGHT + timeline_height(width, theme)?,
    };
    Ok(1 + stats_height + body_height + perf_height)
}

/// Render the dashboard into the shell's content area.
///
/// The breakpoint is chosen by the caller from the terminal width. When
/// the page is taller than `area`, it is drawn off-screen at full height
/// and the rows starting at `scroll` are copied in, so no section is
/// squeezed. Returns the largest scroll offset that still moves the page.
pub fn render_dashboard(
    area: Rect,
    breakpoint: Breakpoint,
    scroll: u16,
    selected_sprint: Option<usize>,
    theme: &Theme,
    buf: &mut Buffer,
) -> Result<u16> {
    let page_height = dashboard_height(area.width, breakpoint, theme)?;
    if page_height <= area.height {
        draw_dashboard(area, breakpoint, selected_sprint, theme, buf)?;
        return Ok(0);
    }

    let max_scroll = page_height - area.height;
    let offset = scroll.min(max_scroll);

    let mut page = Buffer::empty(Rect::new(0, 0, area.width, page_height));
    page.set_style(page.area, Style::default().bg(theme.background).fg(theme.text_primary));
    draw_dashboard(page.area, breakpoint, selected_sprint, theme, &mut page)?;

    for y in 0..area.height {
        for x in 0..area.width {
            if let (Some(src), Some(dst)) =
                (page.cell((x, y + offset)), buf.cell_mut((area.x + x, area.y + y)))
            {
                *dst = src.clone();
            }
        }
    }

    Ok(max_scroll)
}

fn draw_dashboard(
    area: Rect,
    breakpoint: Breakpoint,
    selected_sprint: Option<usize>,
    theme: &Theme,
    buf: &mut Buffer,
) -> Result<()> {
    let stats_height = stat_grid_height(STAT_CARDS.len(), breakpoint);
    let perf_height = performance_height(PERFORMANCE_BARS.len(), breakpoint);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Dashboard",
        Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD),
    )));

    match breakpoint {
        Breakpoint::Md => {
            let body_height = middle_height(area.width, theme)?;
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),            // Heading
                    Constraint::Length(stats_height), // Stat cards
                    Constraint::Min(body_height),     // Chart + activities
                    Constraint::Length(perf_height),  // Team performance
                ])
                .split(area);

            heading.render(sections[0], buf);
            render_stat_cards(sections[1], &STAT_CARDS, breakpoint, theme, buf)?;

            let middle = split_middle(sections[2]);
            render_sprint_chart(middle[0], &SPRINT_PROGRESS, selected_sprint, theme, buf)?;
            render_activity_timeline(middle[1], &RECENT_ACTIVITIES, theme, buf)?;

            render_performance(sections[3], &PERFORMANCE_BARS, breakpoint, theme, buf)?;
        }
        Breakpoint::Sm | Breakpoint::Xs => {
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(stats_height),
                    Constraint::Length(CHART_HEIGHT),
                    Constraint::Length(timeline_height(area.width, theme)?),
                    Constraint::Length(perf_height),
                ])
                .split(area);

            heading.render(sections[0], buf);
            render_stat_cards(sections[1], &STAT_CARDS, breakpoint, theme, buf)?;
            render_sprint_chart(sections[2], &SPRINT_PROGRESS, selected_sprint, theme, buf)?;
            render_activity_timeline(sections[3], &RECENT_ACTIVITIES, theme, buf)?;
            render_performance(sections[4], &PERFORMANCE_BARS, breakpoint, theme, buf)?;
        }
    }

    Ok(())
}
