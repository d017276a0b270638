//! Layout frame around routed content: header with navigation, content
//! area, and key hint bar.

use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use super::dashboard::render_dashboard;
use super::layout::Breakpoint;
use crate::app::App;
use crate::error::Result;
use crate::router::View;

const KEY_HINTS: &str =
    " q: Quit | /: Go to path | ←/→: Sprint | ↑/↓/PgUp/PgDn: Scroll | Esc: Clear ";

/// Draw the whole frame for the current app state. Returns the largest
/// scroll offset the routed content accepts at this frame size.
pub fn render_shell(frame: &mut Frame, app: &App) -> Result<u16> {
    let theme = &app.theme;
    let area = frame.area();

    // Baseline: paint every cell with the theme surface
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text_primary)),
        area,
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Routed content
            Constraint::Length(1), // Key hints / location prompt
        ])
        .split(area);

    render_header(frame, main_layout[0], app);

    let content_area = Block::default()
        .padding(Padding::horizontal(1))
        .inner(main_layout[1]);
    // Breakpoints follow the terminal width, not the padded content width
    let breakpoint = Breakpoint::from_width(area.width);

    // No catch-all route: unmatched locations leave the content empty
    let max_scroll = match app.current_view() {
        Some(View::Dashboard) => render_dashboard(
            content_area,
            breakpoint,
            app.scroll_offset,
            app.selected_sprint,
            theme,
            frame.buffer_mut(),
        )?,
        None => 0,
    };

    render_bottom_bar(frame, main_layout[2], app);
    Ok(max_scroll)
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(
            " Sprintboard ",
            Style::default()
                .fg(theme.background)
                .bg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    let active = app.current_view();
    for route in app.router.routes() {
        let style = if active == Some(route.view) {
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(format!("{} {}", route.view.label(), route.path), style));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        format!("location: {}", app.location),
        Style::default().fg(theme.text_secondary),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.paper)),
        area,
    );
}

fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bar = match &app.location_input {
        Some(input) => Paragraph::new(Line::from(vec![
            Span::styled(" Go to: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(input.clone()),
            Span::styled("█", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])),
        None => Paragraph::new(KEY_HINTS),
    };

    let bar_style = Style::default().fg(theme.background).bg(theme.text_secondary);
    frame.render_widget(bar.style(bar_style), area);
}
