//! UI module for sprintboard
//!
//! This module contains the rendering functions for the shell and the
//! dashboard page: stat cards, the sprint chart, the activity timeline
//! and the performance gauges.

mod chart;
mod dashboard;
mod helpers;
mod layout;
mod performance;
mod shell;
mod stats;
mod timeline;

pub use dashboard::{PERFORMANCE_BARS, RECENT_ACTIVITIES, SPRINT_PROGRESS, STAT_CARDS};
pub use shell::render_shell;

use ratatui::{backend::TestBackend, Terminal};

use crate::app::App;

/// Render one frame off-screen and return its rows as plain text
pub fn render_to_lines(app: &App, width: u16, height: u16) -> anyhow::Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    let mut result = Ok(0);
    terminal.draw(|frame| result = render_shell(frame, app))?;
    result?;
    Ok(helpers::buffer_lines(terminal.backend().buffer()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeSource;
    use crate::error::ThemeError;
    use crate::theme::Theme;
    use std::path::Path;

    fn app_at(location: &str) -> App {
        App::new(Theme::default(), ThemeSource::BuiltIn, location)
    }

    #[test]
    fn test_root_renders_dashboard() {
        let text = render_to_lines(&app_at("/"), 120, 40).unwrap().join("\n");
        assert!(text.contains("Dashboard"));
        for card in STAT_CARDS.iter() {
            assert!(text.contains(card.title), "missing {}", card.title);
            assert!(text.contains(card.value), "missing {}", card.value);
        }
        assert!(text.contains("Sprint Progress"));
        assert!(text.contains("Recent Activities"));
        assert!(text.contains("Team Performance"));
    }

    #[test]
    fn test_undefined_path_renders_no_content() {
        let lines = render_to_lines(&app_at("/reports"), 120, 40).unwrap();
        let text = lines.join("\n");
        assert!(text.contains("location: /reports"));
        assert!(!text.contains("Active Projects"));
        assert!(!text.contains("Sprint Progress"));
        // Only the header and key bar carry text
        let non_empty = lines.iter().filter(|l| !l.is_empty()).count();
        assert_eq!(non_empty, 2);
    }

    #[test]
    fn test_renders_at_every_breakpoint() {
        for (width, height) in [(120, 40), (80, 60), (50, 80)] {
            let text = render_to_lines(&app_at("/"), width, height).unwrap().join("\n");
            assert!(text.contains("Team Members"), "{width}x{height}");
            assert!(text.contains("85%"), "{width}x{height}");
        }
    }

    fn has_line_with(lines: &[String], left: &str, right: &str) -> bool {
        lines.iter().any(|l| l.contains(left) && l.contains(right))
    }

    #[test]
    fn test_four_card_row_from_width_100() {
        let lines = render_to_lines(&app_at("/"), 100, 40).unwrap();
        assert!(has_line_with(&lines, "Active Projects", "Team Members"));

        let lines = render_to_lines(&app_at("/"), 99, 40).unwrap();
        assert!(!has_line_with(&lines, "Active Projects", "Team Members"));
    }

    #[test]
    fn test_two_card_rows_from_width_60() {
        let lines = render_to_lines(&app_at("/"), 60, 40).unwrap();
        assert!(has_line_with(&lines, "Active Projects", "Team Velocity"));
        assert!(has_line_with(&lines, "Open Tasks", "Team Members"));

        let lines = render_to_lines(&app_at("/"), 59, 40).unwrap();
        assert!(!has_line_with(&lines, "Active Projects", "Team Velocity"));
    }

    #[test]
    fn test_small_terminal_reaches_all_content_by_scrolling() {
        let mut app = app_at("/");
        let mut seen = Vec::new();
        for offset in 0..=80 {
            app.scroll_offset = offset;
            seen.extend(render_to_lines(&app, 80, 24).unwrap());
        }
        let text = seen.join("\n");

        for card in STAT_CARDS.iter() {
            assert!(text.contains(card.title), "missing {}", card.title);
            assert!(text.contains(card.value), "missing {}", card.value);
        }
        for activity in RECENT_ACTIVITIES.iter() {
            assert!(text.contains(activity.title), "missing {}", activity.title);
        }
        assert!(text.contains("to inspect a sprint"));
        for bar in PERFORMANCE_BARS.iter() {
            assert!(text.contains(bar.label), "missing {}", bar.label);
            assert!(text.contains(&format!("{}%", bar.value)), "missing {}", bar.value);
        }
    }

    #[test]
    fn test_scrolling_keeps_header_and_key_bar() {
        let mut app = app_at("/");
        app.scroll_offset = 10;
        let lines = render_to_lines(&app, 80, 24).unwrap();
        assert!(lines[0].contains("location: /"));
        assert!(lines.last().unwrap().contains("q: Quit"));
        assert!(!lines.iter().any(|l| l.contains("Dashboard") && !l.contains("location")));
    }

    #[test]
    fn test_missing_palette_key_fails_render() {
        let theme = Theme::from_json(
            r##"{ "palette": {
                "primary": { "main": "#1976d2", "light": "#42a5f5" },
                "success": { "main": "#2e7d32", "light": "#4caf50" },
                "warning": { "main": "#ed6c02", "light": "#ff9800" }
            } }"##,
            Path::new("inline.json"),
        )
        .unwrap();
        let app = App::new(theme, ThemeSource::BuiltIn, "/");

        let err = render_to_lines(&app, 120, 40).unwrap_err();
        let theme_err = err.downcast_ref::<ThemeError>().unwrap();
        assert!(matches!(theme_err, ThemeError::UnknownPaletteColor(key) if key == "secondary"));
    }

    #[test]
    fn test_missing_palette_key_ignored_off_route() {
        let theme = Theme::from_json(r##"{ "palette": {} }"##, Path::new("inline.json")).unwrap();
        let app = App::new(theme, ThemeSource::BuiltIn, "/elsewhere");
        assert!(render_to_lines(&app, 80, 24).is_ok());
    }

    #[test]
    fn test_location_prompt_in_bottom_bar() {
        let mut app = app_at("/");
        app.location_input = Some("/rep".to_string());
        let lines = render_to_lines(&app, 100, 30).unwrap();
        assert!(lines.last().unwrap().contains("Go to: /rep"));
    }
}
