//! UI helper functions

use ratatui::{
    buffer::Buffer,
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use crate::theme::Theme;

/// Rounded card frame on the paper surface
pub fn card_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.divider))
        .style(Style::default().bg(theme.paper))
}

/// Card heading shown in the top border
pub fn card_title(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(format!(" {} ", title))
        .style(Style::default().fg(theme.text_primary).add_modifier(Modifier::BOLD))
}

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Truncate to `max_width` characters, marking the cut with "..."
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }
    let kept: String = text.chars().take(max_width - 3).collect();
    format!("{}...", kept)
}

/// Plain text of a styled line
#[cfg(test)]
pub fn line_text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Rows of a rendered buffer as plain strings, trailing blanks trimmed
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_single_word() {
        let result = wrap_text("hello", 10);
        assert_eq!(result, vec!["hello"]);
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        let result = wrap_text("hello world", 20);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("Sprint 1", 20), "Sprint 1");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("New User Story Created", 10), "New Use...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_line_text_joins_spans() {
        let line = Line::from(vec![Span::raw("● "), Span::raw("Sprint Completed")]);
        assert_eq!(line_text(&line), "● Sprint Completed");
    }

    #[test]
    fn test_buffer_lines_trims_trailing_blanks() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 6, 2));
        buffer.set_string(0, 0, "ab", Style::default());
        assert_eq!(buffer_lines(&buffer), vec!["ab".to_string(), String::new()]);
    }
}
