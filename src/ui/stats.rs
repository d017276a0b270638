//! Stat card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Padding, Paragraph},
};

use super::helpers::{card_block, truncate, wrap_text};
use super::layout::{columns, Breakpoint};
use crate::error::Result;
use crate::models::StatCard;
use crate::theme::Theme;

/// Outer height of one card: borders + title + value + two subtitle lines
pub const STAT_CARD_HEIGHT: u16 = 6;

const SUBTITLE_MAX_LINES: usize = 2;

/// Cards per row at each breakpoint
fn cards_per_row(breakpoint: Breakpoint) -> usize {
    match breakpoint {
        Breakpoint::Md => 4,
        Breakpoint::Sm => 2,
        Breakpoint::Xs => 1,
    }
}

/// Height the stat card grid needs for `count` cards
pub fn stat_grid_height(count: usize, breakpoint: Breakpoint) -> u16 {
    let per_row = cards_per_row(breakpoint);
    let rows = count.div_ceil(per_row);
    rows as u16 * STAT_CARD_HEIGHT
}

/// Build the text lines of a stat card for the given inner width.
/// Fails if the card's color is not in the theme palette.
pub fn stat_card_lines(
    card: &StatCard,
    theme: &Theme,
    inner_width: usize,
) -> Result<Vec<Line<'static>>> {
    let accent = theme.color(card.color)?;
    let muted = Style::default().fg(theme.text_secondary);

    let mut lines = vec![
        Line::from(Span::styled(truncate(card.title, inner_width), muted)),
        Line::from(Span::styled(
            card.value.to_string(),
            Style::default().fg(accent.main).add_modifier(Modifier::BOLD),
        )),
    ];

    let mut subtitle = wrap_text(card.subtitle, inner_width);
    if subtitle.len() > SUBTITLE_MAX_LINES {
        let rest = subtitle.split_off(SUBTITLE_MAX_LINES - 1).join(" ");
        subtitle.push(truncate(&rest, inner_width));
    }
    lines.extend(subtitle.into_iter().map(|text| Line::from(Span::styled(text, muted))));

    Ok(lines)
}

/// Render a single stat card
pub fn render_stat_card(
    area: Rect,
    card: &StatCard,
    theme: &Theme,
    buf: &mut Buffer,
) -> Result<()> {
    let block = card_block(theme).padding(Padding::horizontal(1));

    let inner_width = block.inner(area).width as usize;
    let lines = stat_card_lines(card, theme, inner_width)?;

    Paragraph::new(lines).block(block).render(area, buf);
    Ok(())
}

/// Render the stat card grid, wrapping rows by breakpoint
pub fn render_stat_cards(
    area: Rect,
    cards: &[StatCard],
    breakpoint: Breakpoint,
    theme: &Theme,
    buf: &mut Buffer,
) -> Result<()> {
    let per_row = cards_per_row(breakpoint);

    for (row_index, row_cards) in cards.chunks(per_row).enumerate() {
        let y = area.y.saturating_add(row_index as u16 * STAT_CARD_HEIGHT);
        let row_area = Rect::new(area.x, y, area.width, STAT_CARD_HEIGHT).intersection(area);
        if row_area.is_empty() {
            break;
        }

        let cells = columns(row_area, per_row as u32);
        for (card, cell) in row_cards.iter().zip(cells) {
            render_stat_card(cell, card, theme, buf)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::ui::helpers::line_text;
    use crate::ui::STAT_CARDS;
    use std::path::Path;

    #[test]
    fn test_value_line_matches_literal() {
        let theme = Theme::default();
        for card in STAT_CARDS.iter() {
            let lines = stat_card_lines(card, &theme, 24).unwrap();
            assert_eq!(line_text(&lines[0]), card.title);
            assert_eq!(line_text(&lines[1]), card.value);
        }
    }

    #[test]
    fn test_value_uses_palette_main() {
        let theme = Theme::default();
        let card = &STAT_CARDS[1];
        let lines = stat_card_lines(card, &theme, 24).unwrap();
        let success = theme.color("success").unwrap();
        assert_eq!(lines[1].spans[0].style.fg, Some(success.main));
    }

    #[test]
    fn test_subtitle_wraps_and_caps() {
        let theme = Theme::default();
        let lines = stat_card_lines(&STAT_CARDS[0], &theme, 12).unwrap();
        // title + value + at most two subtitle lines
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| line_text(l).chars().count() <= 12));
    }

    #[test]
    fn test_unknown_color_fails() {
        let theme = Theme::from_json(
            r##"{ "palette": { "primary": { "main": "#000000", "light": "#111111" } } }"##,
            Path::new("inline.json"),
        )
        .unwrap();
        let err = stat_card_lines(&STAT_CARDS[2], &theme, 24).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPaletteColor(ref key) if key == "warning"));
    }

    #[test]
    fn test_grid_height_by_breakpoint() {
        assert_eq!(stat_grid_height(4, Breakpoint::Md), STAT_CARD_HEIGHT);
        assert_eq!(stat_grid_height(4, Breakpoint::Sm), STAT_CARD_HEIGHT * 2);
        assert_eq!(stat_grid_height(4, Breakpoint::Xs), STAT_CARD_HEIGHT * 4);
    }
}
