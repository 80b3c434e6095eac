use ratatui::{prelude::*, widgets::*};

use crate::models::{Accent, ActivityStatus};

/// Border style for a control depending on focus
pub fn focus_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Renders a labelled text input field, scrolled `scroll_x` columns to the left
pub fn render_input<'a>(
    content: &'a str,
    placeholder: &'a str,
    title: &'a str,
    is_focused: bool,
    scroll_x: u16,
) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_style(is_focused))
        .title(title);

    let text = if content.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(content)
    };

    Paragraph::new(Line::from(text)).block(block).scroll((0, scroll_x))
}

/// Horizontal scroll of an input `inner_width` cells wide so the cursor stays
/// visible, and the cursor offset from the inner left edge
pub fn input_viewport(cursor_column: usize, inner_width: u16) -> (u16, u16) {
    let column = u16::try_from(cursor_column).unwrap_or(u16::MAX);
    let scroll = column.saturating_sub(inner_width.saturating_sub(1));
    (scroll, column - scroll)
}

/// Renders a bordered, centered button
pub fn render_button<'a>(label: impl Into<Line<'a>>, color: Color, is_focused: bool, is_disabled: bool) -> Paragraph<'a> {
    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(color)
    };

    let text_style = if is_disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(color).bold()
    };

    Paragraph::new(label.into())
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
}

/// Inline link-like text, reversed when focused
pub fn link_span(label: &str, is_focused: bool) -> Span<'_> {
    let style = Style::default().fg(Color::LightBlue);
    if is_focused {
        Span::styled(label, style.add_modifier(Modifier::REVERSED))
    } else {
        Span::styled(label, style.add_modifier(Modifier::UNDERLINED))
    }
}

/// Checkbox glyph with its label
pub fn checkbox_span(label: &str, checked: bool, is_focused: bool) -> Span<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(format!("{} {}", mark, label), style)
}

/// Dashboard card accent
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Emerald => Color::Green,
        Accent::Blue => Color::Blue,
        Accent::Purple => Color::Magenta,
        Accent::Orange => Color::LightRed,
    }
}

/// Activity status dot color
pub fn status_color(status: ActivityStatus) -> Color {
    match status {
        ActivityStatus::Success => Color::Green,
        ActivityStatus::Warning => Color::LightRed,
        ActivityStatus::Info => Color::Blue,
    }
}

/// Rect of the given percentage size centered inside `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_viewport_short_text_does_not_scroll() {
        assert_eq!(input_viewport(0, 20), (0, 0));
        assert_eq!(input_viewport(19, 20), (0, 19));
    }

    #[test]
    fn test_input_viewport_follows_cursor() {
        assert_eq!(input_viewport(20, 20), (1, 19));
        assert_eq!(input_viewport(100, 20), (81, 19));
    }

    #[test]
    fn test_input_viewport_huge_column_saturates() {
        let (scroll, offset) = input_viewport(70_000, 68);
        assert_eq!(offset, 67);
        assert_eq!(scroll, u16::MAX - 67);
        assert_eq!(input_viewport(usize::MAX, 0), (u16::MAX, 0));
    }

    #[test]
    fn test_centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
    }
}
