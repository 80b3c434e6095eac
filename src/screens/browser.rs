//! Decorative browser chrome drawn above every screen

use ratatui::{prelude::*, widgets::*};

pub fn draw_top_bar(f: &mut Frame, address: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Traffic lights + nav
            Constraint::Min(10),    // Address bar
            Constraint::Length(12), // Utilities
        ])
        .split(inner);

    let dim = Style::default().fg(Color::DarkGray);
    let controls = Line::from(vec![
        Span::styled(" ●", Style::default().fg(Color::Red)),
        Span::styled(" ●", Style::default().fg(Color::Yellow)),
        Span::styled(" ●", Style::default().fg(Color::Green)),
        Span::styled("  ▯ ‹ ", dim),
        Span::styled("›", dim.add_modifier(Modifier::DIM)),
    ]);
    f.render_widget(Paragraph::new(controls), chunks[0]);

    let address_line = Line::from(vec![
        Span::styled("🔒 ", Style::default().fg(Color::Green)),
        Span::styled(address, Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(address_line).alignment(Alignment::Center), chunks[1]);

    f.render_widget(
        Paragraph::new(Span::styled("↓ ⇪ + ⧉ ", dim)).alignment(Alignment::Right),
        chunks[2],
    );
}
