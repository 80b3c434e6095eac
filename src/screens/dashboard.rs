//! Post-login dashboard shell. Everything but the greeting is static.

use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;
use crate::models::{Session, SidebarItem, ACTIVITY_LOG, QUICK_ACTIONS, STAT_CARDS};
use crate::ui::{accent_color, status_color};

pub fn draw_dashboard(f: &mut Frame, session: &Session, state: &RenderState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(30)])
        .split(area);

    draw_sidebar(f, state.sidebar_selected, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(5), // Stats
            Constraint::Min(5),    // Activity + tools
        ])
        .split(columns[1]);

    draw_header(f, session, &state.today, rows[0]);
    draw_stats(f, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    draw_activity(f, bottom[0]);
    draw_tools(f, bottom[1]);
}

fn draw_sidebar(f: &mut Frame, selected: SidebarItem, area: Rect) {
    let items: Vec<ListItem> = SidebarItem::ALL
        .iter()
        .map(|item| {
            let mut spans = vec![Span::raw(item.label())];
            if let Some(badge) = item.badge() {
                spans.push(Span::styled(
                    format!(" ({})", badge),
                    Style::default().fg(Color::White).bg(Color::Red),
                ));
            }
            let style = match item {
                SidebarItem::Logout => Style::default().fg(Color::LightRed),
                SidebarItem::Overview => Style::default().fg(Color::White).bold(),
                _ => Style::default().fg(Color::Gray),
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" ▦ Lumina "),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(SidebarItem::ALL.iter().position(|item| *item == selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_header(f: &mut Frame, session: &Session, today: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(6), Constraint::Min(10), Constraint::Length(38)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", session.initial()),
            Style::default().fg(Color::White).bg(Color::Blue).bold(),
        ))
        .alignment(Alignment::Center),
        columns[0],
    );

    let greeting = vec![
        Line::from(Span::styled(
            format!("Welcome, {}", session.name()),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(today.to_uppercase(), Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(Paragraph::new(greeting), columns[1]);

    let tools = Line::from(vec![
        Span::styled("⌕ Search insights...", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(" + New Task ", Style::default().fg(Color::White).bg(Color::Blue)),
    ]);
    f.render_widget(Paragraph::new(tools).alignment(Alignment::Right), columns[2]);
}

fn draw_stats(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(STAT_CARDS.iter().map(|_| Constraint::Ratio(1, STAT_CARDS.len() as u32)))
        .split(area);

    for (card, column) in STAT_CARDS.iter().zip(columns.iter()) {
        let color = accent_color(card.accent);
        let lines = vec![
            Line::from(vec![
                Span::styled(card.title.to_uppercase(), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(card.trend, Style::default().fg(color).bold()),
            ]),
            Line::from(""),
            Line::from(Span::styled(card.value, Style::default().fg(Color::White).bold())),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        f.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn draw_activity(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in ACTIVITY_LOG.iter() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(status_color(entry.status))),
            Span::styled(entry.title, Style::default().fg(Color::White).bold()),
            Span::raw("  "),
            Span::styled(entry.time.to_uppercase(), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Activity Log ")
        .title(Line::from(Span::styled(" VIEW ALL ", Style::default().fg(Color::LightBlue))).right_aligned());

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_tools(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Dashboard Tools ")
        .title_bottom(Line::from(" Quick access to your tools ").centered());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    for (row_idx, pair) in QUICK_ACTIONS.chunks(2).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row_idx]);
        for (action, cell) in pair.iter().zip(cells.iter()) {
            let color = accent_color(action.accent);
            let tile = Paragraph::new(Span::styled(
                action.label.to_uppercase(),
                Style::default().fg(color).bold(),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
            f.render_widget(tile, *cell);
        }
    }
}
