//! Screen drawing - a pure function of the latest [`RenderState`]
//!
//! The root view stacks the browser chrome over either the sign-in screen
//! (no session) or the dashboard (session present).

pub mod browser;
pub mod dashboard;
pub mod sign_in;

use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;
use crate::ui::centered_rect;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Browser chrome
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    browser::draw_top_bar(f, &state.address, main_chunks[0]);

    match &state.session {
        Some(session) => dashboard::draw_dashboard(f, session, state, main_chunks[1]),
        None => sign_in::draw_sign_in(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.session.is_some() {
        " ↑/↓:navigate | Enter:select | l:logout | ?:help | q:quit "
    } else if state.form.is_loading {
        " Signing in... "
    } else if state.form.focus.is_text_field() {
        " Tab:next field | Enter:submit | Ctrl+C:quit "
    } else {
        " Tab:next | Enter/Space:activate | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 LUMINA - Keyboard Shortcuts

 SIGN IN
   Tab / Shift+Tab    Next / previous control
   ↑ / ↓              Same as Tab / Shift+Tab
   Enter              Submit (on a text field or the button)
   Enter / Space      Activate toggle, link or provider

 DASHBOARD
   ↑ / ↓  (k / j)     Move in the sidebar
   Enter              Open the selected entry
   l                  Logout

 GENERAL
   ?                  Toggle this help
   q / Esc            Quit (outside text fields)
   Ctrl+C             Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
