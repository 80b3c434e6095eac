//! Sign-in screen: social-login card next to the credentials card

use ratatui::{prelude::*, widgets::*};

use crate::messages::ui_events::FormFocus;
use crate::messages::RenderState;
use crate::models::SocialProvider;
use crate::ui::{checkbox_span, input_viewport, link_span, render_button, render_input};

pub fn draw_sign_in(f: &mut Frame, state: &RenderState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_social_card(f, state.form.focus, columns[0]);
    draw_credentials_card(f, state, columns[1]);
}

fn provider_color(provider: SocialProvider) -> Color {
    match provider {
        SocialProvider::Google => Color::White,
        SocialProvider::Facebook => Color::Blue,
        SocialProvider::GitHub => Color::Gray,
        SocialProvider::Apple => Color::LightCyan,
    }
}

fn draw_social_card(f: &mut Frame, focus: FormFocus, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Quick Sign In ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(SocialProvider::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    f.render_widget(
        Paragraph::new("Choose your preferred login method")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        rows[0],
    );

    for (i, provider) in SocialProvider::ALL.iter().enumerate() {
        let is_focused = focus == FormFocus::Social(*provider);
        let label = format!("Continue with {}", provider.as_str());
        f.render_widget(
            render_button(label, provider_color(*provider), is_focused, false),
            rows[i + 1],
        );
    }

    let footer_idx = SocialProvider::ALL.len() + 1;
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "── SECURE & FAST ──",
            Style::default().fg(Color::DarkGray).bold(),
        )))
        .alignment(Alignment::Center),
        rows[footer_idx],
    );
    f.render_widget(
        Paragraph::new("By continuing, you agree to our Terms of Service and Privacy Policy")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        rows[footer_idx + 1],
    );
}

fn draw_credentials_card(f: &mut Frame, state: &RenderState, area: Rect) {
    let form = &state.form;
    let mode = state.auth_mode;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", mode.title()))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(2), // Description
            Constraint::Length(3), // Full name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(2), // Options
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Footer
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled("Welcome Back", Style::default().fg(Color::White).bold()))
            .alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new("Please enter your details to login")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        rows[1],
    );

    // Scroll each input so its cursor stays in view
    let inner_width = rows[2].width.saturating_sub(2);
    let scroll_of = |focus: FormFocus, column: usize| {
        if form.focus == focus {
            input_viewport(column, inner_width).0
        } else {
            0
        }
    };

    f.render_widget(
        render_input(
            &form.full_name.value,
            "enter your full name",
            " Full Name ",
            form.focus == FormFocus::FullName,
            scroll_of(FormFocus::FullName, form.full_name.cursor_column()),
        ),
        rows[2],
    );
    f.render_widget(
        render_input(
            &form.email.value,
            "email@example.com",
            " Email ",
            form.focus == FormFocus::Email,
            scroll_of(FormFocus::Email, form.email.cursor_column()),
        ),
        rows[3],
    );

    let password = form.password_display();
    let eye = if form.show_password { " Password (visible) " } else { " Password " };
    f.render_widget(
        render_input(
            &password,
            "••••••••",
            eye,
            form.focus == FormFocus::Password,
            scroll_of(FormFocus::Password, form.password.cursor_column()),
        ),
        rows[4],
    );

    let options = Line::from(vec![
        checkbox_span("Show password", form.show_password, form.focus == FormFocus::ShowPassword),
        Span::raw("   "),
        checkbox_span("Remember me", form.remember_me, form.focus == FormFocus::RememberMe),
        Span::raw("   "),
        link_span("Forgot Password?", form.focus == FormFocus::ForgotPassword),
    ]);
    f.render_widget(Paragraph::new(options).alignment(Alignment::Center), rows[5]);

    let submit_label = if form.is_loading {
        String::from("◌ Loading...")
    } else {
        format!("{} →", mode.submit_label())
    };
    f.render_widget(
        render_button(
            submit_label,
            Color::LightBlue,
            form.focus == FormFocus::Submit,
            form.is_loading,
        ),
        rows[6],
    );

    f.render_widget(
        Paragraph::new(link_span(mode.toggle_label(), form.focus == FormFocus::ToggleMode))
            .alignment(Alignment::Center),
        rows[7],
    );

    // Cursor
    if let Some(field) = form.focused_field() {
        let field_area = match form.focus {
            FormFocus::FullName => rows[2],
            FormFocus::Email => rows[3],
            _ => rows[4],
        };
        let (_, offset) = input_viewport(field.cursor_column(), inner_width);
        let cursor_x = field_area.x.saturating_add(1).saturating_add(offset);
        f.set_cursor_position(Position::new(cursor_x, field_area.y.saturating_add(1)));
    }
}
