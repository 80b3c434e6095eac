//! Command handlers - business logic for processing UI events

use crate::app::form::CredentialsForm;
use crate::app::AppState;
use crate::messages::{TimerCommand, TimerEvent};
use crate::models::{AuthMode, Session, SidebarItem, SocialProvider};

impl AppState {
    // ========================
    // Session / mode
    // ========================

    /// Overwrite the auth mode. Every transition is legal.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.auth_mode != mode {
            tracing::debug!(from = self.auth_mode.as_str(), to = mode.as_str(), "Auth mode changed");
        }
        self.auth_mode = mode;
    }

    /// Footer link: Login goes to Signup, every other mode back to Login
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.auth_mode.toggled());
    }

    pub fn forgot_password(&mut self) {
        self.set_mode(AuthMode::Forgot);
    }

    /// Start the simulated round-trip. Callers check that both fields are filled.
    pub fn submit_credentials(&mut self, email: &str, _password: &str) -> TimerCommand {
        let id = self.next_id();
        self.pending_login_id = Some(id);
        self.form.is_loading = true;
        tracing::info!(id, delay_ms = self.login_delay.as_millis() as u64, "Login scheduled");

        TimerCommand::ScheduleLogin {
            id,
            email: email.to_string(),
            delay: self.login_delay,
        }
    }

    /// Turn the email captured at submit time into a session
    pub fn complete_login(&mut self, email: String) {
        let session = Session::new(email);
        tracing::info!(name = session.name(), "Signed in");
        self.session = Some(session);
        self.pending_login_id = None;
        self.form = CredentialsForm::default();
        self.sidebar_selected = SidebarItem::Overview;
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(name = session.name(), "Signed out");
        }
        self.set_mode(AuthMode::Login);
    }

    pub fn handle_timer_event(&mut self, event: TimerEvent) {
        let is_for_pending = self.pending_login_id == Some(event.id());

        match event {
            TimerEvent::LoginElapsed { id, email } => {
                if is_for_pending {
                    self.complete_login(email);
                } else {
                    tracing::debug!(id, "Ignoring stale login completion");
                }
            }
        }
    }

    // ========================
    // Credentials form
    // ========================

    /// Form submit. Empty email/password or a submission in flight: silently ignored.
    pub fn submit_form(&mut self) -> Option<TimerCommand> {
        if self.is_authenticated() || self.form.is_loading || !self.form.is_complete() {
            return None;
        }

        let email = self.form.email.value.clone();
        let password = self.form.password.value.clone();
        Some(self.submit_credentials(&email, &password))
    }

    pub fn next_focus(&mut self) {
        self.form.focus = self.form.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.form.focus = self.form.focus.prev();
    }

    pub fn enter_char(&mut self, c: char) {
        if let Some(field) = self.form.focused_field_mut() {
            field.enter_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.form.focused_field_mut() {
            field.delete_char();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(field) = self.form.focused_field_mut() {
            field.move_cursor_left();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(field) = self.form.focused_field_mut() {
            field.move_cursor_right();
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.show_password = !self.form.show_password;
    }

    pub fn toggle_remember_me(&mut self) {
        self.form.remember_me = !self.form.remember_me;
    }

    // ========================
    // Social login
    // ========================

    /// Placeholder: records the intent, changes nothing
    pub fn social_login(&self, provider: SocialProvider) {
        tracing::info!(provider = provider.as_str(), "Logging in with {}", provider.as_str());
    }

    // ========================
    // Dashboard
    // ========================

    pub fn sidebar_next(&mut self) {
        self.sidebar_selected = self.sidebar_selected.next();
    }

    pub fn sidebar_prev(&mut self) {
        self.sidebar_selected = self.sidebar_selected.prev();
    }

    pub fn sidebar_select(&mut self) {
        if self.sidebar_selected == SidebarItem::Logout {
            self.logout();
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::FormFocus;
    use std::time::Duration;

    fn type_into(state: &mut AppState, focus: FormFocus, text: &str) {
        state.form.focus = focus;
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    fn filled(email: &str, password: &str) -> AppState {
        let mut state = AppState::default();
        type_into(&mut state, FormFocus::Email, email);
        type_into(&mut state, FormFocus::Password, password);
        state
    }

    fn finish(state: &mut AppState, cmd: TimerCommand) {
        match cmd {
            TimerCommand::ScheduleLogin { id, email, .. } => {
                state.handle_timer_event(TimerEvent::LoginElapsed { id, email })
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert!(state.session.is_none());
        assert_eq!(state.auth_mode, AuthMode::Login);
        assert_eq!(state.form.focus, FormFocus::Email);
    }

    #[test]
    fn test_submit_schedules_with_configured_delay() {
        let mut state = filled("jane@example.com", "secret");
        let cmd = state.submit_form().unwrap();
        assert_eq!(
            cmd,
            TimerCommand::ScheduleLogin {
                id: 1,
                email: "jane@example.com".to_string(),
                delay: Duration::from_millis(1500),
            }
        );
        assert!(state.form.is_loading);
        assert!(state.session.is_none());

        finish(&mut state, cmd);
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.email, "jane@example.com");
        assert_eq!(session.name(), "jane");
    }

    #[test]
    fn test_empty_local_part_becomes_user() {
        let mut state = filled("@example.com", "x");
        let cmd = state.submit_form().unwrap();
        finish(&mut state, cmd);
        assert_eq!(state.session.unwrap().name(), "User");
    }

    #[test]
    fn test_empty_fields_are_silently_ignored() {
        for (email, password) in [("", "secret"), ("jane@example.com", ""), ("", "")] {
            let mut state = filled(email, password);
            let before = state.form.clone();
            assert!(state.submit_form().is_none());
            assert!(state.session.is_none());
            assert_eq!(state.form, before);
            assert_eq!(state.pending_login_id, None);
        }
    }

    #[test]
    fn test_resubmission_blocked_while_loading() {
        let mut state = filled("a@b.com", "x");
        assert!(state.submit_form().is_some());
        assert!(state.submit_form().is_none());
        assert_eq!(state.pending_login_id, Some(1));
    }

    #[test]
    fn test_form_is_discarded_after_login() {
        let mut state = filled("a@b.com", "x");
        state.toggle_password_visibility();
        let cmd = state.submit_form().unwrap();
        finish(&mut state, cmd);
        assert_eq!(state.form, CredentialsForm::default());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = AppState::default();
        state.handle_timer_event(TimerEvent::LoginElapsed {
            id: 42,
            email: "ghost@x.com".to_string(),
        });
        assert!(state.session.is_none());
    }

    #[test]
    fn test_logout_resets_mode_from_any_mode() {
        for mode in [AuthMode::Login, AuthMode::Signup, AuthMode::Forgot] {
            let mut state = AppState::default();
            state.complete_login("a@b.com".to_string());
            state.set_mode(mode);
            state.logout();
            assert!(state.session.is_none());
            assert_eq!(state.auth_mode, AuthMode::Login);
        }
    }

    #[test]
    fn test_set_mode_is_unconditional_and_idempotent() {
        let mut state = AppState::default();
        state.set_mode(AuthMode::Signup);
        state.set_mode(AuthMode::Login);
        assert_eq!(state.auth_mode, AuthMode::Login);

        state.set_mode(AuthMode::Forgot);
        state.set_mode(AuthMode::Forgot);
        assert_eq!(state.auth_mode, AuthMode::Forgot);

        state.set_mode(AuthMode::Signup);
        assert_eq!(state.auth_mode, AuthMode::Signup);
    }

    #[test]
    fn test_forgot_then_footer_returns_to_login() {
        let mut state = AppState::default();
        state.forgot_password();
        assert_eq!(state.auth_mode, AuthMode::Forgot);
        state.toggle_mode();
        assert_eq!(state.auth_mode, AuthMode::Login);
        state.toggle_mode();
        assert_eq!(state.auth_mode, AuthMode::Signup);
    }

    #[test]
    fn test_social_login_changes_nothing() {
        let state = AppState::default();
        let before = state.to_render_state();
        state.social_login(SocialProvider::Apple);
        let after = state.to_render_state();
        assert_eq!(before.session, after.session);
        assert_eq!(before.auth_mode, after.auth_mode);
        assert_eq!(before.form, after.form);
    }

    #[test]
    fn test_sidebar_logout_entry() {
        let mut state = AppState::default();
        state.complete_login("a@b.com".to_string());
        state.sidebar_select();
        assert!(state.session.is_some());

        state.sidebar_prev();
        assert_eq!(state.sidebar_selected, SidebarItem::Logout);
        state.sidebar_select();
        assert!(state.session.is_none());
    }

    #[test]
    fn test_typing_on_non_text_control_is_ignored() {
        let mut state = AppState::default();
        state.form.focus = FormFocus::Submit;
        state.enter_char('x');
        state.delete_char();
        assert!(state.form.email.is_empty());
        assert!(state.form.full_name.is_empty());
        assert!(state.form.password.is_empty());
    }
}
