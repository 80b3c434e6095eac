//! App actor - message loop processing UI events and timer events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{RenderState, TimerCommand, TimerEvent, UiEvent};

/// App actor that owns the root state and processes UI and timer events
pub struct AppActor {
    state: AppState,
    timer_tx: mpsc::UnboundedSender<TimerCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        timer_tx: mpsc::UnboundedSender<TimerCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config),
            timer_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.timer_tx.send(TimerCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(event) = timer_rx.recv() => {
                    self.state.handle_timer_event(event);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus
            UiEvent::NextFocus => self.state.next_focus(),
            UiEvent::PrevFocus => self.state.prev_focus(),

            // Text input
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Credentials form
            UiEvent::SubmitCredentials => {
                if let Some(cmd) = self.state.submit_form() {
                    let _ = self.timer_tx.send(cmd);
                }
            }
            UiEvent::TogglePasswordVisibility => self.state.toggle_password_visibility(),
            UiEvent::ToggleRememberMe => self.state.toggle_remember_me(),
            UiEvent::ForgotPassword => self.state.forgot_password(),
            UiEvent::ToggleAuthMode => self.state.toggle_mode(),

            // Social login
            UiEvent::SocialLogin(provider) => self.state.social_login(provider),

            // Dashboard
            UiEvent::SidebarNext => self.state.sidebar_next(),
            UiEvent::SidebarPrev => self.state.sidebar_prev(),
            UiEvent::SidebarSelect => self.state.sidebar_select(),
            UiEvent::Logout => self.state.logout(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
