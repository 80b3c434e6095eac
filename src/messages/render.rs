//! Render state - data structure sent from App layer to UI for rendering

use crate::app::form::CredentialsForm;
use crate::constants::DEFAULT_ADDRESS;
use crate::messages::ui_events::Screen;
use crate::models::{AuthMode, Session, SidebarItem};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Root state
    pub session: Option<Session>,
    pub auth_mode: AuthMode,

    // Sign-in screen
    pub form: CredentialsForm,

    // Dashboard
    pub sidebar_selected: SidebarItem,
    /// Pre-formatted date shown under the greeting
    pub today: String,

    // Chrome
    pub address: String,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn screen(&self) -> Screen {
        if self.session.is_some() {
            Screen::Dashboard
        } else {
            Screen::SignIn
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            session: None,
            auth_mode: AuthMode::Login,
            form: CredentialsForm::default(),
            sidebar_selected: SidebarItem::Overview,
            today: String::new(),
            address: String::from(DEFAULT_ADDRESS),
            show_help: false,
        }
    }
}
