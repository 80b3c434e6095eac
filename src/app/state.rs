//! App state - pure data structure with no I/O logic

use std::time::Duration;

use crate::app::form::CredentialsForm;
use crate::config::Config;
use crate::messages::RenderState;
use crate::models::{AuthMode, Session, SidebarItem};

/// Main application state - pure data, no I/O
pub struct AppState {
    // Root state
    pub session: Option<Session>,
    pub auth_mode: AuthMode,

    // Sign-in screen
    pub form: CredentialsForm,
    pub next_login_id: u64,
    pub pending_login_id: Option<u64>,

    // Dashboard
    pub sidebar_selected: SidebarItem,

    // Popups
    pub show_help: bool,

    // Settings
    pub login_delay: Duration,
    pub address: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            session: None,
            auth_mode: AuthMode::Login,
            form: CredentialsForm::default(),
            next_login_id: 1,
            pending_login_id: None,
            sidebar_selected: SidebarItem::Overview,
            show_help: false,
            login_delay: config.login_delay(),
            address: config.address.clone(),
        }
    }

    /// Generate a unique login ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_login_id;
        self.next_login_id += 1;
        id
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            session: self.session.clone(),
            auth_mode: self.auth_mode,
            form: self.form.clone(),
            sidebar_selected: self.sidebar_selected,
            today: chrono::Local::now().format("%A, %b %-d, %Y").to_string(),
            address: self.address.clone(),
            show_help: self.show_help,
        }
    }
}
