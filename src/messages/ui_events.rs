//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::SocialProvider;

/// Which top-level screen is on display (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    SignIn,
    Dashboard,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus navigation (sign-in screen)
    NextFocus,
    PrevFocus,

    // Text input on the focused field
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Credentials form
    SubmitCredentials,
    TogglePasswordVisibility,
    ToggleRememberMe,
    ForgotPassword,
    ToggleAuthMode,

    // Social-login card
    SocialLogin(SocialProvider),

    // Dashboard
    SidebarNext,
    SidebarPrev,
    SidebarSelect,
    Logout,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable controls of the sign-in screen, in tab order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormFocus {
    Social(SocialProvider),
    FullName,
    #[default]
    Email,
    Password,
    ShowPassword,
    RememberMe,
    ForgotPassword,
    Submit,
    ToggleMode,
}

impl FormFocus {
    pub const ORDER: [FormFocus; 12] = [
        FormFocus::Social(SocialProvider::Google),
        FormFocus::Social(SocialProvider::Facebook),
        FormFocus::Social(SocialProvider::GitHub),
        FormFocus::Social(SocialProvider::Apple),
        FormFocus::FullName,
        FormFocus::Email,
        FormFocus::Password,
        FormFocus::ShowPassword,
        FormFocus::RememberMe,
        FormFocus::ForgotPassword,
        FormFocus::Submit,
        FormFocus::ToggleMode,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> FormFocus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> FormFocus {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_field(&self) -> bool {
        matches!(self, FormFocus::FullName | FormFocus::Email | FormFocus::Password)
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: Screen,
    focus: FormFocus,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match screen {
        Screen::SignIn => handle_sign_in_keys(key, focus),
        Screen::Dashboard => handle_dashboard_keys(key),
    }
}

/// Handle keys for the sign-in screen
fn handle_sign_in_keys(key: KeyEvent, focus: FormFocus) -> Option<UiEvent> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => return Some(UiEvent::NextFocus),
        KeyCode::BackTab | KeyCode::Up => return Some(UiEvent::PrevFocus),
        _ => {}
    }

    if focus.is_text_field() {
        return match key.code {
            KeyCode::Enter => Some(UiEvent::SubmitCredentials),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(activate(focus)),
        _ => None,
    }
}

/// Event fired by Enter/Space on a non-text control
fn activate(focus: FormFocus) -> UiEvent {
    match focus {
        FormFocus::Social(provider) => UiEvent::SocialLogin(provider),
        FormFocus::ShowPassword => UiEvent::TogglePasswordVisibility,
        FormFocus::RememberMe => UiEvent::ToggleRememberMe,
        FormFocus::ForgotPassword => UiEvent::ForgotPassword,
        FormFocus::ToggleMode => UiEvent::ToggleAuthMode,
        FormFocus::Submit | FormFocus::FullName | FormFocus::Email | FormFocus::Password => {
            UiEvent::SubmitCredentials
        }
    }
}

/// Handle keys for the dashboard
fn handle_dashboard_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('l') => Some(UiEvent::Logout),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SidebarPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(UiEvent::SidebarNext),
        KeyCode::Enter => Some(UiEvent::SidebarSelect),
        _ => None,
    }
}
