//! # Lumina TUI
//!
//! A terminal mockup of a sign-in flow. Nothing is authenticated: a
//! submission waits a fixed delay and then signs in a user fabricated from
//! the typed email.
//!
//! ## Features
//! - Credentials card with Login / Sign Up / Forgot Password variants
//! - Social-login card (inert provider buttons)
//! - Dashboard shell with logout
//! - Simulated browser chrome
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Timer Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod models;
pub mod ui;
pub mod screens;
pub mod messages;
pub mod app;
pub mod timer;

// Re-export commonly used types
pub use config::Config;
pub use models::{display_name, AuthMode, Session, SocialProvider};
pub use messages::{RenderState, TimerCommand, TimerEvent, UiEvent};
pub use app::{AppActor, AppState};
pub use timer::TimerActor;
