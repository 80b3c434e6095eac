//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Timer layers.

pub mod ui_events;
pub mod timer;
pub mod render;

pub use ui_events::UiEvent;
pub use timer::{TimerCommand, TimerEvent};
pub use render::RenderState;
