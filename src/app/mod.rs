//! App layer - central state management and command processing
//!
//! The App actor receives UI events and timer events,
//! updates state, and emits timer commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod form;

pub use state::AppState;
pub use actor::AppActor;
