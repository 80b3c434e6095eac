//! Timer layer - one-shot delayed callbacks
//!
//! The Timer actor receives schedule commands and reports back when each delay elapses.

pub mod actor;

pub use actor::TimerActor;
