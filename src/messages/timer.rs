//! Timer messages - communication between App and Timer layers

use std::time::Duration;

/// Commands sent from App layer to Timer layer
#[derive(Debug, Clone, PartialEq)]
pub enum TimerCommand {
    /// Report `LoginElapsed` once `delay` has passed. Cannot be cancelled.
    ScheduleLogin {
        id: u64,
        email: String,
        delay: Duration,
    },

    /// Shutdown the timer actor
    Shutdown,
}

/// Events sent from Timer layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    /// The simulated round-trip of a submission finished
    LoginElapsed { id: u64, email: String },
}

impl TimerEvent {
    /// Get the schedule ID from the event
    pub fn id(&self) -> u64 {
        match self {
            TimerEvent::LoginElapsed { id, .. } => *id,
        }
    }
}
