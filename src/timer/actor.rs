//! Timer actor - runs simulated round-trips in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{TimerCommand, TimerEvent};

/// Timer actor that turns schedule commands into delayed events
pub struct TimerActor {
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    active_timers: JoinSet<()>,
}

impl TimerActor {
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        TimerActor {
            event_tx,
            active_timers: JoinSet::new(),
        }
    }

    /// Run the timer actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<TimerCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(TimerCommand::ScheduleLogin { id, email, delay }) => {
                            let event_tx = self.event_tx.clone();

                            // No cancellation handle: the delay always runs to completion
                            self.active_timers.spawn(async move {
                                tokio::time::sleep(delay).await;
                                tracing::info!(id, "Login delay elapsed");
                                let _ = event_tx.send(TimerEvent::LoginElapsed { id, email });
                            });
                        }

                        Some(TimerCommand::Shutdown) | None => {
                            // Pending timers die with the process
                            self.active_timers.shutdown().await;
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_timers.join_next() => {}
            }
        }
    }
}
