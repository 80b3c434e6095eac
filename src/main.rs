//! Lumina TUI - Actor-based sign-in mockup
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Timer Layer (Tokio) - simulated login latency

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use lumina_tui::config::Config;
use lumina_tui::constants::{APP_NAME, APP_VERSION};
use lumina_tui::messages::ui_events::key_to_ui_event;
use lumina_tui::messages::{RenderState, TimerCommand, TimerEvent, UiEvent};
use lumina_tui::screens::draw_ui;
use lumina_tui::{AppActor, TimerActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = Config::load();

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    if let Some(e) = config_error {
        tracing::warn!(error = %format!("{:#}", e), "Ignoring invalid config file");
    }
    tracing::info!(version = APP_VERSION, delay_ms = config.login_delay_ms, "{} starting", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (timer_cmd_tx, timer_cmd_rx) = mpsc::unbounded_channel::<TimerCommand>();
    let (timer_event_tx, timer_event_rx) = mpsc::unbounded_channel::<TimerEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn timer actor
    let timer_actor = TimerActor::new(timer_event_tx);
    tokio::spawn(timer_actor.run(timer_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(&config, timer_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, timer_event_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("{} exiting", APP_NAME);
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.screen(),
                    current_state.form.focus,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }

        // Yield so the actors progress between polls
        tokio::task::yield_now().await;
    }

    Ok(())
}
