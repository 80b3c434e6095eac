use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use lumina_tui::messages::ui_events::Screen;
use lumina_tui::{AppActor, AuthMode, Config, RenderState, SocialProvider, TimerActor, UiEvent};

struct Harness {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
}

impl Harness {
    fn start(login_delay_ms: u64) -> Self {
        let config = Config {
            login_delay_ms,
            ..Config::default()
        };
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (timer_cmd_tx, timer_cmd_rx) = mpsc::unbounded_channel();
        let (timer_event_tx, timer_event_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        tokio::spawn(TimerActor::new(timer_event_tx).run(timer_cmd_rx));
        tokio::spawn(AppActor::new(&config, timer_cmd_tx, render_tx).run(ui_rx, timer_event_rx));

        Harness { ui_tx, render_rx }
    }

    /// Send an event and return the state rendered in response
    async fn send(&mut self, event: UiEvent) -> RenderState {
        self.ui_tx.send(event).unwrap();
        self.next().await
    }

    async fn next(&mut self) -> RenderState {
        timeout(Duration::from_secs(2), self.render_rx.recv())
            .await
            .expect("no render state in time")
            .expect("app actor stopped")
    }

    async fn type_text(&mut self, text: &str) -> RenderState {
        let mut last = None;
        for c in text.chars() {
            last = Some(self.send(UiEvent::CharInput(c)).await);
        }
        last.expect("empty text")
    }
}

#[tokio::test]
async fn test_login_then_logout_round_trip() {
    let mut h = Harness::start(20);

    let initial = h.next().await;
    assert!(initial.session.is_none());
    assert_eq!(initial.auth_mode, AuthMode::Login);
    assert_eq!(initial.screen(), Screen::SignIn);

    // Focus starts on the email field
    h.type_text("a@b.com").await;
    h.send(UiEvent::NextFocus).await;
    h.type_text("x").await;

    let submitted = h.send(UiEvent::SubmitCredentials).await;
    assert!(submitted.form.is_loading);
    assert!(submitted.session.is_none());

    // Completion arrives from the timer
    let signed_in = h.next().await;
    let session = signed_in.session.clone().expect("session after delay");
    assert_eq!(session.email, "a@b.com");
    assert_eq!(session.name(), "a");
    assert_eq!(signed_in.screen(), Screen::Dashboard);

    let signed_out = h.send(UiEvent::Logout).await;
    assert!(signed_out.session.is_none());
    assert_eq!(signed_out.auth_mode, AuthMode::Login);
    assert_eq!(signed_out.screen(), Screen::SignIn);
    assert!(signed_out.form.email.is_empty());
}

#[tokio::test]
async fn test_empty_password_never_signs_in() {
    let mut h = Harness::start(5);
    h.next().await;

    h.type_text("jane@example.com").await;
    let state = h.send(UiEvent::SubmitCredentials).await;
    assert!(!state.form.is_loading);

    // Give a would-be timer ample time; only the help toggle should render
    tokio::time::sleep(Duration::from_millis(50)).await;
    let state = h.send(UiEvent::ToggleHelp).await;
    assert!(state.show_help);
    assert!(state.session.is_none());
}

#[tokio::test]
async fn test_logout_from_signup_resets_mode() {
    let mut h = Harness::start(5);
    h.next().await;

    let state = h.send(UiEvent::ToggleAuthMode).await;
    assert_eq!(state.auth_mode, AuthMode::Signup);

    h.type_text("@example.com").await;
    h.send(UiEvent::NextFocus).await;
    h.type_text("pw").await;
    h.send(UiEvent::SubmitCredentials).await;

    let signed_in = h.next().await;
    assert_eq!(signed_in.session.as_ref().map(|s| s.name()), Some("User"));
    assert_eq!(signed_in.auth_mode, AuthMode::Signup);

    let signed_out = h.send(UiEvent::Logout).await;
    assert_eq!(signed_out.auth_mode, AuthMode::Login);
}

#[tokio::test]
async fn test_social_buttons_are_inert() {
    let mut h = Harness::start(5);
    let before = h.next().await;

    for provider in SocialProvider::ALL {
        let after = h.send(UiEvent::SocialLogin(provider)).await;
        assert_eq!(after.session, before.session);
        assert_eq!(after.auth_mode, before.auth_mode);
        assert_eq!(after.form, before.form);
    }
}

#[tokio::test]
async fn test_quit_stops_app_actor() {
    let mut h = Harness::start(5);
    h.next().await;

    h.ui_tx.send(UiEvent::Quit).unwrap();
    let closed = timeout(Duration::from_secs(2), h.render_rx.recv()).await.unwrap();
    assert!(closed.is_none());
}
