use std::time::{Duration, Instant};

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use feis_core::DeskConfig;
use feis_tui::app::{Overlay, Panel};
use feis_tui::{ui, AppState};

fn app() -> AppState {
    let mut config = DeskConfig::default();
    config.market.seed = Some(3);
    AppState::new(&config)
}

fn screen(app: &AppState) -> String {
    let backend = TestBackend::new(120, 36);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn welcome_overlay_on_start() {
    let app = app();
    assert_eq!(app.overlay, Overlay::Welcome);
    assert!(screen(&app).contains("Pour commencer"));
}

#[test]
fn desk_shows_assets_and_detail() {
    let mut app = app();
    app.overlay = Overlay::None;
    let text = screen(&app);
    assert!(text.contains("S&P 500"));
    assert!(text.contains("Bitcoin"));
    assert!(text.contains("1M"));
}

#[test]
fn every_panel_draws() {
    let mut app = app();
    app.overlay = Overlay::None;
    for i in 0..Panel::COUNT {
        app.active_panel = Panel::from_index(i).unwrap();
        assert!(screen(&app).contains(app.active_panel.label()));
    }
}

#[test]
fn chat_reply_reaches_the_screen() {
    let mut app = app();
    app.overlay = Overlay::None;
    app.active_panel = Panel::Chat;
    let t0 = Instant::now();
    app.chat_input = "livret".into();
    app.submit_chat(t0);
    app.tick(t0 + Duration::from_millis(250));
    assert!(screen(&app).contains("livret"));
}
