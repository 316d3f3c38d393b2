//! Keyboard input dispatch — overlays → global keys → panel-specific handlers.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use feis_core::Horizon;

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event at time `now`.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys. Ctrl+C always quits; the rest are disabled while
    //    a text panel has focus.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }
    match key.code {
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }
    if !app.active_panel.takes_text() {
        match key.code {
            KeyCode::Char('q') => {
                app.running = false;
                return;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                if let Some(panel) = Panel::from_index(idx) {
                    app.active_panel = panel;
                }
                return;
            }
            _ => {}
        }
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Desk => handle_desk_key(app, key),
        Panel::Chat => handle_chat_key(app, key, now),
        Panel::Newsletter => handle_newsletter_key(app, key, now),
        Panel::Help => {} // display only
    }
}

fn handle_desk_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_asset_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_asset_cursor(-1),
        KeyCode::Char('d') => app.dashboard.set_horizon(Horizon::Short),
        KeyCode::Char('m') => app.dashboard.set_horizon(Horizon::Medium),
        KeyCode::Char('y') => app.dashboard.set_horizon(Horizon::Long),
        KeyCode::Char('h') | KeyCode::Left => cycle_horizon(app, -1),
        KeyCode::Char('l') | KeyCode::Right => cycle_horizon(app, 1),
        KeyCode::Char('r') => app.refresh_market(),
        _ => {}
    }
}

fn cycle_horizon(app: &mut AppState, delta: isize) {
    let all = Horizon::ALL;
    let current = app.dashboard.selection().horizon;
    let idx = all.iter().position(|&h| h == current).unwrap_or(0) as isize;
    let next = (idx + delta).clamp(0, all.len() as isize - 1) as usize;
    app.dashboard.set_horizon(all[next]);
}

fn handle_chat_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter => app.submit_chat(now),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Esc => app.active_panel = Panel::Desk,
        KeyCode::Char(c) => app.chat_input.push(c),
        _ => {}
    }
}

fn handle_newsletter_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter => app.submit_newsletter(now),
        KeyCode::Backspace => {
            app.email_input.pop();
        }
        KeyCode::Esc => app.active_panel = Panel::Desk,
        KeyCode::Char(c) => app.email_input.push(c),
        _ => {}
    }
}
