//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Deferred chat replies and newsletter clears
//! run from the same loop that handles keys.

use std::time::Instant;

use feis_core::{AssetCatalog, DeskConfig, DeskDashboard, FaqBook, Interactions};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Desk,
    Chat,
    Newsletter,
    Help,
}

impl Panel {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            Panel::Desk => 0,
            Panel::Chat => 1,
            Panel::Newsletter => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Desk),
            1 => Some(Panel::Chat),
            2 => Some(Panel::Newsletter),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Desk => "Desk marchés",
            Panel::Chat => "Assistant",
            Panel::Newsletter => "Newsletter",
            Panel::Help => "Aide",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Desk)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Panel::Desk)
    }

    /// Panels that capture typed characters.
    pub fn takes_text(self) -> bool {
        matches!(self, Panel::Chat | Panel::Newsletter)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub overlay: Overlay,

    // Desk
    pub dashboard: DeskDashboard,
    /// Row under the cursor in the asset list.
    pub asset_cursor: usize,

    // Chat + newsletter
    pub interactions: Interactions,
    pub chat_input: String,
    pub email_input: String,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(config: &DeskConfig) -> Self {
        let mut dashboard = DeskDashboard::in_memory(AssetCatalog::builtin(), config);
        dashboard.start();
        Self {
            active_panel: Panel::Desk,
            running: true,
            overlay: Overlay::Welcome,
            dashboard,
            asset_cursor: 0,
            interactions: Interactions::new(FaqBook::builtin(), config),
            chat_input: String::new(),
            email_input: String::new(),
            status_message: None,
        }
    }

    /// Move the asset cursor by `delta` rows (clamped) and select the row.
    pub fn move_asset_cursor(&mut self, delta: isize) {
        let count = self.dashboard.catalog().len();
        if count == 0 {
            return;
        }
        let next = (self.asset_cursor as isize + delta).clamp(0, count as isize - 1) as usize;
        self.asset_cursor = next;
        let key = self
            .dashboard
            .catalog()
            .iter()
            .nth(next)
            .map(|a| a.key.clone());
        if let Some(key) = key {
            self.dashboard.select_asset(&key);
        }
    }

    pub fn refresh_market(&mut self) {
        self.dashboard.refresh_market();
        self.set_status("Variation du jour actualisée (maquette)");
    }

    pub fn submit_chat(&mut self, now: Instant) {
        let text = std::mem::take(&mut self.chat_input);
        self.interactions.submit_chat(&text, now);
    }

    pub fn submit_newsletter(&mut self, now: Instant) {
        let email = std::mem::take(&mut self.email_input);
        self.interactions.submit_newsletter(&email, now);
    }

    /// Run deferred tasks that are due.
    pub fn tick(&mut self, now: Instant) {
        self.interactions.run_due(now);
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> AppState {
        let mut config = DeskConfig::default();
        config.market.seed = Some(1);
        AppState::new(&config)
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Desk.next(), Panel::Chat);
        assert_eq!(Panel::Help.next(), Panel::Desk);
        assert_eq!(Panel::Desk.prev(), Panel::Help);
        assert_eq!(Panel::Chat.prev(), Panel::Desk);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..Panel::COUNT {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(Panel::COUNT).is_none());
    }

    #[test]
    fn starts_on_default_selection() {
        let app = app();
        assert_eq!(app.dashboard.selection().asset_key, "sp500");
        assert_eq!(app.dashboard.view().active_row(), Some("sp500"));
        assert!(!app.dashboard.surface().is_blank());
    }

    #[test]
    fn cursor_selects_and_clamps() {
        let mut app = app();
        app.move_asset_cursor(1);
        assert_eq!(app.dashboard.selection().asset_key, "nasdaq");
        app.move_asset_cursor(100);
        assert_eq!(app.dashboard.selection().asset_key, "eth");
        app.move_asset_cursor(-100);
        assert_eq!(app.asset_cursor, 0);
        assert_eq!(app.dashboard.selection().asset_key, "sp500");
    }

    #[test]
    fn chat_submit_clears_input_and_replies_later() {
        let mut app = app();
        let t0 = Instant::now();
        app.chat_input = "bitcoin ?".into();
        app.submit_chat(t0);
        assert!(app.chat_input.is_empty());
        assert_eq!(app.interactions.chat.messages().len(), 2);
        app.tick(t0 + Duration::from_millis(500));
        assert_eq!(app.interactions.chat.messages().len(), 3);
    }

    #[test]
    fn empty_newsletter_is_silent() {
        let mut app = app();
        app.email_input = "   ".into();
        app.submit_newsletter(Instant::now());
        assert!(app.status_message.is_none());
        assert!(app.interactions.newsletter.notice().is_none());
        assert!(app.email_input.is_empty());
    }
}
