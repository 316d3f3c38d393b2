//! FEIS desk TUI — four-panel terminal front end for the market desk.
//!
//! Panels:
//! 1. Desk marchés — asset rows, detail block, horizon buttons, chart
//! 2. Assistant — keyword FAQ chat
//! 3. Newsletter — sign-up form with a self-clearing notice
//! 4. Aide — keyboard shortcuts

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
