//! FEIS desk — terminal market desk for the investment club.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use feis_core::DeskConfig;
use feis_tui::{input, logging, ui, AppState};

/// Environment variable naming an explicit config file.
const CONFIG_ENV: &str = "FEIS_DESK_CONFIG";

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config = load_config()?;
    let log_result = logging::init(&config.logging);

    let mut app = AppState::new(&config);
    match log_result {
        Ok(Some(path)) => info!(path = %path.display(), "desk started"),
        Ok(None) => {}
        Err(e) => app.set_warning(format!("Journal désactivé : {e:#}")),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load_config() -> Result<DeskConfig> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(path);
        return DeskConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()));
    }
    let path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("feis-desk")
        .join("config.toml");
    DeskConfig::load_or_default(&path)
        .with_context(|| format!("loading config from {}", path.display()))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Run deferred chat replies and notice clears
        app.tick(Instant::now());

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key, Instant::now());
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
