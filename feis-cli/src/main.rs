//! FEIS CLI — headless access to the market desk.
//!
//! Commands:
//! - `assets` — list the catalog with formatted values and day changes
//! - `render` — draw one chart frame and print its display list as JSON
//! - `ask` — answer a question with the FAQ assistant
//! - `refresh` — simulate a market refresh and print the new day changes

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use feis_core::view::{format_change, format_value_fr, Region};
use feis_core::{AssetCatalog, DeskConfig, DeskDashboard, FaqBook, Horizon};

#[derive(Parser)]
#[command(name = "feis", about = "FEIS CLI — investment club market desk")]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the assets with their latest value and day change.
    Assets,
    /// Draw the chart for one asset and horizon; print the display list as JSON.
    Render {
        /// Asset key (e.g. sp500, btc).
        #[arg(long, default_value = "sp500")]
        asset: String,

        /// Horizon label: 1D, 1M or 1Y.
        #[arg(long, default_value = "1M")]
        horizon: String,
    },
    /// Ask the FAQ assistant a question.
    Ask {
        /// Question text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Randomize day changes as the desk refresh button does.
    Refresh {
        /// Seed for a reproducible draw. Overrides `market.seed`.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config)?;

    let output = match cli.command {
        Commands::Assets => run_assets(&config),
        Commands::Render { asset, horizon } => run_render(&config, &asset, &horizon)?,
        Commands::Ask { text } => run_ask(&text.join(" ")),
        Commands::Refresh { seed } => run_refresh(&config, seed),
    };
    print!("{output}");
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<DeskConfig> {
    match path {
        Some(path) => DeskConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(DeskConfig::default()),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(config: &DeskConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.level)
            .with_context(|| format!("invalid log level {:?}", config.logging.level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run_assets(config: &DeskConfig) -> String {
    let mut desk = DeskDashboard::in_memory(AssetCatalog::builtin(), config);
    desk.start();
    summary_table(&desk)
}

fn run_render(config: &DeskConfig, asset: &str, horizon: &str) -> Result<String> {
    let Some(horizon) = Horizon::from_label(horizon) else {
        bail!("unknown horizon {horizon:?} (expected 1D, 1M or 1Y)");
    };
    let mut desk = DeskDashboard::in_memory(AssetCatalog::builtin(), config);
    desk.start();
    if !desk.select_asset(asset) {
        let known: Vec<&str> = desk.catalog().keys().collect();
        bail!("unknown asset {asset:?} (known: {})", known.join(", "));
    }
    desk.set_horizon(horizon);
    debug!(
        asset,
        horizon = horizon.label(),
        commands = desk.surface().commands.len(),
        "chart rendered"
    );
    let mut json = serde_json::to_string_pretty(desk.surface())?;
    json.push('\n');
    Ok(json)
}

fn run_ask(question: &str) -> String {
    let book = FaqBook::builtin();
    format!("{}\n", book.answer(question))
}

fn run_refresh(config: &DeskConfig, seed: Option<u64>) -> String {
    let mut config = config.clone();
    if seed.is_some() {
        config.market.seed = seed;
    }
    let mut desk = DeskDashboard::in_memory(AssetCatalog::builtin(), &config);
    desk.start();
    desk.refresh_market();
    summary_table(&desk)
}

/// One line per asset, read back from the desk view so the output matches
/// what the terminal desk shows.
fn summary_table(desk: &DeskDashboard) -> String {
    let view = desk.view();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<14} {:>12} {:>9}  {}",
        "KEY", "NAME", "VALUE", "CHANGE", "TAG"
    );
    for asset in desk.catalog().iter() {
        let value = view
            .text(&Region::Value(asset.key.clone()))
            .map(str::to_string)
            .unwrap_or_else(|| format_value_fr(asset.base_value, asset.value_decimals));
        let change = view
            .text(&Region::Change(asset.key.clone()))
            .map(str::to_string)
            .unwrap_or_else(|| format_change(asset.day_change_percent));
        let _ = writeln!(
            out,
            "{:<8} {:<14} {:>12} {:>9}  {}",
            asset.key, asset.name, value, change, asset.tag
        );
    }
    out
}
