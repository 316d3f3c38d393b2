//! File logging for the TUI. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use feis_core::config::LoggingConfig;

/// Filter from `RUST_LOG`, falling back to the configured level.
pub fn filter_for(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level directive {level:?}")),
    }
}

/// Install a subscriber writing to the configured log file.
///
/// Returns the file path when logging was enabled, `None` when no file is
/// configured.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let Some(path) = &config.file else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!(e))?;
    Ok(Some(path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_subscriber() {
        let config = LoggingConfig::default();
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn level_directives_parse() {
        assert!(EnvFilter::try_new("debug").is_ok());
        assert!(EnvFilter::try_new("feis_core=debug,info").is_ok());
    }
}
