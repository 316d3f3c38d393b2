//! Error types for the desk engine.
//!
//! Runtime interaction never fails: unknown selections and missing display
//! regions degrade to no-ops. These errors only surface while building the
//! catalog, loading configuration, or writing into a view.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Horizon;

/// Catalog construction failures.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog must contain at least one asset")]
    Empty,

    #[error("duplicate asset key '{0}'")]
    DuplicateKey(String),

    #[error("asset '{key}' has no series for horizon {horizon}")]
    MissingHorizon { key: String, horizon: Horizon },

    #[error("asset '{key}' has an empty series for horizon {horizon}")]
    EmptySeries { key: String, horizon: Horizon },

    #[error("asset '{key}' has a non-finite value in horizon {horizon}")]
    NonFiniteValue { key: String, horizon: Horizon },
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A view could not accept an update.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("display region {0} is missing")]
    MissingRegion(String),

    #[error("no selector row for asset '{0}'")]
    MissingRow(String),
}
