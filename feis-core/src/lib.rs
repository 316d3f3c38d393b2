//! FEIS Core — the market desk engine behind the terminal and CLI front ends.
//!
//! This crate contains:
//! - The compiled-in asset catalog (six instruments, three horizons each)
//! - Selection state and the dashboard controller
//! - The chart renderer, drawing onto an abstract [`render::Surface`]
//! - Detail panel and summary updaters writing through [`view::DeskView`]
//! - The keyword FAQ, chat session and newsletter form
//! - A one-shot deferred task queue for the single-threaded event loop
//! - TOML configuration and error types

pub mod chat;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod faq;
pub mod interactions;
pub mod newsletter;
pub mod render;
pub mod scheduler;
pub mod selection;
pub mod view;

pub use config::DeskConfig;
pub use dashboard::{Dashboard, DeskDashboard};
pub use domain::{Asset, AssetCatalog, Horizon};
pub use error::{CatalogError, ConfigError, ViewError};
pub use faq::FaqBook;
pub use interactions::{DeferredTask, Interactions};
pub use selection::SelectionState;
