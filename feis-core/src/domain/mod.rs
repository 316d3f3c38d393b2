//! Domain types: horizons, assets and the static catalog.

pub mod asset;
pub mod catalog;
pub mod horizon;

pub use asset::Asset;
pub use catalog::AssetCatalog;
pub use horizon::Horizon;
