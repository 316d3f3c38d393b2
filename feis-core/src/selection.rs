//! Which asset and which horizon the desk is showing.

use serde::{Deserialize, Serialize};

use crate::domain::{AssetCatalog, Horizon};

/// The pair driving what the desk displays.
///
/// Created once at startup, mutated in place by user actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub asset_key: String,
    pub horizon: Horizon,
}

impl SelectionState {
    /// Default selection: first catalog asset, medium horizon.
    pub fn initial(catalog: &AssetCatalog) -> Self {
        Self {
            asset_key: catalog.first().key.clone(),
            horizon: Horizon::default(),
        }
    }

    /// Point at another asset. Returns false (and changes nothing) when the
    /// key is not in the catalog.
    pub fn set_asset(&mut self, catalog: &AssetCatalog, key: &str) -> bool {
        if !catalog.contains(key) {
            return false;
        }
        if self.asset_key != key {
            self.asset_key = key.to_string();
        }
        true
    }

    /// Switch horizon from a button label. Unknown labels are ignored.
    pub fn set_horizon_label(&mut self, label: &str) -> Option<Horizon> {
        let horizon = Horizon::from_label(label)?;
        self.horizon = horizon;
        Some(horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_first_asset_medium() {
        let catalog = AssetCatalog::builtin();
        let state = SelectionState::initial(&catalog);
        assert_eq!(state.asset_key, "sp500");
        assert_eq!(state.horizon, Horizon::Medium);
    }

    #[test]
    fn unknown_asset_leaves_state() {
        let catalog = AssetCatalog::builtin();
        let mut state = SelectionState::initial(&catalog);
        let before = state.clone();
        assert!(!state.set_asset(&catalog, "nonexistent"));
        assert_eq!(state, before);
    }

    #[test]
    fn known_asset_switches() {
        let catalog = AssetCatalog::builtin();
        let mut state = SelectionState::initial(&catalog);
        assert!(state.set_asset(&catalog, "btc"));
        assert_eq!(state.asset_key, "btc");
    }

    #[test]
    fn horizon_label_parsing() {
        let catalog = AssetCatalog::builtin();
        let mut state = SelectionState::initial(&catalog);
        assert_eq!(state.set_horizon_label("1Y"), Some(Horizon::Long));
        assert_eq!(state.horizon, Horizon::Long);
        assert_eq!(state.set_horizon_label("bogus"), None);
        assert_eq!(state.horizon, Horizon::Long);
    }
}
