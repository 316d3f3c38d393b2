use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Horizon;

/// A financial instrument shown on the desk.
///
/// Everything except `day_change_percent` is fixed once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub key: String,
    pub name: String,
    pub tag: String,
    pub comment: String,
    pub role: String,
    /// Reference price shown in the summary column.
    pub base_value: f64,
    /// Maximum fraction digits used when displaying `base_value`.
    pub value_decimals: u8,
    /// Price observations per horizon, oldest first.
    pub series: BTreeMap<Horizon, Vec<f64>>,
    /// Cosmetic day-over-day change, overwritten by a market refresh.
    pub day_change_percent: f64,
}

impl Asset {
    /// Series for a horizon, if present.
    pub fn series_for(&self, horizon: Horizon) -> Option<&[f64]> {
        self.series.get(&horizon).map(Vec::as_slice)
    }

    /// True when the day change should be shown as a gain.
    pub fn is_up_today(&self) -> bool {
        self.day_change_percent >= 0.0
    }
}
