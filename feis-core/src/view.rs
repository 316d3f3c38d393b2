//! Text side of the desk: detail panel, summary column, active markers.
//!
//! Updaters write through the [`DeskView`] trait and tolerate missing
//! regions: a region the view does not have is skipped and the rest of the
//! update proceeds.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Asset, AssetCatalog, Horizon};
use crate::error::ViewError;
use crate::render::Trend;

/// A text slot on the desk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    AssetName,
    AssetTag,
    AssetComment,
    AssetRole,
    /// Formatted reference value of one asset.
    Value(String),
    /// Formatted day change of one asset.
    Change(String),
}

impl Region {
    pub fn describe(&self) -> String {
        match self {
            Region::AssetName => "asset-name".to_string(),
            Region::AssetTag => "asset-tag".to_string(),
            Region::AssetComment => "asset-comment".to_string(),
            Region::AssetRole => "asset-role".to_string(),
            Region::Value(key) => format!("{key}-value"),
            Region::Change(key) => format!("{key}-change"),
        }
    }
}

/// Where desk updates are projected.
pub trait DeskView {
    fn has_region(&self, region: &Region) -> bool;

    fn write_text(&mut self, region: &Region, text: &str) -> Result<(), ViewError>;

    /// Keys of the asset selector rows, in display order.
    fn row_keys(&self) -> Vec<String>;

    fn set_row_active(&mut self, key: &str, active: bool) -> Result<(), ViewError>;

    fn set_change_trend(&mut self, key: &str, trend: Trend) -> Result<(), ViewError>;

    fn set_horizon_active(&mut self, horizon: Horizon, active: bool);
}

/// Write an asset's descriptive texts and make its row the only active one.
pub fn update_detail<V: DeskView + ?Sized>(view: &mut V, asset: &Asset) {
    let fields = [
        (Region::AssetName, asset.name.as_str()),
        (Region::AssetTag, asset.tag.as_str()),
        (Region::AssetComment, asset.comment.as_str()),
        (Region::AssetRole, asset.role.as_str()),
    ];
    for (region, text) in &fields {
        if let Err(err) = view.write_text(region, text) {
            debug!(%err, "skipping detail field");
        }
    }

    for key in view.row_keys() {
        let active = key == asset.key;
        if let Err(err) = view.set_row_active(&key, active) {
            debug!(%err, "skipping selector row");
        }
    }
}

/// Write every asset's value, change and trend marker.
///
/// An asset is skipped as a whole when either of its regions is missing.
pub fn update_summary<V: DeskView + ?Sized>(view: &mut V, catalog: &AssetCatalog) {
    for asset in catalog.iter() {
        let value_region = Region::Value(asset.key.clone());
        let change_region = Region::Change(asset.key.clone());
        if !(view.has_region(&value_region) && view.has_region(&change_region)) {
            debug!(key = %asset.key, "skipping summary row without value/change regions");
            continue;
        }

        let value = format_value_fr(asset.base_value, asset.value_decimals);
        let change = format_change(asset.day_change_percent);
        let trend = if asset.is_up_today() { Trend::Up } else { Trend::Down };

        let written = view
            .write_text(&value_region, &value)
            .and_then(|_| view.write_text(&change_region, &change))
            .and_then(|_| view.set_change_trend(&asset.key, trend));
        if let Err(err) = written {
            debug!(key = %asset.key, %err, "skipping summary row");
        }
    }
}

/// Mark one horizon button active, the others inactive.
pub fn mark_horizon<V: DeskView + ?Sized>(view: &mut V, horizon: Horizon) {
    for h in Horizon::ALL {
        view.set_horizon_active(h, h == horizon);
    }
}

/// Format a price the way fr-FR locales do: narrow no-break space between
/// thousands, decimal comma, at most `max_decimals` fraction digits with
/// trailing zeros dropped.
pub fn format_value_fr(value: f64, max_decimals: u8) -> String {
    let decimals = max_decimals as usize;
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(*c);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Day change as shown in the summary column, e.g. `"-0.80 %"`.
pub fn format_change(change: f64) -> String {
    let shown = format!("{change:.2}");
    if shown == "-0.00" {
        "0.00 %".to_string()
    } else {
        format!("{shown} %")
    }
}

/// One asset selector row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    pub key: String,
    pub active: bool,
}

/// In-memory desk view, read by front ends after each update.
#[derive(Debug, Clone, Default)]
pub struct DeskPanel {
    regions: HashMap<Region, String>,
    rows: Vec<RowState>,
    trends: HashMap<String, Trend>,
    horizons: Vec<(Horizon, bool)>,
}

impl DeskPanel {
    /// A panel with every region, row and horizon button the catalog needs.
    pub fn for_catalog(catalog: &AssetCatalog) -> Self {
        let mut regions = HashMap::new();
        for region in [
            Region::AssetName,
            Region::AssetTag,
            Region::AssetComment,
            Region::AssetRole,
        ] {
            regions.insert(region, String::new());
        }
        for key in catalog.keys() {
            regions.insert(Region::Value(key.to_string()), String::new());
            regions.insert(Region::Change(key.to_string()), String::new());
        }
        Self {
            regions,
            rows: catalog
                .keys()
                .map(|key| RowState {
                    key: key.to_string(),
                    active: false,
                })
                .collect(),
            trends: HashMap::new(),
            horizons: Horizon::ALL.iter().map(|&h| (h, false)).collect(),
        }
    }

    /// Drop a region, as if the page lacked that element.
    pub fn remove_region(&mut self, region: &Region) {
        self.regions.remove(region);
    }

    pub fn text(&self, region: &Region) -> Option<&str> {
        self.regions.get(region).map(String::as_str)
    }

    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    pub fn active_row(&self) -> Option<&str> {
        self.rows.iter().find(|r| r.active).map(|r| r.key.as_str())
    }

    pub fn trend(&self, key: &str) -> Option<Trend> {
        self.trends.get(key).copied()
    }

    pub fn active_horizon(&self) -> Option<Horizon> {
        self.horizons.iter().find(|(_, a)| *a).map(|(h, _)| *h)
    }
}

impl DeskView for DeskPanel {
    fn has_region(&self, region: &Region) -> bool {
        self.regions.contains_key(region)
    }

    fn write_text(&mut self, region: &Region, text: &str) -> Result<(), ViewError> {
        let slot = self
            .regions
            .get_mut(region)
            .ok_or_else(|| ViewError::MissingRegion(region.describe()))?;
        slot.clear();
        slot.push_str(text);
        Ok(())
    }

    fn row_keys(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.key.clone()).collect()
    }

    fn set_row_active(&mut self, key: &str, active: bool) -> Result<(), ViewError> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.key == key)
            .ok_or_else(|| ViewError::MissingRow(key.to_string()))?;
        row.active = active;
        Ok(())
    }

    fn set_change_trend(&mut self, key: &str, trend: Trend) -> Result<(), ViewError> {
        if !self.regions.contains_key(&Region::Change(key.to_string())) {
            return Err(ViewError::MissingRegion(format!("{key}-change")));
        }
        self.trends.insert(key.to_string(), trend);
        Ok(())
    }

    fn set_horizon_active(&mut self, horizon: Horizon, active: bool) {
        if let Some(slot) = self.horizons.iter_mut().find(|(h, _)| *h == horizon) {
            slot.1 = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fr_grouping_and_decimals() {
        assert_eq!(format_value_fr(5095.0, 0), "5\u{202f}095");
        assert_eq!(format_value_fr(68440.0, 0), "68\u{202f}440");
        assert_eq!(format_value_fr(322.0, 2), "322");
        assert_eq!(format_value_fr(320.8, 2), "320,8");
        assert_eq!(format_value_fr(1234567.891, 2), "1\u{202f}234\u{202f}567,89");
        assert_eq!(format_value_fr(999.0, 0), "999");
        assert_eq!(format_value_fr(-1500.0, 0), "-1\u{202f}500");
        assert_eq!(format_value_fr(-0.001, 2), "0");
    }

    #[test]
    fn change_text() {
        assert_eq!(format_change(0.32), "0.32 %");
        assert_eq!(format_change(-0.8), "-0.80 %");
        assert_eq!(format_change(-0.0), "0.00 %");
    }

    #[test]
    fn detail_update_marks_single_row() {
        let catalog = AssetCatalog::builtin();
        let mut panel = DeskPanel::for_catalog(&catalog);
        let asset = catalog.get("cac40").unwrap();
        update_detail(&mut panel, asset);

        assert_eq!(panel.text(&Region::AssetName), Some("CAC 40"));
        assert_eq!(panel.text(&Region::AssetTag), Some("Actions France"));
        assert_eq!(panel.text(&Region::AssetComment), Some(asset.comment.as_str()));
        assert_eq!(panel.text(&Region::AssetRole), Some(asset.role.as_str()));
        assert_eq!(panel.rows().iter().filter(|r| r.active).count(), 1);
        assert_eq!(panel.active_row(), Some("cac40"));
    }

    #[test]
    fn missing_detail_region_is_skipped() {
        let catalog = AssetCatalog::builtin();
        let mut panel = DeskPanel::for_catalog(&catalog);
        panel.remove_region(&Region::AssetTag);
        update_detail(&mut panel, catalog.first());

        assert_eq!(panel.text(&Region::AssetTag), None);
        assert_eq!(panel.text(&Region::AssetRole), Some(catalog.first().role.as_str()));
        assert_eq!(panel.active_row(), Some("sp500"));
    }

    #[test]
    fn summary_writes_every_asset() {
        let catalog = AssetCatalog::builtin();
        let mut panel = DeskPanel::for_catalog(&catalog);
        update_summary(&mut panel, &catalog);

        assert_eq!(panel.text(&Region::Value("msci".into())), Some("322"));
        assert_eq!(panel.text(&Region::Change("eth".into())), Some("-0.80 %"));
        assert_eq!(panel.trend("eth"), Some(Trend::Down));
        assert_eq!(panel.trend("btc"), Some(Trend::Up));
    }

    #[test]
    fn summary_skips_asset_with_missing_change_region() {
        let catalog = AssetCatalog::builtin();
        let mut panel = DeskPanel::for_catalog(&catalog);
        panel.remove_region(&Region::Change("btc".into()));
        update_summary(&mut panel, &catalog);

        assert_eq!(panel.trend("btc"), None);
        assert_eq!(panel.text(&Region::Value("btc".into())), Some(""));
        assert_eq!(panel.text(&Region::Value("eth".into())), Some("3\u{202f}905"));
    }

    #[test]
    fn horizon_buttons_exclusive() {
        let catalog = AssetCatalog::builtin();
        let mut panel = DeskPanel::for_catalog(&catalog);
        mark_horizon(&mut panel, Horizon::Short);
        mark_horizon(&mut panel, Horizon::Long);
        assert_eq!(panel.active_horizon(), Some(Horizon::Long));
    }
}
