//! Dashboard controller: wires user actions to selection state, the
//! detail/summary updaters and the chart renderer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::DeskConfig;
use crate::domain::{Asset, AssetCatalog, Horizon};
use crate::render::{self, ChartGeometry, ChartStyle, DisplayList, Surface};
use crate::selection::SelectionState;
use crate::view::{self, DeskPanel, DeskView};

/// The market desk: catalog, selection and the two outputs it drives.
pub struct Dashboard<S, V> {
    catalog: AssetCatalog,
    selection: SelectionState,
    style: ChartStyle,
    refresh_amplitude: f64,
    rng: StdRng,
    surface: S,
    view: V,
}

/// Dashboard recording into in-memory outputs, as used by the front ends.
pub type DeskDashboard = Dashboard<DisplayList, DeskPanel>;

impl DeskDashboard {
    /// Build a dashboard with a display list sized from `config` and a
    /// panel holding every region the catalog needs.
    pub fn in_memory(catalog: AssetCatalog, config: &DeskConfig) -> Self {
        let surface = DisplayList::new(config.chart.width, config.chart.height);
        let view = DeskPanel::for_catalog(&catalog);
        Dashboard::new(catalog, config, surface, view)
    }
}

impl<S: Surface, V: DeskView> Dashboard<S, V> {
    pub fn new(catalog: AssetCatalog, config: &DeskConfig, surface: S, view: V) -> Self {
        let rng = match config.market.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            selection: SelectionState::initial(&catalog),
            catalog,
            style: ChartStyle::from_config(&config.chart),
            refresh_amplitude: config.market.refresh_amplitude,
            rng,
            surface,
            view,
        }
    }

    /// Paint everything for the initial selection.
    pub fn start(&mut self) {
        view::update_summary(&mut self.view, &self.catalog);
        view::mark_horizon(&mut self.view, self.selection.horizon);
        self.refresh_panel();
    }

    /// Select an asset by key and refresh detail text and chart.
    /// Unknown keys are ignored.
    pub fn select_asset(&mut self, key: &str) -> bool {
        if !self.selection.set_asset(&self.catalog, key) {
            debug!(key, "ignoring unknown asset");
            return false;
        }
        self.refresh_panel();
        true
    }

    /// Select a horizon by button label and redraw the chart only.
    /// Unrecognized labels are ignored.
    pub fn select_horizon(&mut self, label: &str) -> bool {
        match self.selection.set_horizon_label(label) {
            Some(horizon) => {
                view::mark_horizon(&mut self.view, horizon);
                self.redraw_chart();
                true
            }
            None => {
                debug!(label, "ignoring unknown horizon");
                false
            }
        }
    }

    pub fn set_horizon(&mut self, horizon: Horizon) {
        self.selection.horizon = horizon;
        view::mark_horizon(&mut self.view, horizon);
        self.redraw_chart();
    }

    /// Redraw every day change at random, then repaint summary and chart.
    ///
    /// Cosmetic only: no data source is consulted and series are untouched.
    pub fn refresh_market(&mut self) {
        let amp = self.refresh_amplitude;
        for asset in self.catalog.iter_mut() {
            let shock: f64 = self.rng.gen_range(-amp..=amp);
            asset.day_change_percent = round_change(shock);
        }
        info!(assets = self.catalog.len(), "market desk refreshed");
        view::update_summary(&mut self.view, &self.catalog);
        self.redraw_chart();
    }

    /// Redraw the chart for the current selection.
    pub fn redraw_chart(&mut self) -> Option<ChartGeometry> {
        let asset = self.catalog.get(&self.selection.asset_key)?;
        render::render(&mut self.surface, asset, self.selection.horizon, &self.style)
    }

    pub fn current_asset(&self) -> Option<&Asset> {
        self.catalog.get(&self.selection.asset_key)
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn refresh_panel(&mut self) {
        if let Some(asset) = self.catalog.get(&self.selection.asset_key) {
            view::update_detail(&mut self.view, asset);
        }
        self.redraw_chart();
    }
}

/// Two decimals, with negative zero folded to zero.
fn round_change(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
