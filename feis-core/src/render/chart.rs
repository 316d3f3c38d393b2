//! Price chart renderer.
//!
//! `render` is a pure function of (asset, horizon, style): it wipes the
//! surface and redraws background, gridlines, the price polyline, the
//! shaded area under it and a caption. Calling it twice with the same
//! inputs records the same commands.

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::domain::{Asset, Horizon};

use super::surface::{LinearGradient, Paint, Point, Rgba, Surface};

/// Direction of a series from first to last observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Up when the last value is at least the first.
    pub fn of(series: &[f64]) -> Trend {
        match (series.first(), series.last()) {
            (Some(first), Some(last)) if last < first => Trend::Down,
            _ => Trend::Up,
        }
    }
}

/// Colour pair used for one trend direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPalette {
    pub line_start: Rgba,
    pub line_end: Rgba,
    pub area_top: Rgba,
    pub area_bottom: Rgba,
}

/// Layout and colours for the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub pad_x: f64,
    pub pad_y: f64,
    /// Number of horizontal bands; the boundaries between them are stroked.
    pub grid_divisions: u32,
    pub background: Rgba,
    pub grid: Rgba,
    pub grid_width: f64,
    pub line_width: f64,
    pub caption: Rgba,
    pub up: TrendPalette,
    pub down: TrendPalette,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let fade = Rgba::rgba(15, 23, 42, 0.0);
        Self {
            pad_x: 32.0,
            pad_y: 22.0,
            grid_divisions: 4,
            background: Rgba::rgb(0x02, 0x06, 0x17),
            grid: Rgba::rgba(75, 85, 99, 0.5),
            grid_width: 1.0,
            line_width: 2.0,
            caption: Rgba::rgb(0x9c, 0xa3, 0xaf),
            up: TrendPalette {
                line_start: Rgba::rgb(0x22, 0xc5, 0x5e),
                line_end: Rgba::rgb(0x06, 0xb6, 0xd4),
                area_top: Rgba::rgba(34, 197, 94, 0.25),
                area_bottom: fade,
            },
            down: TrendPalette {
                line_start: Rgba::rgb(0xfb, 0x71, 0x85),
                line_end: Rgba::rgb(0xf9, 0x73, 0x16),
                area_top: Rgba::rgba(248, 113, 113, 0.25),
                area_bottom: fade,
            },
        }
    }
}

impl ChartStyle {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            pad_x: config.pad_x,
            pad_y: config.pad_y,
            grid_divisions: config.grid_divisions,
            ..Self::default()
        }
    }

    pub fn palette(&self, trend: Trend) -> &TrendPalette {
        match trend {
            Trend::Up => &self.up,
            Trend::Down => &self.down,
        }
    }
}

/// Caption drawn above the plot.
pub fn caption(horizon: Horizon) -> String {
    format!("Horizon {} • maquette", horizon.label())
}

/// Screen-space layout of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<Point>,
    pub min: f64,
    pub max: f64,
    /// `max - min`, or 1 for a flat series.
    pub span: f64,
    /// y of the plot's bottom edge (lowest value).
    pub baseline_y: f64,
    pub left_x: f64,
    pub right_x: f64,
    pub trend: Trend,
}

impl ChartGeometry {
    /// Map a non-empty series into a `width × height` area. Returns `None`
    /// for an empty series.
    pub fn compute(series: &[f64], width: f64, height: f64, pad_x: f64, pad_y: f64) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = if max - min == 0.0 { 1.0 } else { max - min };

        let plot_w = width - pad_x * 2.0;
        let plot_h = height - pad_y * 2.0;
        let steps = series.len().saturating_sub(1).max(1) as f64;

        let points = series
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = pad_x + plot_w * i as f64 / steps;
                let norm = (v - min) / span;
                let y = height - pad_y - norm * plot_h;
                Point::new(x, y)
            })
            .collect();

        Some(Self {
            points,
            min,
            max,
            span,
            baseline_y: height - pad_y,
            left_x: pad_x,
            right_x: width - pad_x,
            trend: Trend::of(series),
        })
    }

    /// The polyline closed along the baseline, right edge then left edge.
    pub fn area_polygon(&self) -> Vec<Point> {
        let mut polygon = self.points.clone();
        polygon.push(Point::new(self.right_x, self.baseline_y));
        polygon.push(Point::new(self.left_x, self.baseline_y));
        polygon
    }
}

/// Redraw the chart for `asset` at `horizon`.
///
/// Does nothing and returns `None` when the asset has no series for the
/// horizon.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    asset: &Asset,
    horizon: Horizon,
    style: &ChartStyle,
) -> Option<ChartGeometry> {
    let series = asset.series_for(horizon)?;
    let (w, h) = surface.size();
    let geometry = ChartGeometry::compute(series, w, h, style.pad_x, style.pad_y)?;

    surface.clear(Paint::Solid(style.background));

    let divisions = style.grid_divisions.max(1);
    for i in 1..divisions {
        let y = h / divisions as f64 * i as f64;
        surface.stroke_line(
            Point::new(0.0, y),
            Point::new(w, y),
            Paint::Solid(style.grid),
            style.grid_width,
        );
    }

    let palette = style.palette(geometry.trend);
    let line_paint = Paint::Linear(LinearGradient {
        from: Point::new(0.0, 0.0),
        to: Point::new(w, 0.0),
        start: palette.line_start,
        end: palette.line_end,
    });
    let area_paint = Paint::Linear(LinearGradient {
        from: Point::new(0.0, style.pad_y),
        to: Point::new(0.0, h - style.pad_y),
        start: palette.area_top,
        end: palette.area_bottom,
    });

    surface.stroke_polyline(&geometry.points, line_paint, style.line_width);
    surface.fill_polygon(&geometry.area_polygon(), area_paint);
    surface.fill_text(
        &caption(horizon),
        Point::new(style.pad_x, style.pad_y - 8.0),
        style.caption,
    );

    Some(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetCatalog;
    use crate::render::DisplayList;

    #[test]
    fn trend_direction() {
        assert_eq!(Trend::of(&[1.0, 2.0]), Trend::Up);
        assert_eq!(Trend::of(&[2.0, 2.0]), Trend::Up);
        assert_eq!(Trend::of(&[2.0, 1.0]), Trend::Down);
        assert_eq!(Trend::of(&[5.0]), Trend::Up);
    }

    #[test]
    fn extremes_touch_plot_edges() {
        let g = ChartGeometry::compute(&[10.0, 30.0, 20.0], 200.0, 100.0, 10.0, 10.0).unwrap();
        assert_eq!(g.points[0], Point::new(10.0, 90.0));
        assert_eq!(g.points[1], Point::new(100.0, 10.0));
        assert_eq!(g.points[2], Point::new(190.0, 50.0));
        assert_eq!(g.span, 20.0);
    }

    #[test]
    fn flat_series_sits_on_baseline() {
        let g = ChartGeometry::compute(&[7.0, 7.0, 7.0], 200.0, 100.0, 10.0, 10.0).unwrap();
        assert_eq!(g.span, 1.0);
        assert!(g.points.iter().all(|p| p.y == g.baseline_y));
    }

    #[test]
    fn single_point_at_left_edge() {
        let g = ChartGeometry::compute(&[42.0], 200.0, 100.0, 32.0, 22.0).unwrap();
        assert_eq!(g.points.len(), 1);
        assert_eq!(g.points[0].x, 32.0);
    }

    #[test]
    fn empty_series_has_no_geometry() {
        assert!(ChartGeometry::compute(&[], 200.0, 100.0, 10.0, 10.0).is_none());
    }

    #[test]
    fn render_draws_full_frame() {
        let catalog = AssetCatalog::builtin();
        let asset = catalog.get("sp500").unwrap();
        let mut list = DisplayList::new(640.0, 260.0);
        let geometry = render(&mut list, asset, Horizon::Medium, &ChartStyle::default()).unwrap();

        assert!(matches!(list.commands[0], crate::render::DrawCommand::Clear { .. }));
        assert_eq!(list.line_count(), 3);
        assert_eq!(list.polylines().next().unwrap().len(), 5);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Horizon 1M • maquette"]);
        assert_eq!(geometry.trend, Trend::Up);
    }

    #[test]
    fn down_trend_uses_down_palette() {
        let catalog = AssetCatalog::builtin();
        // ETH 1D: 3920 → 3905
        let asset = catalog.get("eth").unwrap();
        let style = ChartStyle::default();
        let mut list = DisplayList::new(640.0, 260.0);
        render(&mut list, asset, Horizon::Short, &style).unwrap();

        let stroke = list
            .commands
            .iter()
            .find_map(|c| match c {
                crate::render::DrawCommand::Polyline { paint, .. } => Some(*paint),
                _ => None,
            })
            .unwrap();
        match stroke {
            Paint::Linear(g) => {
                assert_eq!(g.start, style.down.line_start);
                assert_eq!(g.end, style.down.line_end);
            }
            Paint::Solid(_) => panic!("expected gradient stroke"),
        }
    }

    #[test]
    fn missing_horizon_draws_nothing() {
        let catalog = AssetCatalog::builtin();
        let mut asset = catalog.first().clone();
        asset.series.remove(&Horizon::Long);
        let mut list = DisplayList::new(640.0, 260.0);
        assert!(render(&mut list, &asset, Horizon::Long, &ChartStyle::default()).is_none());
        assert!(list.is_blank());
    }

    #[test]
    fn render_is_idempotent() {
        let catalog = AssetCatalog::builtin();
        let asset = catalog.get("btc").unwrap();
        let style = ChartStyle::default();
        let mut a = DisplayList::new(640.0, 260.0);
        let mut b = DisplayList::new(640.0, 260.0);
        render(&mut a, asset, Horizon::Long, &style);
        render(&mut b, asset, Horizon::Long, &style);
        render(&mut b, asset, Horizon::Long, &style);
        assert_eq!(a, b);
    }
}
