use proptest::prelude::*;

use feis_core::render::ChartGeometry;
use feis_tui::ui::chart_canvas::column_spans;

proptest! {
    /// Every interior column of the area polygon fills exactly one span,
    /// from the curve down to the baseline.
    #[test]
    fn area_columns_fill_one_span(
        series in prop::collection::vec(1.0f64..1000.0, 2..40),
        frac in 0.01f64..0.99,
    ) {
        let g = ChartGeometry::compute(&series, 640.0, 260.0, 32.0, 22.0).unwrap();
        let polygon = g.area_polygon();
        let x = 32.0 + frac * (640.0 - 64.0);
        let spans = column_spans(&polygon, x);
        prop_assert_eq!(spans.len(), 1);
        let (top, bottom) = spans[0];
        prop_assert!(top <= bottom + 1e-9);
        prop_assert!((bottom - (260.0 - 22.0)).abs() < 1e-9);
    }
}
