//! Rasterizes a recorded chart frame onto a ratatui braille canvas.
//!
//! Surface coordinates grow downward; canvas coordinates grow upward, so
//! every y is flipped against the frame height. Gradients are sampled per
//! segment, translucent fills are blended over the background, and polygons
//! are filled with vertical hatching.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Widget};

use feis_core::render::{DisplayList, DrawCommand, Paint, Point, Rgba};

use crate::theme;

/// Hatch columns across the frame width when filling polygons.
const HATCH_COLUMNS: usize = 160;

pub struct ChartCanvas<'a> {
    list: &'a DisplayList,
    block: Option<Block<'a>>,
}

impl<'a> ChartCanvas<'a> {
    pub fn new(list: &'a DisplayList) -> Self {
        Self { list, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<'a> Widget for ChartCanvas<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = self.list;
        let background = background_of(list);

        // Paint order: grid, fills, strokes, captions.
        let mut ordered: Vec<&DrawCommand> = list.commands.iter().collect();
        ordered.sort_by_key(|c| z_rank(c));

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(theme::rgb(background))
            .x_bounds([0.0, list.width])
            .y_bounds([0.0, list.height])
            .paint(move |ctx| {
                let mut rank = 0;
                for cmd in &ordered {
                    let r = z_rank(cmd);
                    if r != rank {
                        ctx.layer();
                        rank = r;
                    }
                    paint_command(ctx, cmd, list, background);
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

fn z_rank(cmd: &DrawCommand) -> u8 {
    match cmd {
        DrawCommand::Clear { .. } | DrawCommand::Line { .. } => 0,
        DrawCommand::Polygon { .. } => 1,
        DrawCommand::Polyline { .. } => 2,
        DrawCommand::Text { .. } => 3,
    }
}

/// Colour of the frame's clear command, or the desk background.
pub fn background_of(list: &DisplayList) -> Rgba {
    list.commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::Clear { paint } => Some(paint.color_at(Point::new(0.0, 0.0))),
            _ => None,
        })
        .unwrap_or(Rgba::rgb(0x02, 0x06, 0x17))
}

fn paint_command(ctx: &mut Context<'_>, cmd: &DrawCommand, list: &DisplayList, background: Rgba) {
    let h = list.height;
    match cmd {
        DrawCommand::Clear { .. } => {}
        DrawCommand::Line { from, to, paint, .. } => {
            segment(ctx, *from, *to, paint, h, background);
        }
        DrawCommand::Polyline { points, paint, .. } => {
            for pair in points.windows(2) {
                segment(ctx, pair[0], pair[1], paint, h, background);
            }
            if let [only] = points.as_slice() {
                segment(ctx, *only, *only, paint, h, background);
            }
        }
        DrawCommand::Polygon { points, paint } => {
            let (min_x, max_x) = x_extent(points);
            if max_x <= min_x {
                return;
            }
            let step = list.width / HATCH_COLUMNS as f64;
            let mut x = min_x;
            while x < max_x {
                for (y0, y1) in column_spans(points, x) {
                    let mid = Point::new(x, (y0 + y1) / 2.0);
                    let color = theme::blend(paint.color_at(mid), background);
                    ctx.draw(&CanvasLine::new(x, h - y0, x, h - y1, color));
                }
                x += step;
            }
        }
        DrawCommand::Text { text, at, color } => {
            ctx.print(
                at.x,
                h - at.y,
                Span::styled(text.clone(), Style::default().fg(theme::rgb(*color))),
            );
        }
    }
}

fn segment(ctx: &mut Context<'_>, from: Point, to: Point, paint: &Paint, h: f64, background: Rgba) {
    let mid = Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    let color = theme::blend(paint.color_at(mid), background);
    ctx.draw(&CanvasLine::new(from.x, h - from.y, to.x, h - to.y, color));
}

fn x_extent(points: &[Point]) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.x), hi.max(p.x))
    })
}

/// Vertical spans `(y_top, y_bottom)` where the column at `x` is inside
/// the polygon (even-odd rule). Vertical edges are ignored.
pub fn column_spans(points: &[Point], x: f64) -> Vec<(f64, f64)> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }
    let mut ys: Vec<f64> = Vec::new();
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        if p.x == q.x {
            continue;
        }
        let (lo, hi) = if p.x < q.x { (p, q) } else { (q, p) };
        if x >= lo.x && x < hi.x {
            ys.push(lo.y + (x - lo.x) * (hi.y - lo.y) / (hi.x - lo.x));
        }
    }
    ys.sort_by(|a, b| a.total_cmp(b));
    ys.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feis_core::render::{render, ChartGeometry, ChartStyle};
    use feis_core::{AssetCatalog, Horizon};

    #[test]
    fn area_column_spans_curve_to_baseline() {
        let g = ChartGeometry::compute(&[10.0, 20.0], 100.0, 100.0, 10.0, 10.0).unwrap();
        let polygon = g.area_polygon();
        // Halfway along the rising line: y = 50, baseline at 90.
        let spans = column_spans(&polygon, 50.0);
        assert_eq!(spans.len(), 1);
        assert!((spans[0].0 - 50.0).abs() < 1e-9);
        assert!((spans[0].1 - 90.0).abs() < 1e-9);
    }

    #[test]
    fn outside_polygon_has_no_spans() {
        let g = ChartGeometry::compute(&[10.0, 20.0], 100.0, 100.0, 10.0, 10.0).unwrap();
        assert!(column_spans(&g.area_polygon(), 5.0).is_empty());
        assert!(column_spans(&g.area_polygon(), 95.0).is_empty());
    }

    #[test]
    fn background_from_clear_command() {
        let catalog = AssetCatalog::builtin();
        let mut list = DisplayList::new(640.0, 260.0);
        render(&mut list, catalog.first(), Horizon::Medium, &ChartStyle::default());
        assert_eq!(background_of(&list), Rgba::rgb(0x02, 0x06, 0x17));
    }

    #[test]
    fn renders_into_buffer() {
        let catalog = AssetCatalog::builtin();
        let mut list = DisplayList::new(640.0, 260.0);
        render(&mut list, catalog.first(), Horizon::Long, &ChartStyle::default());

        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        ChartCanvas::new(&list).render(area, &mut buf);

        let drawn = buf.content().iter().filter(|c| c.symbol() != " ").count();
        assert!(drawn > 0);
    }
}
