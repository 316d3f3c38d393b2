//! Drawing primitives and the surface abstraction the chart renders onto.

use serde::{Deserialize, Serialize};

/// A point in surface coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An sRGB colour with straight alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Linear interpolation between two colours, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composite this colour over an opaque background.
    pub fn over(self, background: Rgba) -> Rgba {
        let mut out = background.lerp(Rgba { a: 1.0, ..self }, self.a);
        out.a = 1.0;
        out
    }
}

/// Two-stop linear gradient along the segment `from → to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub start: Rgba,
    pub end: Rgba,
}

impl LinearGradient {
    /// Colour at `p`, projected onto the gradient axis.
    pub fn color_at(&self, p: Point) -> Rgba {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            return self.start;
        }
        let t = ((p.x - self.from.x) * dx + (p.y - self.from.y) * dy) / len2;
        self.start.lerp(self.end, t)
    }
}

/// What a stroke or fill is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

impl Paint {
    pub fn color_at(&self, p: Point) -> Rgba {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.color_at(p),
        }
    }
}

/// A rectangular drawable area.
///
/// Implemented by [`DisplayList`](super::DisplayList), which records the
/// calls so they can be rasterized by a front end or dumped as JSON.
pub trait Surface {
    /// Width and height in surface units.
    fn size(&self) -> (f64, f64);

    /// Wipe the surface and fill it entirely with `paint`.
    fn clear(&mut self, paint: Paint);

    fn stroke_line(&mut self, from: Point, to: Point, paint: Paint, width: f64);

    fn stroke_polyline(&mut self, points: &[Point], paint: Paint, width: f64);

    fn fill_polygon(&mut self, points: &[Point], paint: Paint);

    fn fill_text(&mut self, text: &str, at: Point, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_and_midpoint() {
        let g = LinearGradient {
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 0.0),
            start: Rgba::rgb(0, 0, 0),
            end: Rgba::rgb(200, 100, 50),
        };
        assert_eq!(g.color_at(Point::new(0.0, 40.0)), Rgba::rgb(0, 0, 0));
        assert_eq!(g.color_at(Point::new(100.0, 0.0)), Rgba::rgb(200, 100, 50));
        assert_eq!(g.color_at(Point::new(50.0, 0.0)), Rgba::rgb(100, 50, 25));
        // Clamped beyond the axis.
        assert_eq!(g.color_at(Point::new(300.0, 0.0)), Rgba::rgb(200, 100, 50));
    }

    #[test]
    fn degenerate_gradient_uses_start() {
        let p = Point::new(5.0, 5.0);
        let g = LinearGradient {
            from: p,
            to: p,
            start: Rgba::rgb(1, 2, 3),
            end: Rgba::rgb(9, 9, 9),
        };
        assert_eq!(g.color_at(Point::new(0.0, 0.0)), Rgba::rgb(1, 2, 3));
    }

    #[test]
    fn transparent_over_background_is_background() {
        let bg = Rgba::rgb(2, 6, 23);
        assert_eq!(Rgba::rgba(255, 255, 255, 0.0).over(bg), bg);
        assert_eq!(Rgba::rgb(10, 20, 30).over(bg), Rgba::rgb(10, 20, 30));
    }
}
