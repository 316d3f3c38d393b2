//! Recording surface: every draw call becomes a serializable command.

use serde::{Deserialize, Serialize};

use super::surface::{Paint, Point, Rgba, Surface};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
        width: f64,
    },
    Polyline {
        points: Vec<Point>,
        paint: Paint,
        width: f64,
    },
    Polygon {
        points: Vec<Point>,
        paint: Paint,
    },
    Text {
        text: String,
        at: Point,
        color: Rgba,
    },
}

/// In-memory surface of a fixed size.
///
/// `clear` drops everything recorded so far, so the list always describes
/// exactly one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }

    /// All recorded polylines, in draw order.
    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for DisplayList {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, paint: Paint) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { paint });
    }

    fn stroke_line(&mut self, from: Point, to: Point, paint: Paint, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            paint,
            width,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], paint: Paint, width: f64) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            paint,
            width,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], paint: Paint) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            paint,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
        });
    }
}
