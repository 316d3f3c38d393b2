//! Chart rendering onto an abstract drawing surface.

pub mod chart;
pub mod display_list;
pub mod surface;

pub use chart::{caption, render, ChartGeometry, ChartStyle, Trend, TrendPalette};
pub use display_list::{DisplayList, DrawCommand};
pub use surface::{LinearGradient, Paint, Point, Rgba, Surface};
