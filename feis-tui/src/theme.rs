//! Night-desk theme tokens for the FEIS terminal.
//!
//! # Color Palette
//! - **Background**: slate-950, the chart's own background
//! - **Accent**: cyan (focus, active rows, key hints)
//! - **Positive**: green (gains, up trend)
//! - **Negative**: rose (losses, down trend)
//! - **Warning**: orange (warnings)
//! - **Muted**: gray (secondary text, captions)

use ratatui::style::{Color, Modifier, Style};

use feis_core::render::{Rgba, Trend};

pub const BACKGROUND: Color = Color::Rgb(0x02, 0x06, 0x17);
pub const ACCENT: Color = Color::Rgb(0x06, 0xb6, 0xd4);
pub const POSITIVE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const NEGATIVE: Color = Color::Rgb(0xfb, 0x71, 0x85);
pub const WARNING: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe7, 0xeb);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Colour for a day change or series direction.
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => POSITIVE,
        Trend::Down => NEGATIVE,
    }
}

/// Terminal colour for an opaque engine colour.
pub fn rgb(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Terminal colour for a translucent engine colour drawn over `background`.
pub fn blend(c: Rgba, background: Rgba) -> Color {
    rgb(c.over(background))
}
