//! Drawing surfaces: the small immediate-mode 2D API the chart renderer paints on.
//!
//! - [`RecordingSurface`] keeps a list of draw operations (tests, JSON dumps)
//! - [`PlottersSurface`] paints through any `plotters` drawing area (SVG, PNG)
//!
//! Coordinates are pixels with the origin in the top-left corner.

pub mod plotters_adapter;
pub mod recording;
pub mod text;

pub use plotters_adapter::{PlottersSurface, render_to_file};
pub use recording::{DrawOp, RecordingSurface};

use crate::color::Rgb8;
use anyhow::Result;
use serde::{Deserialize, Serialize};

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

/// Axis-aligned rectangle; `width`/`height` are non-negative once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Flip negative extents so that `(x, y)` is the top-left corner.
    pub fn normalized(self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Vertical two-color gradient: `from` at `y0`, `to` at `y1`, clamped outside.
///
/// `y1` may lie above `y0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub y0: f64,
    pub y1: f64,
    pub from: Rgb8,
    pub to: Rgb8,
}

impl LinearGradient {
    pub fn color_at(&self, y: f64) -> Rgb8 {
        let span = self.y1 - self.y0;
        if span == 0.0 || !span.is_finite() {
            return self.from;
        }
        self.from.mix(self.to, (y - self.y0) / span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Rgb8),
    Gradient(LinearGradient),
}

/// Immediate-mode drawing target of a fixed pixel size.
///
/// Implementations hold no chart state; every call paints right away.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    /// Erase everything painted so far.
    fn clear(&mut self) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()>;

    fn stroke_rect(&mut self, rect: Rect, color: Rgb8, width: f64) -> Result<()>;

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb8, width: f64) -> Result<()>;

    /// Paint `text` with its left edge at `at.x` and its vertical middle at `at.y`.
    fn fill_text(&mut self, text: &str, at: Point, font_px: f64, color: Rgb8) -> Result<()>;

    /// Width in pixels that `text` occupies at `font_px`.
    fn measure_text(&self, text: &str, font_px: f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_negative_height() {
        let r = Rect::new(10.0, 50.0, 5.0, -20.0).normalized();
        assert_eq!(r, Rect::new(10.0, 30.0, 5.0, 20.0));
        assert_eq!(r.bottom(), 50.0);
    }

    #[test]
    fn gradient_runs_both_ways() {
        let g = LinearGradient {
            y0: 100.0,
            y1: 0.0,
            from: Rgb8::BLACK,
            to: Rgb8::WHITE,
        };
        assert_eq!(g.color_at(100.0), Rgb8::BLACK);
        assert_eq!(g.color_at(0.0), Rgb8::WHITE);
        assert_eq!(g.color_at(-50.0), Rgb8::WHITE);
        let flat = LinearGradient { y1: 100.0, ..g };
        assert_eq!(flat.color_at(3.0), Rgb8::BLACK);
    }
}
