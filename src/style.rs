//! Chart style configuration.
//!
//! All fields have defaults, so a JSON style file only needs the values it
//! changes:
//!
//! ```json
//! { "bar_width": 0.6, "line_color": "#333333", "locale": "de" }
//! ```

use crate::color::Rgb8;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixed drawing constants for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Horizontal margin (px) left and right of the plot area.
    pub x_margin: f64,
    /// Vertical margin (px) above and below the plot area.
    pub y_margin: f64,
    /// Share of a category's pitch covered by its bar group, in `(0, 1]`.
    pub bar_width: f64,
    /// Axes, ticks, title and labels.
    pub line_color: Rgb8,
    /// Horizontal gridlines.
    pub grid_color: Rgb8,
    pub background_top: Rgb8,
    pub background_bottom: Rgb8,
    pub title_font_px: f64,
    pub label_font_px: f64,
    /// Locale tag for grouped tick labels (`"en"`, `"de"`, ...). `None` prints plain integers.
    pub locale: Option<String>,
}

pub const DEFAULT_BAR_WIDTH: f64 = 0.80;

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            x_margin: 40.0,
            y_margin: 30.0,
            bar_width: DEFAULT_BAR_WIDTH,
            line_color: Rgb8::BLACK,
            grid_color: Rgb8::new(0x88, 0x88, 0x88),
            background_top: Rgb8::WHITE,
            background_bottom: Rgb8::new(0xEE, 0xEE, 0xEE),
            title_font_px: 20.0,
            label_font_px: 12.0,
            locale: None,
        }
    }
}

impl ChartStyle {
    /// Load a style from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading style file {}", path.display()))?;
        let style: ChartStyle = serde_json::from_str(&text)
            .with_context(|| format!("parsing style file {}", path.display()))?;
        Ok(style.normalized())
    }

    /// Clamp values that would break the layout.
    ///
    /// `bar_width` outside `(0, 1]` (or NaN) falls back to the default; margins
    /// and font sizes are kept non-negative.
    pub fn normalized(mut self) -> Self {
        if !(self.bar_width > 0.0 && self.bar_width <= 1.0) {
            self.bar_width = DEFAULT_BAR_WIDTH;
        }
        self.x_margin = self.x_margin.max(0.0);
        self.y_margin = self.y_margin.max(0.0);
        self.title_font_px = self.title_font_px.max(0.0);
        self.label_font_px = self.label_font_px.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let style: ChartStyle = serde_json::from_str(r##"{"bar_width": 0.5, "line_color": "#333333"}"##).unwrap();
        assert_eq!(style.bar_width, 0.5);
        assert_eq!(style.line_color, Rgb8::new(0x33, 0x33, 0x33));
        assert_eq!(style.x_margin, 40.0);
        assert_eq!(style.y_margin, 30.0);
        assert!(style.locale.is_none());
    }

    #[test]
    fn normalized_rejects_bad_bar_width() {
        let s = ChartStyle { bar_width: 1.5, ..Default::default() }.normalized();
        assert_eq!(s.bar_width, DEFAULT_BAR_WIDTH);
        let s = ChartStyle { bar_width: f64::NAN, ..Default::default() }.normalized();
        assert_eq!(s.bar_width, DEFAULT_BAR_WIDTH);
        let s = ChartStyle { bar_width: 1.0, x_margin: -3.0, ..Default::default() }.normalized();
        assert_eq!(s.bar_width, 1.0);
        assert_eq!(s.x_margin, 0.0);
    }
}
