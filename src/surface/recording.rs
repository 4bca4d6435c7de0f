//! A surface that records draw calls instead of painting pixels.

use super::text::estimate_text_width;
use super::{Paint, Point, Rect, Surface};
use crate::color::Rgb8;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb8,
        width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb8,
        width: f64,
    },
    Text {
        text: String,
        at: Point,
        font_px: f64,
        color: Rgb8,
    },
}

/// Display list of everything drawn since the last [`Surface::clear`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Texts in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Pretty JSON array of the recorded operations.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.ops)?)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<()> {
        self.ops.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()> {
        self.ops.push(DrawOp::FillRect {
            rect,
            paint: *paint,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb8, width: f64) -> Result<()> {
        self.ops.push(DrawOp::StrokeRect { rect, color, width });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb8, width: f64) -> Result<()> {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point, font_px: f64, color: Rgb8) -> Result<()> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            font_px,
            color,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str, font_px: f64) -> f64 {
        estimate_text_width(text, font_px)
    }
}
