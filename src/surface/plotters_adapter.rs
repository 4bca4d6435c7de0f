//! [`Surface`] on top of a `plotters` drawing area, plus file output.
//!
//! Plotters has no gradient fills, so gradients are painted as one-pixel
//! horizontal bands. Text needs a registered font on the bitmap path; if text
//! cannot be drawn the chart is still produced and a warning is logged once.

use super::text::estimate_text_width;
use super::{Paint, Point, Rect, Surface};
use crate::chart::{ChartSpec, RenderSummary, render};
use crate::color::{ColorProvider, Rgb8};
use crate::fonts::ensure_fonts_registered;
use anyhow::{Result, anyhow};
use log::{debug, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn stroke_px(width: f64) -> u32 {
    width.round().max(1.0) as u32
}

/// Paints onto a `plotters` drawing area.
pub struct PlottersSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    warned_text: bool,
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    pub fn new(area: DrawingArea<DB, Shift>) -> Self {
        Self {
            area,
            warned_text: false,
        }
    }

    /// Flush to the backend (writes the file for file backends).
    pub fn present(&self) -> Result<()> {
        self.area.present().map_err(|e| anyhow!("{:?}", e))
    }

    fn corners(rect: Rect) -> [(i32, i32); 2] {
        let r = rect.normalized();
        [(px(r.x), px(r.y)), (px(r.right()), px(r.bottom()))]
    }
}

impl<DB: DrawingBackend> Surface for PlottersSurface<DB> {
    fn size(&self) -> (f64, f64) {
        let (w, h) = self.area.dim_in_pixel();
        (w as f64, h as f64)
    }

    fn clear(&mut self) -> Result<()> {
        self.area.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()> {
        let [(x0, y0), (x1, y1)] = Self::corners(rect);
        match paint {
            Paint::Solid(c) => self
                .area
                .draw(&Rectangle::new([(x0, y0), (x1, y1)], rgb_color(*c).filled()))
                .map_err(|e| anyhow!("{:?}", e)),
            Paint::Gradient(g) => {
                for y in y0..y1 {
                    let color = g.color_at(y as f64 + 0.5);
                    self.area
                        .draw(&Rectangle::new([(x0, y), (x1, y + 1)], rgb_color(color).filled()))
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
                Ok(())
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb8, width: f64) -> Result<()> {
        let corners = Self::corners(rect);
        self.area
            .draw(&Rectangle::new(corners, rgb_color(color).stroke_width(stroke_px(width))))
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb8, width: f64) -> Result<()> {
        let path = vec![(px(from.x), px(from.y)), (px(to.x), px(to.y))];
        self.area
            .draw(&PathElement::new(path, rgb_color(color).stroke_width(stroke_px(width))))
            .map_err(|e| anyhow!("{:?}", e))
    }

    fn fill_text(&mut self, text: &str, at: Point, font_px: f64, color: Rgb8) -> Result<()> {
        let font: FontDesc = ("sans-serif", font_px).into();
        let style = font
            .color(&rgb_color(color))
            .pos(Pos::new(HPos::Left, VPos::Center));
        if let Err(e) = self.area.draw(&Text::new(text, (px(at.x), px(at.y)), style)) {
            // No usable font: warn once, keep drawing shapes.
            if !self.warned_text {
                warn!("skipping chart text, backend could not draw it: {:?}", e);
                self.warned_text = true;
            }
        }
        Ok(())
    }

    fn measure_text(&self, text: &str, font_px: f64) -> f64 {
        estimate_text_width(text, font_px)
    }
}

/// Render a chart to `.svg` (vector) or any other extension as PNG-style bitmap.
///
/// `font` is an optional TTF used for bitmap text; see [`ensure_fonts_registered`].
pub fn render_to_file<P: AsRef<Path>>(
    spec: &ChartSpec,
    out_path: P,
    width: u32,
    height: u32,
    colors: &mut dyn ColorProvider,
    font: Option<&Path>,
) -> Result<RenderSummary> {
    if width == 0 || height == 0 {
        return Err(anyhow!("chart size must be non-zero, got {}x{}", width, height));
    }
    let out_path = out_path.as_ref();
    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    let summary = if is_svg {
        let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
        let mut surface = PlottersSurface::new(root);
        let summary = render(spec, &mut surface, colors)?;
        surface.present()?;
        summary
    } else {
        ensure_fonts_registered(font);
        let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        let mut surface = PlottersSurface::new(root);
        let summary = render(spec, &mut surface, colors)?;
        surface.present()?;
        summary
    };
    debug!("wrote chart to {}", out_path.display());
    Ok(summary)
}
