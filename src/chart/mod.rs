//! Grouped bar chart renderer.
//!
//! A render is one full repaint in a fixed order:
//! 1. setup (category count, pitch)
//! 2. value-axis scale selection ([`scale::select_scale`])
//! 3. frame: background, title, value axis with gridlines and labels
//! 4. bars, one color per series
//! 5. category axis with labels
//!
//! Degenerate input (no categories, no series, all-zero values) never fails;
//! it produces an empty or flat chart. Errors only come from the surface.

pub mod layout;
pub mod scale;

pub use layout::{Bar, PlotArea, layout_bars};
pub use scale::{TickGeometry, select_scale};

use crate::color::{ColorProvider, Rgb8};
use crate::models::{ChartData, ValueRange};
use crate::numeric::format_tick_label;
use crate::style::ChartStyle;
use crate::surface::{LinearGradient, Paint, Point, Rect, Surface};
use anyhow::Result;
use log::trace;
use serde::{Deserialize, Serialize};

/// Vertical middle of the title text, in pixels from the top.
const TITLE_Y: f64 = 15.0;
const AXIS_LINE_WIDTH: f64 = 2.0;
const GRID_LINE_WIDTH: f64 = 0.5;
const BAR_BORDER_WIDTH: f64 = 1.0;
/// How far bar gradients fade towards white at the zero line.
const BAR_FADE: f64 = 0.45;

/// Everything one render needs. Built once per dataset, never mutated by rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Vec<f64>>,
    pub range: ValueRange,
    pub style: ChartStyle,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, data: ChartData) -> Self {
        Self {
            title: title.into(),
            categories: data.categories,
            series: data.series,
            range: data.range,
            style: ChartStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style.normalized();
        self
    }
}

/// What a render pass computed and drew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSummary {
    pub geometry: TickGeometry,
    pub pitch: f64,
    pub bars: usize,
    pub colors: Vec<Rgb8>,
}

/// Paint the whole chart onto `surface`.
///
/// `colors` is asked for one color per series, in series order.
pub fn render<S: Surface + ?Sized>(
    spec: &ChartSpec,
    surface: &mut S,
    colors: &mut dyn ColorProvider,
) -> Result<RenderSummary> {
    let style = &spec.style;
    let (width, height) = surface.size();
    let plot = PlotArea::new(width, height, style.x_margin, style.y_margin);

    // 1) Setup
    let elements = spec.categories.len();
    let pitch = plot.pitch(elements);

    // 2) Scale
    let geometry = select_scale(spec.range, &plot);

    // 3) Frame
    draw_frame(spec, surface, &plot, &geometry)?;

    // 4) Bars
    let series_colors = colors.take_colors(spec.series.len());
    let bars = layout_bars(&spec.series, elements, style.bar_width, &plot, &geometry);
    for bar in &bars {
        let color = series_colors.get(bar.series).copied().unwrap_or(style.line_color);
        let fill = Paint::Gradient(LinearGradient {
            y0: bar.value_y,
            y1: geometry.x_axis_y,
            from: color,
            to: color.mix(Rgb8::WHITE, BAR_FADE),
        });
        surface.fill_rect(bar.rect, &fill)?;
        surface.stroke_rect(bar.rect, color, BAR_BORDER_WIDTH)?;
    }

    // 5) Category axis
    draw_x_axis(spec, surface, &plot, &geometry, pitch)?;

    trace!(
        "rendered {} bars over {} categories, unit {} x {} ticks",
        bars.len(),
        elements,
        geometry.unit,
        geometry.total_ticks
    );
    Ok(RenderSummary {
        geometry,
        pitch,
        bars: bars.len(),
        colors: series_colors,
    })
}

fn draw_frame<S: Surface + ?Sized>(
    spec: &ChartSpec,
    surface: &mut S,
    plot: &PlotArea,
    geometry: &TickGeometry,
) -> Result<()> {
    let style = &spec.style;

    let background = Paint::Gradient(LinearGradient {
        y0: 0.0,
        y1: plot.height,
        from: style.background_top,
        to: style.background_bottom,
    });
    surface.fill_rect(Rect::new(0.0, 0.0, plot.width, plot.height), &background)?;

    if !spec.title.is_empty() {
        let tw = surface.measure_text(&spec.title, style.title_font_px);
        let at = Point::new(plot.width / 2.0 - tw / 2.0, TITLE_Y);
        surface.fill_text(&spec.title, at, style.title_font_px, style.line_color)?;
    }

    // Value axis
    surface.stroke_line(
        Point::new(plot.left(), plot.top()),
        Point::new(plot.left(), plot.bottom()),
        style.line_color,
        AXIS_LINE_WIDTH,
    )?;

    for i in 0..=geometry.total_ticks {
        let y = geometry.tick_y(i, plot);
        let label = format_tick_label(geometry.tick_value(i), style.locale.as_deref());
        let tw = surface.measure_text(&label, style.label_font_px);

        surface.stroke_line(
            Point::new(plot.left() + 1.0, y),
            Point::new(plot.left() - 3.0, y),
            style.line_color,
            AXIS_LINE_WIDTH,
        )?;
        surface.stroke_line(
            Point::new(plot.left() + 1.0, y),
            Point::new(plot.right(), y),
            style.grid_color,
            GRID_LINE_WIDTH,
        )?;
        surface.fill_text(
            &label,
            Point::new(plot.left() - tw - 5.0, y),
            style.label_font_px,
            style.line_color,
        )?;
    }
    Ok(())
}

fn draw_x_axis<S: Surface + ?Sized>(
    spec: &ChartSpec,
    surface: &mut S,
    plot: &PlotArea,
    geometry: &TickGeometry,
    pitch: f64,
) -> Result<()> {
    let style = &spec.style;
    let y = geometry.x_axis_y;

    surface.stroke_line(
        Point::new(plot.left(), y),
        Point::new(plot.right(), y),
        style.line_color,
        AXIS_LINE_WIDTH,
    )?;

    for (i, label) in spec.categories.iter().enumerate() {
        let x = plot.category_x(i, pitch);
        surface.stroke_line(
            Point::new(x, y),
            Point::new(x, y + 3.0),
            style.line_color,
            AXIS_LINE_WIDTH,
        )?;
        let tw = surface.measure_text(label, style.label_font_px);
        surface.fill_text(
            label,
            Point::new(x - tw / 2.0, y + 12.0),
            style.label_font_px,
            style.line_color,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FixedColors;
    use crate::surface::{DrawOp, RecordingSurface};

    fn spec(categories: &[&str], series: Vec<Vec<f64>>, range: ValueRange) -> ChartSpec {
        ChartSpec::new(
            "Test",
            ChartData {
                categories: categories.iter().map(|c| c.to_string()).collect(),
                series,
                range,
            },
        )
    }

    #[test]
    fn draws_in_order_background_title_axis() {
        let s = spec(&["A"], vec![vec![5.0]], ValueRange { max: 5, min: 5 });
        let mut surface = RecordingSurface::new(400, 300);
        render(&s, &mut surface, &mut FixedColors::new(vec![Rgb8::BLACK])).unwrap();

        let ops = surface.ops();
        assert!(matches!(ops[0], DrawOp::FillRect { paint: Paint::Gradient(_), .. }));
        assert!(matches!(&ops[1], DrawOp::Text { text, .. } if text == "Test"));
        assert!(matches!(ops[2], DrawOp::Line { width, .. } if width == AXIS_LINE_WIDTH));
        // category label comes last
        assert!(matches!(ops.last(), Some(DrawOp::Text { text, .. }) if text == "A"));
    }

    #[test]
    fn tick_labels_run_bottom_to_top() {
        let s = spec(&["A"], vec![vec![30.0]], ValueRange { max: 30, min: -60 });
        let mut surface = RecordingSurface::new(400, 300);
        let summary = render(&s, &mut surface, &mut FixedColors::new(vec![Rgb8::BLACK])).unwrap();
        assert_eq!(summary.geometry.total_ticks, 5);
        let labels: Vec<&str> = surface.texts().into_iter().skip(1).take(6).collect();
        assert_eq!(labels, vec!["-60", "-40", "-20", "0", "20", "40"]);
    }

    #[test]
    fn empty_title_is_not_drawn() {
        let mut s = spec(&[], vec![], ValueRange::EMPTY);
        s.title.clear();
        let mut surface = RecordingSurface::new(400, 300);
        render(&s, &mut surface, &mut FixedColors::new(vec![])).unwrap();
        assert_eq!(surface.texts(), vec!["0", "1"]);
    }
}
