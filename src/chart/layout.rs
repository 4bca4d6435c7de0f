//! Horizontal layout: plot area, category pitch, and bar rectangles.

use super::scale::TickGeometry;
use crate::surface::Rect;

/// Surface size minus the fixed margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub x_margin: f64,
    pub y_margin: f64,
}

impl PlotArea {
    pub fn new(width: f64, height: f64, x_margin: f64, y_margin: f64) -> Self {
        Self {
            width,
            height,
            x_margin,
            y_margin,
        }
    }

    pub fn left(&self) -> f64 {
        self.x_margin
    }

    pub fn right(&self) -> f64 {
        self.width - self.x_margin
    }

    pub fn top(&self) -> f64 {
        self.y_margin
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.y_margin
    }

    /// Height of the area between the margins.
    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.y_margin
    }

    /// Horizontal space per category; 0 when there is nothing to lay out.
    pub fn pitch(&self, categories: usize) -> f64 {
        if categories == 0 {
            return 0.0;
        }
        (self.width - 2.0 * self.x_margin) / categories as f64
    }

    /// Center of category `i` on the x axis.
    pub fn category_x(&self, i: usize, pitch: f64) -> f64 {
        self.x_margin - pitch / 2.0 + (i + 1) as f64 * pitch
    }
}

/// One bar of the grouped chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub category: usize,
    pub series: usize,
    pub value: f64,
    /// Normalized rectangle between the zero line and the value.
    pub rect: Rect,
    /// Pixel row of the value end of the bar (top for positive values).
    pub value_y: f64,
}

/// Lay out every bar: category `i` holds one bar per series, side by side.
///
/// A series shorter than the category list has no bar at the missing
/// positions.
pub fn layout_bars(
    series: &[Vec<f64>],
    categories: usize,
    bar_width: f64,
    plot: &PlotArea,
    geometry: &TickGeometry,
) -> Vec<Bar> {
    if series.is_empty() || categories == 0 {
        return Vec::new();
    }
    let pitch = plot.pitch(categories);
    let bar_w = pitch * bar_width / series.len() as f64;
    // Left edge of the first bar group, one pitch before category 0.
    let start = plot.left() - pitch * (0.5 + 0.5 * bar_width);
    let span = geometry.span();

    let mut bars = Vec::with_capacity(categories * series.len());
    for i in 0..categories {
        for (j, values) in series.iter().enumerate() {
            let Some(&value) = values.get(i) else {
                continue;
            };
            let x = start + (i + 1) as f64 * pitch + bar_w * j as f64;
            let h = value / span * plot.inner_height();
            let value_y = geometry.x_axis_y - h;
            bars.push(Bar {
                category: i,
                series: j,
                value,
                rect: Rect::new(x, value_y, bar_w, h).normalized(),
                value_y,
            });
        }
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::scale::select_scale;
    use crate::models::ValueRange;

    #[test]
    fn pitch_and_centers() {
        let plot = PlotArea::new(480.0, 300.0, 40.0, 30.0);
        assert_eq!(plot.pitch(0), 0.0);
        assert_eq!(plot.pitch(4), 100.0);
        assert_eq!(plot.category_x(0, 100.0), 90.0);
        assert_eq!(plot.category_x(3, 100.0), 390.0);
    }

    #[test]
    fn bars_are_grouped_and_centered() {
        let plot = PlotArea::new(480.0, 300.0, 40.0, 30.0);
        let g = select_scale(ValueRange { max: 6, min: 0 }, &plot);
        let series = vec![vec![6.0, 3.0], vec![2.0, 4.0]];
        let bars = layout_bars(&series, 2, 0.8, &plot, &g);
        assert_eq!(bars.len(), 4);

        // pitch 200, group 160 wide, two bars of 80
        let first = bars[0];
        assert_eq!((first.category, first.series), (0, 0));
        assert!((first.rect.x - 60.0).abs() < 1e-9);
        assert!((first.rect.width - 80.0).abs() < 1e-9);
        let second = bars[1];
        assert!((second.rect.x - 140.0).abs() < 1e-9);

        // the group is centered on the category tick
        let center = (first.rect.x + second.rect.right()) / 2.0;
        assert!((center - plot.category_x(0, 200.0)).abs() < 1e-9);

        // the max value reaches the top of the plot, bars sit on the zero line
        assert!((first.rect.y - plot.top()).abs() < 1e-9);
        assert!((first.rect.bottom() - g.x_axis_y).abs() < 1e-9);
    }

    #[test]
    fn negative_values_hang_below_axis() {
        let plot = PlotArea::new(480.0, 300.0, 40.0, 30.0);
        let g = select_scale(ValueRange { max: 3, min: -3 }, &plot);
        let bars = layout_bars(&[vec![-3.0]], 1, 0.8, &plot, &g);
        let bar = bars[0];
        assert!((bar.rect.y - g.x_axis_y).abs() < 1e-9);
        assert!(bar.value_y > g.x_axis_y);
        assert!((bar.rect.bottom() - plot.bottom()).abs() < 1e-9);
    }

    #[test]
    fn short_series_leave_gaps() {
        let plot = PlotArea::new(480.0, 300.0, 40.0, 30.0);
        let g = select_scale(ValueRange { max: 5, min: 0 }, &plot);
        let bars = layout_bars(&[vec![1.0, 2.0, 3.0], vec![5.0]], 3, 0.8, &plot, &g);
        assert_eq!(bars.len(), 4);
        assert!(bars.iter().all(|b| b.series == 0 || b.category == 0));
    }
}
