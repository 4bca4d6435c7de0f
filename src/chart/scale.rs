//! Value-axis scale selection.

use super::layout::PlotArea;
use crate::models::ValueRange;
use crate::numeric::tick_unit;
use serde::{Deserialize, Serialize};

/// Largest magnitude the value axis spans. Bigger values are drawn past the
/// frame; at this limit `total_ticks * unit` still fits in an `i64`.
pub const AXIS_LIMIT: i64 = i64::MAX / 16;

/// Tick layout of the value axis for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGeometry {
    /// Value step between two gridlines (`a`), at least 1.
    pub unit: i64,
    /// Gridline steps above the zero line.
    pub positive_ticks: i64,
    /// Gridline steps below the zero line.
    pub negative_ticks: i64,
    /// `positive_ticks + negative_ticks`, at least 1.
    pub total_ticks: i64,
    /// Pixel row of the zero line (the category axis).
    pub x_axis_y: f64,
}

impl TickGeometry {
    /// Value range covered by the whole axis.
    pub fn span(&self) -> f64 {
        self.total_ticks.saturating_mul(self.unit) as f64
    }

    /// Label value of gridline `i` (counted from the bottom).
    pub fn tick_value(&self, i: i64) -> i64 {
        (i - self.negative_ticks).saturating_mul(self.unit)
    }

    /// Pixel row of gridline `i` (counted from the bottom).
    pub fn tick_y(&self, i: i64, plot: &PlotArea) -> f64 {
        plot.bottom() - i as f64 * plot.inner_height() / self.total_ticks as f64
    }
}

/// Derive the tick geometry for `range` inside `plot`.
///
/// The unit is `ceil(abs_max / 3)` rounded down to its leading digit. The axis
/// always contains zero: tick counts are never negative, and an empty or
/// all-zero range gets a single positive step so nothing divides by zero.
/// Extremes beyond [`AXIS_LIMIT`] are clamped to it.
pub fn select_scale(range: ValueRange, plot: &PlotArea) -> TickGeometry {
    let ValueRange { max, min } = range.or_zero();
    let max = max.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let min = min.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let abs_max = max.max(min.saturating_abs());
    let unit = tick_unit(abs_max);

    let mut positive_ticks = ((max as f64 / unit as f64).ceil() as i64).max(0);
    let negative_ticks = ((-(min as f64) / unit as f64).ceil() as i64).max(0);
    if positive_ticks + negative_ticks == 0 {
        positive_ticks = 1;
    }
    let total_ticks = positive_ticks + negative_ticks;
    let x_axis_y = plot.top() + plot.inner_height() * (positive_ticks as f64 / total_ticks as f64);

    TickGeometry {
        unit,
        positive_ticks,
        negative_ticks,
        total_ticks,
        x_axis_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> PlotArea {
        PlotArea::new(800.0, 400.0, 40.0, 30.0)
    }

    #[test]
    fn positive_range() {
        let g = select_scale(ValueRange { max: 238, min: 10 }, &plot());
        assert_eq!(g.unit, 80);
        assert_eq!(g.positive_ticks, 3);
        assert_eq!(g.negative_ticks, 0);
        assert_eq!(g.total_ticks, 3);
        // zero line at the bottom of the plot area
        assert_eq!(g.x_axis_y, 370.0);
    }

    #[test]
    fn mixed_signs() {
        let g = select_scale(ValueRange { max: 30, min: -60 }, &plot());
        assert_eq!(g.unit, 20);
        assert_eq!(g.positive_ticks, 2);
        assert_eq!(g.negative_ticks, 3);
        assert_eq!(g.total_ticks, 5);
        assert_eq!(g.x_axis_y, 30.0 + 340.0 * 2.0 / 5.0);
        assert_eq!(g.tick_value(0), -60);
        assert_eq!(g.tick_value(5), 40);
    }

    #[test]
    fn all_negative_puts_axis_on_top() {
        let g = select_scale(ValueRange { max: -2, min: -10 }, &plot());
        assert_eq!(g.unit, 4);
        assert_eq!(g.positive_ticks, 0);
        assert_eq!(g.negative_ticks, 3);
        assert_eq!(g.x_axis_y, 30.0);
    }

    #[test]
    fn huge_ranges_are_clamped() {
        let g = select_scale(ValueRange { max: i64::MAX, min: i64::MIN }, &plot());
        assert_eq!(g.unit, 100_000_000_000_000_000);
        assert_eq!(g.positive_ticks, 6);
        assert_eq!(g.negative_ticks, 6);
        assert_eq!(g.tick_value(0), -600_000_000_000_000_000);
        assert_eq!(g.tick_value(g.total_ticks), 600_000_000_000_000_000);
        assert_eq!(g.span(), 1.2e18);
    }

    #[test]
    fn zero_and_empty_ranges_stay_finite() {
        for range in [ValueRange { max: 0, min: 0 }, ValueRange::EMPTY] {
            let g = select_scale(range, &plot());
            assert_eq!(g.unit, 1);
            assert_eq!(g.total_ticks, 1);
            assert!(g.x_axis_y.is_finite());
            assert_eq!(g.tick_y(1, &plot()), 30.0);
        }
    }
}
