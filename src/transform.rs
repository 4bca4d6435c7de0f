//! Table → chart data: value range scan and column-wise transpose.
//!
//! Both steps use [`try_parse_number`] so "numeric-looking" means the same thing
//! everywhere. Non-numeric cells are skipped, never coerced to zero.

use crate::models::{ChartData, Table, TransposeMode, Transposed, ValueRange};
use crate::numeric::{round_half_up, try_parse_number};
use log::debug;

/// Scan rows `1..` for the rounded max/min of every numeric cell outside the
/// category column.
///
/// Row 0 is never scanned, even when it holds numbers. With no numeric cell the
/// result is [`ValueRange::EMPTY`]. An out-of-range `category_index` simply means
/// every column is scanned.
pub fn compute_range(category_index: usize, rows: &[Vec<String>]) -> ValueRange {
    let values = rows.iter().skip(1).flat_map(|row| {
        row.iter()
            .enumerate()
            .filter(move |(col, _)| *col != category_index)
            .filter_map(|(_, cell)| try_parse_number(cell))
    });
    range_of(values)
}

/// Rounded extremes of a stream of numbers.
fn range_of(values: impl IntoIterator<Item = f64>) -> ValueRange {
    let (mut max, mut min) = (f64::NEG_INFINITY, f64::INFINITY);
    for v in values {
        max = max.max(v);
        min = min.min(v);
    }
    if max < min {
        return ValueRange::EMPTY;
    }
    ValueRange {
        max: round_half_up(max) as i64,
        min: round_half_up(min) as i64,
    }
}

/// Split the table into category labels and one value series per column.
///
/// Columns are visited in order `0..rows[0].len()` and every row takes part,
/// row 0 included. Each column is filtered independently: empty and
/// non-numeric cells are dropped. The category column contributes the raw cell
/// text of the cells it keeps; any other column contributes the parsed values
/// and is dropped entirely when nothing survives.
///
/// Because every column is filtered on its own, a value series can be shorter
/// than the category list when cells are missing. Values stay in row order but
/// are not re-aligned to their row's label. Use [`TransposeMode::RowAligned`]
/// through [`transpose_with`] when that matters.
pub fn transpose(category_index: usize, rows: &[Vec<String>]) -> Transposed {
    let column_count = rows.first().map_or(0, Vec::len);
    let mut out = Transposed::default();

    for col in 0..column_count {
        let mut values = Vec::new();
        for row in rows {
            let Some(cell) = row.get(col) else {
                continue;
            };
            let Some(v) = try_parse_number(cell) else {
                continue;
            };
            if col == category_index {
                out.categories.push(cell.clone());
            } else {
                values.push(v);
            }
        }
        if !values.is_empty() {
            out.series.push(values);
        }
    }
    out
}

/// Row-aligned variant: header skipped, incomplete rows dropped as a whole.
fn transpose_row_aligned(category_index: usize, rows: &[Vec<String>]) -> Transposed {
    let column_count = rows.first().map_or(0, Vec::len);
    let body = rows.get(1..).unwrap_or_default();

    // Columns that hold at least one number below the header.
    let value_columns: Vec<usize> = (0..column_count)
        .filter(|col| *col != category_index)
        .filter(|col| {
            body.iter()
                .any(|row| row.get(*col).and_then(|c| try_parse_number(c)).is_some())
        })
        .collect();

    let mut out = Transposed {
        categories: Vec::new(),
        series: vec![Vec::new(); value_columns.len()],
    };

    for row in body {
        let Some(label) = row.get(category_index).filter(|c| !c.trim().is_empty()) else {
            continue;
        };
        let parsed: Option<Vec<f64>> = value_columns
            .iter()
            .map(|col| row.get(*col).and_then(|c| try_parse_number(c)))
            .collect();
        let Some(values) = parsed else {
            continue;
        };
        out.categories.push(label.clone());
        for (series, v) in out.series.iter_mut().zip(values) {
            series.push(v);
        }
    }
    out.series.retain(|s| !s.is_empty());
    out
}

/// Transpose using the given mode.
pub fn transpose_with(category_index: usize, rows: &[Vec<String>], mode: TransposeMode) -> Transposed {
    match mode {
        TransposeMode::Literal => transpose(category_index, rows),
        TransposeMode::RowAligned => transpose_row_aligned(category_index, rows),
    }
}

/// Run both transform steps for a host.
///
/// In literal mode the range comes from [`compute_range`]. In row-aligned mode
/// it is taken from the retained values so the axis matches what gets drawn.
pub fn prepare(table: &Table, category_index: usize, mode: TransposeMode) -> ChartData {
    let Transposed { categories, series } = transpose_with(category_index, table, mode);
    let range = match mode {
        TransposeMode::Literal => compute_range(category_index, table),
        TransposeMode::RowAligned => range_of(series.iter().flatten().copied()),
    };
    debug!(
        "prepared {} categories, {} series, range {:?} ({:?})",
        categories.len(),
        series.len(),
        range,
        mode
    );
    ChartData {
        categories,
        series,
        range,
    }
}
