use serde::{Deserialize, Serialize};

/// Row-major table of text cells as produced by the CSV reader.
///
/// Row 0 is the header row. It has no special meaning beyond its position:
/// the range scan skips it, the transpose step treats it like any other row.
pub type Table = Vec<Vec<String>>;

/// Rounded extremes of every numeric cell outside the category column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub max: i64,
    pub min: i64,
}

impl ValueRange {
    /// Result of a scan that found no numeric cell.
    pub const EMPTY: ValueRange = ValueRange {
        max: i64::MIN,
        min: i64::MAX,
    };

    /// True when no numeric cell contributed to the range.
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    /// Range used for axis scaling: a degenerate range collapses to `{0, 0}`.
    pub fn or_zero(self) -> ValueRange {
        if self.is_empty() {
            ValueRange { max: 0, min: 0 }
        } else {
            self
        }
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// How `transpose` decides which cells become categories and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransposeMode {
    /// Every column is filtered on its own: empty and non-numeric cells are
    /// dropped, the category column included. Row 0 takes part like any row.
    #[default]
    Literal,
    /// Row 0 is a header. A row is kept only when its category cell is
    /// non-empty and every value column has a number in it, so categories and
    /// series always have the same length.
    RowAligned,
}

/// Category labels plus the value series that line up with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transposed {
    pub categories: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

/// Everything the renderer needs from a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<Vec<f64>>,
    pub range: ValueRange,
}
