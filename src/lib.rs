//! csvbar
//!
//! A small Rust library for turning a CSV table into a grouped bar chart.
//! Pairs with the `csvbar` CLI and the `csvbar-gui` desktop viewer.
//!
//! ### Features
//! - Load a CSV file as rows of text cells (only `text/csv` input is accepted)
//! - Pick a category column; every other numeric column becomes a bar series
//! - Automatic value axis: tick unit, gridlines, negative values below the zero line
//! - Paint onto any [`surface::Surface`]: SVG/PNG via plotters, a display list, or a GUI
//!
//! ### Example
//! ```no_run
//! use csvbar::{ChartSpec, RandomColors, TransposeMode};
//!
//! let table = csvbar::input::load_table("sales.csv")?;
//! let data = csvbar::transform::prepare(&table, 0, TransposeMode::Literal);
//! let spec = ChartSpec::new("Sales", data);
//! csvbar::surface::render_to_file(&spec, "sales.svg", 1000, 600, &mut RandomColors::new(), None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod color;
pub mod fonts;
pub mod input;
pub mod models;
pub mod numeric;
pub mod style;
pub mod surface;
pub mod transform;

pub use chart::{ChartSpec, RenderSummary, TickGeometry, render};
pub use color::{ColorProvider, FixedColors, PaletteColors, RandomColors, Rgb8};
pub use models::{ChartData, Table, TransposeMode, Transposed, ValueRange};
pub use style::ChartStyle;
pub use transform::{compute_range, prepare, transpose};
