use csvbar::surface::render_to_file;
use csvbar::{ChartSpec, PaletteColors, TransposeMode, prepare};
use std::fs;
use tempfile::tempdir;

fn sample_spec() -> ChartSpec {
    let table: Vec<Vec<String>> = [
        ["year", "north", "south"],
        ["2021", "120", "-40"],
        ["2022", "180", "35"],
        ["2023", "238", "60"],
    ]
    .iter()
    .map(|r| r.iter().map(|c| c.to_string()).collect())
    .collect();
    ChartSpec::new("Revenue", prepare(&table, 0, TransposeMode::RowAligned))
}

#[test]
fn svg_file_has_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    let summary = render_to_file(&sample_spec(), &path, 800, 500, &mut PaletteColors::default(), None)
        .unwrap();

    assert_eq!(summary.bars, 6);
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Revenue"));
    // Office blue for the first series
    assert!(svg.to_ascii_uppercase().contains("#4472C4"));
}

#[test]
fn zero_size_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    let err = render_to_file(&sample_spec(), &path, 0, 500, &mut PaletteColors::default(), None)
        .unwrap_err();
    assert!(err.to_string().contains("non-zero"));
    assert!(!path.exists());
}

#[test]
fn empty_chart_still_writes_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let spec = ChartSpec::new("", prepare(&Vec::new(), 0, TransposeMode::Literal));
    let summary = render_to_file(&spec, &path, 400, 300, &mut PaletteColors::default(), None).unwrap();
    assert_eq!(summary.bars, 0);
    assert!(fs::metadata(&path).unwrap().len() > 0);
}
