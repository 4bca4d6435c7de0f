use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use csvbar::chart::{PlotArea, select_scale};
use csvbar::surface::{RecordingSurface, render_to_file};
use csvbar::{
    ChartSpec, ChartStyle, ColorProvider, PaletteColors, RandomColors, TransposeMode, input,
    render, transform,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csvbar",
    version,
    about = "Turn a CSV table into a grouped bar chart (SVG or PNG)"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart from a CSV file.
    Render(RenderArgs),
    /// Print the range, categories, series and axis ticks derived from a CSV file.
    Inspect(InspectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PaletteArg {
    /// Random color per series (different on every run unless --seed is given).
    Random,
    /// Microsoft Office chart palette.
    Office,
}

#[derive(Args, Debug)]
struct DataArgs {
    /// CSV file to read (must have a .csv extension).
    input: PathBuf,
    /// Zero-based index of the column holding the category labels.
    #[arg(short = 'c', long, default_value_t = 0)]
    category_column: usize,
    /// Treat row 0 as a header and keep only complete rows, so labels and values stay aligned.
    #[arg(long, default_value_t = false)]
    row_aligned: bool,
}

impl DataArgs {
    fn mode(&self) -> TransposeMode {
        if self.row_aligned {
            TransposeMode::RowAligned
        } else {
            TransposeMode::Literal
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    data: DataArgs,
    /// Output path (.svg, or .png for a bitmap).
    #[arg(short, long)]
    out: PathBuf,
    /// Chart title.
    #[arg(short, long, default_value = "")]
    title: String,
    /// Width of the chart (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Share of each category slot covered by its bars, in (0, 1].
    #[arg(long)]
    bar_width: Option<f64>,
    /// How series colors are chosen.
    #[arg(long, value_enum, default_value_t = PaletteArg::Random)]
    palette: PaletteArg,
    /// Seed for --palette random, for reproducible colors.
    #[arg(long)]
    seed: Option<u64>,
    /// Locale for grouped tick labels (en, de, fr, es, it, pt, nl).
    #[arg(long)]
    locale: Option<String>,
    /// JSON style file (margins, colors, font sizes).
    #[arg(long)]
    style: Option<PathBuf>,
    /// TrueType font used for PNG text.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Also write the draw operations as JSON.
    #[arg(long)]
    dump_ops: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    #[command(flatten)]
    data: DataArgs,
    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn build_style(args: &RenderArgs) -> Result<ChartStyle> {
    let mut style = match &args.style {
        Some(path) => ChartStyle::from_json_file(path)?,
        None => ChartStyle::default(),
    };
    if let Some(w) = args.bar_width {
        if !(w > 0.0 && w <= 1.0) {
            anyhow::bail!("invalid --bar-width {}, expected a value in (0, 1]", w);
        }
        style.bar_width = w;
    }
    if args.locale.is_some() {
        style.locale = args.locale.clone();
    }
    Ok(style)
}

fn color_provider(args: &RenderArgs) -> Box<dyn ColorProvider> {
    match (args.palette, args.seed) {
        (PaletteArg::Office, _) => Box::new(PaletteColors::default()),
        (PaletteArg::Random, Some(seed)) => Box::new(RandomColors::with_seed(seed)),
        (PaletteArg::Random, None) => Box::new(RandomColors::new()),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let table = input::load_table(&args.data.input)?;
    let data = transform::prepare(&table, args.data.category_column, args.data.mode());
    let spec = ChartSpec::new(args.title.clone(), data).with_style(build_style(&args)?);

    let mut colors = color_provider(&args);
    let summary = render_to_file(
        &spec,
        &args.out,
        args.width,
        args.height,
        colors.as_mut(),
        args.font.as_deref(),
    )?;
    eprintln!(
        "Wrote chart with {} bars to {}",
        summary.bars,
        args.out.display()
    );

    if let Some(path) = args.dump_ops.as_ref() {
        // Same colors as the file, so the dump describes exactly what was drawn.
        let mut surface = RecordingSurface::new(args.width, args.height);
        render(
            &spec,
            &mut surface,
            &mut csvbar::FixedColors::new(summary.colors.clone()),
        )?;
        fs::write(path, surface.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote draw operations to {}", path.display());
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let table = input::load_table(&args.data.input)?;
    let data = transform::prepare(&table, args.data.category_column, args.data.mode());
    let style = ChartStyle::default();
    let geometry = select_scale(
        data.range,
        &PlotArea::new(1000.0, 600.0, style.x_margin, style.y_margin),
    );

    if args.json {
        let out = serde_json::json!({ "data": data, "ticks": geometry });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if data.range.is_empty() {
        println!("range: none (no numeric cells)");
    } else {
        println!("range: min={} max={}", data.range.min, data.range.max);
    }
    println!("categories ({}): {}", data.categories.len(), data.categories.join(", "));
    for (i, s) in data.series.iter().enumerate() {
        let values: Vec<String> = s.iter().map(|v| v.to_string()).collect();
        println!("series {} ({}): {}", i, s.len(), values.join(", "));
    }
    println!(
        "ticks: unit={} positive={} negative={} total={}",
        geometry.unit, geometry.positive_ticks, geometry.negative_ticks, geometry.total_ticks
    );
    Ok(())
}
