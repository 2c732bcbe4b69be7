use clap::{Parser, Subcommand};
use liftlog_core::config::ChartConfig;
use liftlog_core::*;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::{Path, PathBuf};

/// Fixed width added for margins and the y-axis label area
const WIDTH_ALLOWANCE: u32 = 100;
/// Minimum rendered chart width
const MIN_CHART_WIDTH: u32 = 320;
/// Colour of the total-load series
const LINE_COLOUR: RGBColor = RGBColor(76, 120, 168);

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Workout log parsing and total-load charting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one total-load chart per input file (default)
    Chart {
        /// Log files to process; falls back to the configured input files
        files: Vec<PathBuf>,

        /// Override output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Also write per-day totals as CSV next to each chart
        #[arg(long)]
        csv: bool,
    },

    /// Print per-day totals without rendering
    Summary {
        /// Log files to process; falls back to the configured input files
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        liftlog_core::logging::init_with_level("debug");
    } else {
        liftlog_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Chart {
            files,
            out_dir,
            csv,
        }) => cmd_chart(files, out_dir, csv, &config),
        Some(Commands::Summary { files }) => cmd_summary(files, &config),
        None => {
            // Default to "chart" command
            cmd_chart(Vec::new(), None, false, &config)
        }
    }
}

fn cmd_chart(
    files: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    csv: bool,
    config: &Config,
) -> Result<()> {
    let files = resolve_files(files, config);
    let out_dir = out_dir.unwrap_or_else(|| config.data.out_dir.clone());
    let ctx = ParseContext::new(config.parser.bodyweight);

    std::fs::create_dir_all(&out_dir)?;

    for file in &files {
        tracing::info!("Processing {:?}", file);
        let days = read_log(file, &ctx)?;

        let chart_path = out_dir.join(artifact_name(file, "svg"));
        render_chart(&days, &chart_path, &config.chart)?;

        if csv {
            let csv_path = out_dir.join(artifact_name(file, "csv"));
            write_day_totals(&days, &csv_path)?;
        }
    }

    Ok(())
}

fn cmd_summary(files: Vec<PathBuf>, config: &Config) -> Result<()> {
    let files = resolve_files(files, config);
    let ctx = ParseContext::new(config.parser.bodyweight);

    for file in &files {
        let days = read_log(file, &ctx)?;

        println!("{}", file.display());
        let mut file_total = 0.0;
        for day in &days {
            let marker = if day.calisthenics { " (C)" } else { "" };
            println!(
                "  {}{}: {:.0}",
                day.date.format(DATE_FORMAT),
                marker,
                day.total()
            );
            file_total += day.total();
        }
        println!("  total: {:.0} over {} days", file_total, days.len());
    }

    Ok(())
}

/// The configured input files stand in when none were named
fn resolve_files(files: Vec<PathBuf>, config: &Config) -> Vec<PathBuf> {
    if files.is_empty() {
        config.data.input_files.clone()
    } else {
        files
    }
}

/// Read one log file fully and parse it into training days
fn read_log(path: &Path, ctx: &ParseContext) -> Result<Vec<TrainingDay>> {
    let text =
        std::fs::read_to_string(path).map_err(|e| Error::Input(path.to_path_buf(), e))?;
    parse_log(&text, ctx)
}

/// Artifact file name for an input log: its stem with a new extension
fn artifact_name(input: &Path, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    PathBuf::from(stem).with_extension(extension)
}

/// Render the total-load chart for one parsed log file
///
/// The chart width grows linearly with the number of plotted days so
/// per-day date labels stay legible on long logs.
fn render_chart(days: &[TrainingDay], path: &Path, cfg: &ChartConfig) -> Result<()> {
    if days.is_empty() {
        return Err(Error::Chart("no days to plot".into()));
    }

    let width = (days.len() as u32 * cfg.px_per_day + WIDTH_ALLOWANCE).max(MIN_CHART_WIDTH);
    let root = SVGBackend::new(path, (width, cfg.height)).into_drawing_area();

    draw_chart(root, days).map_err(|e| Error::Chart(e.to_string()))?;

    tracing::info!("Wrote chart {:?} ({} days)", path, days.len());
    Ok(())
}

fn draw_chart<DB>(
    root: DrawingArea<DB, plotters::coord::Shift>,
    days: &[TrainingDay],
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut min_date = days[0].date;
    let mut max_date = days[0].date;
    let mut max_total: f64 = 0.0;
    for day in days {
        min_date = min_date.min(day.date);
        max_date = max_date.max(day.date);
        max_total = max_total.max(day.total());
    }

    let x_range =
        (min_date - chrono::Duration::days(1))..(max_date + chrono::Duration::days(1));
    let y_top = max_total.max(1.0) * 1.1;

    let area = root;
    area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&area)
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_range, 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_desc("date")
        .y_desc("total load (kg)")
        .x_label_formatter(&|d| d.format("%d/%m").to_string())
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style(FontDesc::new(
            FontFamily::SansSerif,
            14.0,
            FontStyle::Normal,
        ))
        .draw()?;

    chart.draw_series(LineSeries::new(
        days.iter().map(|day| (day.date, day.total())),
        &LINE_COLOUR,
    ))?;

    chart.draw_series(
        days.iter()
            .map(|day| Circle::new((day.date, day.total()), 3, LINE_COLOUR.filled())),
    )?;

    // Per-day date labels, red for calisthenics days
    let label_offset = y_top * 0.04;
    for day in days {
        let colour = if day.calisthenics { RED } else { BLACK };
        chart.draw_series(std::iter::once(Text::new(
            day.date.format(DATE_FORMAT).to_string(),
            (day.date, day.total() + label_offset),
            FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal).color(&colour),
        )))?;
    }

    area.present()?;
    Ok(())
}
