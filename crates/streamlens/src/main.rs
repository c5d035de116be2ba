mod bootstrap;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use lens_core::formatting::format_minutes;
use lens_core::models::{EntityKind, YearScope};
use lens_core::time_utils::{system_timezone, YearBucketing};
use lens_data::analyzer::HistoryAnalyzer;
use lens_data::loader::{find_history_files, load_history_files};

/// Rank a streaming-history export by plays or minutes listened.
#[derive(Debug, Parser)]
#[command(name = "streamlens", version, about)]
struct Cli {
    /// Export files to analyze (JSON arrays of play records).
    files: Vec<PathBuf>,

    /// Scan a directory for .json export files instead of naming them.
    #[arg(long, conflicts_with = "files")]
    dir: Option<PathBuf>,

    /// Calendar year to restrict the ranking to, or "all".
    #[arg(long, default_value = "all")]
    year: YearScope,

    /// Rank artists instead of tracks.
    #[arg(long)]
    artists: bool,

    /// Sort order for the ranking.
    #[arg(long, value_enum, default_value_t = SortBy::Plays)]
    sort: SortBy,

    /// Show at most this many rows.
    #[arg(long)]
    top: Option<usize>,

    /// Bucket years in this IANA timezone instead of each record's own
    /// offset. Pass "local" for the system timezone.
    #[arg(long)]
    timezone: Option<String>,

    /// Log level filter (tracing EnvFilter directive).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum SortBy {
    /// Most plays first.
    Plays,
    /// Most minutes listened first.
    Minutes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::setup_logging(&cli.log_level)?;

    tracing::info!("streamlens v{} starting", env!("CARGO_PKG_VERSION"));

    let files = resolve_inputs(&cli)?;
    let records = load_history_files(&files)?;

    let bucketing = match cli.timezone.as_deref() {
        Some("local") => YearBucketing::normalized(&system_timezone()),
        Some(tz_name) => YearBucketing::normalized(tz_name),
        None => YearBucketing::default(),
    };

    let mut analyzer = HistoryAnalyzer::with_bucketing(bucketing);
    analyzer.process(&records);

    let kind = if cli.artists {
        EntityKind::Artist
    } else {
        EntityKind::Track
    };
    let rows = match cli.sort {
        SortBy::Plays => analyzer.sorted_by_plays(kind, cli.year),
        SortBy::Minutes => analyzer.sorted_by_duration(kind, cli.year),
    };

    render(&analyzer, kind, cli.year, &rows, cli.top);
    Ok(())
}

/// Resolve the list of export files: explicit paths win, then `--dir`,
/// then a conventional export location near the current user.
fn resolve_inputs(cli: &Cli) -> Result<Vec<PathBuf>> {
    if !cli.files.is_empty() {
        return Ok(cli.files.clone());
    }

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => bootstrap::discover_export_dir()
            .context("no export files named, no --dir given, and no extracted export found")?,
    };

    let files = find_history_files(&dir);
    if files.is_empty() {
        bail!("No .json export files found in {}", dir.display());
    }
    Ok(files)
}

/// Print the observed years and the ranked rows.
///
/// Row format matches the historical display: rank, key, play count, and
/// accumulated listening time in minutes with two decimals.
fn render(
    analyzer: &HistoryAnalyzer,
    kind: EntityKind,
    scope: YearScope,
    rows: &[(String, u64)],
    top: Option<usize>,
) {
    let years: Vec<String> = analyzer.years().iter().map(i32::to_string).collect();
    println!("Years observed: {}", years.join(", "));
    println!("Scope: {}", scope);

    let limit = top.unwrap_or(rows.len());
    for (index, (key, plays)) in rows.iter().take(limit).enumerate() {
        let minutes = format_minutes(analyzer.play_time_ms(kind, scope, key));
        println!("{}. {}: {} plays, {} minutes", index + 1, key, plays, minutes);
    }
}
