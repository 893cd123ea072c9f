//! CLI entry point for the download atlas.
//!
//! Provides subcommands for fetching the registration export, printing
//! summary statistics with static map data, building the monthly frames of
//! the map animation, and exporting per-country time series.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use download_atlas::analyzers::aggregate::{cumulative_series, tally};
use download_atlas::analyzers::colour::ColourScale;
use download_atlas::analyzers::frames::{frame_dates, sequence};
use download_atlas::analyzers::report::{default_families, default_focus_countries, summarize};
use download_atlas::config::Settings;
use download_atlas::countries::{CountryResolver, IsoClassifier};
use download_atlas::fetch::{BasicClient, fetch_to_file};
use download_atlas::output::{
    CsvFrameSink, FrameSink, write_json, write_series_csv, write_snapshot_csv,
};
use download_atlas::parser::{date_bounds, load_records, parse_records};
use download_atlas::record::Record;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "download_atlas")]
#[command(about = "Maps APSIM downloads by country and month", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the registration export and cache it on disk
    Fetch {
        /// URL to fetch (defaults to REGISTRATIONS_URL)
        #[arg(long)]
        url: Option<String>,

        /// File to write the payload to (defaults to REGISTRATIONS_FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print download statistics for a date range and write static map data
    Report {
        /// First day of the range (inclusive), YYYY-MM-DD
        start_date: NaiveDate,

        /// Last day of the range (inclusive), YYYY-MM-DD
        end_date: NaiveDate,

        /// Path to file or URL to fetch; defaults to the cached export
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// JSON colour scale to bin the map with
        #[arg(long)]
        scale: Option<PathBuf>,
    },
    /// Build the monthly frames of the map animation
    Frames {
        /// Path to file or URL to fetch; defaults to the cached export
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// JSON colour scale to bin the frames with
        #[arg(long)]
        scale: Option<PathBuf>,

        /// Only emit frames on or after this date
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only emit frames on or before this date
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Export cumulative downloads over time for individual countries
    Series {
        /// Path to file or URL to fetch; defaults to the cached export
        #[arg(short, long, value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// Country names; aliases of the same country are counted together
        #[arg(short, long, default_values_t = vec![
            "United States of America".to_string(),
            "Brazil".to_string(),
        ])]
        country: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("download_atlas.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { url, output } => {
            let url = url.unwrap_or_else(|| settings.registrations_url.clone());
            let output = output.unwrap_or_else(|| settings.registrations_file.clone());
            let client = BasicClient::new()?;
            fetch_to_file(&client, &url, &output).await?;
        }
        Commands::Report {
            start_date,
            end_date,
            source,
            scale,
        } => {
            if start_date > end_date {
                anyhow::bail!("start date {start_date} is after end date {end_date}");
            }
            let records = load(&settings, source.as_deref()).await?;
            let scale = load_scale(scale.as_deref())?;
            report(&settings, &records, start_date, end_date, &scale)?;
        }
        Commands::Frames {
            source,
            scale,
            from,
            to,
        } => {
            let records = load(&settings, source.as_deref()).await?;
            let scale = load_scale(scale.as_deref())?;
            frames(&settings, &records, &scale, from, to)?;
        }
        Commands::Series { source, country } => {
            let records = load(&settings, source.as_deref()).await?;
            series(&settings, &records, &country)?;
        }
    }

    Ok(())
}

/// Loads records from a file path, a URL, or the cached export.
///
/// With no source the cached export is read if present, otherwise it is
/// fetched from the configured web service first.
#[tracing::instrument(skip(settings))]
async fn load(settings: &Settings, source: Option<&str>) -> Result<Vec<Record>> {
    let records = match source {
        Some(url) if url.starts_with("http") => {
            let client = BasicClient::new()?;
            let bytes = fetch_to_file(&client, url, &settings.registrations_file).await?;
            parse_records(&bytes)?
        }
        Some(path) => load_records(Path::new(path))?,
        None if settings.registrations_file.exists() => {
            load_records(&settings.registrations_file)?
        }
        None => {
            info!(url = %settings.registrations_url, "No cached export, fetching");
            let client = BasicClient::new()?;
            let bytes = fetch_to_file(
                &client,
                &settings.registrations_url,
                &settings.registrations_file,
            )
            .await?;
            parse_records(&bytes)?
        }
    };

    info!(records = records.len(), "Registration records loaded");
    Ok(records)
}

fn load_scale(path: Option<&Path>) -> Result<ColourScale> {
    match path {
        Some(path) => ColourScale::load(path),
        None => Ok(ColourScale::default()),
    }
}

/// Prints the summary for `[start, end]` and writes the static map data.
#[tracing::instrument(skip(settings, records, scale))]
fn report(
    settings: &Settings,
    records: &[Record],
    start: NaiveDate,
    end: NaiveDate,
    scale: &ColourScale,
) -> Result<()> {
    let summary = summarize(
        records,
        start,
        end,
        &default_families(),
        &default_focus_countries(),
        &IsoClassifier::new(),
    );
    println!("{summary}");

    let mut resolver = CountryResolver::new();
    let snapshot = tally(records.iter().filter(|r| r.within(start, end)), &mut resolver);

    let dir = &settings.output_dir;
    write_snapshot_csv(&dir.join("map.csv"), &snapshot, scale)?;
    write_json(&dir.join("legend.json"), &scale.legend())?;
    write_json(&dir.join("report.json"), &summary)?;

    log_unknown(&resolver);
    info!(
        countries = snapshot.len(),
        output_dir = %dir.display(),
        "Static map data written"
    );
    Ok(())
}

/// Writes one frame per month start, through the month after the last record.
#[tracing::instrument(skip(settings, records, scale))]
fn frames(
    settings: &Settings,
    records: &[Record],
    scale: &ColourScale,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let Some((first, last)) = date_bounds(records) else {
        warn!("No records, nothing to animate");
        return Ok(());
    };

    let dates: Vec<NaiveDate> = frame_dates(first, last)
        .into_iter()
        .filter(|d| from.is_none_or(|f| *d >= f) && to.is_none_or(|t| *d <= t))
        .collect();
    info!(frames = dates.len(), %first, %last, "Building frames");

    let dir = &settings.output_dir;
    let mut resolver = CountryResolver::new();
    let mut sink = CsvFrameSink::create(&dir.join("frames.csv"))?;
    let total = dates.len();

    for (i, frame) in sequence(records, &dates, &mut resolver, scale)?.enumerate() {
        sink.write_frame(&frame)
            .with_context(|| format!("failed to write frame {}", frame.date))?;
        info!(
            date = %frame.date,
            progress = %format!("{:.2}%", (i + 1) as f64 / total as f64 * 100.0),
            changed = frame.changed.len(),
            "Frame written"
        );
    }
    sink.finish()?;
    write_json(&dir.join("legend.json"), &scale.legend())?;

    log_unknown(&resolver);
    Ok(())
}

/// Writes `series-<country>.csv` for each requested country.
#[tracing::instrument(skip(settings, records))]
fn series(settings: &Settings, records: &[Record], countries: &[String]) -> Result<()> {
    let Some((first, last)) = date_bounds(records) else {
        warn!("No records, nothing to plot");
        return Ok(());
    };
    let dates = frame_dates(first, last);
    let mut resolver = CountryResolver::new();

    for country in countries {
        let points = cumulative_series(records, country, &dates, &mut resolver);
        let path = settings
            .output_dir
            .join(format!("series-{}.csv", file_slug(country)));
        write_series_csv(&path, &points)?;

        let total = points.last().map_or(0, |p| p.downloads);
        info!(%country, points = points.len(), total, path = %path.display(), "Series written");
    }

    log_unknown(&resolver);
    Ok(())
}

fn log_unknown(resolver: &CountryResolver) {
    if !resolver.unknown().is_empty() {
        warn!(
            count = resolver.unknown().len(),
            names = ?resolver.unknown(),
            "Records with unknown countries were left off the map"
        );
    }
}

fn file_slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
