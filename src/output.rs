//! Renderer-facing output: frame, map and series CSVs plus JSON summaries.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::analyzers::colour::ColourScale;
use crate::analyzers::types::{Frame, SeriesPoint, Snapshot};

/// Consumer of a frame sequence, typically a map renderer.
pub trait FrameSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Flushes whatever the sink buffered. Called once after the last frame.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct MapRow<'a> {
    date: Option<NaiveDate>,
    country_code: &'a str,
    count: u64,
    bin: usize,
    colour: &'a str,
    hex: &'a str,
    changed: bool,
}

/// Writes every frame as rows of one CSV, one row per country per frame.
pub struct CsvFrameSink {
    writer: Writer<File>,
    rows: usize,
}

impl CsvFrameSink {
    pub fn create(path: &Path) -> Result<Self> {
        let file = create_file(path)?;
        Ok(Self {
            writer: WriterBuilder::new().has_headers(true).from_writer(file),
            rows: 0,
        })
    }
}

impl FrameSink for CsvFrameSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        for (code, bin) in &frame.bins {
            self.writer.serialize(MapRow {
                date: Some(frame.date),
                country_code: code,
                count: frame.counts.get(code).copied().unwrap_or(0),
                bin: bin.index,
                colour: &bin.colour.name,
                hex: &bin.colour.hex,
                changed: frame.changed.contains(code),
            })?;
            self.rows += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        debug!(rows = self.rows, "Frame CSV flushed");
        Ok(())
    }
}

/// Writes one snapshot, binned through `scale`, as the data for a static map.
pub fn write_snapshot_csv(path: &Path, snapshot: &Snapshot, scale: &ColourScale) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(create_file(path)?);

    for (code, &count) in snapshot {
        let bin = scale.bin(count);
        writer.serialize(MapRow {
            date: None,
            country_code: code,
            count,
            bin: bin.index,
            colour: &bin.colour.name,
            hex: &bin.colour.hex,
            changed: false,
        })?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = snapshot.len(), "Map CSV written");
    Ok(())
}

/// Writes a cumulative time series as `date,downloads` rows.
pub fn write_series_csv(path: &Path, series: &[SeriesPoint]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(create_file(path)?);
    for point in series {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes any serializable value as pretty-printed JSON.
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let body = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}
