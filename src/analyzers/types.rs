//! Data types produced by the aggregation pipeline.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::analyzers::colour::ColourBin;
use crate::countries::Continent;

/// Alpha-3 country code to number of downloads.
pub type Snapshot = BTreeMap<String, u64>;

/// Cumulative downloads for one country up to (not including) `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub downloads: u64,
}

/// One animation frame: the cumulative state of the map at a cutoff date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub date: NaiveDate,
    pub counts: Snapshot,
    pub bins: BTreeMap<String, ColourBin>,
    /// Codes whose count differs from the previous frame. Every code is
    /// listed in the first frame.
    pub changed: BTreeSet<String>,
}

/// Summary statistics over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: u64,
    pub registrations: u64,
    pub upgrades: u64,
    pub distinct_countries: usize,
    pub by_family: BTreeMap<String, u64>,
    pub by_country: BTreeMap<String, u64>,
    /// Focus country to per-family counts.
    pub by_country_family: BTreeMap<String, BTreeMap<String, u64>>,
    pub by_continent: BTreeMap<Continent, u64>,
    pub unclassified: u64,
}
