//! Download/registration records as loaded from the registration portal.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Whether a row is a first-time registration or an upgrade of an existing install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Registration,
    Upgrade,
}

impl FromStr for RecordType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "registration" => Ok(RecordType::Registration),
            "upgrade" => Ok(RecordType::Upgrade),
            other => Err(anyhow::anyhow!("unknown record type '{other}'")),
        }
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One download event. Each row counts once; identical rows are not collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Type")]
    pub kind: RecordType,
}

impl Record {
    pub fn new(date: NaiveDate, country: &str, product: &str, kind: RecordType) -> Self {
        Record {
            date,
            country: country.to_string(),
            product: product.to_string(),
            kind,
        }
    }

    /// True when `start <= date <= end`.
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}
