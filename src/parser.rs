//! CSV parser for the registration portal export.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::path::Path;
use tracing::debug;

use crate::record::Record;

/// Decodes registration rows from raw CSV bytes.
///
/// The portal quotes with `"`, escapes with `\` and also doubles quotes, so
/// all three are enabled.
///
/// # Errors
///
/// Returns an error naming the offending row if a date or type field is
/// malformed or a required column is missing.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .quote(b'"')
        .escape(Some(b'\\'))
        .double_quote(true)
        .trim(csv::Trim::Fields)
        .from_reader(bytes);

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let record: Record = result.with_context(|| format!("invalid record at row {}", i + 1))?;
        records.push(record);
    }

    debug!(rows = records.len(), "Parsed registration records");
    Ok(records)
}

/// Reads and parses a registrations CSV from disk.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_records(&bytes)
}

/// Earliest and latest record dates, or `None` for an empty collection.
pub fn date_bounds(records: &[Record]) -> Option<(NaiveDate, NaiveDate)> {
    let first = records.iter().map(|r| r.date).min()?;
    let last = records.iter().map(|r| r.date).max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordType;

    #[test]
    fn test_parse_empty_bytes_returns_no_records() {
        let result = parse_records(&[]);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_parse_header_only() {
        let result = parse_records(b"Date,Country,Product,Type\n");
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_parse_valid_rows() {
        let csv = b"Date,Country,Product,Type\n\
            2020-01-15,Australia,APSIM,Registration\n\
            2020-02-20,\"Korea, Republic of\",\"APSIM Next Generation 2020.02.01\",Upgrade\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "Australia");
        assert_eq!(records[0].kind, RecordType::Registration);
        assert_eq!(records[1].country, "Korea, Republic of");
        assert_eq!(records[1].product, "APSIM Next Generation 2020.02.01");
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2020, 2, 20).unwrap());
    }

    #[test]
    fn test_parse_escaped_quote() {
        let csv = b"Date,Country,Product,Type\n2020-01-15,\"Cote d\\\"Ivoire\",APSIM,Upgrade\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].country, "Cote d\"Ivoire");
    }

    #[test]
    fn test_parse_invalid_date_names_row() {
        let csv = b"Date,Country,Product,Type\n\
            2020-01-15,Australia,APSIM,Registration\n\
            15/01/2020,Australia,APSIM,Registration\n";
        let err = parse_records(csv).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_parse_invalid_type() {
        let csv = b"Date,Country,Product,Type\n2020-01-15,Australia,APSIM,Trial\n";
        assert!(parse_records(csv).is_err());
    }

    #[test]
    fn test_date_bounds() {
        let csv = b"Date,Country,Product,Type\n\
            2020-03-01,Brazil,APSIM,Upgrade\n\
            2019-07-04,Australia,APSIM,Registration\n\
            2020-01-15,Australia,APSIM,Registration\n";
        let records = parse_records(csv).unwrap();
        let (first, last) = date_bounds(&records).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2019, 7, 4).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
        assert!(date_bounds(&[]).is_none());
    }
}
