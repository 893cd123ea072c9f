use chrono::NaiveDate;

use crate::analyzers::types::{SeriesPoint, Snapshot};
use crate::countries::{CountryResolver, Resolution};
use crate::record::Record;

/// Counts records per alpha-3 code.
///
/// Every record counts once, duplicates included. Records whose country does
/// not resolve are left out and remembered by the resolver.
pub fn tally<'a, I>(records: I, resolver: &mut CountryResolver) -> Snapshot
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = Snapshot::new();

    for record in records {
        if let Resolution::Known(code) = resolver.resolve(&record.country) {
            *counts.entry(code.to_string()).or_default() += 1;
        }
    }

    counts
}

/// Counts records dated strictly before `cutoff`, per alpha-3 code.
pub fn aggregate(records: &[Record], cutoff: NaiveDate, resolver: &mut CountryResolver) -> Snapshot {
    tally(records.iter().filter(|r| r.date < cutoff), resolver)
}

/// Cumulative downloads for a single country at each date.
///
/// When `country` resolves, every record resolving to the same code counts,
/// aliases included. An unresolvable `country` falls back to matching the
/// trimmed display name exactly.
pub fn cumulative_series(
    records: &[Record],
    country: &str,
    dates: &[NaiveDate],
    resolver: &mut CountryResolver,
) -> Vec<SeriesPoint> {
    let target = resolver.resolve(country);
    let name = country.trim();

    let mut country_dates: Vec<NaiveDate> = records
        .iter()
        .filter(|r| match target {
            Resolution::Known(code) => resolver.resolve(&r.country) == Resolution::Known(code),
            Resolution::Unknown => r.country.trim() == name,
        })
        .map(|r| r.date)
        .collect();
    country_dates.sort_unstable();

    dates
        .iter()
        .map(|&date| SeriesPoint {
            date,
            downloads: country_dates.partition_point(|d| *d < date) as u64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, country: &str) -> Record {
        Record::new(d, country, "APSIM", RecordType::Registration)
    }

    fn sample() -> Vec<Record> {
        vec![
            record(date(2020, 1, 15), "Australia"),
            record(date(2020, 2, 10), "Australia"),
            record(date(2020, 2, 20), "Brazil"),
            record(date(2020, 2, 20), "Brazil"),
            record(date(2020, 3, 5), "Narnia"),
            record(date(2020, 4, 1), "New Zealand"),
        ]
    }

    #[test]
    fn test_aggregate_empty() {
        let mut resolver = CountryResolver::new();
        assert!(aggregate(&[], date(2020, 1, 1), &mut resolver).is_empty());
    }

    #[test]
    fn test_aggregate_cutoff_is_exclusive() {
        let mut resolver = CountryResolver::new();
        let records = sample();

        let snapshot = aggregate(&records, date(2020, 2, 20), &mut resolver);
        assert_eq!(snapshot.get("AUS"), Some(&2));
        assert_eq!(snapshot.get("BRA"), None);
    }

    #[test]
    fn test_aggregate_counts_duplicates_and_skips_unknown() {
        let mut resolver = CountryResolver::new();
        let snapshot = aggregate(&sample(), date(2021, 1, 1), &mut resolver);

        assert_eq!(snapshot.get("BRA"), Some(&2));
        assert_eq!(snapshot.get("NZL"), Some(&1));
        assert_eq!(snapshot.values().sum::<u64>(), 5);
        assert_eq!(resolver.unknown(), &["Narnia".to_string()]);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let mut resolver = CountryResolver::new();
        let records = sample();
        let mut reversed = records.clone();
        reversed.reverse();

        let cutoff = date(2020, 3, 1);
        assert_eq!(
            aggregate(&records, cutoff, &mut resolver),
            aggregate(&reversed, cutoff, &mut resolver)
        );
    }

    #[test]
    fn test_aggregate_monotonic_in_cutoff() {
        let mut resolver = CountryResolver::new();
        let records = sample();
        let cutoffs: Vec<NaiveDate> = (0..140)
            .map(|i| date(2020, 1, 1) + chrono::Days::new(i))
            .collect();

        for (i, &d1) in cutoffs.iter().enumerate() {
            let earlier = aggregate(&records, d1, &mut resolver);
            for &d2 in &cutoffs[i + 1..] {
                let later = aggregate(&records, d2, &mut resolver);
                for (code, count) in &earlier {
                    assert!(later.get(code).copied().unwrap_or(0) >= *count);
                }
            }
        }
    }

    #[test]
    fn test_cumulative_series() {
        let records = sample();
        let dates = [date(2020, 1, 1), date(2020, 2, 1), date(2020, 3, 1)];

        let mut resolver = CountryResolver::new();

        let series = cumulative_series(&records, "Australia", &dates, &mut resolver);
        let downloads: Vec<u64> = series.iter().map(|p| p.downloads).collect();
        assert_eq!(downloads, vec![0, 1, 2]);
        assert_eq!(series[2].date, date(2020, 3, 1));

        let none = cumulative_series(&records, "Chile", &dates, &mut resolver);
        assert!(none.iter().all(|p| p.downloads == 0));
    }

    #[test]
    fn test_cumulative_series_counts_aliases() {
        let records = vec![
            record(date(2020, 1, 10), "United States of America"),
            record(date(2020, 1, 20), "USA"),
            record(date(2020, 2, 5), "United States"),
            record(date(2020, 2, 6), "Canada"),
        ];
        let dates = [date(2020, 2, 1), date(2020, 3, 1)];
        let mut resolver = CountryResolver::new();

        let series = cumulative_series(&records, "United States of America", &dates, &mut resolver);
        let downloads: Vec<u64> = series.iter().map(|p| p.downloads).collect();
        assert_eq!(downloads, vec![2, 3]);

        let mut fresh = CountryResolver::new();
        let snapshot = aggregate(&records, date(2020, 3, 1), &mut fresh);
        assert_eq!(snapshot["USA"], series[1].downloads);
    }

    #[test]
    fn test_cumulative_series_unknown_name_matches_exactly() {
        let records = sample();
        let dates = [date(2020, 4, 1)];
        let mut resolver = CountryResolver::new();

        let series = cumulative_series(&records, " Narnia", &dates, &mut resolver);
        assert_eq!(series[0].downloads, 1);
        assert_eq!(resolver.unknown(), &["Narnia".to_string()]);
    }
}
