use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

use crate::analyzers::aggregate::aggregate;
use crate::analyzers::colour::ColourScale;
use crate::analyzers::types::{Frame, Snapshot};
use crate::countries::CountryResolver;
use crate::record::Record;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame dates must be strictly ascending: {previous} is followed by {next}")]
    Unordered { previous: NaiveDate, next: NaiveDate },
}

/// Lazily builds one [`Frame`] per cutoff date.
///
/// The previous snapshot is carried between frames so each frame can report
/// which codes changed.
pub struct Frames<'a> {
    records: &'a [Record],
    dates: std::slice::Iter<'a, NaiveDate>,
    resolver: &'a mut CountryResolver,
    scale: &'a ColourScale,
    previous: Option<Snapshot>,
}

/// Starts a frame sequence over `dates`, which must be strictly ascending.
///
/// Calling this again with the same inputs yields the same frames.
pub fn sequence<'a>(
    records: &'a [Record],
    dates: &'a [NaiveDate],
    resolver: &'a mut CountryResolver,
    scale: &'a ColourScale,
) -> Result<Frames<'a>, FrameError> {
    if let Some(w) = dates.windows(2).find(|w| w[0] >= w[1]) {
        return Err(FrameError::Unordered {
            previous: w[0],
            next: w[1],
        });
    }

    Ok(Frames {
        records,
        dates: dates.iter(),
        resolver,
        scale,
        previous: None,
    })
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let date = *self.dates.next()?;
        let counts = aggregate(self.records, date, self.resolver);

        let changed: BTreeSet<String> = match &self.previous {
            None => counts.keys().cloned().collect(),
            Some(previous) => counts
                .iter()
                .filter(|(code, count)| previous.get(*code) != Some(*count))
                .map(|(code, _)| code.clone())
                .collect(),
        };

        let bins = counts
            .iter()
            .map(|(code, &count)| (code.clone(), self.scale.bin(count)))
            .collect();

        debug!(%date, countries = counts.len(), changed = changed.len(), "Frame built");
        self.previous = Some(counts.clone());

        Some(Frame {
            date,
            counts,
            bins,
            changed,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dates.size_hint()
    }
}

/// First day of every month from the first month start on or after `first`
/// up to and including `last`.
pub fn month_starts(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let mut current = match first.with_day(1) {
        Some(start) if start == first => start,
        Some(start) => match start.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => return Vec::new(),
        },
        None => return Vec::new(),
    };

    let mut dates = Vec::new();
    while current <= last {
        dates.push(current);
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Frame cutoffs covering every record between `first` and `last`.
///
/// Runs through the first month start strictly after `last`, so the final
/// frame counts the last month of data.
pub fn frame_dates(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let boundary = last
        .with_day(1)
        .and_then(|start| start.checked_add_months(Months::new(1)));

    match boundary {
        Some(boundary) => month_starts(first, boundary),
        None => Vec::new(),
    }
}
