//! Download statistics over a date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::analyzers::types::Report;
use crate::countries::{Classification, ContinentClassifier};
use crate::record::{Record, RecordType};

/// How a product name is matched against a family token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRule {
    Exact(String),
    /// Older next gen releases write their version into the product column,
    /// so a substring match is needed for those rows.
    Contains(String),
}

impl MatchRule {
    fn matches(&self, product: &str) -> bool {
        match self {
            MatchRule::Exact(token) => product == token,
            MatchRule::Contains(token) => product.contains(token.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFamily {
    pub name: String,
    pub rule: MatchRule,
}

impl ProductFamily {
    pub fn exact(name: &str, token: &str) -> Self {
        Self {
            name: name.to_string(),
            rule: MatchRule::Exact(token.to_string()),
        }
    }

    pub fn contains(name: &str, token: &str) -> Self {
        Self {
            name: name.to_string(),
            rule: MatchRule::Contains(token.to_string()),
        }
    }
}

/// Product families in match order. Next gen is checked first since its
/// name embeds the classic product name.
pub fn default_families() -> Vec<ProductFamily> {
    vec![
        ProductFamily::contains("next_gen", "APSIM Next Generation"),
        ProductFamily::exact("classic", "APSIM"),
    ]
}

pub fn default_focus_countries() -> Vec<String> {
    ["Australia", "New Zealand", "United States of America", "China"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// The first family whose rule matches, so families never overlap.
fn family_of<'f>(families: &'f [ProductFamily], product: &str) -> Option<&'f str> {
    families
        .iter()
        .find(|f| f.rule.matches(product))
        .map(|f| f.name.as_str())
}

/// Summarizes records dated within `[start, end]`, both ends inclusive.
///
/// Rows whose country has no continent are left out of the continent
/// subtotals and counted in `unclassified`; every other total still
/// includes them.
pub fn summarize(
    records: &[Record],
    start: NaiveDate,
    end: NaiveDate,
    families: &[ProductFamily],
    focus: &[String],
    classifier: &dyn ContinentClassifier,
) -> Report {
    let mut report = Report {
        start,
        end,
        total: 0,
        registrations: 0,
        upgrades: 0,
        distinct_countries: 0,
        by_family: families.iter().map(|f| (f.name.clone(), 0)).collect(),
        by_country: focus.iter().map(|c| (c.clone(), 0)).collect(),
        by_country_family: BTreeMap::new(),
        by_continent: BTreeMap::new(),
        unclassified: 0,
    };

    for country in focus {
        report.by_country_family.insert(
            country.clone(),
            families.iter().map(|f| (f.name.clone(), 0)).collect(),
        );
    }

    let mut countries = HashSet::new();

    for record in records.iter().filter(|r| r.within(start, end)) {
        report.total += 1;
        match record.kind {
            RecordType::Registration => report.registrations += 1,
            RecordType::Upgrade => report.upgrades += 1,
        }
        countries.insert(record.country.as_str());

        let family = family_of(families, &record.product);
        if let Some(family) = family {
            *report.by_family.entry(family.to_string()).or_default() += 1;
        }

        if let Some(count) = report.by_country.get_mut(&record.country) {
            *count += 1;
            if let (Some(family), Some(per_family)) =
                (family, report.by_country_family.get_mut(&record.country))
            {
                *per_family.entry(family.to_string()).or_default() += 1;
            }
        }

        match classifier.classify(&record.country) {
            Classification::Continent(c) => *report.by_continent.entry(c).or_default() += 1,
            Classification::Unclassified => report.unclassified += 1,
        }
    }

    report.distinct_countries = countries.len();
    report
}

impl Report {
    /// Count for one focus country and product family, 0 if either is unknown.
    pub fn country_family(&self, country: &str, family: &str) -> u64 {
        self.by_country_family
            .get(country)
            .and_then(|families| families.get(family))
            .copied()
            .unwrap_or(0)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!(
            "APSIM Download/Registration statistics for {} to {}",
            self.start, self.end
        );
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "-".repeat(title.len()))?;
        writeln!(f, "Number of downloads (upgrades + registrations): {}", self.total)?;
        writeln!(f, "Number of registrations: {}", self.registrations)?;
        writeln!(f, "Number of upgrades: {}\n", self.upgrades)?;

        for (family, count) in &self.by_family {
            writeln!(f, "Number of downloads ({family}): {count}")?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Number of countries with registered downloads: {}",
            self.distinct_countries
        )?;
        for (country, count) in &self.by_country {
            writeln!(f, "Number of downloads from {country}: {count}")?;
        }
        for (country, families) in &self.by_country_family {
            for (family, count) in families {
                writeln!(f, "  {country} ({family}): {count}")?;
            }
        }
        writeln!(f)?;

        for (continent, count) in &self.by_continent {
            writeln!(f, "Number of downloads from {continent}: {count}")?;
        }
        if self.unclassified > 0 {
            writeln!(f, "Downloads with no continent: {}", self.unclassified)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::{Continent, IsoClassifier};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(d: NaiveDate, country: &str, product: &str, kind: RecordType) -> Record {
        Record::new(d, country, product, kind)
    }

    fn run(records: &[Record]) -> Report {
        summarize(
            records,
            date(2020, 1, 1),
            date(2020, 12, 31),
            &default_families(),
            &default_focus_countries(),
            &IsoClassifier::new(),
        )
    }

    #[test]
    fn test_family_counts_are_disjoint() {
        let mut records = Vec::new();
        for day in 1..=3 {
            records.push(row(date(2020, 3, day), "Australia", "APSIM", RecordType::Registration));
        }
        for day in 1..=2 {
            records.push(row(
                date(2020, 4, day),
                "Australia",
                "APSIM Next Generation 2020",
                RecordType::Upgrade,
            ));
        }

        let report = run(&records);

        assert_eq!(report.country_family("Australia", "classic"), 3);
        assert_eq!(report.country_family("Australia", "next_gen"), 2);
        assert_eq!(report.by_family["classic"], 3);
        assert_eq!(report.by_family["next_gen"], 2);
        assert_eq!(report.by_country["Australia"], 5);
        assert_eq!(report.registrations, 3);
        assert_eq!(report.upgrades, 2);
    }

    #[test]
    fn test_range_is_inclusive() {
        let records = vec![
            row(date(2019, 12, 31), "Australia", "APSIM", RecordType::Upgrade),
            row(date(2020, 1, 1), "Australia", "APSIM", RecordType::Upgrade),
            row(date(2020, 12, 31), "China", "APSIM", RecordType::Upgrade),
            row(date(2021, 1, 1), "China", "APSIM", RecordType::Upgrade),
        ];

        let report = run(&records);
        assert_eq!(report.total, 2);
        assert_eq!(report.by_country["Australia"], 1);
        assert_eq!(report.by_country["China"], 1);
        assert_eq!(report.by_country["New Zealand"], 0);
    }

    #[test]
    fn test_unclassified_countries_only_skip_continents() {
        let records = vec![
            row(date(2020, 5, 1), "Kenya", "APSIM", RecordType::Registration),
            row(date(2020, 5, 1), "Atlantis", "APSIM", RecordType::Registration),
            row(date(2020, 5, 1), "Bouvet Island", "Other", RecordType::Registration),
        ];

        let report = run(&records);
        assert_eq!(report.total, 3);
        assert_eq!(report.distinct_countries, 3);
        assert_eq!(report.by_continent.get(&Continent::Africa), Some(&1));
        assert_eq!(report.by_continent.values().sum::<u64>(), 1);
        assert_eq!(report.unclassified, 2);
        assert_eq!(report.by_family["classic"], 2);
    }

    #[test]
    fn test_empty_report() {
        let report = run(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.distinct_countries, 0);
        assert_eq!(report.country_family("Australia", "classic"), 0);
        assert!(report.by_continent.is_empty());
    }

    #[test]
    fn test_display_lists_totals() {
        let records = vec![row(date(2020, 5, 1), "Australia", "APSIM", RecordType::Registration)];
        let text = run(&records).to_string();

        assert!(text.starts_with("APSIM Download/Registration statistics for 2020-01-01 to 2020-12-31"));
        assert!(text.contains("Number of downloads (upgrades + registrations): 1"));
        assert!(text.contains("Number of downloads from Australia: 1"));
        assert!(text.contains("Number of downloads from Oceania: 1"));
    }
}
