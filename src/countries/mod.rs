//! Country name resolution and continent classification.
//!
//! [`CountryResolver`] maps free-text country names onto ISO alpha-3 codes
//! and remembers every name it could not resolve.
//! [`ContinentClassifier`] is the lookup used for regional subtotals;
//! [`IsoClassifier`] implements it from the same static ISO table.

mod table;

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::warn;

use table::{ALIASES, COUNTRIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        };
        f.write_str(name)
    }
}

/// Outcome of resolving a country name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Known(&'static str),
    Unknown,
}

/// Maps country display names to ISO alpha-3 codes.
///
/// The name table is fixed for the lifetime of the resolver. Names that do
/// not resolve are logged once and collected in first-seen order.
pub struct CountryResolver {
    codes: HashMap<&'static str, &'static str>,
    unknown: Vec<String>,
    seen_unknown: HashSet<String>,
}

impl CountryResolver {
    pub fn new() -> Self {
        let mut codes: HashMap<&'static str, &'static str> =
            COUNTRIES.iter().map(|(name, code, _)| (*name, *code)).collect();
        for (alias, code) in ALIASES {
            codes.entry(*alias).or_insert(*code);
        }

        Self {
            codes,
            unknown: Vec::new(),
            seen_unknown: HashSet::new(),
        }
    }

    /// Surrounding whitespace is ignored for both lookup and the unknown list.
    pub fn resolve(&mut self, name: &str) -> Resolution {
        let name = name.trim();
        if let Some(code) = self.codes.get(name) {
            return Resolution::Known(*code);
        }

        if self.seen_unknown.insert(name.to_string()) {
            warn!(country = %name, "Unknown country");
            self.unknown.push(name.to_string());
        }
        Resolution::Unknown
    }

    /// Names that failed to resolve, each listed once.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a continent lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Continent(Continent),
    Unclassified,
}

/// Classifies a country display name into a continent.
pub trait ContinentClassifier {
    fn classify(&self, country: &str) -> Classification;
}

/// Continent lookup backed by the built-in ISO table.
///
/// Territories with no continent of their own (e.g. Bouvet Island) and names
/// outside the table come back as [`Classification::Unclassified`].
pub struct IsoClassifier {
    by_code: HashMap<&'static str, Continent>,
    by_name: HashMap<&'static str, &'static str>,
}

impl IsoClassifier {
    pub fn new() -> Self {
        let by_code = COUNTRIES
            .iter()
            .filter_map(|(_, code, continent)| continent.map(|c| (*code, c)))
            .collect();
        let mut by_name: HashMap<&'static str, &'static str> =
            COUNTRIES.iter().map(|(name, code, _)| (*name, *code)).collect();
        for (alias, code) in ALIASES {
            by_name.entry(*alias).or_insert(*code);
        }

        Self { by_code, by_name }
    }
}

impl Default for IsoClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinentClassifier for IsoClassifier {
    fn classify(&self, country: &str) -> Classification {
        self.by_name
            .get(country.trim())
            .and_then(|code| self.by_code.get(code))
            .map_or(Classification::Unclassified, |c| Classification::Continent(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_iso_names() {
        let mut resolver = CountryResolver::new();
        assert_eq!(resolver.resolve("Australia"), Resolution::Known("AUS"));
        assert_eq!(resolver.resolve("Brazil"), Resolution::Known("BRA"));
        assert_eq!(
            resolver.resolve("United States of America"),
            Resolution::Known("USA")
        );
        assert!(resolver.unknown().is_empty());
    }

    #[test]
    fn test_resolve_aliases() {
        let mut resolver = CountryResolver::new();
        assert_eq!(resolver.resolve("United States"), Resolution::Known("USA"));
        assert_eq!(resolver.resolve("Vietnam"), Resolution::Known("VNM"));
        assert_eq!(resolver.resolve(" New Zealand "), Resolution::Known("NZL"));
    }

    #[test]
    fn test_unknown_recorded_once() {
        let mut resolver = CountryResolver::new();
        assert_eq!(resolver.resolve("Atlantis"), Resolution::Unknown);
        assert_eq!(resolver.resolve("Atlantis"), Resolution::Unknown);
        assert_eq!(resolver.resolve("Lemuria"), Resolution::Unknown);
        assert_eq!(resolver.resolve("Atlantis"), Resolution::Unknown);

        assert_eq!(resolver.unknown(), &["Atlantis".to_string(), "Lemuria".to_string()]);
    }

    #[test]
    fn test_unknown_ignores_surrounding_whitespace() {
        let mut resolver = CountryResolver::new();
        assert_eq!(resolver.resolve("Atlantis"), Resolution::Unknown);
        assert_eq!(resolver.resolve("Atlantis "), Resolution::Unknown);
        assert_eq!(resolver.resolve("  Atlantis"), Resolution::Unknown);

        assert_eq!(resolver.unknown(), &["Atlantis".to_string()]);
    }

    #[test]
    fn test_table_codes_are_unique_alpha3() {
        let mut seen = HashSet::new();
        for (name, code, _) in COUNTRIES {
            assert_eq!(code.len(), 3, "{name}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{name}");
            assert!(seen.insert(*code), "duplicate code {code}");
        }
    }

    #[test]
    fn test_aliases_point_at_table_codes() {
        let codes: HashSet<_> = COUNTRIES.iter().map(|(_, code, _)| *code).collect();
        for (alias, code) in ALIASES {
            assert!(codes.contains(code), "{alias} -> {code}");
        }
    }

    #[test]
    fn test_classify() {
        let classifier = IsoClassifier::new();
        assert_eq!(
            classifier.classify("Australia"),
            Classification::Continent(Continent::Oceania)
        );
        assert_eq!(
            classifier.classify("USA"),
            Classification::Continent(Continent::NorthAmerica)
        );
        assert_eq!(classifier.classify("Bouvet Island"), Classification::Unclassified);
        assert_eq!(classifier.classify("Atlantis"), Classification::Unclassified);
    }
}
