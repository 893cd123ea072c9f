//! Threshold ladder that maps download counts onto map colours.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a [`ColourScale`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("no colours provided")]
    Empty,

    #[error("{colours} colours supplied for {thresholds} thresholds")]
    LengthMismatch { thresholds: usize, colours: usize },

    #[error("thresholds must be strictly ascending (index {0})")]
    Unordered(usize),
}

/// A named colour with its hex value, e.g. `skyblue` / `#87ceeb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub name: String,
    pub hex: String,
}

impl Colour {
    pub fn new(name: &str, hex: &str) -> Self {
        Self {
            name: name.to_string(),
            hex: hex.to_string(),
        }
    }
}

/// The bin a count falls into. Higher `index` means a heavier bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColourBin {
    pub index: usize,
    pub colour: Colour,
}

/// Ordered inclusive upper bounds, each paired with a colour.
///
/// | Count      | Colour    |
/// |------------|-----------|
/// | 0          | white     |
/// | 1 - 299    | skyblue   |
/// | 300 - 599  | royalblue |
/// | 600 - 899  | yellow    |
/// | 900 - 1199 | lime      |
/// | 1200 - 1499| orange    |
/// | >= 1500    | red       |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScaleConfig")]
pub struct ColourScale {
    thresholds: Vec<u64>,
    colours: Vec<Colour>,
}

#[derive(Deserialize)]
struct ScaleConfig {
    thresholds: Vec<u64>,
    colours: Vec<Colour>,
}

impl TryFrom<ScaleConfig> for ColourScale {
    type Error = ScaleError;

    fn try_from(config: ScaleConfig) -> Result<Self, ScaleError> {
        ColourScale::new(config.thresholds, config.colours)
    }
}

impl ColourScale {
    pub fn new(thresholds: Vec<u64>, colours: Vec<Colour>) -> Result<Self, ScaleError> {
        if colours.is_empty() {
            return Err(ScaleError::Empty);
        }
        if colours.len() != thresholds.len() {
            return Err(ScaleError::LengthMismatch {
                thresholds: thresholds.len(),
                colours: colours.len(),
            });
        }
        if let Some(i) = thresholds.windows(2).position(|w| w[0] >= w[1]) {
            return Err(ScaleError::Unordered(i + 1));
        }

        Ok(Self { thresholds, colours })
    }

    /// Loads a scale from a JSON file of the form
    /// `{"thresholds": [..], "colours": [{"name": "..", "hex": ".."}, ..]}`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read colour scale {}", path.display()))?;
        let scale = serde_json::from_str(&content)
            .with_context(|| format!("invalid colour scale {}", path.display()))?;
        Ok(scale)
    }

    /// Returns the first bin whose threshold is `>= count`, or the last bin
    /// when the count exceeds every threshold.
    pub fn bin(&self, count: u64) -> ColourBin {
        let index = self
            .thresholds
            .iter()
            .position(|&t| count <= t)
            .unwrap_or(self.colours.len() - 1);

        ColourBin {
            index,
            colour: self.colours[index].clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Legend entries for a renderer: a label for each bin's count range.
    ///
    /// The last bin also takes every count above its threshold, so its label
    /// is always open-ended.
    pub fn legend(&self) -> Vec<(String, Colour)> {
        let mut entries = Vec::with_capacity(self.len());
        let mut lower = 0u64;
        let last = self.len() - 1;

        for (i, (&upper, colour)) in self.thresholds.iter().zip(&self.colours).enumerate() {
            let label = if i == last {
                format!(">={}", lower)
            } else if lower == upper {
                upper.to_string()
            } else {
                format!("{}-{}", lower, upper)
            };
            entries.push((label, colour.clone()));
            lower = upper.saturating_add(1);
        }

        entries
    }
}

impl Default for ColourScale {
    fn default() -> Self {
        Self {
            thresholds: vec![0, 299, 599, 899, 1199, 1499, 1500],
            colours: vec![
                Colour::new("white", "#ffffff"),
                Colour::new("skyblue", "#87ceeb"),
                Colour::new("royalblue", "#4169e1"),
                Colour::new("yellow", "#ffff00"),
                Colour::new("lime", "#00ff00"),
                Colour::new("orange", "#ffa500"),
                Colour::new("red", "#ff0000"),
            ],
        }
    }
}
