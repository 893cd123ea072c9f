//! Download aggregation, colour binning and reporting.
//!
//! Records are tallied per country up to a cutoff date, the tallies are
//! binned onto a colour ladder for the choropleth map, and a sequence of
//! monthly cutoffs produces the frames of the animation.

pub mod aggregate;
pub mod colour;
pub mod frames;
pub mod report;
pub mod types;
