//! Station points.

use serde::Deserialize;

/// Importance classification used by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationImportance {
    Major,
    Regional,
    Local,
}

/// A named station at a single (longitude, latitude) coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct StationFeature {
    pub name: String,
    pub importance: StationImportance,
    pub position: [f64; 2],
}
