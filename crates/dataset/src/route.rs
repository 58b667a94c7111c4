//! Rail route records and their corridor geometry.
//!
//! Routes are loaded once from the embedded dataset and never mutated at
//! runtime. Only the selection/hover identifiers in [`crate::store::MapStore`]
//! change during a session.

use std::fmt;

use serde::Deserialize;

/// Lifecycle status of a route proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Studying,
    Planning,
    Construction,
    Completed,
    Halted,
}

impl ProjectStatus {
    /// Badge label, matching the dataset spelling.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Studying => "STUDYING",
            ProjectStatus::Planning => "PLANNING",
            ProjectStatus::Construction => "CONSTRUCTION",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Halted => "HALTED",
        }
    }

    /// Position on the four-step studying → completed timeline.
    ///
    /// HALTED projects stalled before construction finished; they render at
    /// the planning step with a red badge rather than getting a fifth step.
    pub fn timeline_step(self) -> usize {
        match self {
            ProjectStatus::Studying => 0,
            ProjectStatus::Planning | ProjectStatus::Halted => 1,
            ProjectStatus::Construction => 2,
            ProjectStatus::Completed => 3,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One proposed or built high-speed-rail corridor.
///
/// Field names mirror the dataset keys so the record deserializes without a
/// rename table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RailRoute {
    pub id: String,
    pub name: String,
    /// Endpoint and intermediate cities, in display order.
    pub segments: Vec<String>,

    pub design_speed_mph: f64,
    pub cost_est_billions: f64,

    pub status: ProjectStatus,
    pub completion_year_tgt: Option<i32>,
    pub length_miles: f64,

    #[serde(default)]
    pub travel_time_minutes: Option<u32>,
    #[serde(default)]
    pub drive_time_minutes: Option<u32>,
    #[serde(default)]
    pub flight_time_minutes: Option<u32>,

    #[serde(default)]
    pub jobs_created: Option<u64>,
    #[serde(default)]
    pub annual_ridership_est: Option<u64>,

    pub description: String,
}

/// A route paired with its corridor path as (longitude, latitude) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct RailRouteFeature {
    pub route: RailRoute,
    pub coordinates: Vec<[f64; 2]>,
}

impl RailRouteFeature {
    /// Axis-aligned bounding box of the corridor:
    /// `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_lon = f64::INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        for [lon, lat] in &self.coordinates {
            min_lon = min_lon.min(*lon);
            min_lat = min_lat.min(*lat);
            max_lon = max_lon.max(*lon);
            max_lat = max_lat.max(*lat);
        }
        (min_lon, min_lat, max_lon, max_lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_from_dataset_spelling() {
        let s: ProjectStatus = serde_json::from_str("\"CONSTRUCTION\"").unwrap();
        assert_eq!(s, ProjectStatus::Construction);
        let s: ProjectStatus = serde_json::from_str("\"HALTED\"").unwrap();
        assert_eq!(s, ProjectStatus::Halted);
        assert!(serde_json::from_str::<ProjectStatus>("\"FUNDED\"").is_err());
    }

    #[test]
    fn route_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "test",
            "name": "Test Line",
            "segments": ["A", "B"],
            "design_speed_mph": 186,
            "cost_est_billions": 12.5,
            "status": "PLANNING",
            "completion_year_tgt": null,
            "length_miles": 218,
            "description": "A test corridor."
        }"#;
        let route: RailRoute = serde_json::from_str(json).unwrap();
        assert_eq!(route.id, "test");
        assert_eq!(route.completion_year_tgt, None);
        assert_eq!(route.travel_time_minutes, None);
        assert_eq!(route.annual_ridership_est, None);
    }

    #[test]
    fn bounds_covers_all_vertices() {
        let feature = RailRouteFeature {
            route: test_route(),
            coordinates: vec![[-120.0, 36.0], [-118.5, 34.0], [-121.5, 37.5]],
        };
        assert_eq!(feature.bounds(), (-121.5, 34.0, -118.5, 37.5));
    }

    #[test]
    fn halted_timeline_stalls_at_planning() {
        assert_eq!(ProjectStatus::Halted.timeline_step(), 1);
        assert_eq!(ProjectStatus::Completed.timeline_step(), 3);
        assert_eq!(ProjectStatus::Studying.timeline_step(), 0);
    }

    fn test_route() -> RailRoute {
        RailRoute {
            id: "t".into(),
            name: "T".into(),
            segments: vec!["A".into(), "B".into()],
            design_speed_mph: 200.0,
            cost_est_billions: 10.0,
            status: ProjectStatus::Planning,
            completion_year_tgt: None,
            length_miles: 100.0,
            travel_time_minutes: None,
            drive_time_minutes: None,
            flight_time_minutes: None,
            jobs_created: None,
            annual_ridership_est: None,
            description: String::new(),
        }
    }
}
