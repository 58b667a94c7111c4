//! Loading of the embedded geospatial dataset.
//!
//! The three feature collections (routes, stations, basemap) are compiled in
//! with `include_str!` and parsed once at startup. Load failures are fatal
//! for the presentation and surface through [`crate::fault::FaultState`].

use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

use crate::basemap::{BasemapClass, BasemapLine};
use crate::route::{RailRoute, RailRouteFeature};
use crate::station::{StationFeature, StationImportance};

const ROUTES_JSON: &str = include_str!("../assets/routes.geojson");
const STATIONS_JSON: &str = include_str!("../assets/stations.geojson");
const BASEMAP_JSON: &str = include_str!("../assets/basemap.geojson");

/// Errors raised while loading or validating the embedded dataset.
#[derive(Debug)]
pub enum DataError {
    /// An asset is not valid JSON or does not match the expected shape.
    Parse {
        asset: &'static str,
        source: serde_json::Error,
    },
    /// An asset parsed but violates a dataset invariant.
    Invalid {
        asset: &'static str,
        message: String,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Parse { asset, source } => {
                write!(f, "failed to parse {asset}: {source}")
            }
            DataError::Invalid { asset, message } => {
                write!(f, "invalid data in {asset}: {message}")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Parse { source, .. } => Some(source),
            DataError::Invalid { .. } => None,
        }
    }
}

/// The full static dataset. Created once, never mutated.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RailNetwork {
    pub routes: Vec<RailRouteFeature>,
    pub stations: Vec<StationFeature>,
    pub basemap: Vec<BasemapLine>,
}

impl RailNetwork {
    /// Parses and validates the compiled-in dataset.
    pub fn load_embedded() -> Result<Self, DataError> {
        let routes = parse_routes("routes.geojson", ROUTES_JSON)?;
        let stations = parse_stations("stations.geojson", STATIONS_JSON)?;
        let basemap = parse_basemap("basemap.geojson", BASEMAP_JSON)?;
        Ok(Self {
            routes,
            stations,
            basemap,
        })
    }

    pub fn route(&self, id: &str) -> Option<&RailRouteFeature> {
        self.routes.iter().find(|f| f.route.id == id)
    }
}

// ---------------------------------------------------------------------------
// Raw GeoJSON shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct LineStringRaw {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct PointRaw {
    #[serde(rename = "type")]
    kind: String,
    coordinates: [f64; 2],
}

#[derive(Deserialize)]
struct RouteCollection {
    features: Vec<RouteFeatureRaw>,
}

#[derive(Deserialize)]
struct RouteFeatureRaw {
    properties: RailRoute,
    geometry: LineStringRaw,
}

#[derive(Deserialize)]
struct StationCollection {
    features: Vec<StationFeatureRaw>,
}

#[derive(Deserialize)]
struct StationFeatureRaw {
    properties: StationPropsRaw,
    geometry: PointRaw,
}

#[derive(Deserialize)]
struct StationPropsRaw {
    name: String,
    importance: StationImportance,
}

#[derive(Deserialize)]
struct BasemapCollection {
    features: Vec<BasemapFeatureRaw>,
}

#[derive(Deserialize)]
struct BasemapFeatureRaw {
    properties: BasemapPropsRaw,
    geometry: LineStringRaw,
}

#[derive(Deserialize)]
struct BasemapPropsRaw {
    class: BasemapClass,
}

// ---------------------------------------------------------------------------
// Parsing + validation
// ---------------------------------------------------------------------------

fn parse_routes(asset: &'static str, json: &str) -> Result<Vec<RailRouteFeature>, DataError> {
    let collection: RouteCollection =
        serde_json::from_str(json).map_err(|source| DataError::Parse { asset, source })?;

    let mut routes = Vec::with_capacity(collection.features.len());
    for raw in collection.features {
        let id = raw.properties.id.clone();
        if raw.geometry.kind != "LineString" {
            return Err(invalid(
                asset,
                format!("route '{id}': geometry must be a LineString"),
            ));
        }
        if raw.geometry.coordinates.len() < 2 {
            return Err(invalid(
                asset,
                format!("route '{id}': corridor needs at least 2 coordinates"),
            ));
        }
        if raw.properties.length_miles <= 0.0 {
            return Err(invalid(
                asset,
                format!("route '{id}': length_miles must be positive"),
            ));
        }
        if routes
            .iter()
            .any(|f: &RailRouteFeature| f.route.id == raw.properties.id)
        {
            return Err(invalid(asset, format!("duplicate route id '{id}'")));
        }
        routes.push(RailRouteFeature {
            route: raw.properties,
            coordinates: raw.geometry.coordinates,
        });
    }
    Ok(routes)
}

fn parse_stations(asset: &'static str, json: &str) -> Result<Vec<StationFeature>, DataError> {
    let collection: StationCollection =
        serde_json::from_str(json).map_err(|source| DataError::Parse { asset, source })?;

    let mut stations = Vec::with_capacity(collection.features.len());
    for raw in collection.features {
        if raw.geometry.kind != "Point" {
            return Err(invalid(
                asset,
                format!("station '{}': geometry must be a Point", raw.properties.name),
            ));
        }
        stations.push(StationFeature {
            name: raw.properties.name,
            importance: raw.properties.importance,
            position: raw.geometry.coordinates,
        });
    }
    Ok(stations)
}

fn parse_basemap(asset: &'static str, json: &str) -> Result<Vec<BasemapLine>, DataError> {
    let collection: BasemapCollection =
        serde_json::from_str(json).map_err(|source| DataError::Parse { asset, source })?;

    let mut lines = Vec::with_capacity(collection.features.len());
    for raw in collection.features {
        if raw.geometry.kind != "LineString" {
            return Err(invalid(asset, "basemap geometry must be a LineString"));
        }
        if raw.geometry.coordinates.len() < 2 {
            return Err(invalid(asset, "basemap line needs at least 2 coordinates"));
        }
        lines.push(BasemapLine {
            class: raw.properties.class,
            coordinates: raw.geometry.coordinates,
        });
    }
    Ok(lines)
}

fn invalid(asset: &'static str, message: impl Into<String>) -> DataError {
    DataError::Invalid {
        asset,
        message: message.into(),
    }
}
