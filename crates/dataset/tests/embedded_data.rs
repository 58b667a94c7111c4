//! Sanity checks over the compiled-in dataset: the map is only as good as
//! the data it ships with.

use std::collections::HashSet;

use dataset::network::RailNetwork;
use dataset::route::ProjectStatus;

fn load() -> RailNetwork {
    RailNetwork::load_embedded().expect("embedded dataset must load")
}

#[test]
fn route_ids_are_unique() {
    let network = load();
    let mut seen = HashSet::new();
    for feature in &network.routes {
        assert!(
            seen.insert(feature.route.id.as_str()),
            "duplicate route id {}",
            feature.route.id
        );
    }
}

#[test]
fn corridors_are_well_formed() {
    let network = load();
    for feature in &network.routes {
        assert!(feature.coordinates.len() >= 2, "{}", feature.route.id);
        assert!(feature.route.length_miles > 0.0, "{}", feature.route.id);
        assert!(feature.route.design_speed_mph > 0.0, "{}", feature.route.id);
    }
}

#[test]
fn geometry_lies_within_the_continental_us() {
    let network = load();
    let in_bounds = |lon: f64, lat: f64| {
        (-125.0..=-65.0).contains(&lon) && (24.0..=50.0).contains(&lat)
    };
    for feature in &network.routes {
        for [lon, lat] in &feature.coordinates {
            assert!(in_bounds(*lon, *lat), "{} at [{lon}, {lat}]", feature.route.id);
        }
    }
    for station in &network.stations {
        assert!(
            in_bounds(station.position[0], station.position[1]),
            "{}",
            station.name
        );
    }
}

#[test]
fn every_status_is_represented() {
    let network = load();
    let statuses: HashSet<ProjectStatus> =
        network.routes.iter().map(|f| f.route.status).collect();
    for status in [
        ProjectStatus::Studying,
        ProjectStatus::Planning,
        ProjectStatus::Construction,
        ProjectStatus::Completed,
        ProjectStatus::Halted,
    ] {
        assert!(statuses.contains(&status), "no route with status {status}");
    }
}

#[test]
fn hidden_waterways_are_present_in_the_data() {
    let network = load();
    assert!(
        network
            .basemap
            .iter()
            .any(|line| !line.class.visible()),
        "dataset should carry waterway lines even though they never render"
    );
    assert!(network.basemap.iter().any(|line| line.class.visible()));
}
