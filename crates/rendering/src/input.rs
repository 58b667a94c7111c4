//! Pointer input over the map: cursor tracking, feature picking, hover and
//! click handling.
//!
//! Picking works in geographic space. The cursor position is unprojected to
//! lon/lat using the camera's current view, and the pick tolerance is the
//! pixel radius converted to degrees at the current zoom. Stations sit above
//! corridors, so they win ties.

use bevy::prelude::*;
use bevy::window::SystemCursorIcon;
use bevy::winit::cursor::CursorIcon;
use bevy_egui::EguiContexts;

use dataset::config;
use dataset::network::RailNetwork;
use dataset::store::{MapStore, Transition, ViewState};

use crate::camera::{CameraState, LeftClickDrag};
use crate::egui_input_guard::egui_wants_pointer;
use crate::polyline::point_polyline_distance;
use crate::projection::{degrees_per_pixel, fit_bounds, lonlat_at_window};

/// Cursor position unprojected onto the map, refreshed every frame.
#[derive(Resource, Default)]
pub struct CursorLonLat {
    pub lon: f64,
    pub lat: f64,
    /// Window-space position, for anchoring the tooltip.
    pub screen: Vec2,
    /// False while the cursor is outside the window.
    pub valid: bool,
}

/// What the pointer is over, by index into [`RailNetwork`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Route(usize),
    Station(usize),
}

/// Tooltip content for the feature under the pointer, consumed by the ui
/// crate. `None` clears the tooltip.
#[derive(Resource, Default)]
pub struct HoverTooltip(pub Option<Tooltip>);

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub screen_pos: Vec2,
    pub text: String,
}

pub fn update_cursor_lonlat(
    windows: Query<&Window>,
    state: Res<CameraState>,
    mut cursor: ResMut<CursorLonLat>,
) {
    let Ok(window) = windows.get_single() else {
        cursor.valid = false;
        return;
    };
    let Some(pos) = window.cursor_position() else {
        cursor.valid = false;
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    let (lon, lat) = lonlat_at_window(state.view(), size, pos);
    cursor.lon = lon;
    cursor.lat = lat;
    cursor.screen = pos;
    cursor.valid = true;
}

/// Finds the feature within `radius_deg` of the pointer, stations first.
pub fn pick_at(network: &RailNetwork, lon: f64, lat: f64, radius_deg: f64) -> Option<PickTarget> {
    let p = Vec2::new(lon as f32, lat as f32);
    let radius = radius_deg as f32;

    let station = network
        .stations
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let d = p.distance(Vec2::new(s.position[0] as f32, s.position[1] as f32));
            (i, d)
        })
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((i, _)) = station {
        return Some(PickTarget::Station(i));
    }

    network
        .routes
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let path: Vec<Vec2> = f
                .coordinates
                .iter()
                .map(|c| Vec2::new(c[0] as f32, c[1] as f32))
                .collect();
            (i, point_polyline_distance(p, &path))
        })
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| PickTarget::Route(i))
}

/// What a hover over `pick` should produce: the hovered corridor id, the
/// tooltip text, and whether the cursor shows as a pointer.
pub fn hover_outcome(
    pick: Option<PickTarget>,
    network: &RailNetwork,
) -> (Option<String>, Option<String>, bool) {
    match pick {
        Some(PickTarget::Route(i)) => {
            let route = &network.routes[i].route;
            let text = format!("{} : {} MPH", route.name, route.design_speed_mph);
            (Some(route.id.clone()), Some(text), true)
        }
        Some(PickTarget::Station(i)) => (None, Some(network.stations[i].name.clone()), true),
        None => (None, None, false),
    }
}

pub fn handle_hover(
    cursor: Res<CursorLonLat>,
    state: Res<CameraState>,
    network: Res<RailNetwork>,
    drag: Res<LeftClickDrag>,
    mut store: ResMut<MapStore>,
    mut tooltip: ResMut<HoverTooltip>,
    mut egui: EguiContexts,
    mut commands: Commands,
    windows: Query<Entity, With<Window>>,
) {
    let blocked =
        !cursor.valid || drag.is_dragging || egui_wants_pointer(&mut egui);
    let pick = if blocked {
        None
    } else {
        let radius_deg = config::PICK_RADIUS_PX as f64 * degrees_per_pixel(state.view().zoom);
        pick_at(&network, cursor.lon, cursor.lat, radius_deg)
    };

    let (hovered, text, pointer) = hover_outcome(pick, &network);

    if store.hovered_route_id() != hovered.as_deref() {
        store.set_hovered_route_id(hovered);
    }

    let next = text.map(|text| Tooltip {
        screen_pos: cursor.screen,
        text,
    });
    if tooltip.0 != next {
        tooltip.0 = next;
    }

    if let Ok(window) = windows.get_single() {
        let icon = if pointer {
            SystemCursorIcon::Pointer
        } else {
            SystemCursorIcon::Default
        };
        commands.entity(window).insert(CursorIcon::System(icon));
    }
}

pub fn handle_map_click(
    buttons: Res<ButtonInput<MouseButton>>,
    drag: Res<LeftClickDrag>,
    cursor: Res<CursorLonLat>,
    state: Res<CameraState>,
    network: Res<RailNetwork>,
    mut store: ResMut<MapStore>,
    mut egui: EguiContexts,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    if drag.is_dragging || !cursor.valid || egui_wants_pointer(&mut egui) {
        return;
    }
    let radius_deg = config::PICK_RADIUS_PX as f64 * degrees_per_pixel(state.view().zoom);
    let pick = pick_at(&network, cursor.lon, cursor.lat, radius_deg);
    apply_click(pick, &network, &mut store);
}

/// Selection and camera response to a click, independent of windowing.
///
/// Route: select it and fit the camera to its bounding box. Station: fly in
/// close and drop any selection. Empty map: clear selection and return to the
/// national overview.
pub fn apply_click(pick: Option<PickTarget>, network: &RailNetwork, store: &mut MapStore) {
    match pick {
        Some(PickTarget::Route(i)) => {
            let feature = &network.routes[i];
            let (min_lon, min_lat, max_lon, max_lat) = feature.bounds();
            let (lon, lat, zoom) = fit_bounds(min_lon, min_lat, max_lon, max_lat);
            store.set_selected_route_id(Some(feature.route.id.clone()));
            store.set_view(
                ViewState {
                    longitude: lon,
                    latitude: lat,
                    zoom,
                    pitch: 0.0,
                    bearing: 0.0,
                },
                Some(Transition::eased(config::ROUTE_FLIGHT_SECS)),
            );
        }
        Some(PickTarget::Station(i)) => {
            let station = &network.stations[i];
            store.set_selected_route_id(None);
            store.set_view(
                ViewState {
                    longitude: station.position[0],
                    latitude: station.position[1],
                    zoom: config::STATION_ZOOM,
                    pitch: 0.0,
                    bearing: 0.0,
                },
                Some(Transition::eased(config::STATION_FLIGHT_SECS)),
            );
        }
        None => {
            store.set_selected_route_id(None);
            store.set_view(
                config::DEFAULT_VIEW,
                Some(Transition::eased(config::RESET_FLIGHT_SECS)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::route::{ProjectStatus, RailRoute, RailRouteFeature};
    use dataset::station::{StationFeature, StationImportance};

    fn test_network() -> RailNetwork {
        let route = RailRoute {
            id: "test-line".into(),
            name: "Test Line".into(),
            segments: vec!["A".into(), "B".into()],
            design_speed_mph: 220.0,
            cost_est_billions: 10.0,
            status: ProjectStatus::Planning,
            completion_year_tgt: Some(2035),
            length_miles: 100.0,
            travel_time_minutes: None,
            drive_time_minutes: None,
            flight_time_minutes: None,
            jobs_created: None,
            annual_ridership_est: None,
            description: String::new(),
        };
        RailNetwork {
            routes: vec![RailRouteFeature {
                route,
                coordinates: vec![[-100.0, 40.0], [-99.0, 41.0]],
            }],
            stations: vec![StationFeature {
                name: "Central".into(),
                importance: StationImportance::Major,
                position: [-99.0, 41.0],
            }],
            basemap: Vec::new(),
        }
    }

    #[test]
    fn stations_pick_before_routes() {
        let network = test_network();
        // The station sits on the corridor endpoint; it must win.
        let pick = pick_at(&network, -99.0, 41.0, 0.5);
        assert_eq!(pick, Some(PickTarget::Station(0)));
        // Mid-corridor, away from the station, the route wins.
        let pick = pick_at(&network, -99.5, 40.5, 0.2);
        assert_eq!(pick, Some(PickTarget::Route(0)));
        // Far away: nothing.
        assert_eq!(pick_at(&network, -80.0, 30.0, 0.2), None);
    }

    #[test]
    fn route_click_selects_and_fits() {
        let network = test_network();
        let mut store = MapStore::default();
        apply_click(Some(PickTarget::Route(0)), &network, &mut store);
        assert_eq!(store.selected_route_id(), Some("test-line"));
        let view = store.view();
        assert_eq!(view.longitude, -99.5);
        assert_eq!(view.latitude, 40.5);
        // A one-degree box fits at zoom 8.
        assert_eq!(view.zoom, 8.0);
        let transition = store.transition().unwrap();
        assert_eq!(transition.duration_secs, config::ROUTE_FLIGHT_SECS);
    }

    #[test]
    fn station_click_flies_in_and_clears_selection() {
        let network = test_network();
        let mut store = MapStore::default();
        store.set_selected_route_id(Some("test-line".into()));
        apply_click(Some(PickTarget::Station(0)), &network, &mut store);
        assert_eq!(store.selected_route_id(), None);
        let view = store.view();
        assert_eq!(view.longitude, -99.0);
        assert_eq!(view.zoom, config::STATION_ZOOM);
        let transition = store.transition().unwrap();
        assert_eq!(transition.duration_secs, config::STATION_FLIGHT_SECS);
    }

    #[test]
    fn empty_click_resets_to_overview() {
        let network = test_network();
        let mut store = MapStore::default();
        store.set_selected_route_id(Some("test-line".into()));
        apply_click(None, &network, &mut store);
        assert_eq!(store.selected_route_id(), None);
        assert_eq!(store.view(), config::DEFAULT_VIEW);
        assert!(store.transition().is_some());
    }

    #[test]
    fn hover_tooltip_formats_name_and_speed() {
        let network = test_network();
        let (hovered, text, pointer) = hover_outcome(Some(PickTarget::Route(0)), &network);
        assert_eq!(hovered.as_deref(), Some("test-line"));
        assert_eq!(text.as_deref(), Some("Test Line : 220 MPH"));
        assert!(pointer);

        let (hovered, text, pointer) = hover_outcome(Some(PickTarget::Station(0)), &network);
        assert_eq!(hovered, None);
        assert_eq!(text.as_deref(), Some("Central"));
        assert!(pointer);

        let (hovered, text, pointer) = hover_outcome(None, &network);
        assert!(hovered.is_none() && text.is_none() && !pointer);
    }
}
