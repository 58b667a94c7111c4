//! Map projection: (longitude, latitude) ↔ world plane, and zoom math.
//!
//! The map is an equirectangular plane centered on the continental-US default
//! view: one degree maps to a fixed number of world units on both axes. Zoom
//! follows the web-map convention of halving the ground size per pixel with
//! each level.

use bevy::prelude::*;

use dataset::config;
use dataset::store::ViewState;

/// World units per degree of longitude/latitude.
pub const WORLD_UNITS_PER_DEG: f64 = 10.0;

/// World units per screen pixel at the default zoom level. Chosen so the
/// continental US (~60° wide) roughly fills a 1280 px window at zoom 4.
const BASE_WORLD_PER_PIXEL: f64 = 0.47;

pub fn world_from_lonlat(lon: f64, lat: f64) -> Vec2 {
    Vec2::new(
        ((lon - config::DEFAULT_VIEW.longitude) * WORLD_UNITS_PER_DEG) as f32,
        ((lat - config::DEFAULT_VIEW.latitude) * WORLD_UNITS_PER_DEG) as f32,
    )
}

pub fn lonlat_from_world(world: Vec2) -> (f64, f64) {
    (
        config::DEFAULT_VIEW.longitude + world.x as f64 / WORLD_UNITS_PER_DEG,
        config::DEFAULT_VIEW.latitude + world.y as f64 / WORLD_UNITS_PER_DEG,
    )
}

/// Unprojects a window-space position to (longitude, latitude) under `view`.
///
/// The view center sits at the window center; window y grows downward while
/// latitude grows upward.
pub fn lonlat_at_window(view: ViewState, window_size: Vec2, pos: Vec2) -> (f64, f64) {
    let centered = pos - window_size / 2.0;
    let wpp = world_per_pixel(view.zoom);
    let world = world_from_lonlat(view.longitude, view.latitude)
        + Vec2::new(centered.x, -centered.y) * wpp;
    lonlat_from_world(world)
}

/// Ground size of one pixel in world units at the given zoom.
pub fn world_per_pixel(zoom: f64) -> f32 {
    (BASE_WORLD_PER_PIXEL / 2f64.powf(zoom - config::DEFAULT_VIEW.zoom)) as f32
}

/// Ground size of one pixel in degrees at the given zoom.
pub fn degrees_per_pixel(zoom: f64) -> f64 {
    world_per_pixel(zoom) as f64 / WORLD_UNITS_PER_DEG
}

/// Camera fit for a corridor bounding box: box center plus a zoom derived
/// from the larger span, clamped to the route-fit range.
///
/// A 1°-span box lands exactly on zoom 8; a degenerate (zero-span) box maxes
/// out at the upper clamp.
pub fn fit_bounds(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> (f64, f64, f64) {
    let center_lon = (min_lon + max_lon) / 2.0;
    let center_lat = (min_lat + max_lat) / 2.0;
    let max_span = (max_lon - min_lon).max(max_lat - min_lat);
    let zoom = (8.0 - max_span.log2()).clamp(config::FIT_ZOOM_MIN, config::FIT_ZOOM_MAX);
    (center_lon, center_lat, zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_roundtrip() {
        let (lon, lat) = (-118.243, 34.052);
        let world = world_from_lonlat(lon, lat);
        let (lon2, lat2) = lonlat_from_world(world);
        assert!((lon - lon2).abs() < 1e-4);
        assert!((lat - lat2).abs() < 1e-4);
    }

    #[test]
    fn default_center_is_world_origin() {
        let world = world_from_lonlat(-98.5795, 39.8283);
        assert!(world.length() < 1e-6);
    }

    #[test]
    fn window_center_unprojects_to_view_center() {
        let view = ViewState {
            longitude: -87.6298,
            latitude: 41.8781,
            zoom: 6.0,
            ..Default::default()
        };
        let size = Vec2::new(1440.0, 900.0);

        let (lon, lat) = lonlat_at_window(view, size, size / 2.0);
        assert!((lon - view.longitude).abs() < 1e-4);
        assert!((lat - view.latitude).abs() < 1e-4);

        // One hundred pixels right and down of center: east and south.
        let (lon, lat) = lonlat_at_window(view, size, size / 2.0 + Vec2::splat(100.0));
        let deg = 100.0 * degrees_per_pixel(view.zoom);
        assert!((lon - (view.longitude + deg)).abs() < 1e-4);
        assert!((lat - (view.latitude - deg)).abs() < 1e-4);
    }

    #[test]
    fn zoom_halves_pixel_ground_size() {
        let z4 = world_per_pixel(4.0);
        let z5 = world_per_pixel(5.0);
        assert!((z4 / z5 - 2.0).abs() < 1e-6);
    }

    #[test]
    fn one_degree_box_fits_at_zoom_eight() {
        let (lon, lat, zoom) = fit_bounds(-100.0, 39.0, -99.0, 40.0);
        assert_eq!(lon, -99.5);
        assert_eq!(lat, 39.5);
        assert_eq!(zoom, 8.0);
    }

    #[test]
    fn fit_zoom_is_clamped() {
        // Continental-scale box: well below the lower clamp.
        let (_, _, zoom) = fit_bounds(-124.0, 30.0, -70.0, 48.0);
        assert_eq!(zoom, 5.0);

        // Tiny box: zoom saturates at the upper clamp.
        let (_, _, zoom) = fit_bounds(-100.0, 40.0, -99.999, 40.001);
        assert_eq!(zoom, 12.0);

        // Degenerate box (single point) also saturates rather than overflowing.
        let (_, _, zoom) = fit_bounds(-100.0, 40.0, -100.0, 40.0);
        assert_eq!(zoom, 12.0);
    }
}
