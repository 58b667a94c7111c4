//! Shared constants for the map view and visual encoding.

use crate::store::ViewState;

/// Default camera: continental US overview.
pub const DEFAULT_VIEW: ViewState = ViewState {
    longitude: -98.5795,
    latitude: 39.8283,
    zoom: 4.0,
    pitch: 0.0,
    bearing: 0.0,
};

/// Pan/zoom bounds. Every camera write is clamped into this box.
pub const LON_MIN: f64 = -125.0;
pub const LON_MAX: f64 = -65.0;
pub const LAT_MIN: f64 = 25.0;
pub const LAT_MAX: f64 = 50.0;
pub const ZOOM_MIN: f64 = 3.0;
pub const ZOOM_MAX: f64 = 12.0;

/// Zoom range when fitting the camera to a route's bounding box.
pub const FIT_ZOOM_MIN: f64 = 5.0;
pub const FIT_ZOOM_MAX: f64 = 12.0;

/// Zoom used when the camera flies to a clicked station.
pub const STATION_ZOOM: f64 = 10.0;

/// Camera flight durations (seconds).
pub const ROUTE_FLIGHT_SECS: f32 = 2.0;
pub const STATION_FLIGHT_SECS: f32 = 1.0;
pub const RESET_FLIGHT_SECS: f32 = 2.0;

/// Corridor stroke widths in pixels.
pub const ROUTE_WIDTH_SELECTED: f32 = 6.0;
pub const ROUTE_WIDTH_HOVERED: f32 = 4.0;
pub const ROUTE_WIDTH_BASE: f32 = 1.5;

/// Glow overlay behind the selected route.
pub const GLOW_WIDTH: f32 = 8.0;
pub const GLOW_ALPHA: u8 = 30;

/// Dash run / gap lengths in pixels for PLANNING and STUDYING corridors.
pub const DASH_PATTERN: [f32; 2] = [4.0, 4.0];

/// Station point radius in pixels.
pub const STATION_RADIUS: f32 = 4.0;

/// Picking tolerance around the pointer, in pixels.
pub const PICK_RADIUS_PX: f32 = 20.0;

/// Route width/color changes animate over this long.
pub const STYLE_ANIM_SECS: f32 = 0.3;

/// Station radius changes animate over this long.
pub const STATION_ANIM_SECS: f32 = 0.2;
