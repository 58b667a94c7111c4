//! The map store: single source of truth for selection, hover, and camera.
//!
//! Lives in the `dataset` crate so that `rendering` and `ui` can both read it
//! without a circular dependency. Consumers react through Bevy change
//! detection; setters are plain assignments with no side effects of their own.

use bevy::prelude::*;

use crate::config;

/// Camera parameters controlling what portion of the map is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl ViewState {
    /// Clamps longitude/latitude/zoom into the map's pan/zoom bounds.
    /// Pitch and bearing pass through unchanged.
    pub fn clamped(mut self) -> Self {
        self.longitude = self.longitude.clamp(config::LON_MIN, config::LON_MAX);
        self.latitude = self.latitude.clamp(config::LAT_MIN, config::LAT_MAX);
        self.zoom = self.zoom.clamp(config::ZOOM_MIN, config::ZOOM_MAX);
        self
    }
}

impl Default for ViewState {
    fn default() -> Self {
        config::DEFAULT_VIEW
    }
}

/// Easing applied to an animated camera transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress `t` in [0,1] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Animated-transition descriptor attached to a camera write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_secs: f32,
    pub easing: Easing,
}

impl Transition {
    pub fn eased(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            easing: Easing::CubicInOut,
        }
    }
}

/// Page-session mutable state: current selection, hover target, and camera.
///
/// Setter methods are the only mutation path. Camera writes are clamped on
/// the way in, so readers never observe an out-of-bounds view.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MapStore {
    selected_route_id: Option<String>,
    hovered_route_id: Option<String>,
    view: ViewState,
    transition: Option<Transition>,
}

impl Default for MapStore {
    fn default() -> Self {
        Self {
            selected_route_id: None,
            hovered_route_id: None,
            view: config::DEFAULT_VIEW,
            transition: None,
        }
    }
}

impl MapStore {
    pub fn selected_route_id(&self) -> Option<&str> {
        self.selected_route_id.as_deref()
    }

    pub fn hovered_route_id(&self) -> Option<&str> {
        self.hovered_route_id.as_deref()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Transition attached to the most recent camera write, if any.
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn set_selected_route_id(&mut self, id: Option<String>) {
        self.selected_route_id = id;
    }

    pub fn set_hovered_route_id(&mut self, id: Option<String>) {
        self.hovered_route_id = id;
    }

    /// Writes the camera view (clamped). A `Some` transition asks the camera
    /// to fly there; `None` means an immediate, user-driven update.
    pub fn set_view(&mut self, view: ViewState, transition: Option<Transition>) {
        self.view = view.clamped();
        self.transition = transition;
    }
}
