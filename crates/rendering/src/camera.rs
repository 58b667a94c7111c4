//! Camera control: store-driven flights plus direct pan/zoom input.
//!
//! The store holds the camera *target*. When a write carries a transition the
//! camera flies there over the transition's duration; intermediate frames live
//! only in [`CameraState`] and are never written back to the store. A write
//! with no transition (drag, wheel) snaps immediately and cancels any flight
//! in progress.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use dataset::store::{MapStore, Transition, ViewState};

use crate::egui_input_guard::egui_wants_pointer;
use crate::projection::{degrees_per_pixel, world_from_lonlat, world_per_pixel};

/// Cursor movement below this (in pixels) still counts as a click on release.
const DRAG_THRESHOLD_PX: f32 = 5.0;

/// Zoom levels per scroll-wheel line.
const ZOOM_PER_LINE: f64 = 0.25;

/// The camera's actual view this frame, distinct from the store's target
/// while a flight is in progress.
#[derive(Resource)]
pub struct CameraState {
    current: ViewState,
    last_target: ViewState,
}

impl Default for CameraState {
    fn default() -> Self {
        let view = ViewState::default();
        Self {
            current: view,
            last_target: view,
        }
    }
}

impl CameraState {
    pub fn view(&self) -> ViewState {
        self.current
    }
}

/// An in-progress animated move between two views.
#[derive(Resource, Default)]
pub struct CameraFlight(Option<Flight>);

struct Flight {
    from: ViewState,
    to: ViewState,
    transition: Transition,
    elapsed: f32,
}

impl CameraFlight {
    pub fn active(&self) -> bool {
        self.0.is_some()
    }
}

/// Left-button drag tracking. `is_dragging` flips once the cursor has moved
/// past the click threshold and stays set until release, so the click handler
/// can tell a pan apart from a selection click.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pressed: bool,
    start: Vec2,
    last: Vec2,
    pub is_dragging: bool,
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Picks up store camera writes: starts a flight when the write carried a
/// transition, snaps otherwise.
pub fn sync_camera_to_store(
    store: Res<MapStore>,
    mut state: ResMut<CameraState>,
    mut flight: ResMut<CameraFlight>,
) {
    if !store.is_changed() {
        return;
    }
    let target = store.view();
    if target == state.last_target {
        return;
    }
    state.last_target = target;
    match store.transition() {
        Some(transition) => {
            flight.0 = Some(Flight {
                from: state.current,
                to: target,
                transition,
                elapsed: 0.0,
            });
        }
        None => {
            flight.0 = None;
            state.current = target;
        }
    }
}

pub fn tick_camera_flight(
    time: Res<Time>,
    mut state: ResMut<CameraState>,
    mut flight: ResMut<CameraFlight>,
) {
    let Some(f) = flight.0.as_mut() else {
        return;
    };
    f.elapsed += time.delta_secs();
    let t = (f.elapsed / f.transition.duration_secs.max(f32::EPSILON)).min(1.0);
    let s = f.transition.easing.apply(t) as f64;
    state.current = lerp_view(f.from, f.to, s);
    if t >= 1.0 {
        state.current = f.to;
        flight.0 = None;
    }
}

/// True when `zoom` differs from the value seen on the previous call.
///
/// Systems that retessellate pixel-sized strokes key on this instead of
/// camera change detection, so a pure pan never triggers a rebuild.
pub fn zoom_changed(last_zoom: &mut Option<f64>, zoom: f64) -> bool {
    if *last_zoom == Some(zoom) {
        return false;
    }
    *last_zoom = Some(zoom);
    true
}

fn lerp_view(a: ViewState, b: ViewState, s: f64) -> ViewState {
    ViewState {
        longitude: a.longitude + (b.longitude - a.longitude) * s,
        latitude: a.latitude + (b.latitude - a.latitude) * s,
        zoom: a.zoom + (b.zoom - a.zoom) * s,
        pitch: a.pitch + (b.pitch - a.pitch) * s,
        bearing: a.bearing + (b.bearing - a.bearing) * s,
    }
}

/// Pushes [`CameraState`] into the camera entity's transform and projection.
pub fn apply_camera_state(
    state: Res<CameraState>,
    mut cameras: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = cameras.get_single_mut() else {
        return;
    };
    let view = state.view();
    let center = world_from_lonlat(view.longitude, view.latitude);
    transform.translation.x = center.x;
    transform.translation.y = center.y;
    transform.rotation = Quat::from_rotation_z(-(view.bearing.to_radians() as f32));
    projection.scale = world_per_pixel(view.zoom);
}

/// Left-drag panning. Writes clamped views with no transition, which also
/// cancels any flight in progress.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<LeftClickDrag>,
    state: Res<CameraState>,
    mut store: ResMut<MapStore>,
    mut egui: EguiContexts,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut egui) {
        if let Some(pos) = window.cursor_position() {
            drag.pressed = true;
            drag.start = pos;
            drag.last = pos;
            drag.is_dragging = false;
        }
    }

    if drag.pressed && buttons.pressed(MouseButton::Left) {
        if let Some(pos) = window.cursor_position() {
            if !drag.is_dragging && pos.distance(drag.start) > DRAG_THRESHOLD_PX {
                drag.is_dragging = true;
            }
            if drag.is_dragging {
                let delta = pos - drag.last;
                if delta != Vec2::ZERO {
                    let deg = degrees_per_pixel(state.view().zoom);
                    let mut view = state.view();
                    view.longitude -= delta.x as f64 * deg;
                    // Window y grows downward.
                    view.latitude += delta.y as f64 * deg;
                    store.set_view(view, None);
                }
                drag.last = pos;
            }
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.pressed = false;
        drag.is_dragging = false;
    }
}

pub fn camera_wheel_zoom(
    mut wheel: EventReader<MouseWheel>,
    state: Res<CameraState>,
    mut store: ResMut<MapStore>,
    mut egui: EguiContexts,
) {
    let mut lines = 0.0f64;
    for event in wheel.read() {
        lines += match event.unit {
            MouseScrollUnit::Line => event.y as f64,
            MouseScrollUnit::Pixel => event.y as f64 / 100.0,
        };
    }
    if lines == 0.0 || egui_wants_pointer(&mut egui) {
        return;
    }
    let mut view = state.view();
    view.zoom += lines * ZOOM_PER_LINE;
    store.set_view(view, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::config;

    fn run_sync(store: &MapStore) -> (CameraState, CameraFlight) {
        // Drive the sync logic directly rather than through a schedule.
        let mut state = CameraState::default();
        let mut flight = CameraFlight::default();
        let target = store.view();
        state.last_target = target;
        match store.transition() {
            Some(transition) => {
                flight.0 = Some(Flight {
                    from: CameraState::default().current,
                    to: target,
                    transition,
                    elapsed: 0.0,
                })
            }
            None => state.current = target,
        }
        (state, flight)
    }

    #[test]
    fn untransitioned_write_snaps() {
        let mut store = MapStore::default();
        let mut view = store.view();
        view.longitude = -100.0;
        store.set_view(view, None);
        let (state, flight) = run_sync(&store);
        assert!(!flight.active());
        assert_eq!(state.view().longitude, -100.0);
    }

    #[test]
    fn transitioned_write_starts_a_flight() {
        let mut store = MapStore::default();
        let mut view = store.view();
        view.zoom = 8.0;
        store.set_view(view, Some(Transition::eased(config::ROUTE_FLIGHT_SECS)));
        let (state, flight) = run_sync(&store);
        assert!(flight.active());
        // The camera has not jumped yet.
        assert_eq!(state.view().zoom, config::DEFAULT_VIEW.zoom);
    }

    #[test]
    fn flight_interpolates_and_lands_exactly() {
        let from = ViewState::default();
        let to = ViewState {
            longitude: -120.0,
            latitude: 36.0,
            zoom: 7.0,
            pitch: 0.0,
            bearing: 0.0,
        };
        let mut f = Flight {
            from,
            to,
            transition: Transition::eased(2.0),
            elapsed: 0.0,
        };

        f.elapsed = 1.0;
        let t = f.elapsed / f.transition.duration_secs;
        let mid = lerp_view(f.from, f.to, f.transition.easing.apply(t) as f64);
        assert!((mid.longitude - (-109.28975)).abs() < 1e-6);
        assert!((mid.zoom - 5.5).abs() < 1e-9);

        let end = lerp_view(f.from, f.to, f.transition.easing.apply(1.0) as f64);
        assert_eq!(end, to);
    }

    #[test]
    fn zoom_tracking_ignores_pans() {
        let mut last = None;
        // First observation always counts as a change.
        assert!(zoom_changed(&mut last, 4.0));
        // A pan leaves zoom untouched, so no rebuild is signalled.
        assert!(!zoom_changed(&mut last, 4.0));
        assert!(!zoom_changed(&mut last, 4.0));
        assert!(zoom_changed(&mut last, 5.25));
        assert!(!zoom_changed(&mut last, 5.25));
    }
}
