//! Station markers: a filled disc with a brighter ring, sized in pixels.
//!
//! All markers share two unit meshes (disc and annulus) and get their
//! on-screen size from the entity transform, so zoom changes only touch
//! scales. The marker radius runs through a short animation state keyed on
//! the store's hover target; today every target resolves to the same radius,
//! and hover-dependent sizing only needs a new target value here.

use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use dataset::config;
use dataset::network::RailNetwork;
use dataset::station::StationImportance;
use dataset::store::MapStore;

use crate::camera::{self, CameraState};
use crate::projection::world_from_lonlat;
use crate::projection::world_per_pixel;

const STATION_Z: f32 = 2.0;
const RING_INNER: f32 = 0.8;

#[derive(Component)]
pub struct StationMarker;

/// Animated marker radius in pixels, shared by all stations.
#[derive(Resource)]
pub struct StationRadius {
    from: f32,
    target: f32,
    elapsed: f32,
}

impl Default for StationRadius {
    fn default() -> Self {
        Self {
            from: config::STATION_RADIUS,
            target: config::STATION_RADIUS,
            elapsed: config::STATION_ANIM_SECS,
        }
    }
}

impl StationRadius {
    pub fn retarget(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.from = self.current();
        self.target = target;
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        if self.elapsed >= config::STATION_ANIM_SECS {
            return false;
        }
        self.elapsed += dt;
        true
    }

    pub fn current(&self) -> f32 {
        let t = (self.elapsed / config::STATION_ANIM_SECS).clamp(0.0, 1.0);
        self.from + (self.target - self.from) * t
    }
}

fn fill_alpha(importance: StationImportance) -> u8 {
    match importance {
        StationImportance::Major => 230,
        StationImportance::Regional => 200,
        StationImportance::Local => 170,
    }
}

pub fn sync_station_markers(
    network: Res<RailNetwork>,
    state: Res<CameraState>,
    radius: Res<StationRadius>,
    existing: Query<Entity, With<StationMarker>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !network.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let disc = meshes.add(Circle::new(1.0));
    let ring = meshes.add(Annulus::new(RING_INNER, 1.0));
    let scale = radius.current() * world_per_pixel(state.view().zoom);

    for station in &network.stations {
        let world = world_from_lonlat(station.position[0], station.position[1]);
        let fill = Color::srgba_u8(255, 255, 255, fill_alpha(station.importance));
        commands.spawn((
            StationMarker,
            Mesh2d(disc.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(fill))),
            Transform::from_xyz(world.x, world.y, STATION_Z).with_scale(Vec3::splat(scale)),
        ));
        commands.spawn((
            StationMarker,
            Mesh2d(ring.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::WHITE))),
            Transform::from_xyz(world.x, world.y, STATION_Z + 0.01).with_scale(Vec3::splat(scale)),
        ));
    }
}

pub fn retarget_station_radius(store: Res<MapStore>, mut radius: ResMut<StationRadius>) {
    if !store.is_changed() {
        return;
    }
    radius.retarget(config::STATION_RADIUS);
}

pub fn update_station_scales(
    time: Res<Time>,
    state: Res<CameraState>,
    mut last_zoom: Local<Option<f64>>,
    mut radius: ResMut<StationRadius>,
    mut markers: Query<&mut Transform, With<StationMarker>>,
) {
    let animating = radius.tick(time.delta_secs());
    let zoom_changed = camera::zoom_changed(&mut last_zoom, state.view().zoom);
    if !animating && !zoom_changed {
        return;
    }
    let scale = radius.current() * world_per_pixel(state.view().zoom);
    for mut transform in &mut markers {
        transform.scale = Vec3::splat(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_animation_interpolates_to_target() {
        let mut r = StationRadius::default();
        assert_eq!(r.current(), config::STATION_RADIUS);
        assert!(!r.tick(0.016));

        r.retarget(6.0);
        assert_eq!(r.current(), config::STATION_RADIUS);
        assert!(r.tick(config::STATION_ANIM_SECS / 2.0));
        assert!((r.current() - 5.0).abs() < 1e-4);
        r.tick(config::STATION_ANIM_SECS);
        assert!(!r.tick(0.016));
        assert_eq!(r.current(), 6.0);
    }

    #[test]
    fn retarget_to_same_value_is_a_no_op() {
        let mut r = StationRadius::default();
        r.retarget(config::STATION_RADIUS);
        assert!(!r.tick(0.016));
    }

    #[test]
    fn major_stations_render_brightest() {
        assert!(fill_alpha(StationImportance::Major) > fill_alpha(StationImportance::Regional));
        assert!(fill_alpha(StationImportance::Regional) > fill_alpha(StationImportance::Local));
    }
}
