//! Corridor rendering: one mesh entity per route, restyled in place.
//!
//! Stroke widths and dash lengths are specified in pixels, so meshes are
//! retessellated whenever the camera zoom changes (width in world units =
//! pixels times world-per-pixel). With tens of routes this is cheap.

use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use dataset::config;
use dataset::network::RailNetwork;
use dataset::store::MapStore;

use crate::camera::{self, CameraState};
use crate::polyline::{dashed_polyline, solid_polyline};
use crate::projection::{world_from_lonlat, world_per_pixel};
use crate::style::{route_style, StyleAnim};

const ROUTE_Z: f32 = 1.0;

/// A corridor's render entity: its index into [`RailNetwork::routes`] and the
/// in-flight style animation.
#[derive(Component)]
pub struct RouteMesh {
    pub index: usize,
    pub anim: StyleAnim,
}

/// Corridor path projected to world units, kept for retessellation.
#[derive(Component)]
pub struct PathWorld(pub Vec<Vec2>);

pub fn path_world(coordinates: &[[f64; 2]]) -> Vec<Vec2> {
    coordinates
        .iter()
        .map(|c| world_from_lonlat(c[0], c[1]))
        .collect()
}

/// (Re)spawns one entity per route when the dataset appears or is reloaded.
pub fn sync_route_meshes(
    network: Res<RailNetwork>,
    store: Res<MapStore>,
    state: Res<CameraState>,
    existing: Query<Entity, With<RouteMesh>>,
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

    let wpp = world_per_pixel(state.view().zoom);
    for (index, feature) in network.routes.iter().enumerate() {
        let style = route_style(
            &feature.route,
            store.selected_route_id(),
            store.hovered_route_id(),
        );
        let anim = StyleAnim::new(style);
        let path = path_world(&feature.coordinates);
        let mesh = build_route_mesh(&path, &anim, wpp);
        let color = anim.current_bevy_color();
        commands.spawn((
            RouteMesh { index, anim },
            PathWorld(path),
            Mesh2d(meshes.add(mesh)),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(color))),
            Transform::from_xyz(0.0, 0.0, ROUTE_Z),
        ));
    }
}

/// Points each corridor's animation at the style its current selection/hover
/// role demands. No-op retargets are absorbed by [`StyleAnim::retarget`].
pub fn retarget_route_styles(
    network: Res<RailNetwork>,
    store: Res<MapStore>,
    mut routes: Query<&mut RouteMesh>,
) {
    if !store.is_changed() {
        return;
    }
    for mut rm in &mut routes {
        let style = route_style(
            &network.routes[rm.index].route,
            store.selected_route_id(),
            store.hovered_route_id(),
        );
        rm.anim.retarget(style);
    }
}

/// Advances style animations and rebuilds meshes for animating corridors, or
/// for all corridors when the zoom changed.
pub fn animate_route_styles(
    time: Res<Time>,
    state: Res<CameraState>,
    mut last_zoom: Local<Option<f64>>,
    mut routes: Query<(
        &mut RouteMesh,
        &PathWorld,
        &Mesh2d,
        &MeshMaterial2d<ColorMaterial>,
    )>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let zoom_changed = camera::zoom_changed(&mut last_zoom, state.view().zoom);
    let wpp = world_per_pixel(state.view().zoom);
    let dt = time.delta_secs();

    for (mut rm, path, mesh2d, material) in &mut routes {
        let animating = rm.anim.tick(dt);
        if !animating && !zoom_changed {
            continue;
        }
        if let Some(mesh) = meshes.get_mut(&mesh2d.0) {
            *mesh = build_route_mesh(&path.0, &rm.anim, wpp);
        }
        if let Some(material) = materials.get_mut(&material.0) {
            material.color = rm.anim.current_bevy_color();
        }
    }
}

fn build_route_mesh(path: &[Vec2], anim: &StyleAnim, wpp: f32) -> Mesh {
    let half_width = anim.current_width() * wpp * 0.5;
    if anim.target().dashed {
        let [dash, gap] = config::DASH_PATTERN;
        dashed_polyline(path, half_width, dash * wpp, gap * wpp)
    } else {
        solid_polyline(path, half_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::config::DEFAULT_VIEW;

    #[test]
    fn dataset_arrival_spawns_one_mesh_per_route() {
        let network = RailNetwork::load_embedded().expect("embedded dataset loads");
        let expected = network.routes.len();

        let mut app = App::new();
        app.init_resource::<MapStore>();
        app.init_resource::<CameraState>();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<ColorMaterial>>();
        app.insert_resource(network);
        app.add_systems(Update, sync_route_meshes);
        app.update();

        let spawned = app
            .world_mut()
            .query::<&RouteMesh>()
            .iter(app.world())
            .count();
        assert_eq!(spawned, expected);
    }

    #[test]
    fn path_projects_relative_to_map_center() {
        let path = path_world(&[[DEFAULT_VIEW.longitude, DEFAULT_VIEW.latitude], [-97.5795, 40.8283]]);
        assert_eq!(path[0], Vec2::ZERO);
        assert!((path[1].x - 10.0).abs() < 1e-3);
        assert!((path[1].y - 10.0).abs() < 1e-3);
    }
}
