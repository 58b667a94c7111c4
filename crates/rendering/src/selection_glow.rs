//! Glow overlay behind the selected corridor.
//!
//! A single wider, mostly transparent stroke in the route's speed color,
//! spawned under the corridor layer when a selection appears and despawned
//! when it changes or clears.

use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use dataset::config;
use dataset::network::RailNetwork;
use dataset::store::MapStore;

use crate::camera::{self, CameraState};
use crate::polyline::solid_polyline;
use crate::projection::world_per_pixel;
use crate::route_render::{path_world, PathWorld};
use crate::style::glow_color;

const GLOW_Z: f32 = 0.5;

#[derive(Component)]
pub struct SelectionGlow {
    pub route_id: String,
}

pub fn manage_selection_glow(
    store: Res<MapStore>,
    state: Res<CameraState>,
    mut last_zoom: Local<Option<f64>>,
    network: Res<RailNetwork>,
    existing: Query<(Entity, &SelectionGlow, &PathWorld, &Mesh2d)>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let zoom_changed = camera::zoom_changed(&mut last_zoom, state.view().zoom);
    if !store.is_changed() && !zoom_changed && !network.is_changed() {
        return;
    }

    let selected = store.selected_route_id();
    let wpp = world_per_pixel(state.view().zoom);
    let half_width = config::GLOW_WIDTH * wpp * 0.5;

    let mut have_glow = false;
    for (entity, glow, path, mesh2d) in &existing {
        if Some(glow.route_id.as_str()) != selected || network.is_changed() {
            commands.entity(entity).despawn();
            continue;
        }
        have_glow = true;
        // Zoom changes retessellate the stroke in place.
        if zoom_changed {
            if let Some(mesh) = meshes.get_mut(&mesh2d.0) {
                *mesh = solid_polyline(&path.0, half_width);
            }
        }
    }

    if have_glow {
        return;
    }
    let Some(feature) = selected.and_then(|id| network.route(id)) else {
        return;
    };
    let [r, g, b, a] = glow_color(&feature.route);
    let path = path_world(&feature.coordinates);
    let mesh = solid_polyline(&path, half_width);
    commands.spawn((
        SelectionGlow {
            route_id: feature.route.id.clone(),
        },
        PathWorld(path),
        Mesh2d(meshes.add(mesh)),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::srgba_u8(r, g, b, a)))),
        Transform::from_xyz(0.0, 0.0, GLOW_Z),
    ));
}
