//! Faint boundary linework beneath the corridors.

use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};

use dataset::basemap::BasemapClass;
use dataset::network::RailNetwork;

use crate::camera::{self, CameraState};
use crate::polyline::solid_polyline;
use crate::projection::world_per_pixel;
use crate::route_render::{path_world, PathWorld};

const BASEMAP_Z: f32 = 0.0;

#[derive(Component)]
pub struct BasemapMesh;

fn class_style(class: BasemapClass) -> (Color, f32) {
    match class {
        BasemapClass::Coastline => (Color::srgb_u8(58, 62, 72), 1.0),
        BasemapClass::Admin => (Color::srgb_u8(70, 74, 86), 1.0),
        BasemapClass::State => (Color::srgb_u8(44, 47, 56), 0.75),
        // Filtered out before spawning.
        BasemapClass::Waterway => (Color::NONE, 0.0),
    }
}

#[derive(Component)]
pub struct StrokeWidthPx(f32);

pub fn sync_basemap_meshes(
    network: Res<RailNetwork>,
    state: Res<CameraState>,
    existing: Query<Entity, With<BasemapMesh>>,
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
    for line in network.basemap.iter().filter(|l| l.class.visible()) {
        let (color, width_px) = class_style(line.class);
        let path = path_world(&line.coordinates);
        let mesh = solid_polyline(&path, width_px * wpp * 0.5);
        commands.spawn((
            BasemapMesh,
            StrokeWidthPx(width_px),
            PathWorld(path),
            Mesh2d(meshes.add(mesh)),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(color))),
            Transform::from_xyz(0.0, 0.0, BASEMAP_Z),
        ));
    }
}

/// Keeps basemap stroke widths pixel-constant as the zoom changes.
pub fn rescale_basemap_meshes(
    state: Res<CameraState>,
    mut last_zoom: Local<Option<f64>>,
    lines: Query<(&StrokeWidthPx, &PathWorld, &Mesh2d), With<BasemapMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !camera::zoom_changed(&mut last_zoom, state.view().zoom) {
        return;
    }
    let wpp = world_per_pixel(state.view().zoom);
    for (width, path, mesh2d) in &lines {
        if let Some(mesh) = meshes.get_mut(&mesh2d.0) {
            *mesh = solid_polyline(&path.0, width.0 * wpp * 0.5);
        }
    }
}
