use bevy::prelude::*;

pub mod basemap_render;
pub mod camera;
pub mod egui_input_guard;
pub mod input;
pub mod polyline;
pub mod projection;
pub mod route_render;
pub mod selection_glow;
pub mod station_render;
pub mod style;

use camera::{CameraFlight, CameraState, LeftClickDrag};
use dataset::network::RailNetwork;
use input::{CursorLonLat, HoverTooltip};
use station_render::StationRadius;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .init_resource::<CameraFlight>()
            .init_resource::<LeftClickDrag>()
            .init_resource::<CursorLonLat>()
            .init_resource::<HoverTooltip>()
            .init_resource::<StationRadius>()
            .add_systems(Startup, camera::setup_camera)
            .add_systems(
                Update,
                (
                    camera::sync_camera_to_store,
                    camera::tick_camera_flight,
                    camera::apply_camera_state,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    input::update_cursor_lonlat,
                    input::handle_hover.run_if(resource_exists::<RailNetwork>),
                    // Click resolution reads drag state, so it must run before
                    // the pan system clears it on release.
                    input::handle_map_click.run_if(resource_exists::<RailNetwork>),
                    camera::camera_pan_drag,
                    camera::camera_wheel_zoom,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    basemap_render::sync_basemap_meshes,
                    basemap_render::rescale_basemap_meshes,
                    route_render::sync_route_meshes,
                    route_render::retarget_route_styles,
                    route_render::animate_route_styles,
                    selection_glow::manage_selection_glow,
                    station_render::sync_station_markers,
                    station_render::retarget_station_radius,
                    station_render::update_station_scales,
                )
                    .chain()
                    .run_if(resource_exists::<RailNetwork>),
            );
    }
}
