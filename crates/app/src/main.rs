use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "US High-Speed Rail".to_string(),
                resolution: (1440.0, 900.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // Map substrate, visible wherever no basemap or corridor is drawn.
        .insert_resource(ClearColor(Color::srgb_u8(20, 20, 23)))
        // The map is mostly idle; only redraw on input or animation ticks.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .add_plugins((
            dataset::DatasetPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ))
        .run();
}
