use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use dataset::network::RailNetwork;

pub mod fault_screen;
pub mod logo;
pub mod route_panel;
pub mod theme;
pub mod tooltip;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<route_panel::PanelTab>()
            .add_systems(Startup, theme::apply_dark_theme)
            .add_systems(
                Update,
                (
                    route_panel::route_panel_ui.run_if(resource_exists::<RailNetwork>),
                    route_panel::panel_keybinds,
                    tooltip::tooltip_ui,
                    logo::logo_ui,
                    fault_screen::fault_screen_ui,
                ),
            );
    }
}
