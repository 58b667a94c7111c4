//! Corner badge identifying the map.

use bevy_egui::{egui, EguiContexts};

use crate::theme;

pub fn logo_ui(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    egui::Area::new(egui::Id::new("map_logo"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("US High-Speed Rail")
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(theme::TEXT_HEADING),
            );
            ui.label(
                egui::RichText::new("proposals & corridors under construction")
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            );
        });
}
