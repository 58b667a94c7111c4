//! Hover tooltip following the cursor.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::input::HoverTooltip;

/// Pixel offset from the cursor to the tooltip's top-left corner.
const TOOLTIP_OFFSET: f32 = 10.0;

pub fn tooltip_ui(mut contexts: EguiContexts, tooltip: Res<HoverTooltip>) {
    let Some(tip) = &tooltip.0 else {
        return;
    };
    let ctx = contexts.ctx_mut();
    let pos = egui::pos2(
        tip.screen_pos.x + TOOLTIP_OFFSET,
        tip.screen_pos.y + TOOLTIP_OFFSET,
    );
    egui::Area::new(egui::Id::new("map_tooltip"))
        .fixed_pos(pos)
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&tip.text)
                        .size(crate::theme::FONT_BODY)
                        .color(crate::theme::TEXT_HEADING),
                );
            });
        });
}
