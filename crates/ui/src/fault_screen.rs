//! Full-screen fault modal.
//!
//! When the dataset fails to load, the map is unusable; a dimmed overlay with
//! the fault message and a reload button replaces normal interaction. The
//! overlay consumes pointer input, so nothing underneath receives clicks
//! while it is up.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use dataset::fault::{FaultState, ReloadRequested};

use crate::theme;

pub fn fault_screen_ui(
    mut contexts: EguiContexts,
    faults: Res<FaultState>,
    mut reloads: EventWriter<ReloadRequested>,
) {
    let Some(fault) = faults.current() else {
        return;
    };

    let ctx = contexts.ctx_mut();
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("fault_overlay"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let painter = ui.painter();
            painter.rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(180),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    egui::Window::new("Map Unavailable")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(420.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Something went off the rails")
                        .size(24.0)
                        .strong()
                        .color(theme::WARNING),
                );
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("The route dataset could not be loaded.")
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT),
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(&fault.message)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(18.0);
                if ui
                    .add_sized(
                        egui::vec2(160.0, 34.0),
                        egui::Button::new(
                            egui::RichText::new("Reload")
                                .size(16.0)
                                .color(theme::TEXT_HEADING),
                        ),
                    )
                    .clicked()
                {
                    reloads.send(ReloadRequested);
                }
                ui.add_space(12.0);
            });
        });
}
