//! Route detail panel, anchored to the right edge while a corridor is
//! selected.
//!
//! Everything shown here is derived from the selected route record; the panel
//! holds no state of its own beyond the active tab. Closing the panel (close
//! button or Escape) only clears the selection — the camera stays where the
//! selection flight left it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use dataset::colors::{color_by_speed, status_color};
use dataset::format::{cost_per_mile, format_large_number, format_travel_time, time_savings_pct};
use dataset::network::RailNetwork;
use dataset::route::{ProjectStatus, RailRoute};
use dataset::store::MapStore;

use crate::theme;

const PANEL_WIDTH: f32 = 340.0;

const TIMELINE_STEPS: [&str; 4] = ["Study", "Plan", "Build", "Open"];

/// Which metrics tab is open.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Travel,
    Cities,
    Impact,
}

fn speed_accent(mph: f64) -> egui::Color32 {
    let [r, g, b] = color_by_speed(mph);
    egui::Color32::from_rgb(r, g, b)
}

fn status_accent(status: ProjectStatus) -> egui::Color32 {
    let [r, g, b] = status_color(status);
    egui::Color32::from_rgb(r, g, b)
}

/// "City A → City B → City C" served-cities line.
pub fn corridor_line(route: &RailRoute) -> String {
    route.segments.join(" \u{2192} ")
}

/// "$106B" / "$12.5B" cost figure, dropping a trailing ".0".
pub fn format_billions(billions: f64) -> String {
    if (billions.fract()).abs() < 1e-9 {
        format!("${billions:.0}B")
    } else {
        format!("${billions:.1}B")
    }
}

pub fn route_panel_ui(
    mut contexts: EguiContexts,
    network: Res<RailNetwork>,
    mut store: ResMut<MapStore>,
    mut tab: ResMut<PanelTab>,
) {
    let Some(feature) = store.selected_route_id().and_then(|id| network.route(id)) else {
        return;
    };
    let route = feature.route.clone();

    let ctx = contexts.ctx_mut();
    let mut close = false;

    egui::SidePanel::right("route_detail")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    badge(ui, route.status);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("\u{2715}").clicked() {
                            close = true;
                        }
                    });
                });

                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(&route.name)
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_HEADING),
                );
                ui.label(
                    egui::RichText::new(corridor_line(&route))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}", route.design_speed_mph))
                            .size(theme::FONT_HERO)
                            .strong()
                            .color(speed_accent(route.design_speed_mph)),
                    );
                    ui.label(
                        egui::RichText::new("MPH design speed")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    );
                });

                ui.add_space(10.0);
                metrics_row(ui, &route);

                ui.add_space(14.0);
                timeline(ui, route.status);

                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut *tab, PanelTab::Travel, "Travel");
                    ui.selectable_value(&mut *tab, PanelTab::Cities, "Cities");
                    ui.selectable_value(&mut *tab, PanelTab::Impact, "Impact");
                });
                ui.separator();
                match *tab {
                    PanelTab::Travel => travel_tab(ui, &route),
                    PanelTab::Cities => cities_tab(ui, &route),
                    PanelTab::Impact => impact_tab(ui, &route),
                }

                if !route.description.is_empty() {
                    ui.add_space(14.0);
                    ui.label(
                        egui::RichText::new(&route.description)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT),
                    );
                }
                ui.add_space(10.0);
            });
        });

    if close {
        store.set_selected_route_id(None);
    }
}

/// Escape closes the panel.
pub fn panel_keybinds(keys: Res<ButtonInput<KeyCode>>, mut store: ResMut<MapStore>) {
    if keys.just_pressed(KeyCode::Escape) && store.selected_route_id().is_some() {
        store.set_selected_route_id(None);
    }
}

fn badge(ui: &mut egui::Ui, status: ProjectStatus) {
    let accent = status_accent(status);
    egui::Frame::new()
        .fill(accent.gamma_multiply(0.2))
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(status.label())
                    .size(theme::FONT_SMALL)
                    .strong()
                    .color(accent),
            );
        });
}

fn metrics_row(ui: &mut egui::Ui, route: &RailRoute) {
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Cost", &format_billions(route.cost_est_billions));
        metric(&mut cols[1], "Length", &format!("{:.0} mi", route.length_miles));
        let target = route
            .completion_year_tgt
            .map(|year| year.to_string())
            .unwrap_or_else(|| "\u{2014}".to_string());
        metric(&mut cols[2], "Target", &target);
    });
}

fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(
        egui::RichText::new(label)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
    ui.label(
        egui::RichText::new(value)
            .size(theme::FONT_BODY)
            .strong()
            .color(theme::TEXT_HEADING),
    );
}

/// Four-step lifecycle strip. Steps up to the route's current one light up
/// in the status accent, which for a halted route is the halted red.
fn timeline(ui: &mut egui::Ui, status: ProjectStatus) {
    let reached = status.timeline_step();
    let accent = status_accent(status);
    ui.columns(TIMELINE_STEPS.len(), |cols| {
        for (i, (col, step)) in cols.iter_mut().zip(TIMELINE_STEPS).enumerate() {
            let on = i <= reached;
            let color = if on { accent } else { theme::TEXT_MUTED };
            let (rect, _) =
                col.allocate_exact_size(egui::vec2(col.available_width(), 4.0), egui::Sense::hover());
            col.painter().rect_filled(
                rect,
                egui::CornerRadius::same(2),
                if on { accent } else { theme::PANEL_RAISED },
            );
            col.label(
                egui::RichText::new(step)
                    .size(theme::FONT_SMALL)
                    .color(color),
            );
        }
    });
}

fn travel_tab(ui: &mut egui::Ui, route: &RailRoute) {
    // Rail time is always listed, even when the estimate is missing.
    let rail = route
        .travel_time_minutes
        .map(format_travel_time)
        .unwrap_or_else(|| "\u{2014}".to_string());
    stat_line(ui, "Rail", &rail);
    if let Some(minutes) = route.drive_time_minutes {
        stat_line(ui, "Drive", &format_travel_time(minutes));
    }
    if let Some(minutes) = route.flight_time_minutes {
        stat_line(ui, "Fly (door to door)", &format_travel_time(minutes));
    }
    if let Some(pct) = time_savings_pct(route) {
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(format!("{pct:.0}% faster than driving"))
                .size(theme::FONT_BODY)
                .strong()
                .color(speed_accent(route.design_speed_mph)),
        );
    }
}

/// Served cities as chips with directional separators between them.
fn cities_tab(ui: &mut egui::Ui, route: &RailRoute) {
    ui.horizontal_wrapped(|ui| {
        for (i, city) in route.segments.iter().enumerate() {
            if i > 0 {
                ui.label(
                    egui::RichText::new("\u{2192}")
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_MUTED),
                );
            }
            egui::Frame::new()
                .fill(theme::PANEL_RAISED)
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(city)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT),
                    );
                });
        }
    });
}

fn impact_tab(ui: &mut egui::Ui, route: &RailRoute) {
    if let Some(riders) = route.annual_ridership_est {
        stat_line(ui, "Riders / year", &format_large_number(riders));
    }
    if let Some(jobs) = route.jobs_created {
        stat_line(ui, "Jobs created", &format_large_number(jobs));
    }
    let per_mile = cost_per_mile(route)
        .map(|billions| format!("${:.0}M", billions * 1000.0))
        .unwrap_or_else(|| "\u{2014}".to_string());
    stat_line(ui, "Cost per mile", &per_mile);
}

fn stat_line(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(theme::TEXT_HEADING),
            );
        });
    });
}
