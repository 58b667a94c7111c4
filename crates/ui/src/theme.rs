//! Shared colors and font sizes for the map chrome.
//!
//! Speed and status accents are not duplicated here; panels derive them from
//! `dataset::colors` so the corridors and the chrome share one palette.

use bevy_egui::{egui, EguiContexts};

/// Panel and window backgrounds, slightly lighter than the map substrate.
pub const PANEL: egui::Color32 = egui::Color32::from_rgb(26, 27, 32);
pub const PANEL_RAISED: egui::Color32 = egui::Color32::from_rgb(34, 36, 43);

pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(205, 208, 216);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(140, 144, 155);

pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 180, 70);

pub const FONT_HERO: f32 = 32.0;
pub const FONT_HEADING: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.5;

pub fn apply_dark_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let inactive = egui::Color32::from_rgb(42, 45, 54);
    let hover = egui::Color32::from_rgb(56, 61, 74);
    let active = egui::Color32::from_rgb(0, 150, 170);

    style.visuals.widgets.noninteractive.bg_fill = PANEL;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = PANEL;
    style.visuals.panel_fill = PANEL;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(18, 18, 21);
    style.visuals.faint_bg_color = PANEL_RAISED;
    style.visuals.override_text_color = Some(TEXT);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
