//! Per-route visual encoding and the 300 ms style transitions.
//!
//! `route_style` is the pure encoding function: (route, selection, hover) →
//! stroke color/width/dash. [`StyleAnim`] interpolates the drawn style toward
//! the encoded target so selection and hover changes ease in rather than pop.

use bevy::prelude::*;

use dataset::colors::color_by_speed;
use dataset::config;
use dataset::route::{ProjectStatus, RailRoute};

/// Target stroke style for one corridor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub color: [u8; 4],
    pub width: f32,
    pub dashed: bool,
}

/// Encodes a route's stroke from the current selection/hover state.
pub fn route_style(route: &RailRoute, selected: Option<&str>, hovered: Option<&str>) -> RouteStyle {
    let [r, g, b] = color_by_speed(route.design_speed_mph);
    let is_selected = selected == Some(route.id.as_str());
    let is_hovered = hovered == Some(route.id.as_str());

    let alpha = if is_selected || is_hovered {
        255
    } else if selected.is_some() {
        // Something else is selected: dim to ~20%.
        51
    } else {
        match route.status {
            ProjectStatus::Studying | ProjectStatus::Halted => 100,
            ProjectStatus::Planning => 153,
            _ => 255,
        }
    };

    let width = if is_selected {
        config::ROUTE_WIDTH_SELECTED
    } else if is_hovered {
        config::ROUTE_WIDTH_HOVERED
    } else {
        config::ROUTE_WIDTH_BASE
    };

    let dashed = matches!(
        route.status,
        ProjectStatus::Planning | ProjectStatus::Studying
    );

    RouteStyle {
        color: [r, g, b, alpha],
        width,
        dashed,
    }
}

/// Glow color for the elevated overlay behind the selected route.
pub fn glow_color(route: &RailRoute) -> [u8; 4] {
    let [r, g, b] = color_by_speed(route.design_speed_mph);
    [r, g, b, config::GLOW_ALPHA]
}

/// Quadratic ease-in-out used by the stroke transitions.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Fixed-duration eased interpolation of a stroke toward its target.
///
/// Dash state switches immediately; only color and width animate.
#[derive(Debug, Clone)]
pub struct StyleAnim {
    from_color: Vec4,
    from_width: f32,
    target: RouteStyle,
    elapsed: f32,
}

impl StyleAnim {
    pub fn new(style: RouteStyle) -> Self {
        Self {
            from_color: color_vec(style.color),
            from_width: style.width,
            target: style,
            elapsed: config::STYLE_ANIM_SECS,
        }
    }

    pub fn target(&self) -> RouteStyle {
        self.target
    }

    /// Starts easing from the currently drawn style toward `style`.
    pub fn retarget(&mut self, style: RouteStyle) {
        if style == self.target {
            return;
        }
        self.from_color = self.current_color();
        self.from_width = self.current_width();
        self.target = style;
        self.elapsed = 0.0;
    }

    /// Advances the animation. Returns true while the drawn style is still
    /// changing (callers rebuild meshes only then).
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.finished() {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(config::STYLE_ANIM_SECS);
        true
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= config::STYLE_ANIM_SECS
    }

    fn progress(&self) -> f32 {
        ease_in_out_quad(self.elapsed / config::STYLE_ANIM_SECS)
    }

    pub fn current_width(&self) -> f32 {
        self.from_width + (self.target.width - self.from_width) * self.progress()
    }

    pub fn current_color(&self) -> Vec4 {
        self.from_color.lerp(color_vec(self.target.color), self.progress())
    }

    pub fn current_bevy_color(&self) -> Color {
        let c = self.current_color();
        Color::srgba(c.x, c.y, c.z, c.w)
    }
}

fn color_vec(rgba: [u8; 4]) -> Vec4 {
    Vec4::new(
        rgba[0] as f32 / 255.0,
        rgba[1] as f32 / 255.0,
        rgba[2] as f32 / 255.0,
        rgba[3] as f32 / 255.0,
    )
}
