//! Egui input guard: prevents click-through from UI elements to the map.
//!
//! When egui (detail panel, tooltip, fault modal) is handling pointer input,
//! map-level input systems should skip processing so clicks on the panel do
//! not also pan the camera or change the selection underneath.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer — i.e. the cursor is over an
/// egui area or egui is actively handling a drag/click. Input systems should
/// early-return when this is `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
