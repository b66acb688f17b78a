//! Pointer event mapping for the sketch surface.

use sketchpad::stroke::Point;

/// Surface-local position of a pointer event.
///
/// `offset_x`/`offset_y` are already relative to the canvas element, which
/// matches the engine's raster coordinates one-to-one at the fixed 500×500
/// size.
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Whether this event comes from the primary (drawing) button.
pub fn is_primary_button(ev: &leptos::ev::PointerEvent) -> bool {
    ev.button() == 0
}
