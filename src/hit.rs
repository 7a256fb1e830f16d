//! Picking: which element does a surface point belong to.
//!
//! Each element gets a circular catch area centered on its pivot, tested in
//! the element's local frame. For arrows this stands in for the true
//! rectangular hitbox; picking is meant to be forgiving, not pixel exact.
//!
//! Short arrows are floored at the surface's reference arrow length, so the
//! catch area of a short arrow shrinks with the surface width.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::config::EditorConfig;
use crate::geom::{Point, world_to_local};
use crate::scene::{Element, ElementId, ElementKind, Scene};

/// Topmost element whose catch area contains `point`, if any.
///
/// Walks the scene in reverse paint order so the last-appended element wins
/// where catch areas overlap. `surface_width` is the current drawing surface
/// width.
#[must_use]
pub fn hit_test(scene: &Scene, point: Point, config: &EditorConfig, surface_width: f64) -> Option<ElementId> {
    let arrow_floor = config.arrow_reference_length(surface_width);
    scene
        .elements()
        .iter()
        .rev()
        .find(|el| contains(el, point, config, arrow_floor))
        .map(|el| el.id)
}

/// Whether `point` falls inside the catch area of `element`.
#[must_use]
pub fn contains(element: &Element, point: Point, config: &EditorConfig, arrow_floor: f64) -> bool {
    let local = world_to_local(point, element.pivot(), element.rotation);
    let r = pick_radius(element, config, arrow_floor);
    local.length_squared() < r * r
}

/// Catch radius around the pivot.
///
/// Players get 20% slack over their drawn radius. Arrows use
/// `max(length, arrow_floor) / 1.8`, so short arrows stay easy to grab.
#[must_use]
pub fn pick_radius(element: &Element, config: &EditorConfig, arrow_floor: f64) -> f64 {
    match element.kind {
        ElementKind::Player { .. } => config.player_pick_radius(),
        ElementKind::Arrow { length, .. } => config.arrow_pick_radius(length, arrow_floor),
    }
}
