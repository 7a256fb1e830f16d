use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::scene::{ArrowStyle, Glyph, Team};

/// Wide enough that the arrow floor is the full default length.
const WIDE: f64 = 800.0;

fn config() -> EditorConfig {
    EditorConfig::default()
}

fn player(x: f64, y: f64) -> Element {
    Element::player(x, y, Glyph::Cross, "", Team::Home)
}

fn scene_of(elements: &[Element]) -> Scene {
    let mut scene = Scene::new();
    for el in elements {
        scene.add(el.clone());
    }
    scene
}

// =============================================================
// Players
// =============================================================

#[test]
fn empty_scene_hits_nothing() {
    assert_eq!(hit_test(&Scene::new(), Point::new(0.0, 0.0), &config(), WIDE), None);
}

#[test]
fn player_center_hits() {
    let p = player(100.0, 100.0);
    let scene = scene_of(std::slice::from_ref(&p));
    assert_eq!(hit_test(&scene, Point::new(100.0, 100.0), &config(), WIDE), Some(p.id));
}

#[test]
fn player_slack_extends_past_drawn_radius() {
    let p = player(100.0, 100.0);
    let scene = scene_of(std::slice::from_ref(&p));
    // Drawn radius 15, catch radius 18.
    assert_eq!(hit_test(&scene, Point::new(117.0, 100.0), &config(), WIDE), Some(p.id));
    assert_eq!(hit_test(&scene, Point::new(118.5, 100.0), &config(), WIDE), None);
}

#[test]
fn boundary_is_exclusive() {
    let p = player(0.0, 0.0);
    let mut c = config();
    c.player_radius = 10.0;
    // Catch radius 12 exactly on the boundary.
    assert!(!contains(&p, Point::new(12.0, 0.0), &c, 60.0));
    assert!(contains(&p, Point::new(11.999, 0.0), &c, 60.0));
}

// =============================================================
// Arrows
// =============================================================

#[test]
fn arrow_catch_radius_scales_with_length() {
    let a = Element::arrow(0.0, 0.0, 0.0, ArrowStyle::Straight, 180.0);
    // radius = 180 / 1.8 = 100
    assert!(contains(&a, Point::new(99.0, 0.0), &config(), 60.0));
    assert!(!contains(&a, Point::new(101.0, 0.0), &config(), 60.0));
}

#[test]
fn short_arrow_uses_default_length_floor() {
    let a = Element::arrow(0.0, 0.0, 0.0, ArrowStyle::Dashed, 20.0);
    // radius = max(20, 60) / 1.8 ≈ 33.3
    assert!(contains(&a, Point::new(0.0, 33.0), &config(), 60.0));
    assert!(!contains(&a, Point::new(0.0, 34.0), &config(), 60.0));
}

#[test]
fn narrow_surface_shrinks_short_arrow_floor() {
    let a = Element::arrow(0.0, 0.0, 0.0, ArrowStyle::Straight, 10.0);
    let scene = scene_of(std::slice::from_ref(&a));
    // 200 px wide: floor 20, radius ≈ 11.1.
    assert_eq!(hit_test(&scene, Point::new(0.0, 11.0), &config(), 200.0), Some(a.id));
    assert_eq!(hit_test(&scene, Point::new(0.0, 12.0), &config(), 200.0), None);
    assert_eq!(hit_test(&scene, Point::new(0.0, 12.0), &config(), WIDE), Some(a.id));
}

#[test]
fn long_arrow_ignores_surface_width() {
    let a = Element::arrow(0.0, 0.0, 0.0, ArrowStyle::Straight, 180.0);
    let scene = scene_of(std::slice::from_ref(&a));
    assert_eq!(hit_test(&scene, Point::new(99.0, 0.0), &config(), 200.0), Some(a.id));
}

#[test]
fn rotated_arrow_is_tested_in_local_frame() {
    let a = Element::arrow(50.0, 50.0, FRAC_PI_2, ArrowStyle::Straight, 180.0);
    let scene = scene_of(std::slice::from_ref(&a));
    assert_eq!(hit_test(&scene, Point::new(50.0, 140.0), &config(), WIDE), Some(a.id));
    assert_eq!(hit_test(&scene, Point::new(50.0, 160.0), &config(), WIDE), None);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn topmost_wins_on_overlap() {
    let below = player(100.0, 100.0);
    let above = player(105.0, 100.0);
    let scene = scene_of(&[below.clone(), above.clone()]);
    assert_eq!(hit_test(&scene, Point::new(102.0, 100.0), &config(), WIDE), Some(above.id));
}

#[test]
fn lower_element_hit_where_upper_misses() {
    let below = player(100.0, 100.0);
    let above = player(130.0, 100.0);
    let scene = scene_of(&[below.clone(), above]);
    assert_eq!(hit_test(&scene, Point::new(88.0, 100.0), &config(), WIDE), Some(below.id));
}
