#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

// =============================================================
// Point
// =============================================================

#[test]
fn distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn midpoint_halves_both_axes() {
    assert_eq!(Point::new(50.0, 50.0).midpoint(Point::new(150.0, 70.0)), Point::new(100.0, 60.0));
}

#[test]
fn angle_to_along_positive_x_is_zero() {
    assert_eq!(Point::new(50.0, 50.0).angle_to(Point::new(150.0, 50.0)), 0.0);
}

#[test]
fn angle_to_downward_is_half_pi() {
    // y grows downward on the surface.
    let a = Point::new(0.0, 0.0).angle_to(Point::new(0.0, 10.0));
    assert!((a - FRAC_PI_2).abs() < 1e-12);
}

// =============================================================
// world_to_local / local_to_world
// =============================================================

#[test]
fn world_to_local_without_rotation_is_offset() {
    let local = world_to_local(Point::new(110.0, 95.0), Point::new(100.0, 100.0), 0.0);
    assert!(approx(local, Point::new(10.0, -5.0)));
}

#[test]
fn world_to_local_undoes_rotation() {
    // A point straight below a pivot rotated by 90° lies on the local +x axis.
    let local = world_to_local(Point::new(100.0, 120.0), Point::new(100.0, 100.0), FRAC_PI_2);
    assert!(approx(local, Point::new(20.0, 0.0)));
}

#[test]
fn local_to_world_inverts_world_to_local() {
    let pivot = Point::new(-7.5, 42.0);
    let world = Point::new(13.0, 3.25);
    for rotation in [0.0, 0.3, PI, -2.0, 17.0] {
        let back = local_to_world(world_to_local(world, pivot, rotation), pivot, rotation);
        assert!(approx(back, world), "rotation {rotation}");
    }
}

#[test]
fn local_frame_preserves_distance() {
    let pivot = Point::new(10.0, 10.0);
    let world = Point::new(40.0, 50.0);
    let local = world_to_local(world, pivot, 1.234);
    assert!((local.length_squared() - (pivot - world).length_squared()).abs() < 1e-9);
}
