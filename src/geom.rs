//! Plane geometry shared by picking, drafting and rendering.
//!
//! Surface coordinates put the origin at the top-left with y pointing down.
//! An element's local frame is centered on its pivot and rotated by the
//! element's `rotation`. Picking maps surface points into that frame through
//! [`world_to_local`].

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in surface-local or element-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance from the origin.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length_squared().sqrt()
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Angle in radians of the vector from `self` to `other`, as `atan2(dy, dx)`.
    #[must_use]
    pub fn angle_to(self, other: Point) -> f64 {
        let d = other - self;
        d.y.atan2(d.x)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Express `point` in the local frame of an element pivoted at `pivot` and
/// rotated by `rotation` radians. The result is an offset from the pivot.
#[must_use]
pub fn world_to_local(point: Point, pivot: Point, rotation: f64) -> Point {
    rotate(point - pivot, -rotation)
}

/// Inverse of [`world_to_local`]: map a local offset back to surface space.
#[cfg(test)]
#[must_use]
pub fn local_to_world(local: Point, pivot: Point, rotation: f64) -> Point {
    rotate(local, rotation) + pivot
}

fn rotate(p: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y)
}
