//! 3D positions in the building-local frame.

use std::ops::{Add, Sub};

/// A point (or displacement) in meters.
///
/// The building frame is Y-up: `x` and `z` span the floor plane and `y` is
/// height. Turn geometry only looks at the X-Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Vector3) -> f64 {
        (*other - *self).length()
    }

    /// Z component of the cross product of the X-Z projections.
    ///
    /// Positive when `other` lies counter-clockwise of `self` seen from above
    /// (with the frame's handedness), negative when clockwise.
    pub fn cross_xz(&self, other: &Vector3) -> f64 {
        self.x * other.z - self.z * other.x
    }

    /// Returns true if all components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
