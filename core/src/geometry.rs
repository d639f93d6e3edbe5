//! Geometry value types.
//!
//! Only what the document interface needs: points for placement
//! locations, vectors for orientations, and a placement transform that
//! exposes its rotation about the local up axis. Real geometry math
//! belongs to the host environment, not this crate.

use std::f64::consts::PI;

/// A point in document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Create a point from coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The document origin.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// A direction in document space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Create a vector from components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The document's vertical axis.
    pub fn up() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Placement transform of a component.
///
/// Decomposed form: an origin, a local up axis, and a yaw angle in
/// radians about that axis. Tilt relative to the document vertical is
/// carried entirely by `up`, so a yaw-only rotation preserves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Anchor of the transform.
    pub origin: Point,
    /// Local up basis vector.
    pub up: Vector,
    /// Rotation about `up`, in radians, normalized into `(-π, π]`.
    pub yaw: f64,
}

impl Transform {
    /// An unrotated, untilted transform anchored at `origin`.
    pub fn identity_at(origin: Point) -> Self {
        Self {
            origin,
            up: Vector::up(),
            yaw: 0.0,
        }
    }

    /// Facing direction: the reference facing (+Y) swung by `yaw` about
    /// the vertical. Tilt is ignored here; callers that need the exact
    /// tilted facing reconstruct it from `up` in the host environment.
    pub fn facing(&self) -> Vector {
        Vector::new(-self.yaw.sin(), self.yaw.cos(), 0.0)
    }
}

/// Normalize an angle in radians into `(-π, π]`.
///
/// Matches axis-angle extraction semantics: two angles describing the
/// same orientation normalize to the same value, so their delta is zero
/// rather than a full turn.
pub fn wrap_angle(radians: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let mut a = radians % two_pi;
    if a <= -PI {
        a += two_pi;
    } else if a > PI {
        a -= two_pi;
    }
    a
}
