/// Axis-aligned bounding box sized for hardware vector registers.
///
/// Each corner is a `Vec3A`: three spatial lanes in one 16-byte register,
/// with the fourth lane unused. Corner-vs-corner comparisons therefore run
/// lane-parallel, and the boolean reductions (`BVec3A::any`) only ever
/// consider the three spatial lanes.

use glam::{Vec3, Vec3A};
use crate::error::{Error, Result};

// ===== AABB =====

/// Axis-Aligned Bounding Box in world space
///
/// Invariant: `min[axis] <= max[axis]` on every axis. Enforced at
/// construction; both constructors reject malformed input instead of
/// letting an inverted box into the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    min: Vec3A,
    /// Maximum corner (x, y, z)
    max: Vec3A,
}

impl Aabb {
    /// Build an AABB centered at `center` with per-axis half-extents.
    ///
    /// Corners are `center - extents` and `center + extents`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidExtents` if any extent component is negative.
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Result<Self> {
        if extents.cmplt(Vec3::ZERO).any() {
            return Err(Error::InvalidExtents(format!(
                "negative extents {}",
                extents
            )));
        }
        let center = Vec3A::from(center);
        let extents = Vec3A::from(extents);
        Ok(Self {
            min: center - extents,
            max: center + extents,
        })
    }

    /// Build an AABB from explicit corners.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidExtents` if `min` exceeds `max` on any axis.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Result<Self> {
        if min.cmpgt(max).any() {
            return Err(Error::InvalidExtents(format!(
                "min corner {} exceeds max corner {}",
                min, max
            )));
        }
        Ok(Self {
            min: Vec3A::from(min),
            max: Vec3A::from(max),
        })
    }

    // ===== ACCESSORS =====

    /// Minimum corner
    pub fn min(&self) -> Vec3A {
        self.min
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3A {
        self.max
    }

    /// Center point of the box
    pub fn center(&self) -> Vec3A {
        (self.min + self.max) * 0.5
    }

    /// Per-axis half-extents of the box
    pub fn extents(&self) -> Vec3A {
        (self.max - self.min) * 0.5
    }

    // ===== PREDICATES =====

    /// Test if this AABB intersects (overlaps) another AABB.
    ///
    /// Vectorized path: both separation tests (`max < other.min`,
    /// `min > other.max`) evaluate every axis at once in the corner
    /// registers; the pair intersects iff no spatial lane reports
    /// separation. Touching faces count as intersecting - the lane
    /// comparisons are strict, so boundary equality is not separation.
    ///
    /// `intersects_scalar` is the per-axis reference implementation;
    /// both must agree on every valid input.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let below = self.max.cmplt(other.min);
        let above = self.min.cmpgt(other.max);
        !(below | above).any()
    }

    /// Scalar reference implementation of `intersects`.
    ///
    /// The direct per-axis loop with ordinary float comparisons.
    pub fn intersects_scalar(&self, other: &Aabb) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        for axis in 0..3 {
            if a_max[axis] < b_min[axis] || a_min[axis] > b_max[axis] {
                return false;
            }
        }
        true
    }

    /// Test if this AABB fully contains another AABB.
    ///
    /// Returns `true` if `other` is entirely within `self`, shared faces
    /// allowed. Same lane-parallel scheme as `intersects`, with the
    /// comparisons reversed: containment fails iff some lane has
    /// `self.min > other.min` or `self.max < other.max`.
    ///
    /// `contains(a, b)` implies `intersects(a, b)`.
    pub fn contains(&self, other: &Aabb) -> bool {
        let below = self.min.cmpgt(other.min);
        let above = self.max.cmplt(other.max);
        !(below | above).any()
    }

    /// Scalar reference implementation of `contains`.
    pub fn contains_scalar(&self, other: &Aabb) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        for axis in 0..3 {
            if a_min[axis] > b_min[axis] || a_max[axis] < b_max[axis] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
