use super::Vector3;

/// Axis-aligned bounding box.
///
/// `min <= max` holds on every axis. Boxes are derived on demand from an
/// entity's transform and never stored across frames. Rotated boxes are not
/// supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3,
    pub max: Vector3,
}

impl Aabb {
    pub fn new(min: Vector3, max: Vector3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// Box of the given half extents centered on `center`.
    pub fn from_center_half_extents(center: Vector3, half_extents: Vector3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max).scaled(0.5)
    }

    /// True iff the intervals overlap on all three axes simultaneously.
    ///
    /// Separating-interval test: one strictly disjoint axis is enough to
    /// reject. Symmetric in its arguments.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.min.x > other.max.x || self.max.x < other.min.x {
            return false;
        }
        if self.min.y > other.max.y || self.max.y < other.min.y {
            return false;
        }
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}
