use crate::math::{Aabb, Matrix4, Vector3};
use serde::{Deserialize, Serialize};

/// Placement of an entity: position, Euler rotation in degrees (intrinsic
/// X, Y, Z), and per-axis scale.
///
/// `Transform` is `Copy`; getters elsewhere hand out copies, so callers can
/// never mutate an entity's live placement through a borrowed vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Transform {
    /// Origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vector3::ZERO,
        rotation: Vector3::ZERO,
        scale: Vector3::ONE,
    };

    pub const fn new(position: Vector3, rotation: Vector3, scale: Vector3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub const fn from_position(position: Vector3) -> Self {
        Self {
            position,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }

    /// Model matrix for this placement; recomputed every frame, never cached.
    pub fn model_matrix(&self) -> Matrix4 {
        Matrix4::transform(self.position, self.rotation, self.scale)
    }

    /// Axis-aligned box covering this placement: center = position,
    /// half extents = scale / 2. Rotation is ignored (boxes stay axis-aligned).
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, self.scale.scaled(0.5))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
