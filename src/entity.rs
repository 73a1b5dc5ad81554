use crate::math::Aabb;
use crate::transform::Transform;
use serde::{Deserialize, Serialize};

/// What part an entity plays in the scene. Behavior lives in the motion
/// controllers; the scene dispatches on this tag instead of a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Scenery; candidate obstacle if collidable.
    Static,
    /// The free-fly viewpoint.
    Viewer,
    /// The walking, collidable entity driven by camera-relative input.
    Player,
}

/// A flat scene entity: one transform, a role tag, a collidable flag.
/// No parent/child inheritance; entities are independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    transform: Transform,
    role: Role,
    collidable: bool,
}

impl Entity {
    pub const fn new(transform: Transform, role: Role, collidable: bool) -> Self {
        Self {
            transform,
            role,
            collidable,
        }
    }

    /// Collidable scenery at the given placement.
    pub const fn obstacle(transform: Transform) -> Self {
        Self::new(transform, Role::Static, true)
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub const fn is_collidable(&self) -> bool {
        self.collidable
    }

    /// Copy of the current placement.
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Mutable access for the motion controllers and direct setters.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Current-frame collision box, if this entity participates in collision.
    /// Recomputed on every call; never stored.
    pub fn hitbox(&self) -> Option<Aabb> {
        self.collidable.then(|| self.transform.bounding_box())
    }
}
