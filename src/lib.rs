pub mod cli;
pub mod entity;
pub mod frame;
pub mod input;
pub mod math;
pub mod motion;
pub mod scene;
pub mod traits;
pub mod transform;

pub use entity::{Entity, Role};
pub use frame::{FrameClock, FrameContext};
pub use input::{InputSnapshot, Key};
pub use math::{Aabb, MathError, Matrix4, Vector2, Vector3};
pub use scene::{Projection, Scene, SceneDescription};
pub use transform::Transform;
