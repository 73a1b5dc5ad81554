mod aabb;
mod error;
mod matrix;
mod vector;

pub use aabb::Aabb;
pub use error::MathError;
pub use matrix::Matrix4;
pub use vector::{Vector2, Vector3};
