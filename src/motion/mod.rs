mod camera;
pub mod player;

pub use camera::{Camera, MOUSE_SENSITIVITY, MOVE_SPEED};
