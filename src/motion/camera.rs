use crate::input::{InputSnapshot, Key};
use crate::math::{Matrix4, Vector2, Vector3};
use crate::transform::Transform;

pub const MOVE_SPEED: f32 = 0.05;
pub const MOUSE_SENSITIVITY: f32 = 0.1;

/// Free-fly viewer controller.
///
/// Per frame it reads the input snapshot and advances a viewer transform:
/// the six directional keys move along a basis derived from the current yaw,
/// and cursor motion since the previous frame turns into pitch/yaw rotation.
/// The only state the controller itself keeps is the previous cursor
/// position, needed to compute that delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    prev_cursor: Vector2,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the viewer one frame.
    ///
    /// Key contributions are independent and additive: holding two movement
    /// keys at once moves faster along the diagonal than a single key would.
    /// That asymmetry is the designed behavior, not an oversight. Pitch is
    /// not clamped; rotating past ±90° inverts the view.
    pub fn update(&mut self, transform: &mut Transform, input: &InputSnapshot) {
        let cursor = input.cursor();

        let yaw = transform.rotation.y.to_radians();
        let x = yaw.sin() * MOVE_SPEED;
        let z = yaw.cos() * MOVE_SPEED;

        if input.is_down(Key::A) {
            transform.position = transform.position + Vector3::new(-z, 0.0, x);
        }
        if input.is_down(Key::D) {
            transform.position = transform.position + Vector3::new(z, 0.0, -x);
        }
        if input.is_down(Key::W) {
            transform.position = transform.position + Vector3::new(-x, 0.0, -z);
        }
        if input.is_down(Key::S) {
            transform.position = transform.position + Vector3::new(x, 0.0, z);
        }

        if input.is_down(Key::Space) {
            transform.position = transform.position + Vector3::new(0.0, MOVE_SPEED, 0.0);
        }
        if input.is_down(Key::Shift) {
            transform.position = transform.position + Vector3::new(0.0, -MOVE_SPEED, 0.0);
        }

        // screen-space cursor motion maps to an inverted look direction,
        // with dx driving yaw and dy driving pitch
        let delta = cursor - self.prev_cursor;
        self.prev_cursor = cursor;

        transform.rotation = transform.rotation
            + Vector3::new(-delta.y * MOUSE_SENSITIVITY, -delta.x * MOUSE_SENSITIVITY, 0.0);
    }

    /// Yaw in degrees, used to make player movement camera-relative.
    pub fn horizontal_angle(transform: &Transform) -> f32 {
        transform.rotation.y
    }

    /// View matrix for the given viewer pose.
    pub fn view_matrix(transform: &Transform) -> Matrix4 {
        Matrix4::view(transform.position, transform.rotation)
    }
}
