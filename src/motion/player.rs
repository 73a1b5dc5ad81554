//! Walking-entity controller: camera-relative movement with per-axis
//! collision rejection against the frame's obstacle set.

use crate::input::{InputSnapshot, Key};
use crate::math::{Aabb, Vector3};
use crate::transform::Transform;

pub const MOVE_SPEED: f32 = 0.1;
pub const RUN_MULTIPLIER: f32 = 2.0;

/// Advance the walking entity one frame.
///
/// `horizontal_angle` is the viewer's yaw in degrees; the forward basis
/// vector `(0, 0, -speed)` is rotated by it so movement stays
/// camera-relative. The run key doubles the speed, including vertical
/// motion. Key contributions are additive with no re-normalization, same as
/// the free-fly camera.
///
/// Whatever displacement survives [`resolve_collisions`] is committed
/// unconditionally.
pub fn update(
    transform: &mut Transform,
    input: &InputSnapshot,
    horizontal_angle: f32,
    obstacles: &[Aabb],
) {
    let mut speed = MOVE_SPEED;
    if input.is_down(Key::Control) {
        speed *= RUN_MULTIPLIER;
    }

    // rotate the forward vector (0, 0, -speed) about the y axis by the
    // camera's horizontal angle
    let forward = Vector3::new(0.0, 0.0, -speed);
    let theta = horizontal_angle.to_radians();
    let dx = forward.x * theta.cos() - forward.z * theta.sin();
    let dz = forward.x * theta.sin() + forward.z * theta.cos();

    let mut delta = Vector3::ZERO;
    if input.is_down(Key::W) {
        delta = delta + Vector3::new(dx, 0.0, dz);
    }
    if input.is_down(Key::S) {
        delta = delta + Vector3::new(-dx, 0.0, -dz);
    }
    if input.is_down(Key::A) {
        delta = delta + Vector3::new(dz, 0.0, -dx);
    }
    if input.is_down(Key::D) {
        delta = delta + Vector3::new(-dz, 0.0, dx);
    }
    if input.is_down(Key::Space) {
        delta = delta + Vector3::new(0.0, speed, 0.0);
    }
    if input.is_down(Key::Shift) {
        delta = delta + Vector3::new(0.0, -speed, 0.0);
    }

    let resolved = resolve_collisions(transform, delta, obstacles);
    transform.position = transform.position + resolved;
}

/// Per-axis rejection of a candidate displacement.
///
/// Three candidate boxes are built, each displacing the entity's box along a
/// single axis while the other two keep their current intervals. Any
/// candidate that overlaps any obstacle zeroes that axis's displacement
/// component, so motion can still slide along the unblocked axes.
///
/// This is a discrete test, not a swept one: a displacement larger than an
/// obstacle's thickness can tunnel straight through it in one frame.
pub fn resolve_collisions(transform: &Transform, delta: Vector3, obstacles: &[Aabb]) -> Vector3 {
    let half = transform.scale.scaled(0.5);
    let cur_min = transform.position - half;
    let cur_max = transform.position + half;

    let new_pos = transform.position + delta;
    let new_min = new_pos - half;
    let new_max = new_pos + half;

    let candidate_x = Aabb::new(
        Vector3::new(new_min.x, cur_min.y, cur_min.z),
        Vector3::new(new_max.x, cur_max.y, cur_max.z),
    );
    let candidate_y = Aabb::new(
        Vector3::new(cur_min.x, new_min.y, cur_min.z),
        Vector3::new(cur_max.x, new_max.y, cur_max.z),
    );
    let candidate_z = Aabb::new(
        Vector3::new(cur_min.x, cur_min.y, new_min.z),
        Vector3::new(cur_max.x, cur_max.y, new_max.z),
    );

    let mut resolved = delta;
    for obstacle in obstacles {
        if candidate_x.intersects(obstacle) {
            resolved.x = 0.0;
        }
        if candidate_y.intersects(obstacle) {
            resolved.y = 0.0;
        }
        if candidate_z.intersects(obstacle) {
            resolved.z = 0.0;
        }
    }
    resolved
}
