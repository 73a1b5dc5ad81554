use super::Vector3;
use std::ops::Mul;

/// A 4×4 homogeneous transform matrix.
///
/// The storage convention is fixed for the whole crate: the element at
/// (column `c`, row `r`) lives at linear index `r * 4 + c`, and `get`/`set`
/// take (column, row) in that order. Every composition function below honors
/// this convention; swapping it changes the meaning of every matrix the
/// renderer receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    elements: [f32; 16],
}

impl Matrix4 {
    pub const SIZE: usize = 4;

    /// All-zero matrix.
    pub const fn zero() -> Self {
        Self {
            elements: [0.0; 16],
        }
    }

    pub fn identity() -> Self {
        let mut result = Self::zero();
        for i in 0..Self::SIZE {
            result.elements[i * Self::SIZE + i] = 1.0;
        }
        result
    }

    /// Element at (column, row).
    pub fn get(&self, column: usize, row: usize) -> f32 {
        debug_assert!(column < Self::SIZE && row < Self::SIZE);
        self.elements[row * Self::SIZE + column]
    }

    /// Set the element at (column, row).
    pub fn set(&mut self, column: usize, row: usize, value: f32) {
        debug_assert!(column < Self::SIZE && row < Self::SIZE);
        self.elements[row * Self::SIZE + column] = value;
    }

    /// Raw elements in storage order, for handoff to a rendering backend.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.elements
    }

    /// Identity with the translation column set to `v`.
    pub fn translate(v: Vector3) -> Self {
        let mut result = Self::identity();
        result.set(3, 0, v.x);
        result.set(3, 1, v.y);
        result.set(3, 2, v.z);
        result
    }

    /// Proper rotation of `angle` degrees about an arbitrary axis (Rodrigues).
    ///
    /// `axis` is assumed to be unit length; callers normalize first.
    pub fn rotate(angle: f32, axis: Vector3) -> Self {
        let mut result = Self::identity();

        let cos = angle.to_radians().cos();
        let sin = angle.to_radians().sin();
        let c = 1.0 - cos;

        let (ux, uy, uz) = (axis.x, axis.y, axis.z);

        result.set(0, 0, cos + ux * ux * c);
        result.set(0, 1, ux * uy * c - uz * sin);
        result.set(0, 2, ux * uz * c + uy * sin);

        result.set(1, 0, uy * ux * c + uz * sin);
        result.set(1, 1, cos + uy * uy * c);
        result.set(1, 2, uy * uz * c - ux * sin);

        result.set(2, 0, uz * ux * c - uy * sin);
        result.set(2, 1, uz * uy * c + ux * sin);
        result.set(2, 2, cos + uz * uz * c);

        result
    }

    /// Identity with the diagonal replaced by `v`'s components.
    pub fn scale(v: Vector3) -> Self {
        let mut result = Self::identity();
        result.set(0, 0, v.x);
        result.set(1, 1, v.y);
        result.set(2, 2, v.z);
        result
    }

    /// Matrix product under the fixed storage convention.
    ///
    /// Not commutative; argument order encodes composition order and matches
    /// the nesting used by [`Matrix4::transform`] and [`Matrix4::view`].
    pub fn multiply(a: Self, b: Self) -> Self {
        let mut result = Self::zero();
        for column in 0..Self::SIZE {
            for row in 0..Self::SIZE {
                let mut sum = 0.0;
                for k in 0..Self::SIZE {
                    sum += a.get(column, k) * b.get(k, row);
                }
                result.set(column, row, sum);
            }
        }
        result
    }

    /// Full model matrix: `translate * (rotX * (rotY * rotZ)) * scale`.
    ///
    /// `rotation` holds intrinsic Euler angles in degrees, combined
    /// right-to-left X, Y, Z. The nesting is a fixed convention; reordering
    /// it changes the result for any non-uniform combination of angles.
    pub fn transform(position: Vector3, rotation: Vector3, scale: Vector3) -> Self {
        let translation = Self::translate(position);

        let rot_x = Self::rotate(rotation.x, Vector3::X);
        let rot_y = Self::rotate(rotation.y, Vector3::Y);
        let rot_z = Self::rotate(rotation.z, Vector3::Z);
        let rotation = Self::multiply(rot_x, Self::multiply(rot_y, rot_z));

        let scale = Self::scale(scale);

        Self::multiply(translation, Self::multiply(rotation, scale))
    }

    /// Perspective projection from a vertical field of view in degrees.
    ///
    /// Right-handed, negative-Z-forward clip space: `(2,3) = -1`,
    /// `(3,3) = 0`.
    pub fn projection(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut result = Self::identity();

        let tan_half_fov = (fov / 2.0).to_radians().tan();
        let range = far - near;

        result.set(0, 0, 1.0 / (aspect * tan_half_fov));
        result.set(1, 1, 1.0 / tan_half_fov);
        result.set(2, 2, -((far + near) / range));
        result.set(2, 3, -1.0);
        result.set(3, 2, -((2.0 * far * near) / range));
        result.set(3, 3, 0.0);

        result
    }

    /// View matrix for a viewer at `position` with Euler `rotation` degrees:
    /// the inverse of the viewer's world placement,
    /// `translate(-position) * (rotX * (rotY * rotZ))`.
    pub fn view(position: Vector3, rotation: Vector3) -> Self {
        let translation = Self::translate(-position);

        let rot_x = Self::rotate(rotation.x, Vector3::X);
        let rot_y = Self::rotate(rotation.y, Vector3::Y);
        let rot_z = Self::rotate(rotation.z, Vector3::Z);
        let rotation = Self::multiply(rot_x, Self::multiply(rot_y, rot_z));

        Self::multiply(translation, rotation)
    }

    /// Element-wise comparison with absolute tolerance `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::multiply(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_identity_diagonal() {
        let m = Matrix4::identity();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_storage_convention() {
        let mut m = Matrix4::zero();
        m.set(3, 0, 7.0);
        // (column 3, row 0) lives at linear index 0 * 4 + 3
        assert_eq!(m.as_array()[3], 7.0);
        assert_eq!(m.get(3, 0), 7.0);
    }

    #[test]
    fn test_translate_column() {
        let m = Matrix4::translate(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.get(3, 0), 1.0);
        assert_eq!(m.get(3, 1), 2.0);
        assert_eq!(m.get(3, 2), 3.0);
        assert_eq!(m.get(3, 3), 1.0);
    }

    #[test]
    fn test_identity_is_multiplicative_neutral() {
        let m = Matrix4::transform(
            Vector3::new(1.0, -2.0, 3.0),
            Vector3::new(30.0, 45.0, 60.0),
            Vector3::new(2.0, 1.0, 0.5),
        );
        assert_eq!(Matrix4::multiply(Matrix4::identity(), m), m);
        assert_eq!(Matrix4::multiply(m, Matrix4::identity()), m);
    }

    #[test]
    fn test_full_turn_is_identity() {
        for &axis in &[Vector3::X, Vector3::Y, Vector3::Z] {
            for &angle in &[360.0, 720.0, -360.0] {
                let m = Matrix4::rotate(angle, axis);
                assert!(
                    m.approx_eq(&Matrix4::identity(), EPS),
                    "rotate({}, {:?}) should be identity",
                    angle,
                    axis
                );
            }
        }
    }

    #[test]
    fn test_translations_compose_additively() {
        let t1 = Vector3::new(1.0, 2.0, 3.0);
        let t2 = Vector3::new(-4.0, 0.5, 2.0);
        let composed = Matrix4::translate(t1) * Matrix4::translate(t2);
        assert!(composed.approx_eq(&Matrix4::translate(t1 + t2), EPS));
    }

    #[test]
    fn test_rotation_order_is_not_commutative() {
        let rx = Matrix4::rotate(90.0, Vector3::X);
        let ry = Matrix4::rotate(90.0, Vector3::Y);
        assert!(!Matrix4::multiply(rx, ry).approx_eq(&Matrix4::multiply(ry, rx), EPS));
    }

    #[test]
    fn test_projection_reference_entries() {
        let p = Matrix4::projection(90.0, 1.0, 0.1, 100.0);
        assert!((p.get(0, 0) - 1.0).abs() < 1e-4);
        assert!((p.get(1, 1) - 1.0).abs() < 1e-4);
        assert_eq!(p.get(2, 3), -1.0);
        assert_eq!(p.get(3, 3), 0.0);
    }

    #[test]
    fn test_view_translates_world_opposite_the_viewer() {
        let v = Matrix4::view(Vector3::new(0.0, 0.0, 5.0), Vector3::ZERO);
        // with no rotation the view matrix is a pure translation by -position,
        // so the world origin lands at eye-space z = -5
        assert!(v.approx_eq(&Matrix4::translate(Vector3::new(0.0, 0.0, -5.0)), EPS));
        assert_eq!(v.get(3, 2), -5.0);
    }

    #[test]
    fn test_transform_with_identity_parts_is_translation() {
        let pos = Vector3::new(3.0, 4.0, 5.0);
        let m = Matrix4::transform(pos, Vector3::ZERO, Vector3::ONE);
        assert!(m.approx_eq(&Matrix4::translate(pos), EPS));
    }

    #[test]
    fn test_scale_diagonal() {
        let m = Matrix4::scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.get(0, 0), 2.0);
        assert_eq!(m.get(1, 1), 3.0);
        assert_eq!(m.get(2, 2), 4.0);
        assert_eq!(m.get(3, 3), 1.0);
    }
}
