use super::MathError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 3-component vector with value semantics.
///
/// All binary operators produce new values; nothing here aliases a caller's
/// vector. Exact equality is `PartialEq`, tolerant comparison is
/// [`Vector3::approx_eq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// All three components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::OutOfRange { index }),
        }
    }

    /// Set a component by axis index (0 = x, 1 = y, 2 = z).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(MathError::OutOfRange { index }),
        }
        Ok(())
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm.
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Uniform scale, producing a new vector.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails on a zero-length vector instead of propagating IEEE infinities.
    pub fn normalized(self) -> Result<Self, MathError> {
        let len = self.length();
        if len == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self / Self::splat(len))
    }

    /// Normalize, then scale to the given length.
    pub fn normalized_to(self, length: f32) -> Result<Self, MathError> {
        Ok(self.normalized()?.scaled(length))
    }

    /// Component-wise comparison with absolute tolerance `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Component-wise product.
impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

/// Component-wise quotient.
impl Div for Vector3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scaled(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A 2-component vector, used for cursor positions and screen-space deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_arithmetic() {
        let u = Vector3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(u + v, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(v - u, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(u * v, Vector3::new(4.0, 10.0, 18.0));
        assert_eq!(v / Vector3::new(2.0, 5.0, 3.0), Vector3::new(2.0, 1.0, 2.0));
    }

    #[test]
    fn test_dot_and_length() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vector3::new(0.0, 0.0, 10.0).normalized().unwrap();
        assert!(v.approx_eq(Vector3::Z, 1e-6));
    }

    #[test]
    fn test_normalized_zero_vector_fails() {
        let err = Vector3::ZERO.normalized().unwrap_err();
        assert_eq!(err, MathError::DegenerateVector);
    }

    #[test]
    fn test_normalized_to_length() {
        let v = Vector3::new(0.0, 2.0, 0.0).normalized_to(3.0).unwrap();
        assert!(v.approx_eq(Vector3::new(0.0, 3.0, 0.0), 1e-6));
    }

    #[test]
    fn test_indexed_access() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(0).unwrap(), 1.0);
        assert_eq!(v.get(2).unwrap(), 3.0);
        v.set(1, 9.0).unwrap();
        assert_eq!(v.y, 9.0);
    }

    #[test]
    fn test_indexed_access_out_of_range() {
        let mut v = Vector3::ZERO;
        assert_eq!(v.get(3).unwrap_err(), MathError::OutOfRange { index: 3 });
        assert_eq!(v.set(7, 1.0).unwrap_err(), MathError::OutOfRange { index: 7 });
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let u = Vector3::new(1.0, 1.0, 1.0);
        let v = Vector3::new(1.0 + 1e-6, 1.0 - 1e-6, 1.0);
        assert!(u.approx_eq(v, 1e-5));
        assert!(!u.approx_eq(v + Vector3::X, 1e-5));
    }

    #[test]
    fn test_vector2_delta() {
        let prev = Vector2::new(100.0, 50.0);
        let cur = Vector2::new(103.0, 48.0);
        assert_eq!(cur - prev, Vector2::new(3.0, -2.0));
    }
}
