use crate::math::Matrix4;

/// Consumer of finished matrices, one call per drawable entity per frame.
///
/// The backend owns everything downstream of the matrices (binding, draw
/// submission); the core owns nothing past this seam. Matrices are in the
/// crate-wide storage convention of [`Matrix4`].
pub trait RenderBackend {
    fn draw(&mut self, model: &Matrix4, view: &Matrix4, projection: &Matrix4);
}
