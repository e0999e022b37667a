//! Conversion from producer texture coordinates to the canvas unit square.

use texture_core::TransformMatrix;

/// Shader-local matrix for a producer-reported transform.
///
/// The reported matrix is inverted first, undoing the producer's texture
/// coordinate convention, and then flipped vertically (scale y by -1, then
/// translate y by -1) into the top-left-origin convention of the canvas.
///
/// Returns `None` when `reported` is not invertible.
pub fn canvas_transform(reported: &TransformMatrix) -> Option<TransformMatrix> {
    let mut transform = reported.invert()?;
    transform.pre_scale(1.0, -1.0).post_translate(0.0, -1.0);
    Some(transform)
}
