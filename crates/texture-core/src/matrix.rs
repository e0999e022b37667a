//! 3x3 projective transform used for canvas and shader coordinates.
//!
//! Elements are addressed in row-major order, matching the way surface
//! producers and the canvas describe matrices:
//!
//! ```text
//! | scale_x  skew_x   trans_x |
//! | skew_y   scale_y  trans_y |
//! | persp_0  persp_1  persp_2 |
//! ```
//!
//! Points are column vectors, so `a.pre_concat(b)` maps through `b` first.

use glam::{Mat3, Vec2, Vec3};

/// Determinants at or below this magnitude are treated as singular.
const NEARLY_ZERO_DET: f32 = (1.0 / 4096.0) * (1.0 / 4096.0) * (1.0 / 4096.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix(Mat3);

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformMatrix {
    pub const IDENTITY: Self = Self(Mat3::IDENTITY);

    /// Build from nine row-major elements.
    pub fn from_row_major(m: [f32; 9]) -> Self {
        Self(Mat3::from_cols_array(&m).transpose())
    }

    /// Build from a 4x4 column-major GL matrix, as reported by platform
    /// surface producers. The z row and column are dropped.
    pub fn from_gl_4x4(m: &[f32; 16]) -> Self {
        Self::from_row_major([
            m[0], m[4], m[12], //
            m[1], m[5], m[13], //
            m[3], m[7], m[15],
        ])
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self(Mat3::from_scale(Vec2::new(sx, sy)))
    }

    pub fn translate(dx: f32, dy: f32) -> Self {
        Self(Mat3::from_translation(Vec2::new(dx, dy)))
    }

    /// Row-major elements.
    pub fn to_row_major(&self) -> [f32; 9] {
        self.0.transpose().to_cols_array()
    }

    /// Exact identity test; a matrix that merely rounds to identity is not
    /// treated as one.
    pub fn is_identity(&self) -> bool {
        self.0 == Mat3::IDENTITY
    }

    /// Inverse of this matrix, or `None` when it is singular or the result
    /// would not be finite.
    pub fn invert(&self) -> Option<Self> {
        let det = self.0.determinant();
        if !det.is_finite() || det.abs() <= NEARLY_ZERO_DET {
            return None;
        }
        let inverse = self.0.inverse();
        inverse.is_finite().then_some(Self(inverse))
    }

    /// `self = self * other`: `other` applies to points first.
    pub fn pre_concat(&mut self, other: &TransformMatrix) -> &mut Self {
        self.0 *= other.0;
        self
    }

    /// `self = other * self`: `other` applies to points last.
    pub fn post_concat(&mut self, other: &TransformMatrix) -> &mut Self {
        self.0 = other.0 * self.0;
        self
    }

    pub fn pre_scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.pre_concat(&Self::scale(sx, sy))
    }

    pub fn pre_translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.pre_concat(&Self::translate(dx, dy))
    }

    pub fn post_translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.post_concat(&Self::translate(dx, dy))
    }

    /// Map a point, applying the perspective divide when needed.
    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        let v = self.0 * Vec3::new(x, y, 1.0);
        if v.z == 1.0 || v.z == 0.0 {
            (v.x, v.y)
        } else {
            (v.x / v.z, v.y / v.z)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_matrix_eq(a: &TransformMatrix, b: &TransformMatrix) {
        for (x, y) in a.to_row_major().iter().zip(b.to_row_major().iter()) {
            assert_relative_eq!(x, y, epsilon = 1e-5);
        }
    }

    #[test]
    fn row_major_round_trip() {
        let elems = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(TransformMatrix::from_row_major(elems).to_row_major(), elems);
    }

    #[test]
    fn translate_is_in_last_column() {
        let t = TransformMatrix::translate(3.0, -2.0);
        assert_eq!(
            t.to_row_major(),
            [1.0, 0.0, 3.0, 0.0, 1.0, -2.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(t.map_point(1.0, 1.0), (4.0, -1.0));
    }

    #[test]
    fn gl_4x4_drops_z() {
        #[rustfmt::skip]
        let gl = [
            2.0, 0.0, 0.0, 0.0,
            0.0, -1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.25, 1.0, 0.0, 1.0,
        ];
        let m = TransformMatrix::from_gl_4x4(&gl);
        assert_eq!(
            m.to_row_major(),
            [2.0, 0.0, 0.25, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn invert_affine() {
        let mut m = TransformMatrix::scale(2.0, 4.0);
        m.post_translate(1.0, 1.0);
        let inv = m.invert().unwrap();
        let mut product = m;
        product.pre_concat(&inv);
        assert_matrix_eq(&product, &TransformMatrix::IDENTITY);
    }

    #[test]
    fn invert_singular_is_none() {
        let m = TransformMatrix::from_row_major([1.0, 2.0, 0.0, 2.0, 4.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(m.invert().is_none());
        assert!(TransformMatrix::scale(0.0, 1.0).invert().is_none());
        let nan = TransformMatrix::from_row_major([f32::NAN, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(nan.invert().is_none());
    }

    #[test]
    fn pre_and_post_ordering() {
        // scale first, then translate
        let mut m = TransformMatrix::IDENTITY;
        m.pre_scale(1.0, -1.0).post_translate(0.0, -1.0);
        assert_eq!(m.map_point(0.0, 0.25), (0.0, -1.25));

        // translate first, then scale
        let mut n = TransformMatrix::scale(2.0, 2.0);
        n.pre_translate(1.0, 0.0);
        assert_eq!(n.map_point(0.0, 0.0), (2.0, 0.0));
    }

    #[test]
    fn identity_detection() {
        assert!(TransformMatrix::default().is_identity());
        assert!(!TransformMatrix::scale(1.0, -1.0).is_identity());
    }

    #[test]
    fn perspective_divide() {
        let m = TransformMatrix::from_row_major([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0]);
        assert_eq!(m.map_point(4.0, 2.0), (2.0, 1.0));
    }
}
