//! Common interface for platform surface producers.

use anyhow::Result;
use gl::types::GLuint;
use texture_core::TransformMatrix;

/// Operations on a platform-owned image surface (camera, video decoder).
///
/// The facade is shared and stateless with respect to any one surface; the
/// surface itself is passed in on every call. Implementations typically
/// forward to the platform's surface-texture API.
///
/// All calls are synchronous and happen on the thread that owns the GL
/// context the surface is attached to.
pub trait SurfaceFacade {
    /// The platform surface object this facade operates on.
    type Surface;

    /// Bind the surface to `texture_name` in the current GL context.
    fn attach_to_gl_context(&self, surface: &Self::Surface, texture_name: GLuint) -> Result<()>;

    /// Unbind the surface from the GL context it is attached to.
    fn detach_from_gl_context(&self, surface: &Self::Surface) -> Result<()>;

    /// Latch the most recent frame into the attached texture.
    fn update_tex_image(&self, surface: &Self::Surface) -> Result<()>;

    /// Texture-coordinate transform for the latched frame.
    ///
    /// Maps the engine's unit square into the surface's texture
    /// coordinates; producers reporting a 4x4 GL matrix can use
    /// [`TransformMatrix::from_gl_4x4`].
    fn transform_matrix(&self, surface: &Self::Surface) -> Result<TransformMatrix>;
}
