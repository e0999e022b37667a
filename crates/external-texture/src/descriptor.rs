//! How an attached texture name is presented to the GPU context.

use gl::types::{GLenum, GLuint};
use texture_core::{AlphaType, BackendTexture, ColorType, ImageInfo, SurfaceOrigin, TileMode};

/// Wrapping parameters for an external texture.
///
/// The defaults describe a producer-fed `GL_TEXTURE_EXTERNAL_OES` texture of
/// logical size 1x1 (the real size is hidden behind the external sampler),
/// premultiplied RGBA with a top-left origin, tiled with `Repeat` when drawn
/// through a shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalTextureDescriptor {
    pub target: GLenum,
    pub format: GLenum,
    pub width: u32,
    pub height: u32,
    pub image_info: ImageInfo,
    pub tile_mode: TileMode,
}

impl Default for ExternalTextureDescriptor {
    fn default() -> Self {
        Self {
            target: gl_texture::TEXTURE_EXTERNAL_OES,
            format: gl_texture::RGBA8_OES,
            width: 1,
            height: 1,
            image_info: ImageInfo {
                origin: SurfaceOrigin::TopLeft,
                color_type: ColorType::Rgba8888,
                alpha_type: AlphaType::Premul,
            },
            tile_mode: TileMode::Repeat,
        }
    }
}

impl ExternalTextureDescriptor {
    pub fn backend_texture(&self, name: GLuint) -> BackendTexture {
        BackendTexture {
            target: self.target,
            name,
            format: self.format,
            width: self.width,
            height: self.height,
            mipmapped: false,
        }
    }
}
