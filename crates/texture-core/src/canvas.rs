//! Drawing interfaces consumed by [`Texture::paint`](crate::Texture::paint).
//!
//! The paint pipeline owns the real canvas and GPU context; textures only
//! see them through [`Canvas`] and [`GpuContext`]. Both are object safe so
//! the pipeline can hand out `&mut dyn` references each frame.

use std::ops::{Deref, DerefMut};

use crate::geometry::{Rect, SamplingOptions};
use crate::matrix::TransformMatrix;

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Where texel row zero lives in the backing texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOrigin {
    TopLeft,
    BottomLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Rgba8888,
    Bgra8888,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaType {
    Opaque,
    Premul,
    Unpremul,
}

/// A native GPU texture as seen by the GPU context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTexture {
    /// GL texture target, e.g. `GL_TEXTURE_EXTERNAL_OES`.
    pub target: u32,
    /// GL texture name.
    pub name: u32,
    /// GL sized internal format.
    pub format: u32,
    pub width: u32,
    pub height: u32,
    pub mipmapped: bool,
}

/// How a [`BackendTexture`] is interpreted when wrapped as an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub origin: SurfaceOrigin,
    pub color_type: ColorType,
    pub alpha_type: AlphaType,
}

/// A backend texture the GPU context has accepted for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    texture: BackendTexture,
    info: ImageInfo,
}

impl Image {
    /// Only GPU contexts should call this, after validating `texture`.
    pub fn new(texture: BackendTexture, info: ImageInfo) -> Self {
        Self { texture, info }
    }

    pub fn texture(&self) -> &BackendTexture {
        &self.texture
    }

    pub fn info(&self) -> &ImageInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.texture.width
    }

    pub fn height(&self) -> u32 {
        self.texture.height
    }
}

// ---------------------------------------------------------------------------
// Paint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMode {
    Clamp,
    Repeat,
    Mirror,
}

/// Image shader: samples `image` through `local_matrix`, tiling outside the
/// unit square.
#[derive(Debug, Clone, PartialEq)]
pub struct Shader {
    pub image: Image,
    pub tile_x: TileMode,
    pub tile_y: TileMode,
    pub sampling: SamplingOptions,
    pub local_matrix: TransformMatrix,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paint {
    pub shader: Option<Shader>,
}

impl Paint {
    pub fn with_shader(shader: Shader) -> Self {
        Self {
            shader: Some(shader),
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas / GPU context
// ---------------------------------------------------------------------------

/// Drawing surface with a save/restore stack of transforms.
pub trait Canvas {
    /// Push the current state. Returns the save count before the push.
    fn save(&mut self) -> usize;

    /// Pop states until [`save_count`](Canvas::save_count) equals `count`.
    fn restore_to_count(&mut self, count: usize);

    fn save_count(&self) -> usize;

    fn translate(&mut self, dx: f32, dy: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, sampling: &SamplingOptions);

    fn draw_rect(&mut self, rect: &Rect, paint: &Paint);
}

/// The GPU rendering context that is current for this frame.
pub trait GpuContext {
    /// Wrap a native texture as a drawable image.
    ///
    /// Returns `None` if the texture cannot be drawn right now (abandoned
    /// context, unsupported format); callers treat that as "nothing to draw".
    fn make_image_from_texture(
        &mut self,
        texture: &BackendTexture,
        info: &ImageInfo,
    ) -> Option<Image>;
}

/// Saves the canvas on creation and restores it on drop, so every exit path
/// leaves the canvas as it was found.
pub struct AutoCanvasRestore<'a> {
    canvas: &'a mut dyn Canvas,
    save_count: usize,
}

impl<'a> AutoCanvasRestore<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        let save_count = canvas.save();
        Self { canvas, save_count }
    }
}

impl<'a> Deref for AutoCanvasRestore<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for AutoCanvasRestore<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

impl Drop for AutoCanvasRestore<'_> {
    fn drop(&mut self) {
        self.canvas.restore_to_count(self.save_count);
    }
}
