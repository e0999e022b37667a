//! Texture identity and the capability set shared by all texture variants.

use std::fmt;

use anyhow::{bail, Result};

use crate::canvas::{Canvas, GpuContext};
use crate::geometry::{Rect, SamplingOptions};

/// Stable identifier the paint pipeline uses to address a texture.
///
/// Ids are assigned by the engine when a texture is registered and are never
/// reused for a different logical surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(i64);

impl TextureId {
    pub fn new(raw: i64) -> Result<Self> {
        if raw < 0 {
            bail!("texture id must be non-negative, got {raw}");
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A texture the engine can paint.
///
/// All methods except [`mark_new_frame_available`](Texture::mark_new_frame_available)
/// are called on the thread that owns the GPU context.
pub trait Texture {
    fn id(&self) -> TextureId;

    /// Draw the current content into `bounds`.
    ///
    /// `freeze` asks the texture to keep showing its last frame even if a
    /// newer one is pending. The canvas state is unchanged on return.
    fn paint(
        &mut self,
        canvas: &mut dyn Canvas,
        bounds: &Rect,
        freeze: bool,
        context: &mut dyn GpuContext,
        sampling: &SamplingOptions,
    );

    /// A new GPU context is current; any previous GPU objects are gone.
    fn on_gr_context_created(&mut self);

    /// The GPU context is about to be destroyed; release GPU objects now.
    fn on_gr_context_destroyed(&mut self);

    /// The producer has a newer frame. May be called from any thread.
    fn mark_new_frame_available(&self);

    /// The engine dropped this texture's id.
    fn on_texture_unregistered(&mut self);
}
