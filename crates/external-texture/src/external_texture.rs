//! [`ExternalTextureGl`]: a producer surface painted through a GL external
//! texture.

use std::rc::Rc;
use std::sync::{Arc, Weak};

use gl_texture::TextureAllocator;
use surface_interop::{SurfaceFacade, SurfaceHandle};
use texture_core::{Canvas, GpuContext, Rect, SamplingOptions, Texture, TextureId, TransformMatrix};
use tracing::{debug, error, trace};

use crate::attachment::{Attachment, AttachmentPhase};
use crate::descriptor::ExternalTextureDescriptor;
use crate::drawing::draw_texture_image;
use crate::frame::FrameSignal;
use crate::transform::canvas_transform;

/// Texture variant backed by a platform surface (camera, video decoder).
///
/// The surface is attached lazily on the first paint after each GPU context
/// creation and detached when the context is destroyed. New content is only
/// pulled when the producer signalled a frame and the paint is not frozen.
///
/// Lives on the thread that owns the GL context. Producers signal new frames
/// through [`frame_signal`](Self::frame_signal), which may be moved to any
/// thread.
pub struct ExternalTextureGl<F: SurfaceFacade> {
    id: TextureId,
    attachment: Attachment,
    frame: FrameSignal,
    /// Shader-local matrix; identity until the first frame is pulled.
    transform: TransformMatrix,
    surface: SurfaceHandle<F>,
    allocator: Rc<dyn TextureAllocator>,
    descriptor: ExternalTextureDescriptor,
}

impl<F: SurfaceFacade> ExternalTextureGl<F> {
    /// `surface` may already be dangling; calls against it become no-ops.
    pub fn new(
        id: TextureId,
        surface: Weak<F::Surface>,
        facade: Arc<F>,
        allocator: Rc<dyn TextureAllocator>,
    ) -> Self {
        Self {
            id,
            attachment: Attachment::new(id),
            frame: FrameSignal::new(),
            transform: TransformMatrix::IDENTITY,
            surface: SurfaceHandle::new(facade, surface),
            allocator,
            descriptor: ExternalTextureDescriptor::default(),
        }
    }

    pub fn with_descriptor(mut self, descriptor: ExternalTextureDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    /// Handle producers use to signal new frames from their own thread.
    pub fn frame_signal(&self) -> FrameSignal {
        self.frame.clone()
    }

    pub fn phase(&self) -> AttachmentPhase {
        self.attachment.phase()
    }

    /// Native texture name while attached.
    pub fn texture_name(&self) -> Option<gl::types::GLuint> {
        self.attachment.texture_name()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_pending()
    }

    pub fn transform(&self) -> &TransformMatrix {
        &self.transform
    }

    /// Latch the newest frame and recompute the shader-local matrix.
    ///
    /// # Panics
    ///
    /// If the producer reports a non-invertible transform. That means its
    /// coordinate state is corrupt and no correct paint is possible.
    fn update(&mut self) {
        self.surface.update_tex_image();

        let Some(reported) = self.surface.transform_matrix() else {
            trace!(texture_id = %self.id, "no transform reported; keeping previous");
            return;
        };
        match canvas_transform(&reported) {
            Some(transform) => self.transform = transform,
            None => {
                error!(
                    texture_id = %self.id,
                    matrix = ?reported.to_row_major(),
                    "invalid surface transform matrix"
                );
                panic!(
                    "texture {}: surface reported a non-invertible transform matrix",
                    self.id
                );
            }
        }
    }
}

impl<F: SurfaceFacade> Texture for ExternalTextureGl<F> {
    fn id(&self) -> TextureId {
        self.id
    }

    fn paint(
        &mut self,
        canvas: &mut dyn Canvas,
        bounds: &Rect,
        freeze: bool,
        context: &mut dyn GpuContext,
        sampling: &SamplingOptions,
    ) {
        let Some(name) = self.attachment.ensure_attached(&self.allocator, &self.surface) else {
            return;
        };

        if !freeze && self.frame.take() {
            self.update();
        }

        let backend = self.descriptor.backend_texture(name);
        let Some(image) = context.make_image_from_texture(&backend, &self.descriptor.image_info)
        else {
            trace!(texture_id = %self.id, texture_name = name, "texture not drawable yet");
            return;
        };

        draw_texture_image(
            canvas,
            &image,
            bounds,
            &self.transform,
            self.descriptor.tile_mode,
            sampling,
        );
    }

    fn on_gr_context_created(&mut self) {
        debug!(texture_id = %self.id, "GPU context created");
        self.attachment.reset();
    }

    fn on_gr_context_destroyed(&mut self) {
        debug!(texture_id = %self.id, "GPU context destroyed");
        self.attachment.detach(&self.surface);
    }

    fn mark_new_frame_available(&self) {
        self.frame.mark();
    }

    fn on_texture_unregistered(&mut self) {}
}

impl<F: SurfaceFacade> Drop for ExternalTextureGl<F> {
    fn drop(&mut self) {
        self.attachment.detach(&self.surface);
    }
}
