//! Attachment of a producer surface to a native texture in the current GL
//! context.
//!
//! ```text
//!        context created            first paint
//!  ┌──────────────────────▶ Uninitialized ──────▶ Attached
//!  │                                                 │
//!  └──────────────────────── Detached ◀──────────────┘
//!                                      context destroyed / drop
//! ```
//!
//! The native texture lives inside [`AttachmentState::Attached`], so it
//! exists exactly while the surface is attached.

use std::mem;
use std::rc::Rc;

use gl::types::GLuint;
use gl_texture::{OwnedTexture, TextureAllocator};
use surface_interop::{SurfaceFacade, SurfaceHandle};
use texture_core::TextureId;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub enum AttachmentState {
    /// No texture in the current context yet; the next paint attaches.
    #[default]
    Uninitialized,
    Attached(OwnedTexture),
    /// The context is gone. Paints are no-ops until a new one is created.
    Detached,
}

/// Field-less view of [`AttachmentState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentPhase {
    Uninitialized,
    Attached,
    Detached,
}

#[derive(Debug)]
pub struct Attachment {
    id: TextureId,
    state: AttachmentState,
}

impl Attachment {
    pub fn new(id: TextureId) -> Self {
        Self {
            id,
            state: AttachmentState::Uninitialized,
        }
    }

    pub fn phase(&self) -> AttachmentPhase {
        match self.state {
            AttachmentState::Uninitialized => AttachmentPhase::Uninitialized,
            AttachmentState::Attached(_) => AttachmentPhase::Attached,
            AttachmentState::Detached => AttachmentPhase::Detached,
        }
    }

    pub fn texture_name(&self) -> Option<GLuint> {
        match &self.state {
            AttachmentState::Attached(texture) => Some(texture.name()),
            _ => None,
        }
    }

    /// Attach on the first call of each Uninitialized period.
    ///
    /// Returns the attached texture name, or `None` when Detached (no GL
    /// calls are made) or when allocation failed (the state stays
    /// Uninitialized and the next call retries).
    pub fn ensure_attached<F: SurfaceFacade>(
        &mut self,
        allocator: &Rc<dyn TextureAllocator>,
        surface: &SurfaceHandle<F>,
    ) -> Option<GLuint> {
        match &self.state {
            AttachmentState::Attached(texture) => return Some(texture.name()),
            AttachmentState::Detached => return None,
            AttachmentState::Uninitialized => {}
        }

        let texture = match OwnedTexture::generate(allocator) {
            Ok(texture) => texture,
            Err(e) => {
                warn!(texture_id = %self.id, "failed to allocate texture: {e:#}");
                return None;
            }
        };
        let name = texture.name();
        surface.attach_to_gl_context(name);
        self.state = AttachmentState::Attached(texture);
        debug!(texture_id = %self.id, texture_name = name, "attached surface");
        Some(name)
    }

    /// Detach the surface and release the texture, then mark Detached.
    ///
    /// Only the Attached state makes any calls; otherwise this just marks
    /// Detached.
    pub fn detach<F: SurfaceFacade>(&mut self, surface: &SurfaceHandle<F>) {
        if let AttachmentState::Attached(texture) =
            mem::replace(&mut self.state, AttachmentState::Detached)
        {
            surface.detach_from_gl_context();
            let name = texture.name();
            drop(texture);
            debug!(texture_id = %self.id, texture_name = name, "detached surface");
        }
    }

    /// Return to Uninitialized without any GL or surface calls.
    ///
    /// A texture still held here belongs to a context that no longer exists,
    /// so it is abandoned rather than deleted.
    pub fn reset(&mut self) {
        if let AttachmentState::Attached(texture) =
            mem::replace(&mut self.state, AttachmentState::Uninitialized)
        {
            let name = texture.abandon();
            warn!(texture_id = %self.id, texture_name = name, "context recreated while attached; abandoning texture");
        }
    }
}
