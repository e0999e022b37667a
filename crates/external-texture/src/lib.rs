//! External-surface textures for the engine's canvas.
//!
//! This crate ties together [`texture_core`] (texture identity and canvas
//! interfaces), [`gl_texture`] (native texture names) and
//! [`surface_interop`] (producer surfaces) into one [`Texture`] variant,
//! [`ExternalTextureGl`].
//!
//! # Overview
//!
//! - [`Attachment`] tracks whether a native texture exists and is bound to
//!   the producer surface in the current GL context.
//! - [`FrameSignal`] carries "a newer frame exists" from the producer thread.
//! - [`canvas_transform`] converts the producer's coordinate transform.
//! - [`draw_texture_image`] draws the wrapped texture into paint bounds.
//! - [`ExternalTextureDescriptor`] configures how the texture is wrapped.
//!
//! # Lifecycle
//!
//! ```text
//!  registry.on_gr_context_created()    -> Uninitialized
//!  texture.paint(..)                    -> Attached (glGenTextures + attach)
//!  producer: signal.mark()              -> next non-frozen paint latches it
//!  registry.on_gr_context_destroyed()  -> Detached (detach + glDeleteTextures)
//! ```
//!
//! [`Texture`]: texture_core::Texture

pub mod attachment;
pub mod descriptor;
pub mod drawing;
pub mod external_texture;
pub mod frame;
pub mod transform;

// Re-export primary types at crate root for convenience.
pub use attachment::{Attachment, AttachmentPhase, AttachmentState};
pub use descriptor::ExternalTextureDescriptor;
pub use drawing::draw_texture_image;
pub use external_texture::ExternalTextureGl;
pub use frame::FrameSignal;
pub use transform::canvas_transform;
