//! Native GL texture names for externally fed textures.
//!
//! [`OwnedTexture`] deletes its name through a [`TextureAllocator`] when
//! dropped, so every exit path releases GPU memory exactly once.
//! [`GlTextureAllocator`] is the allocator for a host-provided GL context.
//!
//! ### Warning
//!
//! GL calls assume the host has made the right context current on the
//! calling thread. Nothing here can verify which context that is.

mod gl_backend;
pub mod gl_state;
pub mod texture;

pub use gl_backend::{is_loaded, load_gl};
pub use texture::{GlTextureAllocator, OwnedTexture, TextureAllocator};

/// `GL_TEXTURE_EXTERNAL_OES`, the sampler target for producer-fed images.
pub const TEXTURE_EXTERNAL_OES: gl::types::GLenum = 0x8D65;

/// `GL_RGBA8_OES`.
pub const RGBA8_OES: gl::types::GLenum = 0x8058;
