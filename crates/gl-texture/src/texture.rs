//! Native GL texture names and their ownership.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use anyhow::{bail, Result};
use gl::types::GLuint;
use tracing::trace;

use crate::gl_backend::load_gl;
use crate::gl_state::{check_gl_error, clear_gl_errors, is_context_current};

/// Source of native texture names.
///
/// [`GlTextureAllocator`] talks to the current GL context; tests and
/// non-GL hosts supply their own.
pub trait TextureAllocator {
    /// Create a new texture name in the current context.
    fn generate(&self) -> Result<GLuint>;

    /// Delete a name previously returned by [`generate`](Self::generate).
    fn delete(&self, name: GLuint);
}

/// Allocates texture names with `glGenTextures` / `glDeleteTextures`.
///
/// Must only be used on the thread whose GL context is current, hence
/// `!Send`.
pub struct GlTextureAllocator {
    _not_send: PhantomData<*const ()>,
}

impl GlTextureAllocator {
    /// Create an allocator, loading GL function pointers on first use.
    pub fn new() -> Self {
        load_gl();
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Default for GlTextureAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureAllocator for GlTextureAllocator {
    fn generate(&self) -> Result<GLuint> {
        unsafe {
            if !is_context_current() {
                bail!("no GL context is current");
            }
            clear_gl_errors();
            let mut name: GLuint = 0;
            gl::GenTextures(1, &mut name);
            check_gl_error("glGenTextures")?;
            if name == 0 {
                bail!("glGenTextures returned the reserved name 0");
            }
            Ok(name)
        }
    }

    fn delete(&self, name: GLuint) {
        unsafe {
            gl::DeleteTextures(1, &name);
        }
    }
}

/// A texture name deleted through its allocator when dropped.
pub struct OwnedTexture {
    name: GLuint,
    /// `None` once ownership was abandoned.
    allocator: Option<Rc<dyn TextureAllocator>>,
}

impl OwnedTexture {
    pub fn generate(allocator: &Rc<dyn TextureAllocator>) -> Result<Self> {
        let name = allocator.generate()?;
        trace!(texture_name = name, "generated texture");
        Ok(Self {
            name,
            allocator: Some(allocator.clone()),
        })
    }

    pub fn name(&self) -> GLuint {
        self.name
    }

    /// Give up the name without deleting it.
    ///
    /// Used when the context that owned the name is already gone, so a
    /// delete call would target the wrong (or no) context.
    pub fn abandon(mut self) -> GLuint {
        self.allocator = None;
        self.name
    }
}

impl fmt::Debug for OwnedTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedTexture")
            .field("name", &self.name)
            .field("owned", &self.allocator.is_some())
            .finish()
    }
}

impl Drop for OwnedTexture {
    fn drop(&mut self) {
        if let Some(allocator) = self.allocator.take() {
            trace!(texture_name = self.name, "deleting texture");
            allocator.delete(self.name);
        }
    }
}
