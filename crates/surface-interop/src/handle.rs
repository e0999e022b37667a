//! [`SurfaceHandle`]: a weak surface reference plus the facade to drive it.

use std::fmt;
use std::sync::{Arc, Weak};

use gl::types::GLuint;
use texture_core::TransformMatrix;
use tracing::{trace, warn};

use crate::producer::SurfaceFacade;

/// Non-owning handle to a producer surface.
///
/// Every operation first checks that the surface is still alive. Calls
/// against a dropped surface are no-ops, and facade errors are logged and
/// absorbed: a surface may legitimately be torn down by its owner at any
/// time.
pub struct SurfaceHandle<F: SurfaceFacade> {
    facade: Arc<F>,
    surface: Weak<F::Surface>,
}

impl<F: SurfaceFacade> SurfaceHandle<F> {
    /// `surface` may already be dangling.
    pub fn new(facade: Arc<F>, surface: Weak<F::Surface>) -> Self {
        Self { facade, surface }
    }

    pub fn is_valid(&self) -> bool {
        self.surface.strong_count() > 0
    }

    pub fn attach_to_gl_context(&self, texture_name: GLuint) {
        self.with_surface("attach_to_gl_context", |facade, surface| {
            facade.attach_to_gl_context(surface, texture_name)
        });
    }

    pub fn detach_from_gl_context(&self) {
        self.with_surface("detach_from_gl_context", |facade, surface| {
            facade.detach_from_gl_context(surface)
        });
    }

    pub fn update_tex_image(&self) {
        self.with_surface("update_tex_image", |facade, surface| {
            facade.update_tex_image(surface)
        });
    }

    /// `None` if the surface is gone or the query failed.
    pub fn transform_matrix(&self) -> Option<TransformMatrix> {
        self.with_surface("transform_matrix", |facade, surface| {
            facade.transform_matrix(surface)
        })
    }

    fn with_surface<T>(
        &self,
        op: &'static str,
        f: impl FnOnce(&F, &F::Surface) -> anyhow::Result<T>,
    ) -> Option<T> {
        let Some(surface) = self.surface.upgrade() else {
            trace!(op, "surface released; skipping");
            return None;
        };
        match f(&self.facade, &surface) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(op, "surface call failed: {e:#}");
                None
            }
        }
    }
}

impl<F: SurfaceFacade> fmt::Debug for SurfaceHandle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHandle")
            .field("valid", &self.is_valid())
            .finish()
    }
}
