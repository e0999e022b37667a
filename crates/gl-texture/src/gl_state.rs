//! Inspect the state of the current OpenGL context.

use anyhow::{bail, Result};
use gl::types::GLenum;

/// Drain the GL error queue.
///
/// # Safety
///
/// GL function pointers must be loaded and a context must be current.
pub unsafe fn clear_gl_errors() {
    while gl::GetError() != gl::NO_ERROR {}
}

/// Whether a GL context is current on this thread.
///
/// # Safety
///
/// GL function pointers must be loaded.
pub unsafe fn is_context_current() -> bool {
    !gl::GetString(gl::VERSION).is_null()
}

/// Fail with the first queued GL error, if any, draining the rest.
///
/// # Safety
///
/// GL function pointers must be loaded and a context must be current.
pub unsafe fn check_gl_error(what: &str) -> Result<()> {
    let err: GLenum = gl::GetError();
    if err == gl::NO_ERROR {
        return Ok(());
    }
    clear_gl_errors();
    bail!("{what} failed with GL error {:#06x} ({})", err, error_name(err));
}

fn error_name(err: GLenum) -> &'static str {
    match err {
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown",
    }
}
