//! One-time loading of GL function pointers from the host's GL library.

use std::sync::Once;

pub(crate) static GL_INIT_ONCE: Once = Once::new();

/// Load GL function pointers exactly once via `gl_loader`.
///
/// The host must already have made its GL context current on this thread;
/// the loaded pointers are only meaningful for that context's driver.
pub fn load_gl() {
    GL_INIT_ONCE.call_once(|| {
        gl_loader::init_gl();
        gl::load_with(|s| gl_loader::get_proc_address(s).cast());
        tracing::debug!("GL function pointers loaded");
    });
}

/// Whether [`load_gl`] has run.
pub fn is_loaded() -> bool {
    GL_INIT_ONCE.is_completed()
}
