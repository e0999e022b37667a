//! Producer-surface interop.
//!
//! This crate defines the [`SurfaceFacade`] trait, the operations the engine
//! needs from a platform-owned image surface, and [`SurfaceHandle`], which
//! pairs a facade with a weak reference to one surface and guards every call
//! against the surface having been released.

pub mod handle;
pub mod producer;

pub use handle::SurfaceHandle;
pub use producer::SurfaceFacade;
