//! Engine-side texture types shared by every texture variant.
//!
//! This crate defines what the paint pipeline sees of a texture:
//!
//! - [`TextureId`] and the [`Texture`] capability trait that every variant
//!   (external surface, software buffer, ...) implements.
//! - [`Rect`] and [`SamplingOptions`], the per-frame paint inputs.
//! - [`TransformMatrix`], a 3x3 projective matrix in row-major convention.
//! - [`Canvas`] / [`GpuContext`], the drawing interfaces consumed by
//!   [`Texture::paint`], plus [`RecordingCanvas`] which records draw calls.
//! - [`TextureRegistry`], which owns registered textures and forwards GPU
//!   context lifecycle notifications to them.

pub mod canvas;
pub mod geometry;
pub mod logging;
pub mod matrix;
pub mod recording;
pub mod registry;
pub mod texture;

pub use canvas::{
    AlphaType, AutoCanvasRestore, BackendTexture, Canvas, ColorType, GpuContext, Image, ImageInfo,
    Paint, Shader, SurfaceOrigin, TileMode,
};
pub use geometry::{FilterMode, MipmapMode, Rect, SamplingOptions};
pub use matrix::TransformMatrix;
pub use recording::{DrawOp, RecordingCanvas};
pub use registry::TextureRegistry;
pub use texture::{Texture, TextureId};
