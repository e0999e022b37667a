//! Paint inputs: draw bounds and sampling configuration.

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    pub const fn from_wh(width: f32, height: f32) -> Self {
        Self::from_xywh(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Texel filter used when sampling an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Nearest,
    Linear,
}

/// Mip level selection used when sampling an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MipmapMode {
    #[default]
    None,
    Nearest,
    Linear,
}

/// Sampling configuration handed down by the paint pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplingOptions {
    pub filter: FilterMode,
    pub mipmap: MipmapMode,
}

impl SamplingOptions {
    pub const fn new(filter: FilterMode, mipmap: MipmapMode) -> Self {
        Self { filter, mipmap }
    }

    /// Bilinear filtering without mipmaps.
    pub const fn linear() -> Self {
        Self::new(FilterMode::Linear, MipmapMode::None)
    }
}
