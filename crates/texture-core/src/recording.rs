//! A [`Canvas`] that records draw calls instead of rasterizing them.
//!
//! Each recorded op carries the total matrix that was current when it was
//! issued, so a replaying backend (or a test) does not need to track the
//! save/restore stack itself.

use crate::canvas::{Canvas, Image, Paint};
use crate::geometry::{Rect, SamplingOptions};
use crate::matrix::TransformMatrix;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Image {
        image: Image,
        x: f32,
        y: f32,
        sampling: SamplingOptions,
        matrix: TransformMatrix,
    },
    Rect {
        rect: Rect,
        paint: Paint,
        matrix: TransformMatrix,
    },
}

impl DrawOp {
    /// Total canvas matrix at the time of the draw.
    pub fn matrix(&self) -> &TransformMatrix {
        match self {
            DrawOp::Image { matrix, .. } | DrawOp::Rect { matrix, .. } => matrix,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    /// Never empty; the last entry is the current matrix.
    stack: Vec<TransformMatrix>,
    ops: Vec<DrawOp>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            stack: vec![TransformMatrix::IDENTITY],
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded ops, leaving the matrix stack untouched.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn total_matrix(&self) -> &TransformMatrix {
        self.stack.last().unwrap_or(&TransformMatrix::IDENTITY)
    }

    fn current_mut(&mut self) -> &mut TransformMatrix {
        if self.stack.is_empty() {
            self.stack.push(TransformMatrix::IDENTITY);
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) -> usize {
        let count = self.save_count();
        let top = *self.total_matrix();
        self.stack.push(top);
        count
    }

    fn restore_to_count(&mut self, count: usize) {
        self.stack.truncate(count.max(1));
    }

    fn save_count(&self) -> usize {
        self.stack.len()
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current_mut().pre_translate(dx, dy);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.current_mut().pre_scale(sx, sy);
    }

    fn draw_image(&mut self, image: &Image, x: f32, y: f32, sampling: &SamplingOptions) {
        let matrix = *self.total_matrix();
        self.ops.push(DrawOp::Image {
            image: image.clone(),
            x,
            y,
            sampling: *sampling,
            matrix,
        });
    }

    fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        let matrix = *self.total_matrix();
        self.ops.push(DrawOp::Rect {
            rect: *rect,
            paint: paint.clone(),
            matrix,
        });
    }
}
