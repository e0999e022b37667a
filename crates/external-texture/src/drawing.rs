//! Drawing a wrapped external image into paint bounds.

use texture_core::{
    AutoCanvasRestore, Canvas, Image, Paint, Rect, SamplingOptions, Shader, TileMode,
    TransformMatrix,
};

/// Draw `image` stretched over `bounds`.
///
/// The canvas is mapped so the unit square covers `bounds`. With a
/// non-identity `transform` the unit square is filled through an image
/// shader using `transform` as its local matrix; otherwise the image is
/// drawn directly at the origin. The canvas state is restored on return.
pub fn draw_texture_image(
    canvas: &mut dyn Canvas,
    image: &Image,
    bounds: &Rect,
    transform: &TransformMatrix,
    tile_mode: TileMode,
    sampling: &SamplingOptions,
) {
    let mut canvas = AutoCanvasRestore::new(canvas);
    canvas.translate(bounds.x, bounds.y);
    canvas.scale(bounds.width, bounds.height);

    if transform.is_identity() {
        canvas.draw_image(image, 0.0, 0.0, sampling);
        return;
    }

    let shader = Shader {
        image: image.clone(),
        tile_x: tile_mode,
        tile_y: tile_mode,
        sampling: *sampling,
        local_matrix: *transform,
    };
    canvas.draw_rect(&Rect::from_wh(1.0, 1.0), &Paint::with_shader(shader));
}
