//! Pointer coordinate handling, kept free of web types so the transform is
//! testable on the host.

use glam::Vec2;

/// The single "current position" cell: written by the pointermove handler,
/// read once per tick. Last write wins; positions between ticks may be lost.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// On-screen (CSS) placement of the canvas, from its bounding client rect.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map raw client coordinates into canvas drawing-buffer space: subtract the
/// on-screen offset, then scale per axis by drawing-buffer / CSS size.
///
/// No clamping: coordinates near an edge may land outside the buffer, and
/// the canvas clips the resulting shapes itself.
#[inline]
pub fn canvas_from_client(
    client_x: f32,
    client_y: f32,
    bounds: SurfaceRect,
    logical_w: f32,
    logical_h: f32,
) -> Vec2 {
    let scale_x = if bounds.width > 0.0 {
        logical_w / bounds.width
    } else {
        1.0
    };
    let scale_y = if bounds.height > 0.0 {
        logical_h / bounds.height
    } else {
        1.0
    };
    Vec2::new(
        (client_x - bounds.left) * scale_x,
        (client_y - bounds.top) * scale_y,
    )
}
