//! Drawing-surface contract the engine renders through.

use glam::Vec2;

use crate::shape::ShapeStyle;

/// The subset of a 2D canvas the effect needs. The web frontend implements
/// this over `CanvasRenderingContext2d`; tests implement it with a recorder.
///
/// Calls mutate shared surface state (current path, fill style, global
/// alpha); callers must not assume any of it is restored after a draw.
pub trait Surface {
    /// Clear the whole drawing buffer.
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn bezier_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2);
    /// Full circle of the given radius as the current path.
    fn arc(&mut self, center: Vec2, radius: f32);
    fn set_alpha(&mut self, alpha: f32);
    fn set_fill_style(&mut self, style: ShapeStyle);
    fn set_stroke_width(&mut self, width: f32);
    fn fill(&mut self);
    fn stroke(&mut self);
}
