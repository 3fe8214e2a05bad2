//! `Surface` implementation over a Canvas 2D context with the two
//! repeating image patterns prepared at init.

use glam::Vec2;
use web_sys as web;

use crate::shape::ShapeStyle;
use crate::surface::Surface;

pub struct Canvas2dSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    source_pattern: web::CanvasPattern,
    noise_pattern: web::CanvasPattern,
}

impl Canvas2dSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        source_pattern: web::CanvasPattern,
        noise_pattern: web::CanvasPattern,
    ) -> Self {
        Self {
            canvas,
            ctx,
            source_pattern,
            noise_pattern,
        }
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn line_to(&mut self, p: Vec2) {
        self.ctx.line_to(p.x as f64, p.y as f64);
    }

    fn bezier_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.ctx.bezier_curve_to(
            c1.x as f64,
            c1.y as f64,
            c2.x as f64,
            c2.y as f64,
            end.x as f64,
            end.y as f64,
        );
    }

    fn arc(&mut self, center: Vec2, radius: f32) {
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill_style(&mut self, style: ShapeStyle) {
        let pattern = match style {
            ShapeStyle::Source => &self.source_pattern,
            ShapeStyle::Noise => &self.noise_pattern,
        };
        self.ctx.set_fill_style_canvas_pattern(pattern);
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
