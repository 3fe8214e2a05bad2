//! Per-frame shape generation: the three outline variants and the
//! fill/stroke policy that distinguishes the cursor shape from its echoes.

use glam::Vec2;
use std::f32::consts::PI;

use crate::constants::{
    ECHO_ELLIPSE_CONTROL_K, ELLIPSE_HEIGHT_RATIO, ELLIPSE_STROKE_WIDTH, SOURCE_ELLIPSE_CONTROL_K,
    WAVE_HARMONICS, WAVE_SEGMENTS, WAVE_STROKE_WIDTH,
};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeVariant {
    Disc,
    RadialWave,
    BezierEllipse,
}

/// Which repeating pattern fills the shape, and whether it is stroked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeStyle {
    Source,
    Noise,
}

impl ShapeStyle {
    /// Styling is structural: exactly the configured source size gets the
    /// background pattern, every other size gets the noise pattern.
    #[inline]
    pub fn for_size(size: f32, source_size: f32) -> Self {
        if size == source_size {
            ShapeStyle::Source
        } else {
            ShapeStyle::Noise
        }
    }
}

/// Ephemeral per-shape parameters, recomputed every frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderParams {
    pub center: Vec2,
    pub size: f32,
    pub transparency: f32,
    pub style: ShapeStyle,
}

/// Point on the sine-perturbed radial curve at an integer degree.
#[inline]
pub fn radial_wave_point(center: Vec2, size: f32, amplitude: f32, angle_deg: u32) -> Vec2 {
    let theta = angle_deg as f32 * PI / 180.0;
    let r = size + amplitude * (WAVE_HARMONICS * theta).sin();
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Two-curve cubic bezier approximation of an ellipse: one bezier per half,
/// control points reaching `control_k * height` above/below the midline.
pub struct EllipseOutline {
    pub start: Vec2,
    pub upper: [Vec2; 3],
    pub lower: [Vec2; 3],
}

pub fn ellipse_outline(center: Vec2, width: f32, control_k: f32) -> EllipseOutline {
    let height = width * ELLIPSE_HEIGHT_RATIO;
    let reach = height * control_k;
    let left = Vec2::new(center.x - width, center.y);
    let right = Vec2::new(center.x + width, center.y);
    EllipseOutline {
        start: left,
        upper: [
            Vec2::new(left.x, center.y - reach),
            Vec2::new(right.x, center.y - reach),
            right,
        ],
        lower: [
            Vec2::new(right.x, center.y + reach),
            Vec2::new(left.x, center.y + reach),
            left,
        ],
    }
}

/// Trace, fill, and (for the source shape) stroke one shape.
///
/// `wave_amplitude` only affects the `RadialWave` variant; the engine passes
/// the per-frame noise sample for the source shape and the fixed echo ripple
/// for everything else.
pub fn draw_shape(
    surface: &mut dyn Surface,
    variant: ShapeVariant,
    params: &RenderParams,
    wave_amplitude: f32,
) {
    surface.set_alpha(params.transparency);
    surface.begin_path();
    match variant {
        ShapeVariant::Disc => {
            surface.arc(params.center, params.size);
        }
        ShapeVariant::RadialWave => {
            surface.move_to(radial_wave_point(params.center, params.size, wave_amplitude, 0));
            for deg in 1..=WAVE_SEGMENTS {
                surface.line_to(radial_wave_point(
                    params.center,
                    params.size,
                    wave_amplitude,
                    deg,
                ));
            }
            surface.close_path();
        }
        ShapeVariant::BezierEllipse => {
            let control_k = match params.style {
                ShapeStyle::Source => SOURCE_ELLIPSE_CONTROL_K,
                ShapeStyle::Noise => ECHO_ELLIPSE_CONTROL_K,
            };
            let outline = ellipse_outline(params.center, params.size, control_k);
            surface.move_to(outline.start);
            surface.bezier_to(outline.upper[0], outline.upper[1], outline.upper[2]);
            surface.bezier_to(outline.lower[0], outline.lower[1], outline.lower[2]);
            surface.close_path();
        }
    }
    surface.set_fill_style(params.style);
    surface.fill();
    if params.style == ShapeStyle::Source {
        match variant {
            ShapeVariant::RadialWave => {
                surface.set_stroke_width(WAVE_STROKE_WIDTH);
                surface.stroke();
            }
            ShapeVariant::BezierEllipse => {
                surface.set_stroke_width(ELLIPSE_STROKE_WIDTH);
                surface.stroke();
            }
            ShapeVariant::Disc => {}
        }
    }
}
