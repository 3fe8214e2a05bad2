// Host-side tests for the engine tick: draw order, echo sizing, style and
// stroke policy, verified through a recording surface.

use glam::Vec2;
use reveal_web::constants::{
    ECHO_SIZE_STEP, ELLIPSE_STROKE_WIDTH, WAVE_SEGMENTS, WAVE_STROKE_WIDTH,
};
use reveal_web::engine::{EffectParams, RevealEngine, Scheduling};
use reveal_web::shape::{ShapeStyle, ShapeVariant};
use reveal_web::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Clear,
    BeginPath,
    ClosePath,
    MoveTo(Vec2),
    LineTo(Vec2),
    BezierTo(Vec2, Vec2, Vec2),
    Arc { center: Vec2, radius: f32 },
    SetAlpha(f32),
    SetFillStyle(ShapeStyle),
    SetStrokeWidth(f32),
    Fill,
    Stroke,
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn arcs(&self) -> Vec<(Vec2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Arc { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    fn fill_styles(&self) -> Vec<ShapeStyle> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::SetFillStyle(style) => Some(*style),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn move_to(&mut self, p: Vec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn line_to(&mut self, p: Vec2) {
        self.ops.push(Op::LineTo(p));
    }
    fn bezier_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        self.ops.push(Op::BezierTo(c1, c2, end));
    }
    fn arc(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::Arc { center, radius });
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::SetAlpha(alpha));
    }
    fn set_fill_style(&mut self, style: ShapeStyle) {
        self.ops.push(Op::SetFillStyle(style));
    }
    fn set_stroke_width(&mut self, width: f32) {
        self.ops.push(Op::SetStrokeWidth(width));
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}

fn disc_params(trail_length: usize) -> EffectParams {
    EffectParams {
        trail_length,
        source_size: 40.0,
        noise_base_size: 50.0,
        variant: ShapeVariant::Disc,
        ..EffectParams::default()
    }
}

#[test]
fn tick_draws_prior_trail_then_pushes_cursor() {
    let mut engine = RevealEngine::new(disc_params(3), 1);
    let mut surface = RecordingSurface::default();

    for (x, y) in [(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)] {
        engine.set_cursor(Vec2::new(x, y));
        engine.tick(&mut surface);
    }
    // after three ticks the buffer holds all three positions, oldest first
    assert_eq!(
        engine.trail(),
        &[
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(30.0, 30.0),
        ]
    );

    // the fourth tick renders the buffer as it stood, with the new cursor
    // drawn as the source shape; the push happens only afterwards
    engine.set_cursor(Vec2::new(40.0, 40.0));
    let mut surface = RecordingSurface::default();
    engine.tick(&mut surface);

    assert_eq!(surface.ops[0], Op::Clear);
    assert_eq!(
        surface.arcs(),
        vec![
            (Vec2::new(10.0, 10.0), 50.0),
            (Vec2::new(20.0, 20.0), 52.0),
            (Vec2::new(30.0, 30.0), 54.0),
            (Vec2::new(40.0, 40.0), 40.0),
        ]
    );
    assert_eq!(
        surface.fill_styles(),
        vec![
            ShapeStyle::Noise,
            ShapeStyle::Noise,
            ShapeStyle::Noise,
            ShapeStyle::Source,
        ]
    );

    // capacity 3: the oldest position was evicted by the post-draw push
    assert_eq!(
        engine.trail(),
        &[
            Vec2::new(20.0, 20.0),
            Vec2::new(30.0, 30.0),
            Vec2::new(40.0, 40.0),
        ]
    );
}

#[test]
fn echo_sizes_grow_from_base_by_index() {
    let mut engine = RevealEngine::new(disc_params(5), 2);
    let mut surface = RecordingSurface::default();
    engine.set_cursor(Vec2::new(5.0, 5.0));
    for _ in 0..6 {
        engine.tick(&mut surface);
    }

    let mut surface = RecordingSurface::default();
    engine.tick(&mut surface);
    let arcs = surface.arcs();
    assert_eq!(arcs.len(), 6); // 5 echoes + source
    for (index, (_, radius)) in arcs.iter().take(5).enumerate() {
        assert_eq!(*radius, 50.0 + ECHO_SIZE_STEP * index as f32);
    }
    assert_eq!(arcs[5].1, 40.0);
}

#[test]
fn stationary_ticks_fill_trail_with_one_position() {
    let mut engine = RevealEngine::new(disc_params(5), 3);
    engine.set_cursor(Vec2::new(77.0, 33.0));

    for k in 1..=9 {
        let mut surface = RecordingSurface::default();
        engine.tick(&mut surface);
        // exactly one clear and one draw cycle per tick
        assert_eq!(surface.count(|op| *op == Op::Clear), 1);
        assert_eq!(engine.trail().len(), k.min(5));
    }
    assert!(engine
        .trail()
        .iter()
        .all(|p| *p == Vec2::new(77.0, 33.0)));
}

#[test]
fn every_shape_draws_fully_opaque() {
    let mut engine = RevealEngine::new(disc_params(3), 4);
    let mut surface = RecordingSurface::default();
    engine.set_cursor(Vec2::new(1.0, 2.0));
    engine.tick(&mut surface);
    engine.tick(&mut surface);

    let alphas: Vec<f32> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::SetAlpha(a) => Some(*a),
            _ => None,
        })
        .collect();
    assert!(!alphas.is_empty());
    assert!(alphas.iter().all(|a| *a == 1.0));
}

#[test]
fn radial_wave_traces_full_segments_and_strokes_only_the_source() {
    let params = EffectParams {
        trail_length: 2,
        variant: ShapeVariant::RadialWave,
        ..EffectParams::default()
    };
    let mut engine = RevealEngine::new(params, 5);
    engine.set_cursor(Vec2::new(60.0, 60.0));
    let mut surface = RecordingSurface::default();
    engine.tick(&mut surface);
    engine.set_cursor(Vec2::new(62.0, 61.0));

    let mut surface = RecordingSurface::default();
    engine.tick(&mut surface);

    // one echo and the source: two closed paths of WAVE_SEGMENTS segments
    assert_eq!(surface.count(|op| matches!(op, Op::MoveTo(_))), 2);
    assert_eq!(
        surface.count(|op| matches!(op, Op::LineTo(_))),
        2 * WAVE_SEGMENTS as usize
    );
    assert_eq!(surface.count(|op| *op == Op::ClosePath), 2);

    // only the source shape is stroked, at the wave line width
    assert_eq!(surface.count(|op| *op == Op::Stroke), 1);
    assert_eq!(
        surface.count(|op| *op == Op::SetStrokeWidth(WAVE_STROKE_WIDTH)),
        1
    );
    let stroke_at = surface.ops.iter().position(|op| *op == Op::Stroke).unwrap();
    let source_fill_at = surface
        .ops
        .iter()
        .position(|op| *op == Op::SetFillStyle(ShapeStyle::Source))
        .unwrap();
    assert!(stroke_at > source_fill_at);
}

#[test]
fn bezier_variant_uses_two_curves_per_shape() {
    let params = EffectParams {
        trail_length: 1,
        variant: ShapeVariant::BezierEllipse,
        ..EffectParams::default()
    };
    let mut engine = RevealEngine::new(params, 6);
    engine.set_cursor(Vec2::new(100.0, 100.0));
    let mut surface = RecordingSurface::default();
    engine.tick(&mut surface);

    let mut surface = RecordingSurface::default();
    engine.tick(&mut surface);

    // echo + source, each traced as two cubic halves
    assert_eq!(surface.count(|op| matches!(op, Op::BezierTo(..))), 4);
    // the bezier source shape strokes with its own, wider line
    assert_eq!(
        surface.count(|op| *op == Op::SetStrokeWidth(ELLIPSE_STROKE_WIDTH)),
        1
    );
    assert_eq!(surface.count(|op| *op == Op::Stroke), 1);
}

#[test]
fn default_scheduling_is_animation_frame() {
    let params = EffectParams::default();
    assert_eq!(params.scheduling, Scheduling::AnimationFrame);
    assert_eq!(Scheduling::timer(), Scheduling::Timer { interval_ms: 100 });
}
