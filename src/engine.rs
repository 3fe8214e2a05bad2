//! The effect engine: owns the trail, the noise field, and the per-tick
//! draw order. One explicit instance per canvas; no module-level state.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::{
    ECHO_SIZE_STEP, ECHO_WAVE_AMPLITUDE, NOISE_AMPLITUDE, NOISE_BASE_SIZE, NOISE_QUERY_JITTER,
    NOISE_SCALE, SHAPE_OPACITY, SOURCE_SIZE, TIMER_INTERVAL_MS, TRAIL_LENGTH,
};
use crate::noise::NoiseField;
use crate::shape::{self, RenderParams, ShapeStyle, ShapeVariant};
use crate::surface::Surface;
use crate::trail::TrailBuffer;

/// How the next tick is requested from the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheduling {
    /// Run before the next repaint (~60/s).
    AnimationFrame,
    /// Fixed-delay timer.
    Timer { interval_ms: u32 },
}

impl Default for Scheduling {
    fn default() -> Self {
        Scheduling::AnimationFrame
    }
}

impl Scheduling {
    /// Timer scheduling at the stock interval.
    pub fn timer() -> Self {
        Scheduling::Timer {
            interval_ms: TIMER_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EffectParams {
    pub trail_length: usize,
    pub source_size: f32,
    pub noise_base_size: f32,
    pub noise_amplitude: f32,
    pub noise_scale: f32,
    pub variant: ShapeVariant,
    pub scheduling: Scheduling,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            trail_length: TRAIL_LENGTH,
            source_size: SOURCE_SIZE,
            noise_base_size: NOISE_BASE_SIZE,
            noise_amplitude: NOISE_AMPLITUDE,
            noise_scale: NOISE_SCALE,
            variant: ShapeVariant::RadialWave,
            scheduling: Scheduling::AnimationFrame,
        }
    }
}

pub struct RevealEngine {
    pub params: EffectParams,
    trail: TrailBuffer,
    noise: NoiseField,
    rng: StdRng,
    cursor: Vec2,
}

impl RevealEngine {
    pub fn new(params: EffectParams, seed: u64) -> Self {
        // Separate stream for the noise lattice so reseeding one concern
        // never shifts the other
        let noise_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        Self {
            trail: TrailBuffer::new(params.trail_length),
            noise: NoiseField::new(params.noise_amplitude, params.noise_scale, noise_seed),
            rng: StdRng::seed_from_u64(seed),
            cursor: Vec2::ZERO,
            params,
        }
    }

    /// Record the latest pointer position; picked up by the next tick.
    pub fn set_cursor(&mut self, position: Vec2) {
        self.cursor = position;
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Trail contents oldest-first, as the next tick will draw them.
    pub fn trail(&self) -> &[Vec2] {
        self.trail.positions()
    }

    /// One frame: clear, draw echoes oldest-first, draw the source shape at
    /// the cursor, then push the cursor onto the trail. The push comes last
    /// so each tick renders the trail as it stood before this position.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        surface.clear();

        // The source outline breathes: its wave amplitude is resampled from
        // the noise field each frame at a small random query offset.
        let source_amplitude = self.noise.value_at(self.rng.gen::<f32>() * NOISE_QUERY_JITTER);

        for (index, &center) in self.trail.positions().iter().enumerate() {
            let size = self.params.noise_base_size + ECHO_SIZE_STEP * index as f32;
            let echo = RenderParams {
                center,
                size,
                transparency: SHAPE_OPACITY,
                style: ShapeStyle::for_size(size, self.params.source_size),
            };
            shape::draw_shape(surface, self.params.variant, &echo, ECHO_WAVE_AMPLITUDE);
        }

        let source = RenderParams {
            center: self.cursor,
            size: self.params.source_size,
            transparency: SHAPE_OPACITY,
            style: ShapeStyle::for_size(self.params.source_size, self.params.source_size),
        };
        shape::draw_shape(surface, self.params.variant, &source, source_amplitude);

        self.trail.push(self.cursor);
    }
}
