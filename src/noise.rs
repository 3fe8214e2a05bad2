//! Smoothed value noise driving the organic outline distortion.
//!
//! A fixed table of lattice-point random values is interpolated with a
//! cosine ease, so nearby queries stay correlated and the derivative is
//! continuous across lattice boundaries (no visual jitter frame-to-frame).

use rand::prelude::*;
use std::f32::consts::PI;

use crate::constants::NOISE_TABLE_SIZE;

pub struct NoiseField {
    table: Vec<f32>,
    amplitude: f32,
    scale: f32,
}

impl NoiseField {
    /// Build a field with lattice values drawn once from a seeded RNG.
    /// The table is never mutated afterwards; `value_at` is pure.
    pub fn new(amplitude: f32, scale: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let table = (0..NOISE_TABLE_SIZE)
            .map(|_| rng.gen_range(-1.0f32..=1.0))
            .collect();
        Self {
            table,
            amplitude,
            scale,
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Smoothed pseudo-random value for any real input, bounded by the
    /// configured amplitude. Always finite.
    pub fn value_at(&self, x: f32) -> f32 {
        let t = x * self.scale;
        let base = t.floor();
        let frac = t - base;
        let a = self.lattice(base as i64);
        let b = self.lattice(base as i64 + 1);
        // cosine ease instead of a straight lerp; linear interpolation kinks
        // at every lattice point
        let mu = (1.0 - (frac * PI).cos()) * 0.5;
        self.amplitude * (a + (b - a) * mu)
    }

    #[inline]
    fn lattice(&self, index: i64) -> f32 {
        let len = self.table.len() as i64;
        self.table[index.rem_euclid(len) as usize]
    }
}
