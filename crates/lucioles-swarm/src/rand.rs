//! Seedable random source for spawning and re-targeting

use lucioles_core::{Playfield, Vec2};
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};

pub struct SwarmRng {
    inner: StdRng,
}

impl SwarmRng {
    /// Deterministic stream, for tests and reproducible runs
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Returns a float in [min, max]; `min` when the range is empty
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    /// Uniform point in the axis-aligned box spanned by `min` and `max`
    pub fn point_in(&mut self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(self.range(min.x, max.x), self.range(min.y, max.y))
    }

    /// Uniform point in the square of half-width `half_extent` around `center`
    pub fn point_around(&mut self, center: Vec2, half_extent: f32) -> Vec2 {
        let half = Vec2::splat(half_extent);
        self.point_in(center - half, center + half)
    }

    pub fn point_in_playfield(&mut self, playfield: &Playfield) -> Vec2 {
        self.point_in(Vec2::ZERO, Vec2::new(playfield.width, playfield.height))
    }
}
