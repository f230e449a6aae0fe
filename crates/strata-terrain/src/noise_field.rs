//! Seed-offset Perlin sampling, normalized to `[0, 1)`.

use noise::{NoiseFn, Perlin};

use crate::seed::WorldSeed;

/// Samples 2D coherent noise at seed-offset coordinates.
///
/// The noise function carries a fixed permutation table; the seed enters
/// purely as a coordinate offset, so every component sampling through the
/// same field stays spatially coherent for one run. Pure and stateless:
/// identical `(x, y, frequency, seed)` always yields the identical value.
pub struct NoiseField {
    perlin: Perlin,
    offset: f64,
}

impl NoiseField {
    /// Creates a field whose samples are offset by the given seed.
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            perlin: Perlin::new(0),
            offset: seed.offset(),
        }
    }

    /// Samples at `((x + seed) * frequency, (y + seed) * frequency)`.
    ///
    /// Returns a value in `[0, 1)`, normalized from the raw `[-1, 1]` Perlin
    /// range.
    pub fn sample(&self, x: f64, y: f64, frequency: f64) -> f64 {
        let raw = self.perlin.get([
            (x + self.offset) * frequency,
            (y + self.offset) * frequency,
        ]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// 1D column variant: fixes the second coordinate at `seed * frequency`
    /// so the value varies only with `x` (and the seed).
    pub fn sample_column(&self, x: f64, frequency: f64) -> f64 {
        self.sample(x, 0.0, frequency)
    }
}
