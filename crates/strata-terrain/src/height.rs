//! Per-column surface height derived from 1D noise.

use crate::noise_field::NoiseField;

/// Derives the surface height of each terrain column.
///
/// `height_at(x)` is a real number; the usable integer rows of column `x`
/// are `0..height_at(x).floor()`. Each column is an independent noise
/// sample; heights are recomputed per column, never cached.
pub struct HeightProfile<'a> {
    noise: &'a NoiseField,
    frequency: f64,
    multiplier: f64,
    addition: f64,
}

impl<'a> HeightProfile<'a> {
    /// Creates a profile over the given noise field.
    pub fn new(noise: &'a NoiseField, frequency: f64, multiplier: f64, addition: f64) -> Self {
        Self {
            noise,
            frequency,
            multiplier,
            addition,
        }
    }

    /// Surface height of column `x`:
    /// `sample_column(x, frequency) * multiplier + addition`.
    pub fn height_at(&self, x: i32) -> f64 {
        self.noise.sample_column(f64::from(x), self.frequency) * self.multiplier + self.addition
    }

    /// Number of integer rows in column `x` (`floor(height)`, never
    /// negative).
    pub fn rows_at(&self, x: i32) -> i32 {
        self.height_at(x).floor().max(0.0) as i32
    }
}
