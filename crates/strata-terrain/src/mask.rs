//! Dense boolean occupancy grids thresholded from the noise field.

use crate::error::GenerationError;
use crate::noise_field::NoiseField;

/// Dense boolean grid over the world's square bounding extent.
///
/// `true` marks a cell that passed its threshold test: solid/placeable for
/// the cave mask, ore-eligible for an ore mask. Every mask of a run is
/// computed exactly once, before any tile placement, and only read
/// afterwards, so all reads during column resolution see the same values.
///
/// The grid is square (`extent × extent`) even though columns are usually
/// far shorter; cells above a short column's height are simply never read.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyMask {
    extent: u32,
    cells: Vec<bool>,
}

impl OccupancyMask {
    /// Builds a mask by evaluating `cell` at every grid coordinate.
    pub fn from_fn(extent: u32, mut cell: impl FnMut(i32, i32) -> bool) -> Self {
        let mut cells = Vec::with_capacity((extent as usize).pow(2));
        for y in 0..extent {
            for x in 0..extent {
                cells.push(cell(x as i32, y as i32));
            }
        }
        Self { extent, cells }
    }

    /// Thresholds the noise field: cell `(x, y)` is `true` iff
    /// `noise.sample(x, y, frequency) > threshold`.
    pub fn from_noise(
        noise: &NoiseField,
        frequency: f64,
        threshold: f64,
        extent: u32,
    ) -> Self {
        Self::from_fn(extent, |x, y| {
            noise.sample(f64::from(x), f64::from(y), frequency) > threshold
        })
    }

    /// Side length of the square grid.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Checked read.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::MaskOutOfBounds`] when `(x, y)` lies
    /// outside the allocated grid, surfaced immediately rather than wrapped
    /// or clamped.
    pub fn get(&self, x: i32, y: i32) -> Result<bool, GenerationError> {
        let inside = x >= 0 && y >= 0 && (x as u32) < self.extent && (y as u32) < self.extent;
        if !inside {
            return Err(GenerationError::MaskOutOfBounds {
                x,
                y,
                extent: self.extent,
            });
        }
        Ok(self.cells[(y as u32 * self.extent + x as u32) as usize])
    }

    /// Number of `true` cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::WorldSeed;

    #[test]
    fn test_threshold_matches_direct_samples() {
        let field = NoiseField::new(WorldSeed::new(42.0));
        let mask = OccupancyMask::from_noise(&field, 0.05, 0.5, 32);

        for x in 0..32 {
            for y in 0..32 {
                let expected = field.sample(f64::from(x), f64::from(y), 0.05) > 0.5;
                assert_eq!(
                    mask.get(x, y).unwrap(),
                    expected,
                    "mask disagrees with the noise field at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_extreme_thresholds() {
        let field = NoiseField::new(WorldSeed::new(7.0));

        let all_set = OccupancyMask::from_noise(&field, 0.05, -1.0, 16);
        assert_eq!(all_set.count_set(), 16 * 16, "threshold below range sets every cell");

        let none_set = OccupancyMask::from_noise(&field, 0.05, 2.0, 16);
        assert_eq!(none_set.count_set(), 0, "threshold above range sets no cell");
    }

    #[test]
    fn test_out_of_bounds_reads_fail() {
        let mask = OccupancyMask::from_fn(8, |_, _| true);

        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 100)] {
            let result = mask.get(x, y);
            assert!(
                matches!(result, Err(GenerationError::MaskOutOfBounds { .. })),
                "read at ({x}, {y}) must be a bounds error, got {result:?}"
            );
        }
    }

    #[test]
    fn test_from_fn_coordinates() {
        let mask = OccupancyMask::from_fn(4, |x, y| x == 2 && y == 3);
        assert!(mask.get(2, 3).unwrap());
        assert!(!mask.get(3, 2).unwrap());
        assert_eq!(mask.count_set(), 1);
    }

    #[test]
    fn test_same_seed_same_mask() {
        let mask_a = OccupancyMask::from_noise(&NoiseField::new(WorldSeed::new(5.5)), 0.1, 0.4, 24);
        let mask_b = OccupancyMask::from_noise(&NoiseField::new(WorldSeed::new(5.5)), 0.1, 0.4, 24);
        assert_eq!(mask_a, mask_b, "identical inputs must produce identical masks");
    }
}
