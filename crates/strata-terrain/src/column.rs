//! Per-column material resolution: layering, ore overrides, cave gating.

use strata_tile::TileKind;

use crate::error::GenerationError;
use crate::mask::OccupancyMask;
use crate::params::OreSpec;

/// Resolves one column at a time, walking rows from bedrock to the surface.
///
/// Borrows the masks computed at run start, so every read during the pass
/// sees the same values.
pub struct ColumnResolver<'a> {
    cave_mask: &'a OccupancyMask,
    ore_masks: &'a [OccupancyMask],
    ore_specs: &'a [OreSpec],
    dirt_layer_height: u32,
    generate_caves: bool,
}

impl<'a> ColumnResolver<'a> {
    /// Creates a resolver over precomputed masks. `ore_masks` and
    /// `ore_specs` are parallel lists in priority order.
    pub fn new(
        cave_mask: &'a OccupancyMask,
        ore_masks: &'a [OccupancyMask],
        ore_specs: &'a [OreSpec],
        dirt_layer_height: u32,
        generate_caves: bool,
    ) -> Self {
        debug_assert_eq!(ore_masks.len(), ore_specs.len());
        Self {
            cave_mask,
            ore_masks,
            ore_specs,
            dirt_layer_height,
            generate_caves,
        }
    }

    /// Material of the cell at `(x, y)` in a column of real height `height`,
    /// before cave gating.
    ///
    /// Rows below `height - dirt_layer_height` are stone, rows up to
    /// `height - 1` are dirt, and the topmost row is grass. Within the stone
    /// body each ore spec is tested in list order against its mask and the
    /// depth condition `height - y > min_depth`; the last match wins.
    pub fn material_at(&self, x: i32, y: i32, height: f64) -> Result<TileKind, GenerationError> {
        let yf = f64::from(y);
        if yf < height - f64::from(self.dirt_layer_height) {
            let mut kind = TileKind::Stone;
            for (spec, mask) in self.ore_specs.iter().zip(self.ore_masks) {
                if mask.get(x, y)? && height - yf > spec.min_depth {
                    kind = spec.kind;
                }
            }
            Ok(kind)
        } else if yf < height - 1.0 {
            Ok(TileKind::Dirt)
        } else {
            Ok(TileKind::Grass)
        }
    }

    /// Whether the cell at `(x, y)` materializes as a tile at all.
    ///
    /// With cave generation on, only cells whose cave mask is set survive;
    /// the rest become voids (no tile, not even air-tagged). With it off,
    /// every resolved cell is placed.
    pub fn is_solid(&self, x: i32, y: i32) -> Result<bool, GenerationError> {
        if !self.generate_caves {
            return Ok(true);
        }
        self.cave_mask.get(x, y)
    }

    /// Walks rows `0..height.floor()` of column `x` and calls `place` for
    /// every cell that materializes.
    ///
    /// Mask cells above the column's height are never read.
    pub fn resolve_column(
        &self,
        x: i32,
        height: f64,
        mut place: impl FnMut(i32, i32, TileKind) -> Result<(), GenerationError>,
    ) -> Result<(), GenerationError> {
        let rows = height.floor().max(0.0) as i32;
        for y in 0..rows {
            if !self.is_solid(x, y)? {
                continue;
            }
            let kind = self.material_at(x, y, height)?;
            place(x, y, kind)?;
        }
        Ok(())
    }
}
