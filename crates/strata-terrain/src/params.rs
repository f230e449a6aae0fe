//! Immutable generation parameters and their validation.

use serde::{Deserialize, Serialize};
use strata_tile::TileKind;

use crate::error::GenerationError;

/// Number of ore distributions a run carries. The ordered list encodes
/// override priority: later entries win when several ore masks are set at
/// one cell.
pub const ORE_SPEC_COUNT: usize = 4;

/// Distribution parameters for one ore variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OreSpec {
    /// Material tag placed where this ore wins.
    pub kind: TileKind,
    /// Noise frequency of the ore's occupancy mask.
    pub frequency: f64,
    /// Mask threshold: cells whose noise sample exceeds this are eligible.
    /// Higher values produce smaller, rarer veins.
    pub noise_threshold: f64,
    /// Minimum depth below the surface before the ore may appear: a cell at
    /// row `y` takes the ore only when `surface_height - y > min_depth`.
    pub min_depth: f64,
}

/// Immutable parameters of one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Horizontal extent of the world strip in columns. Must be a multiple
    /// of `chunk_width`. Also the square extent of every occupancy mask.
    pub world_width: u32,
    /// Width of one chunk bucket in columns.
    pub chunk_width: u32,
    /// Rows of dirt between the stone body and the surface row.
    pub dirt_layer_height: u32,
    /// Cave mask threshold: cells whose cave-noise sample exceeds this stay
    /// solid, the rest become voids.
    pub surface_threshold: f64,
    /// Amplitude applied to the 1D terrain-height noise.
    pub height_multiplier: f64,
    /// Base height added to every column.
    pub height_addition: f64,
    /// Frequency of the 1D terrain-height noise.
    pub terrain_frequency: f64,
    /// Frequency of the cave occupancy noise.
    pub cave_frequency: f64,
    /// When `false` the cave gate is skipped and every resolved cell is
    /// placed.
    pub generate_caves: bool,
    /// A column top hosts a tree when a draw from `0..tree_chance` hits 1.
    pub tree_chance: i32,
    /// Fallback draw for a single tall-grass tile, same rule.
    pub tall_grass_chance: i32,
    /// Inclusive lower bound of the random trunk height.
    pub min_tree_height: i32,
    /// Exclusive upper bound of the random trunk height.
    pub max_tree_height: i32,
    /// Ordered ore distributions, exactly [`ORE_SPEC_COUNT`] entries; later
    /// entries override earlier ones.
    pub ores: Vec<OreSpec>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            world_width: 96,
            chunk_width: 16,
            dirt_layer_height: 5,
            surface_threshold: 0.25,
            height_multiplier: 4.0,
            height_addition: 25.0,
            terrain_frequency: 0.05,
            cave_frequency: 0.05,
            generate_caves: true,
            tree_chance: 10,
            tall_grass_chance: 10,
            min_tree_height: 4,
            max_tree_height: 6,
            ores: default_ore_specs(),
        }
    }
}

/// The four stock ore distributions, shallow and common (coal) through deep
/// and rare (diamond). Priority runs with list order: diamond overrides
/// gold overrides iron overrides coal.
pub fn default_ore_specs() -> Vec<OreSpec> {
    vec![
        OreSpec {
            kind: TileKind::Coal,
            frequency: 0.10,
            noise_threshold: 0.78,
            min_depth: 5.0,
        },
        OreSpec {
            kind: TileKind::Iron,
            frequency: 0.12,
            noise_threshold: 0.82,
            min_depth: 10.0,
        },
        OreSpec {
            kind: TileKind::Gold,
            frequency: 0.14,
            noise_threshold: 0.88,
            min_depth: 16.0,
        },
        OreSpec {
            kind: TileKind::Diamond,
            frequency: 0.16,
            noise_threshold: 0.93,
            min_depth: 22.0,
        },
    ]
}

impl GenerationParams {
    /// Number of chunk buckets (`world_width / chunk_width`).
    ///
    /// Meaningful only for validated parameters.
    pub fn chunk_count(&self) -> u32 {
        self.world_width / self.chunk_width
    }

    /// Checks every configuration rule.
    ///
    /// All violations are fatal and reported before any generation work
    /// starts.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.world_width == 0 || self.chunk_width == 0 {
            return Err(GenerationError::ZeroExtent);
        }
        if self.world_width % self.chunk_width != 0 {
            return Err(GenerationError::WorldNotChunkAligned {
                world_width: self.world_width,
                chunk_width: self.chunk_width,
            });
        }
        if self.ores.len() != ORE_SPEC_COUNT {
            return Err(GenerationError::OreSpecCount {
                expected: ORE_SPEC_COUNT,
                found: self.ores.len(),
            });
        }
        if self.min_tree_height >= self.max_tree_height {
            return Err(GenerationError::EmptyTreeHeightRange {
                min: self.min_tree_height,
                max: self.max_tree_height,
            });
        }
        if self.tree_chance <= 0 {
            return Err(GenerationError::NonPositiveChance {
                name: "tree_chance",
                value: self.tree_chance,
            });
        }
        if self.tall_grass_chance <= 0 {
            return Err(GenerationError::NonPositiveChance {
                name: "tall_grass_chance",
                value: self.tall_grass_chance,
            });
        }
        Ok(())
    }
}
