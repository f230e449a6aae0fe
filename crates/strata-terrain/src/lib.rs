//! Deterministic 2D tile-world generation: seed-offset coherent noise,
//! occupancy masks, layered column resolution, surface decoration, and
//! fixed-width chunk partitioning.

mod chunking;
mod column;
mod decoration;
mod error;
mod height;
mod mask;
mod noise_field;
mod params;
mod seed;
mod world;

pub use chunking::ChunkPartitioner;
pub use column::ColumnResolver;
pub use decoration::{Decoration, DecorationPlanner, plant_tree};
pub use error::GenerationError;
pub use height::HeightProfile;
pub use mask::OccupancyMask;
pub use noise_field::NoiseField;
pub use params::{GenerationParams, ORE_SPEC_COUNT, OreSpec, default_ore_specs};
pub use seed::WorldSeed;
pub use world::{WorldModel, generate};
