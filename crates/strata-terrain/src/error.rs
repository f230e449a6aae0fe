//! Generation error taxonomy.

use strata_tile::AtlasError;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Configuration violations are reported before any generation work starts;
/// bounds violations abort the pass immediately. A failed run never yields a
/// partial world.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// World width and chunk width must both be non-zero.
    #[error("world width and chunk width must be non-zero")]
    ZeroExtent,

    /// The world must split into whole chunks.
    #[error("world width {world_width} is not divisible by chunk width {chunk_width}")]
    WorldNotChunkAligned { world_width: u32, chunk_width: u32 },

    /// A run carries a fixed number of ore distributions.
    #[error("expected exactly {expected} ore specs, found {found}")]
    OreSpecCount { expected: usize, found: usize },

    /// The random trunk height is drawn from `[min, max)`.
    #[error("tree height range [{min}, {max}) is empty")]
    EmptyTreeHeightRange { min: i32, max: i32 },

    /// Chance values divide a probability draw and must be positive.
    #[error("{name} must be positive, got {value}")]
    NonPositiveChance { name: &'static str, value: i32 },

    /// A mask was read outside its allocated grid.
    #[error("mask read at ({x}, {y}) outside the {extent}x{extent} grid")]
    MaskOutOfBounds { x: i32, y: i32, extent: u32 },

    /// A column mapped to a chunk bucket that does not exist.
    #[error("column {x} maps to chunk {index}, outside 0..{chunks}")]
    ChunkIndexOutOfRange { x: i32, index: i64, chunks: u32 },

    /// The variant atlas is unusable for this run.
    #[error(transparent)]
    Atlas(#[from] AtlasError),
}
