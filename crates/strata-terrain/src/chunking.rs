//! Assignment of columns to fixed-width chunk buckets.

use strata_tile::ChunkId;

use crate::error::GenerationError;

/// Maps a tile's column to its owning chunk.
///
/// The index is the column divided by the chunk width, rounded half to even
/// (banker's rounding): a column within half a chunk width of a boundary
/// lands in the neighboring bucket. At the world's upper edge the rounded
/// index can reach `chunk_count`; that overshoot, also reachable by canopy
/// spill one column past the edge, is clamped back into range. Anything
/// farther out is a bounds error.
#[derive(Clone, Copy, Debug)]
pub struct ChunkPartitioner {
    chunk_width: u32,
    chunk_count: u32,
}

impl ChunkPartitioner {
    /// Creates a partitioner over `chunk_count` buckets of `chunk_width`
    /// columns. Both values are caller-validated to be non-zero.
    pub fn new(chunk_width: u32, chunk_count: u32) -> Self {
        Self {
            chunk_width,
            chunk_count,
        }
    }

    /// Number of chunk buckets.
    pub fn chunk_count(&self) -> u32 {
        self.chunk_count
    }

    /// Chunk bucket owning column `x`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::ChunkIndexOutOfRange`] when the rounded
    /// index falls outside `0..=chunk_count`, i.e. more than the documented
    /// half-chunk fuzz beyond the world.
    pub fn chunk_index(&self, x: i32) -> Result<ChunkId, GenerationError> {
        let raw = (f64::from(x) / f64::from(self.chunk_width)).round_ties_even() as i64;
        if raw < 0 || raw > i64::from(self.chunk_count) {
            return Err(GenerationError::ChunkIndexOutOfRange {
                x,
                index: raw,
                chunks: self.chunk_count,
            });
        }
        Ok(ChunkId(raw.min(i64::from(self.chunk_count) - 1) as u32))
    }
}
