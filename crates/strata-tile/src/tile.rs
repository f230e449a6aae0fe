//! Placed tiles and the fixed-width chunk grouping over them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::kind::TileKind;

/// Identifier of a chunk bucket, in `0..chunk_count`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkId(pub u32);

/// One placed tile.
///
/// Immutable once created: the generator appends tiles and never mutates or
/// removes one after placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Column (world x cell coordinate).
    pub x: i32,
    /// Row (world y cell coordinate, 0 = bedrock).
    pub y: i32,
    /// Material tag.
    pub kind: TileKind,
    /// Index into the atlas variant list for `kind`.
    pub variant: u16,
    /// Chunk bucket owning this tile.
    pub chunk: ChunkId,
}

impl Tile {
    /// Cell-centered world position a renderer should instantiate this tile
    /// at: `(x + 0.5, y + 0.5)`.
    pub fn world_position(&self) -> Vec2 {
        Vec2::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

/// A fixed-width grouping of tiles for spatial locality.
///
/// Purely a bucket for the consuming renderer; it carries no generation
/// semantics of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// This chunk's id.
    pub id: ChunkId,
    /// Indices into the world's tile sequence, in placement order.
    pub tile_indices: Vec<u32>,
}

impl Chunk {
    /// Creates an empty chunk with the given id.
    pub fn new(id: ChunkId) -> Self {
        Self {
            id,
            tile_indices: Vec::new(),
        }
    }

    /// Number of tiles assigned to this chunk.
    pub fn len(&self) -> usize {
        self.tile_indices.len()
    }

    /// `true` if no tile was assigned to this chunk.
    pub fn is_empty(&self) -> bool {
        self.tile_indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_position_is_cell_centered() {
        let tile = Tile {
            x: 3,
            y: 7,
            kind: TileKind::Grass,
            variant: 0,
            chunk: ChunkId(0),
        };
        assert_eq!(tile.world_position(), Vec2::new(3.5, 7.5));

        let origin = Tile { x: 0, y: 0, ..tile };
        assert_eq!(origin.world_position(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_new_chunk_is_empty() {
        let chunk = Chunk::new(ChunkId(4));
        assert_eq!(chunk.id, ChunkId(4));
        assert!(chunk.is_empty());
        assert_eq!(chunk.len(), 0);
    }
}
