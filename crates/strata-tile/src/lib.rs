//! Tile domain model for strata: material tags, placed tiles, chunk buckets,
//! and the visual-variant atlas consumed by renderers.

mod atlas;
mod kind;
mod tile;

pub use atlas::{AtlasError, TileAtlas, VariantId};
pub use kind::TileKind;
pub use tile::{Chunk, ChunkId, Tile};
