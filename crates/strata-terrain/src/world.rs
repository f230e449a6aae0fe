//! The generation pipeline and its aggregate output.

use hashbrown::HashSet;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use strata_tile::{Chunk, ChunkId, Tile, TileAtlas, TileKind};
use tracing::{debug, info};

use crate::chunking::ChunkPartitioner;
use crate::column::ColumnResolver;
use crate::decoration::DecorationPlanner;
use crate::error::GenerationError;
use crate::height::HeightProfile;
use crate::mask::OccupancyMask;
use crate::noise_field::NoiseField;
use crate::params::GenerationParams;
use crate::seed::WorldSeed;

/// The aggregate output of one generation run: every placed tile in
/// placement order, the chunk partition over them, and the
/// occupied-coordinate set for adjacency queries.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldModel {
    tiles: Vec<Tile>,
    chunks: Vec<Chunk>,
    occupied: HashSet<(i32, i32)>,
}

impl WorldModel {
    /// All placed tiles, in placement order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of placed tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The chunk partition, ordered by id.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// One chunk by id.
    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(id.0 as usize)
    }

    /// Tiles assigned to one chunk, in placement order.
    pub fn chunk_tiles(&self, id: ChunkId) -> impl Iterator<Item = &Tile> {
        self.chunk(id)
            .map(|c| c.tile_indices.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.tiles[i as usize])
    }

    /// `true` if a tile occupies cell `(x, y)`.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.occupied.contains(&(x, y))
    }
}

/// Append-only accumulator for tiles, chunks, and the occupied set.
struct WorldBuilder<'a> {
    atlas: &'a TileAtlas,
    partitioner: ChunkPartitioner,
    rng: ChaCha8Rng,
    tiles: Vec<Tile>,
    chunks: Vec<Chunk>,
    occupied: HashSet<(i32, i32)>,
}

impl WorldBuilder<'_> {
    /// Places one tile, drawing its variant from the run RNG and assigning
    /// its chunk from its column.
    ///
    /// A cell that is already occupied is left untouched (first placement
    /// wins); the model never holds two tiles at one cell, even when
    /// decoration from neighboring columns collides.
    fn place(&mut self, x: i32, y: i32, kind: TileKind) -> Result<(), GenerationError> {
        if self.occupied.contains(&(x, y)) {
            return Ok(());
        }

        let chunk = self.partitioner.chunk_index(x)?;
        let variant = self.rng.random_range(0..self.atlas.variant_count(kind)?) as u16;

        let index = self.tiles.len() as u32;
        self.tiles.push(Tile {
            x,
            y,
            kind,
            variant,
            chunk,
        });
        self.chunks[chunk.0 as usize].tile_indices.push(index);
        self.occupied.insert((x, y));
        Ok(())
    }
}

/// Generates a complete world from immutable parameters and a seed.
///
/// Pure function of its inputs: the noise family is offset by the seed, and
/// every random draw (variant indices, tree heights, decoration coin flips)
/// comes from a ChaCha8 stream derived from the same seed, so identical
/// inputs produce identical models. All occupancy masks are built once up
/// front; columns are then resolved strictly left to right, each followed by
/// its decoration pass. Any error aborts the run; a partial model is never
/// returned.
pub fn generate(
    params: &GenerationParams,
    atlas: &TileAtlas,
    seed: WorldSeed,
) -> Result<WorldModel, GenerationError> {
    params.validate()?;
    atlas.validate_complete()?;

    let start = std::time::Instant::now();
    info!(
        world_width = params.world_width,
        chunks = params.chunk_count(),
        seed = seed.offset(),
        caves = params.generate_caves,
        "generating world"
    );

    let noise = NoiseField::new(seed);

    let cave_mask = OccupancyMask::from_noise(
        &noise,
        params.cave_frequency,
        params.surface_threshold,
        params.world_width,
    );
    let ore_masks: Vec<OccupancyMask> = params
        .ores
        .iter()
        .map(|ore| {
            OccupancyMask::from_noise(&noise, ore.frequency, ore.noise_threshold, params.world_width)
        })
        .collect();
    debug!(
        masks = ore_masks.len() + 1,
        extent = params.world_width,
        solid_cells = cave_mask.count_set(),
        "occupancy masks ready"
    );

    let profile = HeightProfile::new(
        &noise,
        params.terrain_frequency,
        params.height_multiplier,
        params.height_addition,
    );
    let resolver = ColumnResolver::new(
        &cave_mask,
        &ore_masks,
        &params.ores,
        params.dirt_layer_height,
        params.generate_caves,
    );
    let planner = DecorationPlanner::new(
        params.tree_chance,
        params.tall_grass_chance,
        params.min_tree_height,
        params.max_tree_height,
    );

    let mut builder = WorldBuilder {
        atlas,
        partitioner: ChunkPartitioner::new(params.chunk_width, params.chunk_count()),
        rng: seed.rng(),
        tiles: Vec::new(),
        chunks: (0..params.chunk_count())
            .map(|i| Chunk::new(ChunkId(i)))
            .collect(),
        occupied: HashSet::new(),
    };

    for x in 0..params.world_width as i32 {
        let height = profile.height_at(x);
        resolver.resolve_column(x, height, |cx, cy, kind| builder.place(cx, cy, kind))?;

        // Decoration fires only when the surface row actually materialized
        // (the cave gate may have removed it).
        let surface_y = height.floor() as i32 - 1;
        if surface_y >= 0 && builder.occupied.contains(&(x, surface_y)) {
            let decoration = planner.draw(&mut builder.rng);
            decoration.apply(x, surface_y, &mut |cx, cy, kind| builder.place(cx, cy, kind))?;
        }
    }

    let model = WorldModel {
        tiles: builder.tiles,
        chunks: builder.chunks,
        occupied: builder.occupied,
    };
    info!(
        tiles = model.tile_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "world generated"
    );
    Ok(model)
}
