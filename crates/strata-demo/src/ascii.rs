//! ASCII rendering of a generated world strip.
//!
//! One character per cell, highest row first, `.` for empty cells. Built
//! on demand from the finished model; generation itself never renders.

use std::collections::HashMap;

use strata_terrain::WorldModel;
use strata_tile::TileKind;

/// Character for a material tag.
pub fn kind_char(kind: TileKind) -> char {
    match kind {
        TileKind::Stone => '#',
        TileKind::Dirt => '=',
        TileKind::Grass => '"',
        TileKind::Coal => 'c',
        TileKind::Iron => 'i',
        TileKind::Gold => 'g',
        TileKind::Diamond => 'd',
        TileKind::Log => '|',
        TileKind::Leaf => '%',
        TileKind::TallGrass => '\'',
    }
}

/// Render the whole strip, cropped to placed content.
pub fn render(world: &WorldModel) -> String {
    let tiles = world.tiles();
    if tiles.is_empty() {
        return String::new();
    }

    let mut cells: HashMap<(i32, i32), char> = HashMap::with_capacity(tiles.len());
    let (mut min_x, mut max_x, mut max_y) = (i32::MAX, i32::MIN, i32::MIN);
    for tile in tiles {
        cells.insert((tile.x, tile.y), kind_char(tile.kind));
        min_x = min_x.min(tile.x);
        max_x = max_x.max(tile.x);
        max_y = max_y.max(tile.y);
    }

    let width = (max_x - min_x + 1) as usize;
    let mut out = String::with_capacity((width + 1) * (max_y + 1) as usize);
    for y in (0..=max_y).rev() {
        for x in min_x..=max_x {
            out.push(cells.get(&(x, y)).copied().unwrap_or('.'));
        }
        out.push('\n');
    }
    out
}
