//! The closed set of material tags a generated tile can carry.

use serde::{Deserialize, Serialize};

/// Semantic material tag for a tile, independent of its visual
/// representation.
///
/// The generator only ever selects a tag plus a variant index into the
/// [`TileAtlas`](crate::TileAtlas); what a tag looks like on screen is the
/// consuming renderer's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Subsurface rock below the dirt layer.
    Stone,
    /// Soil between the stone body and the surface row.
    Dirt,
    /// The topmost row of a terrain column.
    Grass,
    /// Ore embedded in the stone body.
    Coal,
    /// Ore embedded in the stone body.
    Iron,
    /// Ore embedded in the stone body.
    Gold,
    /// Ore embedded in the stone body.
    Diamond,
    /// Tree trunk segment.
    Log,
    /// Tree canopy tile.
    Leaf,
    /// Single-tile surface decoration.
    TallGrass,
}

impl TileKind {
    /// All kinds, in declaration order.
    pub const ALL: [TileKind; 10] = [
        TileKind::Stone,
        TileKind::Dirt,
        TileKind::Grass,
        TileKind::Coal,
        TileKind::Iron,
        TileKind::Gold,
        TileKind::Diamond,
        TileKind::Log,
        TileKind::Leaf,
        TileKind::TallGrass,
    ];

    /// Stable lowercase name, used for logging and registry-style lookups.
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Stone => "stone",
            TileKind::Dirt => "dirt",
            TileKind::Grass => "grass",
            TileKind::Coal => "coal",
            TileKind::Iron => "iron",
            TileKind::Gold => "gold",
            TileKind::Diamond => "diamond",
            TileKind::Log => "log",
            TileKind::Leaf => "leaf",
            TileKind::TallGrass => "tall_grass",
        }
    }

    /// Dense index in `0..TileKind::ALL.len()`, usable for per-kind tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the tags placed by surface decoration rather than by the
    /// column walk (Log, Leaf, TallGrass).
    pub fn is_decoration(self) -> bool {
        matches!(self, TileKind::Log | TileKind::Leaf | TileKind::TallGrass)
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_kind_once() {
        for (i, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(
                kind.index(),
                i,
                "ALL must list kinds in declaration order: {kind} at slot {i}"
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        for a in TileKind::ALL {
            for b in TileKind::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name(), "{a:?} and {b:?} share a name");
                }
            }
        }
    }

    #[test]
    fn test_decoration_split() {
        assert!(TileKind::Log.is_decoration());
        assert!(TileKind::Leaf.is_decoration());
        assert!(TileKind::TallGrass.is_decoration());
        assert!(!TileKind::Stone.is_decoration());
        assert!(!TileKind::Grass.is_decoration());
        assert!(!TileKind::Diamond.is_decoration());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(TileKind::TallGrass.to_string(), "tall_grass");
        assert_eq!(TileKind::Stone.to_string(), "stone");
    }
}
