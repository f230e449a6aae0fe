//! Surface decoration: trees and tall grass planted on column tops.

use rand::Rng;
use strata_tile::TileKind;

use crate::error::GenerationError;

/// Outcome of one column's decoration draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoration {
    /// Neither draw fired; the column stays bare.
    None,
    /// The tree draw fired with this trunk height.
    Tree { trunk_height: i32 },
    /// The fallback tall-grass draw fired.
    TallGrass,
}

impl Decoration {
    /// Emits this outcome's tiles above surface row `surface_y` of column
    /// `x`.
    pub fn apply(
        self,
        x: i32,
        surface_y: i32,
        place: &mut impl FnMut(i32, i32, TileKind) -> Result<(), GenerationError>,
    ) -> Result<(), GenerationError> {
        match self {
            Decoration::None => Ok(()),
            Decoration::Tree { trunk_height } => plant_tree(x, surface_y + 1, trunk_height, place),
            Decoration::TallGrass => place(x, surface_y + 1, TileKind::TallGrass),
        }
    }
}

/// Decides what, if anything, grows on top of each column.
///
/// Exactly one of two draws can fire per column: the tree draw first, the
/// tall-grass draw only as fallback. Both draws come from the run RNG. The
/// caller gates on the surface row having actually produced a tile before
/// drawing at all.
pub struct DecorationPlanner {
    tree_chance: i32,
    tall_grass_chance: i32,
    min_tree_height: i32,
    max_tree_height: i32,
}

impl DecorationPlanner {
    /// Creates a planner. Chances are caller-validated to be positive and
    /// the tree height range to be non-empty.
    pub fn new(
        tree_chance: i32,
        tall_grass_chance: i32,
        min_tree_height: i32,
        max_tree_height: i32,
    ) -> Self {
        Self {
            tree_chance,
            tall_grass_chance,
            min_tree_height,
            max_tree_height,
        }
    }

    /// Draws one column's decoration outcome from the run RNG.
    ///
    /// A draw of 1 from `0..tree_chance` grows a tree with a trunk height
    /// drawn from `[min_tree_height, max_tree_height)`; otherwise a draw of
    /// 1 from `0..tall_grass_chance` places tall grass.
    pub fn draw(&self, rng: &mut impl Rng) -> Decoration {
        if rng.random_range(0..self.tree_chance) == 1 {
            Decoration::Tree {
                trunk_height: rng.random_range(self.min_tree_height..self.max_tree_height),
            }
        } else if rng.random_range(0..self.tall_grass_chance) == 1 {
            Decoration::TallGrass
        } else {
            Decoration::None
        }
    }
}

/// Places a trunk of `trunk_height` Log tiles rooted at `(x, base_y)`, then
/// the fixed 7-tile Leaf canopy: three rows on the trunk column starting at
/// the trunk top, two rows on each side column.
pub fn plant_tree(
    x: i32,
    base_y: i32,
    trunk_height: i32,
    place: &mut impl FnMut(i32, i32, TileKind) -> Result<(), GenerationError>,
) -> Result<(), GenerationError> {
    for i in 0..trunk_height {
        place(x, base_y + i, TileKind::Log)?;
    }

    place(x, base_y + trunk_height, TileKind::Leaf)?;
    place(x, base_y + trunk_height + 1, TileKind::Leaf)?;
    place(x, base_y + trunk_height + 2, TileKind::Leaf)?;

    place(x - 1, base_y + trunk_height, TileKind::Leaf)?;
    place(x - 1, base_y + trunk_height + 1, TileKind::Leaf)?;

    place(x + 1, base_y + trunk_height, TileKind::Leaf)?;
    place(x + 1, base_y + trunk_height + 1, TileKind::Leaf)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn record(
        cells: &mut Vec<(i32, i32, TileKind)>,
    ) -> impl FnMut(i32, i32, TileKind) -> Result<(), GenerationError> + '_ {
        move |x, y, kind| {
            cells.push((x, y, kind));
            Ok(())
        }
    }

    #[test]
    fn test_tree_structure_for_every_height() {
        for trunk in 1..8 {
            let mut cells = Vec::new();
            plant_tree(10, 6, trunk, &mut record(&mut cells)).unwrap();

            let logs: Vec<_> = cells.iter().filter(|c| c.2 == TileKind::Log).collect();
            let leaves: Vec<_> = cells.iter().filter(|c| c.2 == TileKind::Leaf).collect();
            assert_eq!(logs.len(), trunk as usize, "trunk height {trunk}");
            assert_eq!(leaves.len(), 7, "canopy is always 7 tiles");

            for (i, log) in logs.iter().enumerate() {
                assert_eq!((log.0, log.1), (10, 6 + i as i32));
            }

            let top = 6 + trunk;
            let expected_leaves = [
                (10, top),
                (10, top + 1),
                (10, top + 2),
                (9, top),
                (9, top + 1),
                (11, top),
                (11, top + 1),
            ];
            for expected in expected_leaves {
                assert!(
                    leaves.iter().any(|l| (l.0, l.1) == expected),
                    "missing leaf at {expected:?} for trunk height {trunk}"
                );
            }
        }
    }

    #[test]
    fn test_draw_outcomes_are_exclusive() {
        let planner = DecorationPlanner::new(2, 2, 4, 6);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut saw_tree = false;
        let mut saw_grass = false;
        let mut saw_none = false;
        for _ in 0..500 {
            match planner.draw(&mut rng) {
                Decoration::Tree { trunk_height } => {
                    assert!((4..6).contains(&trunk_height));
                    saw_tree = true;
                }
                Decoration::TallGrass => saw_grass = true,
                Decoration::None => saw_none = true,
            }
        }
        assert!(saw_tree, "a 1-in-2 tree draw should fire in 500 tries");
        assert!(saw_grass, "the fallback grass draw should fire in 500 tries");
        assert!(saw_none, "some columns should stay bare");
    }

    #[test]
    fn test_chance_of_one_never_fires() {
        // A draw from 0..1 can only yield 0, never the firing value 1.
        let planner = DecorationPlanner::new(1, 1, 4, 6);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(planner.draw(&mut rng), Decoration::None);
        }
    }

    #[test]
    fn test_draws_are_deterministic() {
        let planner = DecorationPlanner::new(5, 3, 4, 9);
        let mut rng_a = ChaCha8Rng::seed_from_u64(123);
        let mut rng_b = ChaCha8Rng::seed_from_u64(123);
        for _ in 0..300 {
            assert_eq!(planner.draw(&mut rng_a), planner.draw(&mut rng_b));
        }
    }

    #[test]
    fn test_apply_tall_grass_sits_on_the_surface() {
        let mut cells = Vec::new();
        Decoration::TallGrass
            .apply(4, 9, &mut record(&mut cells))
            .unwrap();
        assert_eq!(cells, vec![(4, 10, TileKind::TallGrass)]);
    }

    #[test]
    fn test_apply_tree_roots_above_the_surface() {
        let mut cells = Vec::new();
        Decoration::Tree { trunk_height: 4 }
            .apply(4, 9, &mut record(&mut cells))
            .unwrap();
        assert_eq!(cells[0], (4, 10, TileKind::Log), "trunk base is surface + 1");
        assert_eq!(cells.len(), 4 + 7);
    }

    #[test]
    fn test_apply_none_places_nothing() {
        let mut cells = Vec::new();
        Decoration::None.apply(4, 9, &mut record(&mut cells)).unwrap();
        assert!(cells.is_empty());
    }
}
