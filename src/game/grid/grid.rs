//! Bounded cell grid.
//!
//! Cells live in a flat vector indexed by `y * width + x`. The grid does not
//! wrap around: positions past an edge simply do not exist, so edge cells have
//! fewer than eight neighbors.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::warn;
use rand::Rng;

use crate::config::game::MIN_DIMENSION;

/// Offsets of the 8 cells in a Moore neighborhood.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Fixed-size matrix of alive/dead cells.
///
/// Only built through [`Grid::new`], so `cells.len() == width * height` and
/// both sides are at least [`MIN_DIMENSION`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid of dead cells. Zero dimensions are clamped to 1.
    pub fn new(width: usize, height: usize) -> Self {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            warn!(
                "Requested a {}x{} grid, clamping to at least {}x{}",
                width, height, MIN_DIMENSION, MIN_DIMENSION
            );
        }
        let width = width.max(MIN_DIMENSION);
        let height = height.max(MIN_DIMENSION);

        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Overwrite every cell.
    ///
    /// With `randomize`, a cell is alive when a uniform draw from
    /// `0..=rand_max` hits 0, so `rand_max = 0` fills the grid. Without it,
    /// every cell is killed.
    pub fn populate<R: Rng + ?Sized>(&mut self, randomize: bool, rand_max: u32, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = randomize && rng.random_range(0..=rand_max) == 0;
        }
    }

    /// True if `(x, y)` lies inside the grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn set_alive(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = true;
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn kill(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = false;
    }

    pub fn count_live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Count alive cells among the up-to-8 in-bounds neighbors of `(x, y)`.
    /// The cell itself is never counted.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        // Fail fast on a bad center even though neighbors are clipped.
        self.index(x, y);

        let mut alive_count = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if self.contains(nx, ny) && self.cells[ny * self.width + nx] {
                alive_count += 1;
            }
        }
        alive_count
    }

    /// Deterministic hash of the dimensions and every cell state.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({}, {}) is out of bounds for a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn brute_force_neighbors(grid: &Grid, x: usize, y: usize) -> usize {
        let mut count = 0;
        for ny in y as i64 - 1..=y as i64 + 1 {
            for nx in x as i64 - 1..=x as i64 + 1 {
                if (nx, ny) == (x as i64, y as i64) || nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if grid.contains(nx, ny) && grid.is_alive(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3);
        assert_eq!((grid.width(), grid.height()), (7, 3));
        assert_eq!(grid.count_live_cells(), 0);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 7));
    }

    #[test]
    fn test_zero_dimensions_are_clamped() {
        let grid = Grid::new(0, 0);
        assert_eq!((grid.width(), grid.height()), (1, 1));
    }

    #[test]
    fn test_set_alive_and_kill() {
        let mut grid = Grid::new(4, 4);
        grid.set_alive(3, 1);
        assert!(grid.is_alive(3, 1));
        assert!(!grid.is_alive(1, 3));
        assert_eq!(grid.count_live_cells(), 1);

        grid.kill(3, 1);
        assert!(!grid.is_alive(3, 1));
        assert_eq!(grid.count_live_cells(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_access_panics() {
        let grid = Grid::new(4, 4);
        grid.is_alive(4, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds for a 1x1 grid")]
    fn test_clamped_grid_panics_past_its_only_cell() {
        let grid = Grid::new(0, 0);
        grid.is_alive(1, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_neighbor_count_panics() {
        let grid = Grid::new(4, 4);
        grid.count_alive_neighbors(0, 9);
    }

    #[test]
    fn test_rand_max_zero_fills_grid() {
        let mut grid = Grid::new(10, 6);
        grid.populate(true, 0, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.count_live_cells(), 60);
    }

    #[test]
    fn test_populate_with_same_seed_is_reproducible() {
        let mut a = Grid::new(30, 20);
        let mut b = Grid::new(30, 20);
        a.populate(true, 5, &mut StdRng::seed_from_u64(99));
        b.populate(true, 5, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_corner_and_center_neighbors() {
        let mut grid = Grid::new(3, 3);
        grid.populate(true, 0, &mut StdRng::seed_from_u64(0));
        assert_eq!(grid.count_alive_neighbors(0, 0), 3);
        assert_eq!(grid.count_alive_neighbors(1, 0), 5);
        assert_eq!(grid.count_alive_neighbors(1, 1), 8);
    }

    #[test]
    fn test_fingerprint_tracks_cell_changes() {
        let mut grid = Grid::new(5, 5);
        let empty = grid.fingerprint();
        grid.set_alive(2, 2);
        assert_ne!(grid.fingerprint(), empty);
        grid.kill(2, 2);
        assert_eq!(grid.fingerprint(), empty);
    }

    proptest! {
        #[test]
        fn test_every_grid_has_a_consistent_shape(width in 0usize..30, height in 0usize..30) {
            let grid = Grid::new(width, height);
            let (w, h) = (grid.width(), grid.height());
            prop_assert!(w >= MIN_DIMENSION && h >= MIN_DIMENSION);
            prop_assert_eq!(grid.rows().count(), h);
            prop_assert!(grid.rows().all(|row| row.len() == w));
            prop_assert!(!grid.is_alive(w - 1, h - 1));
        }

        #[test]
        fn test_populate_without_randomize_is_empty(
            width in 1usize..40,
            height in 1usize..40,
            rand_max in 0u32..10,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(width, height);
            grid.populate(true, rand_max, &mut StdRng::seed_from_u64(seed));
            grid.populate(false, rand_max, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(grid.count_live_cells(), 0);
        }

        #[test]
        fn test_neighbor_count_matches_clipped_moore_neighborhood(
            width in 1usize..24,
            height in 1usize..24,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(width, height);
            grid.populate(true, 1, &mut StdRng::seed_from_u64(seed));
            for y in 0..height {
                for x in 0..width {
                    let count = grid.count_alive_neighbors(x, y);
                    prop_assert!(count <= 8);
                    prop_assert_eq!(usize::from(count), brute_force_neighbors(&grid, x, y));
                }
            }
        }
    }
}
