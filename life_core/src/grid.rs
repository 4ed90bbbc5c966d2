// grid.rs - Toroidal Life grid with two-phase evaluation

use rand::Rng;

use crate::cell::Cell;
use crate::error::GridError;
use crate::patterns::Pattern;

/// A fixed-size toroidal Game of Life grid.
///
/// Cells live in a flat row-major `Vec` (`index = y * width + x`) and are
/// created once at construction; `evaluate` only flips their state in
/// place. Both axes wrap, so neighbor lookups never leave the grid.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// An all-dead grid; both construction modes start from this.
    fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y, false)))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
            generation: 0,
        })
    }

    /// Random construction: each cell within `seed_radius` of the grid
    /// center is alive with probability 0.5; everything further out is
    /// dead. The RNG is drawn once per in-radius cell, in row-major
    /// order.
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        seed_radius: f32,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::dead(width, height)?;
        let center_x = width as f32 / 2.0;
        let center_y = height as f32 / 2.0;
        let mut live = 0usize;
        for cell in &mut grid.cells {
            let dx = cell.x as f32 - center_x;
            let dy = cell.y as f32 - center_y;
            if (dx * dx + dy * dy).sqrt() < seed_radius && rng.random_bool(0.5) {
                cell.alive = true;
                cell.pending = true;
                live += 1;
            }
        }
        tracing::info!(width, height, live, "seeded random grid");
        Ok(grid)
    }

    /// Pattern construction: the matrix is placed horizontally centered at
    /// vertical row `offset`, consumed row-major; all other cells are
    /// dead.
    pub fn with_pattern(
        width: usize,
        height: usize,
        pattern: &Pattern<'_>,
        offset: usize,
    ) -> Result<Self, GridError> {
        pattern.validate()?;
        let mut grid = Self::dead(width, height)?;
        let pattern_width = pattern.width();
        let pattern_height = pattern.height();
        if pattern_width > width || offset + pattern_height > height {
            return Err(GridError::PatternDoesNotFit {
                pattern_width,
                pattern_height,
                offset,
                grid_width: width,
                grid_height: height,
            });
        }
        let x0 = (width - pattern_width) / 2;
        for (dy, row) in pattern.rows.iter().enumerate() {
            for (dx, &alive) in row.iter().enumerate() {
                if alive {
                    let index = (offset + dy) * width + x0 + dx;
                    grid.cells[index].alive = true;
                    grid.cells[index].pending = true;
                }
            }
        }
        tracing::info!(pattern = pattern.name, width, height, offset, "seeded pattern grid");
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Generations evaluated since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Row-major index for in-range coordinates, `None` otherwise. The
    /// `None` arm is defensive: wrapped neighbor lookups never reach it
    /// on a well-formed grid.
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index_of(x, y).map(|index| &self.cells[index])
    }

    /// Fresh row-major traversal over all cells. Restartable: repeated
    /// calls yield the same cells in the same order, and iterating never
    /// mutates the grid.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let left = if x == 0 { self.width - 1 } else { x - 1 };
        let right = if x + 1 == self.width { 0 } else { x + 1 };
        let above = if y == 0 { self.height - 1 } else { y - 1 };
        let below = if y + 1 == self.height { 0 } else { y + 1 };
        let neighbors = [
            (left, above),
            (x, above),
            (right, above),
            (left, y),
            (right, y),
            (left, below),
            (x, below),
            (right, below),
        ];
        neighbors
            .into_iter()
            .filter(|&(nx, ny)| {
                self.index_of(nx, ny)
                    .is_some_and(|index| self.cells[index].alive)
            })
            .count() as u8
    }

    /// One discrete generation, strictly two-phase.
    ///
    /// Stage: every neighbor count is taken against the previous
    /// generation and parked in `pending`. Commit: flipped cells get
    /// `last_transition = now` (one shared timestamp for the whole step)
    /// and `alive` takes the staged value. Fusing the passes would let
    /// early updates corrupt later neighbor counts.
    pub fn evaluate(&mut self, now: f64) {
        for index in 0..self.cells.len() {
            let cell = self.cells[index];
            let count = self.live_neighbors(cell.x, cell.y);
            self.cells[index].pending = match (cell.alive, count) {
                (true, 2) | (true, 3) => true, // Survival
                (false, 3) => true,            // Birth
                _ => false,                    // Death or stays dead
            };
        }

        let mut flips = 0usize;
        for cell in &mut self.cells {
            if cell.pending != cell.alive {
                cell.last_transition = now;
                flips += 1;
            }
            cell.alive = cell.pending;
        }
        self.generation += 1;
        tracing::debug!(generation = self.generation, flips, "generation committed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Builds a grid whose entire area is seeded from `#`/`.` rows.
    fn grid_from(rows: &[&str]) -> Grid {
        let matrix: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.bytes().map(|b| b == b'#').collect())
            .collect();
        let slices: Vec<&[bool]> = matrix.iter().map(Vec::as_slice).collect();
        let pattern = Pattern {
            name: "test",
            rows: &slices,
        };
        Grid::with_pattern(rows[0].len(), rows.len(), &pattern, 0).unwrap()
    }

    fn live_coords(grid: &Grid) -> Vec<(usize, usize)> {
        grid.cells()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.x(), cell.y()))
            .collect()
    }

    /// Independent next-generation oracle over a frozen liveness
    /// snapshot, using a different wrap formulation than production.
    fn reference_next(snapshot: &[bool], width: usize, height: usize) -> Vec<bool> {
        (0..width * height)
            .map(|index| {
                let (x, y) = ((index % width) as i64, (index / width) as i64);
                let mut count = 0;
                for dy in -1..=1i64 {
                    for dx in -1..=1i64 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = (x + dx).rem_euclid(width as i64) as usize;
                        let ny = (y + dy).rem_euclid(height as i64) as usize;
                        if snapshot[ny * width + nx] {
                            count += 1;
                        }
                    }
                }
                matches!((snapshot[index], count), (true, 2) | (true, 3) | (false, 3))
            })
            .collect()
    }

    #[test]
    fn rejects_zero_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Grid::random(0, 5, 9.0, &mut rng),
            Err(GridError::EmptyGrid { width: 0, height: 5 })
        ));
        assert!(matches!(
            Grid::random(5, 0, 9.0, &mut rng),
            Err(GridError::EmptyGrid { width: 5, height: 0 })
        ));
    }

    #[test]
    fn rejects_patterns_that_do_not_fit() {
        let pattern = Pattern {
            name: "wide",
            rows: &[&[true, true, true, true]],
        };
        assert!(matches!(
            Grid::with_pattern(3, 3, &pattern, 0),
            Err(GridError::PatternDoesNotFit { .. })
        ));
        let tall = Pattern {
            name: "tall",
            rows: &[&[true], &[true], &[true]],
        };
        assert!(matches!(
            Grid::with_pattern(5, 4, &tall, 2),
            Err(GridError::PatternDoesNotFit { offset: 2, .. })
        ));
    }

    #[test]
    fn rejects_ragged_patterns() {
        let ragged = Pattern {
            name: "ragged",
            rows: &[&[true, true], &[true]],
        };
        assert!(matches!(
            Grid::with_pattern(10, 10, &ragged, 0),
            Err(GridError::RaggedPattern { row: 1, .. })
        ));
    }

    #[test]
    fn pattern_is_centered_at_the_vertical_offset() {
        let glider = &crate::patterns::PATTERNS[0];
        let grid = Grid::with_pattern(10, 10, glider, 2).unwrap();
        assert_eq!(
            live_coords(&grid),
            vec![(4, 2), (5, 3), (3, 4), (4, 4), (5, 4)]
        );
    }

    #[test]
    fn index_lookup_is_a_bijection_with_a_sentinel() {
        let grid = grid_from(&["...", "...", "..."]);
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(2, 1), Some(5));
        assert_eq!(grid.index_of(3, 0), None);
        assert_eq!(grid.index_of(0, 3), None);
    }

    #[test]
    fn corners_wrap_to_the_opposite_corner() {
        let grid = grid_from(&["#..", "...", "..."]);
        // The single live cell at (0,0) is a wrapped neighbor of every
        // opposite edge and corner cell. On a 3x3 torus every cell is
        // adjacent to all eight others, so even the center sees it.
        assert_eq!(grid.live_neighbors(2, 2), 1);
        assert_eq!(grid.live_neighbors(2, 0), 1);
        assert_eq!(grid.live_neighbors(0, 2), 1);
        assert_eq!(grid.live_neighbors(1, 1), 1);
    }

    #[test]
    fn distant_cells_are_not_wrapped_neighbors() {
        // A 5x5 torus is large enough for genuine non-adjacency: (2,2)
        // is two cells away from (0,0) on both axes, wrap included.
        let grid = grid_from(&["#....", ".....", ".....", ".....", "....."]);
        assert_eq!(grid.live_neighbors(2, 2), 0);
        assert_eq!(grid.live_neighbors(2, 0), 0);
        assert_eq!(grid.live_neighbors(0, 2), 0);
        assert_eq!(grid.live_neighbors(4, 4), 1);
    }

    #[test]
    fn torus_regularity_gives_every_cell_eight_neighbors() {
        let grid = grid_from(&["####", "####", "####"]);
        for cell in grid.cells() {
            assert_eq!(grid.live_neighbors(cell.x(), cell.y()), 8);
        }
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = grid_from(&["...", ".#.", "..."]);
        grid.evaluate(0.0);
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn block_is_stable() {
        let mut grid = grid_from(&["....", ".##.", ".##.", "...."]);
        let before = live_coords(&grid);
        grid.evaluate(0.0);
        grid.evaluate(1.0);
        assert_eq!(live_coords(&grid), before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut grid = grid_from(&[".....", ".....", ".###.", ".....", "....."]);
        grid.evaluate(0.0);
        assert_eq!(live_coords(&grid), vec![(2, 1), (2, 2), (2, 3)]);
        grid.evaluate(1.0);
        assert_eq!(live_coords(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn evaluate_matches_a_frozen_snapshot_oracle() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::random(16, 12, 7.0, &mut rng).unwrap();
        for step in 0..5 {
            let snapshot: Vec<bool> = grid.cells().map(Cell::is_alive).collect();
            let expected = reference_next(&snapshot, 16, 12);
            grid.evaluate(step as f64);
            let actual: Vec<bool> = grid.cells().map(Cell::is_alive).collect();
            assert_eq!(actual, expected, "generation {step}");
        }
    }

    #[test]
    fn flips_are_stamped_with_the_shared_evaluation_time() {
        let mut grid = grid_from(&[".....", ".....", ".###.", ".....", "....."]);
        grid.evaluate(123.5);
        for cell in grid.cells() {
            match (cell.x(), cell.y()) {
                // Center survives: no flip, original stamp retained.
                (2, 2) => assert_eq!(cell.last_transition(), f64::NEG_INFINITY),
                // Births and deaths all share the evaluation timestamp.
                (2, 1) | (2, 3) | (1, 2) | (3, 2) => {
                    assert_eq!(cell.last_transition(), 123.5)
                }
                _ => assert_eq!(cell.last_transition(), f64::NEG_INFINITY),
            }
        }
    }

    #[test]
    fn unflipped_cells_keep_their_previous_stamp() {
        let mut grid = grid_from(&["....", ".##.", ".##.", "...."]);
        grid.evaluate(10.0);
        grid.evaluate(20.0);
        // The block never flips, so no cell ever gets stamped.
        for cell in grid.cells() {
            assert_eq!(cell.last_transition(), f64::NEG_INFINITY);
        }
    }

    #[test]
    fn iteration_is_restartable_and_row_major() {
        let grid = grid_from(&["#..", ".#.", "..#"]);
        let first: Vec<(usize, usize)> = grid.cells().map(|c| (c.x(), c.y())).collect();
        let second: Vec<(usize, usize)> = grid.cells().map(|c| (c.x(), c.y())).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], (0, 0));
        assert_eq!(first[1], (1, 0));
        assert_eq!(first[first.len() - 1], (2, 2));
    }

    #[test]
    fn seeding_is_deterministic_for_a_fixed_rng() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = Grid::random(30, 30, 9.0, &mut a).unwrap();
        let second = Grid::random(30, 30, 9.0, &mut b).unwrap();
        let first_live: Vec<bool> = first.cells().map(Cell::is_alive).collect();
        let second_live: Vec<bool> = second.cells().map(Cell::is_alive).collect();
        assert_eq!(first_live, second_live);
    }

    #[test]
    fn random_seeding_stays_within_the_radius() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::random(40, 40, 6.0, &mut rng).unwrap();
        assert!(grid.live_count() > 0);
        for cell in grid.cells().filter(|cell| cell.is_alive()) {
            let dx = cell.x() as f32 - 20.0;
            let dy = cell.y() as f32 - 20.0;
            assert!((dx * dx + dy * dy).sqrt() < 6.0);
        }
    }
}
