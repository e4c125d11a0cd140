mod error;

pub use error::{GridError, GridResult};

use crate::utils::{Config, Lcg};

/// Conway's Game of Life on an `N x N` field with opposite edges stitched
/// together.
///
/// Cells are stored row-major. The next generation is written into a second
/// buffer and the two are swapped after every step.
#[derive(Clone, Debug)]
pub struct TorusGrid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    side: usize,
    generation: u64,
    rng: Lcg,
    seed: i64,
}

impl TorusGrid {
    /// Create a randomly filled field (see [`TorusGrid::initialize`]).
    pub fn new(side: usize, seed: i64) -> GridResult<Self> {
        let mut grid = Self::blank(side)?;
        grid.initialize(seed);
        log::info!(
            "created {}x{} torus grid, seed {}, population {}",
            side,
            side,
            seed,
            grid.population()
        );
        Ok(grid)
    }

    /// Create a field with all cells dead.
    pub fn blank(side: usize) -> GridResult<Self> {
        if side == 0 {
            return Err(GridError::InvalidSize(side));
        }
        let size = side.checked_mul(side).ok_or(GridError::TooLarge(side))?;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            side,
            generation: 0,
            rng: Lcg::new(0),
            seed: 0,
        })
    }

    /// Reseeds the generator and refills the field: each cell, row by row, is
    /// alive iff the next draw is below [`Config::LIVE_PROBABILITY`].
    /// Resets the generation counter.
    pub fn initialize(&mut self, seed: i64) {
        self.seed = seed;
        self.rng.seed(seed);
        for cell in self.cells_curr.iter_mut() {
            *cell = self.rng.next() < Config::LIVE_PROBABILITY;
        }
        self.generation = 0;
    }

    pub fn restart(&mut self, seed: i64) {
        self.initialize(seed);
        log::info!("restarted with seed {}", seed);
    }

    pub fn side_length(&self) -> usize {
        self.side
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed of the last (re)initialization.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&c| c).count()
    }

    /// Current generation, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    fn index(&self, row: i64, col: i64) -> usize {
        let n = self.side as i64;
        row.rem_euclid(n) as usize * self.side + col.rem_euclid(n) as usize
    }

    /// State of the cell; indices of any range wrap around the torus.
    pub fn cell_at(&self, row: i64, col: i64) -> bool {
        self.cells_curr[self.index(row, col)]
    }

    pub fn set_cell(&mut self, row: i64, col: i64, alive: bool) {
        let i = self.index(row, col);
        self.cells_curr[i] = alive;
    }

    fn count_neibs(&self, row: usize, col: usize) -> usize {
        let n = self.side;
        let r1 = if row == 0 { n - 1 } else { row - 1 };
        let r2 = if row == n - 1 { 0 } else { row + 1 };
        let c1 = if col == 0 { n - 1 } else { col - 1 };
        let c2 = if col == n - 1 { 0 } else { col + 1 };
        let at = |r: usize, c: usize| self.cells_curr[r * n + c] as usize;
        at(r1, c1)
            + at(r1, col)
            + at(r1, c2)
            + at(row, c1)
            + at(row, c2)
            + at(r2, c1)
            + at(r2, col)
            + at(r2, c2)
    }

    /// Advances the field by one generation.
    pub fn step(&mut self) {
        let n = self.side;
        for row in 0..n {
            for col in 0..n {
                let neibs = self.count_neibs(row, col);
                let alive = self.cells_curr[row * n + col];
                self.cells_next[row * n + col] = if alive {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
        log::trace!("generation {}", self.generation);
    }

    /// Advances the field by `n` generations.
    pub fn update(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }
}
