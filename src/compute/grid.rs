//! Life grid - Double-buffered toroidal cellular automaton.
//!
//! Each generation is computed in two phases: every cell's next state is
//! written into a scratch buffer while the visible buffer is only read, then
//! the two buffers are swapped. Neighbour counts therefore always see one
//! consistent snapshot of the whole grid.

use rand::Rng;
use rayon::prelude::*;

use super::rules::{count_neighbors, next_state};
use crate::schema::{ConfigError, GridConfig, Pattern, Seed, random_population};

/// Read-only view of a single cell, as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
    /// Visible state as of the last completed generation.
    pub alive: bool,
}

/// Fixed-size toroidal Game of Life grid.
///
/// Data is stored row-major with indexing `[x * columns + y]`.
#[derive(Debug, Clone)]
pub struct LifeGrid {
    rows: usize,
    columns: usize,
    /// Visible state.
    current: Vec<bool>,
    /// Staged next state; only meaningful while a generation is computed.
    next: Vec<bool>,
    generation: u64,
}

impl LifeGrid {
    /// Create a grid whose cells start alive with probability `threshold`.
    ///
    /// Exactly one `f64` is drawn from `rng` per cell, in `[x][y]` order.
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        threshold: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let config = GridConfig { rows, columns };
        let alive = random_population(&config, threshold, rng)?;
        Ok(Self::from_mask(config, alive))
    }

    /// Create grid from seed.
    pub fn from_seed(seed: &Seed, config: &GridConfig) -> Result<Self, ConfigError> {
        let alive = seed.generate(config)?;
        Ok(Self::from_mask(*config, alive))
    }

    /// Create a grid with exactly the listed `(x, y)` cells alive.
    pub fn from_cells(
        rows: usize,
        columns: usize,
        cells: &[(usize, usize)],
    ) -> Result<Self, ConfigError> {
        let seed = Seed {
            pattern: Pattern::Cells {
                cells: cells.to_vec(),
            },
        };
        Self::from_seed(&seed, &GridConfig { rows, columns })
    }

    fn from_mask(config: GridConfig, alive: Vec<bool>) -> Self {
        debug_assert_eq!(alive.len(), config.grid_size());
        log::debug!(
            "Created {}x{} grid with {} live cells",
            config.rows,
            config.columns,
            alive.iter().filter(|&&a| a).count()
        );

        Self {
            rows: config.rows,
            columns: config.columns,
            next: alive.clone(),
            current: alive,
            generation: 0,
        }
    }

    /// Number of rows (X dimension).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (Y dimension).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid dimensions as a config.
    pub fn config(&self) -> GridConfig {
        GridConfig {
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Number of completed generations.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.rows && y < self.columns,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.rows,
            self.columns
        );
        x * self.columns + y
    }

    /// Visible state of cell `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the grid.
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current[self.idx(x, y)]
    }

    /// Number of live cells among the 8 wrapped neighbours of `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the grid.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        self.idx(x, y);
        count_neighbors(&self.current, self.rows, self.columns, x, y)
    }

    /// Overwrite the visible state of one cell.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> Result<(), ConfigError> {
        if x >= self.rows || y >= self.columns {
            return Err(ConfigError::CellOutOfBounds {
                x,
                y,
                rows: self.rows,
                columns: self.columns,
            });
        }
        let idx = x * self.columns + y;
        self.current[idx] = alive;
        Ok(())
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.current.fill(false);
        self.generation = 0;
    }

    /// Advance one generation.
    pub fn advance(&mut self) {
        let rows = self.rows;
        let columns = self.columns;
        let current = &self.current;

        // Phase 1: stage every cell's next state from the untouched snapshot
        self.next
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(x, row)| {
                for (y, staged) in row.iter_mut().enumerate() {
                    let live = count_neighbors(current, rows, columns, x, y);
                    *staged = next_state(current[x * columns + y], live);
                }
            });

        // Phase 2: publish
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        log::trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.population()
        );
    }

    /// Advance the specified number of generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.advance();
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&a| a).count()
    }

    /// Visible states, row-major.
    pub fn alive_mask(&self) -> &[bool] {
        &self.current
    }

    /// Iterate over every cell in `[x][y]` order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns;
        self.current.iter().enumerate().map(move |(i, &alive)| Cell {
            x: i / columns,
            y: i % columns,
            alive,
        })
    }

    /// Iterate over live cells only.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|c| c.alive)
    }
}

/// Grid statistics for monitoring.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridStats {
    pub generation: u64,
    pub population: usize,
    pub density: f64,
}

impl GridStats {
    /// Compute statistics from grid.
    pub fn from_grid(grid: &LifeGrid) -> Self {
        let population = grid.population();
        Self {
            generation: grid.generation(),
            population,
            density: population as f64 / grid.config().grid_size() as f64,
        }
    }
}
