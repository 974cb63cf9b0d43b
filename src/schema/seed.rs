//! Seed types for initializing Life grids.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::{ConfigError, GridConfig, validate_threshold};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random {
                threshold: 0.15,
                seed: None,
            },
        }
    }
}

/// Initial population layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Independent coin flip per cell.
    Random {
        /// Probability that a cell starts alive.
        threshold: f64,
        /// Random seed (None = seeded from entropy).
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Explicit list of live `(x, y)` coordinates.
    Cells { cells: Vec<(usize, usize)> },
    /// Named pattern stamped at an origin, wrapping around the torus.
    Preset { preset: Preset, origin: (usize, usize) },
}

/// Small well-known patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// 2x2 still life.
    Block,
    /// Period 2 oscillator.
    Blinker,
    /// Period 4 spaceship moving one cell diagonally.
    Glider,
    /// 6-cell still life.
    Beehive,
    /// Period 2 oscillator.
    Toad,
}

impl Preset {
    /// Live cell offsets relative to the pattern origin.
    pub fn offsets(self) -> &'static [(usize, usize)] {
        match self {
            Preset::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Preset::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Preset::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Preset::Beehive => &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
            Preset::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        }
    }
}

impl Seed {
    /// Generate the initial alive mask, row-major `[x * columns + y]`.
    pub fn generate(&self, config: &GridConfig) -> Result<Vec<bool>, ConfigError> {
        config.validate()?;

        match &self.pattern {
            Pattern::Random { threshold, seed } => {
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(*s),
                    None => StdRng::from_entropy(),
                };
                random_population(config, *threshold, &mut rng)
            }
            Pattern::Cells { cells } => {
                let mut alive = vec![false; config.grid_size()];
                for &(x, y) in cells {
                    if x >= config.rows || y >= config.columns {
                        return Err(ConfigError::CellOutOfBounds {
                            x,
                            y,
                            rows: config.rows,
                            columns: config.columns,
                        });
                    }
                    alive[x * config.columns + y] = true;
                }
                Ok(alive)
            }
            Pattern::Preset { preset, origin } => {
                let mut alive = vec![false; config.grid_size()];
                let (ox, oy) = (origin.0 % config.rows, origin.1 % config.columns);
                for &(dx, dy) in preset.offsets() {
                    let x = (ox + dx) % config.rows;
                    let y = (oy + dy) % config.columns;
                    alive[x * config.columns + y] = true;
                }
                Ok(alive)
            }
        }
    }
}

/// Draw one uniform `[0, 1)` value per cell; a cell starts alive when its
/// draw falls below `threshold`. Cells are visited `[x][y]` row-major.
pub fn random_population<R: Rng + ?Sized>(
    config: &GridConfig,
    threshold: f64,
    rng: &mut R,
) -> Result<Vec<bool>, ConfigError> {
    config.validate()?;
    validate_threshold(threshold)?;

    Ok((0..config.grid_size())
        .map(|_| rng.r#gen::<f64>() < threshold)
        .collect())
}
