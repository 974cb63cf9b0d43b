//! Toroidal Life - Conway's Game of Life on a wrapped grid.
//!
//! This crate provides the simulation core of a Game of Life renderer: a
//! fixed-size grid whose edges wrap around (a torus), the B3/S23 transition
//! rule, and a double-buffered generation step. Rendering, colouring and
//! frame pacing are left to the caller, which only needs cell coordinates
//! and their alive flags.
//!
//! # Architecture
//!
//! - `schema`: Configuration types and seeding for grids
//! - `compute`: Transition rule, neighbourhood and grid evolution
//!
//! # Example
//!
//! ```rust,no_run
//! use toroidal_life::{
//!     compute::{GridStats, LifeGrid},
//!     schema::{GridConfig, Pattern, Seed},
//! };
//!
//! let config = GridConfig { rows: 50, columns: 50 };
//! let seed = Seed {
//!     pattern: Pattern::Random {
//!         threshold: 0.15,
//!         seed: Some(42),
//!     },
//! };
//! let mut grid = LifeGrid::from_seed(&seed, &config).expect("valid seed");
//!
//! grid.run(100);
//!
//! for cell in grid.live_cells() {
//!     println!("({}, {})", cell.x, cell.y);
//! }
//! println!("Population after 100 generations: {}", GridStats::from_grid(&grid).population);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Cell, GridStats, LifeGrid};
pub use schema::{ConfigError, GridConfig, Pattern, Preset, Seed};
