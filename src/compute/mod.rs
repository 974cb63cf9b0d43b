//! Compute module - Game of Life rule and grid evolution.

mod grid;
pub mod rules;

pub use grid::*;
