//! Schema module - Configuration and seeding types for Life grids.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
