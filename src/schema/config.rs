//! Configuration types for the Life grid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level grid configuration.
///
/// Dimensions are fixed for the lifetime of a grid; cells are indexed
/// `[x][y]` with `x < rows` and `y < columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (X dimension).
    pub rows: usize,
    /// Number of columns (Y dimension).
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            columns: 50,
        }
    }
}

impl GridConfig {
    /// Get total cell count (rows * columns).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Validate configuration parameters.
    ///
    /// Both dimensions must be non-zero and their product must fit in `usize`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 || self.rows.checked_mul(self.columns).is_none() {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: GridConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Check that an initial-alive probability lies in `[0, 1]`.
pub fn validate_threshold(threshold: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::InvalidThreshold(threshold));
    }
    Ok(())
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be non-zero and addressable (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("Threshold must lie in [0, 1] (got {0})")]
    InvalidThreshold(f64),
    #[error("Cell ({x}, {y}) lies outside a {rows}x{columns} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        rows: usize,
        columns: usize,
    },
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
