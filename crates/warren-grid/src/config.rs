//! Maze build configuration.

use crate::error::GridError;
use crate::grid::Grid;

/// Seed used by [`MazeConfig::default`].
///
/// Fixed so that a default build reproduces the same layout on every run.
/// Deployments that want per-process layouts override
/// [`MazeConfig::seed`] at startup.
pub const DEFAULT_SEED: u64 = 0x746F_6B65_6E;

/// Reference grid shape: 64 cells along each axis.
pub const DEFAULT_DIM: u32 = 64;

/// Configuration for carving a maze grid.
///
/// The layout is a pure function of `(rows, cols, seed)`: generating
/// twice from the same config yields byte-identical grids.
///
/// # Examples
///
/// ```
/// use warren_grid::{Grid, MazeConfig};
///
/// let cfg = MazeConfig {
///     rows: 8,
///     cols: 8,
///     ..MazeConfig::default()
/// };
/// let grid = Grid::generate(&cfg).unwrap();
/// assert_eq!(grid.cell_count(), 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Number of rows (cells along y).
    pub rows: u32,
    /// Number of columns (cells along x).
    pub cols: u32,
    /// Seed for the generation RNG.
    pub seed: u64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIM,
            cols: DEFAULT_DIM,
            seed: DEFAULT_SEED,
        }
    }
}

impl MazeConfig {
    /// Validate the dimensions, before any allocation happens.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyGrid`] if either dimension is zero,
    /// [`GridError::DimensionTooLarge`] if either exceeds [`Grid::MAX_DIM`].
    pub fn validate(&self) -> Result<(), GridError> {
        check_dims(self.rows, self.cols)
    }
}

/// Shared dimension check for [`MazeConfig::validate`] and
/// [`Grid::from_masks`].
pub(crate) fn check_dims(rows: u32, cols: u32) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid);
    }
    if rows > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: Grid::MAX_DIM,
        });
    }
    if cols > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_reference_shape() {
        let cfg = MazeConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (64, 64));
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let cfg = MazeConfig {
            rows: 0,
            cols: 5,
            seed: 0,
        };
        assert_eq!(cfg.validate(), Err(GridError::EmptyGrid));
        let cfg = MazeConfig {
            rows: 5,
            cols: 0,
            seed: 0,
        };
        assert_eq!(cfg.validate(), Err(GridError::EmptyGrid));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let too_big = Grid::MAX_DIM + 1;
        let cfg = MazeConfig {
            rows: too_big,
            cols: 5,
            seed: 0,
        };
        assert!(matches!(
            cfg.validate(),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        let cfg = MazeConfig {
            rows: 5,
            cols: too_big,
            seed: 0,
        };
        assert!(matches!(
            cfg.validate(),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }
}
