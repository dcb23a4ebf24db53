//! Error types for grid construction.

use std::fmt;
use warren_core::{Coord, Direction};

/// Errors arising from maze grid construction.
///
/// Construction errors are fatal: they are reported before any maze
/// exists, and nothing downstream runs without a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension is zero.
    EmptyGrid,
    /// A grid dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Axis name, `"rows"` or `"cols"`.
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The mask slice handed to [`Grid::from_masks`](crate::Grid::from_masks)
    /// has the wrong length.
    MaskCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Number of masks actually provided.
        actual: usize,
    },
    /// A mask opens an edge with no matching open edge on the neighbouring
    /// cell, or one that points off the grid entirely.
    AsymmetricEdge {
        /// The cell whose mask is inconsistent.
        at: Coord,
        /// The open direction lacking its mirrored counterpart.
        dir: Direction,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::MaskCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cell masks, got {actual}")
            }
            Self::AsymmetricEdge { at, dir } => {
                write!(f, "open edge {dir} at {at} is not mirrored on its neighbour")
            }
        }
    }
}

impl std::error::Error for GridError {}
