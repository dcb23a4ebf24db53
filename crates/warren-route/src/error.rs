//! Error types for route traversal.

use std::fmt;
use warren_core::{Coord, Direction};

/// Errors arising while walking a route against a grid.
///
/// Recoverable at the caller boundary: a failed walk means "this path
/// does not resolve to an existing location", never a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The route asks for a direction with no open edge at the current
    /// cell. The denoted edge simply is not part of the maze, whether or
    /// not the cell was ever visited before.
    ClosedEdge {
        /// The cell the walk had reached.
        from: Coord,
        /// The requested direction, closed at that cell.
        dir: Direction,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClosedEdge { from, dir } => {
                write!(f, "no open edge {dir} from {from}")
            }
        }
    }
}

impl std::error::Error for RouteError {}
