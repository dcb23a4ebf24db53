//! Result records handed back to the host.

use std::fmt;
use warren_core::{Coord, Direction};

/// A resolved cell record.
///
/// `direction` is set when the record describes a specific neighbour of
/// another cell (child enumeration); `secret` is present only when the
/// resolved route terminates at the goal cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellItem {
    /// The cell coordinate.
    pub coord: Coord,
    /// The direction that led to this cell, for child records.
    pub direction: Option<Direction>,
    /// The goal secret, absent everywhere but the goal.
    pub secret: Option<String>,
}

impl fmt::Display for CellItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={}", self.coord.x, self.coord.y)?;
        if let Some(dir) = self.direction {
            write!(f, " direction={dir}")?;
        }
        if let Some(secret) = &self.secret {
            write!(f, " secret={secret}")?;
        }
        Ok(())
    }
}

/// A child record paired with the textual path that reaches it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildEntry {
    /// Path of the child, composed from the parent path.
    pub path: String,
    /// The child cell record.
    pub item: CellItem,
}
