//! Grid cell coordinates.

use crate::direction::Direction;
use std::fmt;

/// A cell coordinate on the maze grid.
///
/// `x` is the column and `y` the row. The origin `(0, 0)` is the top-left
/// cell; y grows downward, so [`Direction::Down`] increases `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// The fixed origin every route starts from.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in `dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren_core::{Coord, Direction};
    ///
    /// assert_eq!(Coord::ORIGIN.step(Direction::Down), Coord::new(0, 1));
    /// assert_eq!(Coord::new(3, 3).step(Direction::Left), Coord::new(2, 3));
    /// ```
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
