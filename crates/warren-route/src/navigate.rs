//! Raw-route validation and terminal-cell computation.

use crate::error::RouteError;
use warren_core::{Coord, Direction};
use warren_grid::Grid;

/// Walk `path` from the origin, validating every step against the grid's
/// open edges, and return the terminal cell.
///
/// The walk fails on the first token whose direction is closed at the
/// current cell. Backtracking is not special-cased: the symmetry
/// invariant makes every open edge two-way, so retracing a step always
/// succeeds. Detours are reconciled later by
/// [`canonicalize`](crate::canonicalize), never rejected here.
///
/// "Does this path resolve to a real cell" reduces entirely to this
/// function succeeding; there is no separate existence check.
///
/// # Errors
///
/// [`RouteError::ClosedEdge`] when a token denotes an edge that does not
/// exist in the maze.
///
/// # Examples
///
/// ```
/// use warren_grid::{Grid, MazeConfig};
/// use warren_route::walk;
///
/// let grid = Grid::generate(&MazeConfig { rows: 4, cols: 4, seed: 1 }).unwrap();
/// assert_eq!(walk(&grid, &[]).unwrap(), grid.origin());
/// ```
pub fn walk(grid: &Grid, path: &[Direction]) -> Result<Coord, RouteError> {
    let mut at = grid.origin();
    for &dir in path {
        if !grid.open_at(at).contains(dir) {
            return Err(RouteError::ClosedEdge { from: at, dir });
        }
        at = at.step(dir);
    }
    Ok(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::Direction::{Down, Left, Right, Up};
    use warren_test_utils::two_by_two;

    #[test]
    fn empty_route_stays_at_the_origin() {
        let grid = two_by_two();
        assert_eq!(walk(&grid, &[]).unwrap(), grid.origin());
    }

    #[test]
    fn open_edges_are_followed() {
        let grid = two_by_two();
        assert_eq!(walk(&grid, &[Right]).unwrap(), Coord::new(1, 0));
        assert_eq!(walk(&grid, &[Down]).unwrap(), Coord::new(0, 1));
        assert_eq!(walk(&grid, &[Right, Down]).unwrap(), Coord::new(1, 1));
    }

    #[test]
    fn backtracking_is_legal() {
        let grid = two_by_two();
        assert_eq!(walk(&grid, &[Right, Left]).unwrap(), grid.origin());
        assert_eq!(
            walk(&grid, &[Down, Up, Down, Up]).unwrap(),
            grid.origin()
        );
    }

    #[test]
    fn closed_edges_fail_immediately() {
        let grid = two_by_two();
        assert_eq!(
            walk(&grid, &[Up]),
            Err(RouteError::ClosedEdge {
                from: Coord::ORIGIN,
                dir: Up
            })
        );
        // (0, 1) has no open Right edge in this layout.
        assert_eq!(
            walk(&grid, &[Down, Right]),
            Err(RouteError::ClosedEdge {
                from: Coord::new(0, 1),
                dir: Right
            })
        );
    }
}
