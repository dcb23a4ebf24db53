//! Hand-built maze grids with known layouts.

use warren_core::DirSet;
use warren_core::Direction::{Down, Left, Right, Up};
use warren_grid::Grid;

/// The 2×2 maze whose spanning tree is
/// {(0,0)-Right-(1,0), (0,0)-Down-(0,1), (1,0)-Down-(1,1)}.
///
/// Known routes: `[Right]` → (1,0), `[Down]` → (0,1), `[Right, Down]` →
/// the goal (1,1); `[Up]` from the origin crosses no open edge, and
/// (0,1) is a dead end.
pub fn two_by_two() -> Grid {
    let masks = vec![
        DirSet::empty().with(Right).with(Down), // (0, 0)
        DirSet::empty().with(Left).with(Down),  // (1, 0)
        DirSet::empty().with(Up),               // (0, 1)
        DirSet::empty().with(Up),               // (1, 1)
    ];
    Grid::from_masks(2, 2, masks).expect("fixture masks are symmetric")
}

/// The degenerate 1×1 grid: the origin is the goal and no edge is open.
pub fn single_cell() -> Grid {
    Grid::from_masks(1, 1, vec![DirSet::empty()]).expect("fixture masks are symmetric")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_construct_cleanly() {
        assert_eq!(two_by_two().open_edge_count(), 3);
        assert_eq!(single_cell().open_edge_count(), 0);
    }
}
