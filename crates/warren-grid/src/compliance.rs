//! Grid invariant test helpers.
//!
//! These assertions verify the two mask invariants every maze grid must
//! satisfy. Reused across the unit and property tests in this crate.

use crate::grid::Grid;
use indexmap::IndexSet;
use std::collections::VecDeque;
use warren_core::Coord;

/// Assert every open edge is mirrored on its in-bounds neighbour.
pub(crate) fn assert_symmetric(grid: &Grid) {
    for coord in grid.coords() {
        for dir in grid.open_at(coord).iter() {
            let neighbour = coord.step(dir);
            assert!(
                grid.contains(neighbour),
                "open edge {dir} at {coord} points off the grid"
            );
            assert!(
                grid.open_at(neighbour).contains(dir.opposite()),
                "edge {dir} at {coord} is not mirrored at {neighbour}"
            );
        }
    }
}

/// Assert the open-edge graph is a spanning tree: the edge count is
/// `cells - 1` and a breadth-first traversal from the origin reaches
/// every cell exactly once.
pub(crate) fn assert_spanning_tree(grid: &Grid) {
    assert_eq!(
        grid.open_edge_count(),
        grid.cell_count() - 1,
        "open edge count is not cells - 1"
    );
    let mut seen: IndexSet<Coord> = IndexSet::new();
    let mut queue = VecDeque::new();
    seen.insert(grid.origin());
    queue.push_back(grid.origin());
    while let Some(coord) = queue.pop_front() {
        for (_, next) in grid.open_neighbours(coord) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    assert_eq!(
        seen.len(),
        grid.cell_count(),
        "breadth-first traversal did not reach every cell"
    );
}
