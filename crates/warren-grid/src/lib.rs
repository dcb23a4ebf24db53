//! Maze grid storage and seeded spanning-tree generation.
//!
//! [`Grid`] is the immutable product of generation: a rows × cols array
//! of per-cell open-direction bitmasks satisfying two invariants —
//! **symmetry** (an open edge is recorded on both of its endpoints) and,
//! for generated grids, **spanning tree** (the open-edge graph is
//! connected and acyclic, so exactly one simple path exists between any
//! two cells and exactly `rows * cols - 1` edges are open).
//!
//! [`Grid::generate`] carves a maze from a [`MazeConfig`] using
//! randomized Kruskal over a seeded RNG; the layout is a pure function of
//! the seed and dimensions. Generation runs once at startup; afterwards
//! the grid is shared read-only by every query.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod forest;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::MazeConfig;
pub use error::GridError;
pub use forest::DisjointSetForest;
pub use grid::Grid;
