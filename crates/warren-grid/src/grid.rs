//! Per-cell open-direction storage and the randomized-Kruskal generator.

use crate::config::{check_dims, MazeConfig};
use crate::error::GridError;
use crate::forest::DisjointSetForest;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use std::fmt;
use warren_core::{Coord, DirSet, Direction};

/// An immutable maze grid.
///
/// Cells live in a flattened row-major array (`y * cols + x`), each
/// holding the [`DirSet`] of its open edges. Two invariants govern the
/// masks:
///
/// - **symmetry** — an open edge is recorded on both endpoints, so every
///   open edge is traversable in both directions;
/// - **spanning tree** — for grids built by [`Grid::generate`], the
///   open-edge graph is connected and acyclic, with exactly
///   `rows * cols - 1` open edges and a unique simple path between any
///   two cells.
///
/// [`Grid::from_masks`] checks symmetry only; callers loading a fixed
/// layout are responsible for tree-ness if they rely on unique routes.
///
/// The grid never changes after construction. Share it freely across
/// threads (`Arc<Grid>`); queries need no locking.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<DirSet>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Carve a maze grid from `config` with randomized Kruskal.
    ///
    /// The candidate edge list — each internal adjacency exactly once,
    /// enumerated from the higher-coordinate cell as `Up` (y > 0) or
    /// `Left` (x > 0) — is Fisher–Yates shuffled with a ChaCha8 RNG
    /// seeded from `config.seed`. Candidates whose endpoints are still in
    /// distinct sets of the [`DisjointSetForest`] are opened on both
    /// endpoints; cycle-closing candidates are skipped. The result is a
    /// spanning tree of the grid graph, fully determined by the seed.
    ///
    /// # Errors
    ///
    /// Fails fast on zero or oversized dimensions; see
    /// [`MazeConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use warren_grid::{Grid, MazeConfig};
    ///
    /// let cfg = MazeConfig { rows: 4, cols: 4, seed: 7 };
    /// let grid = Grid::generate(&cfg).unwrap();
    /// assert_eq!(grid.open_edge_count(), 15);
    /// // Same seed, same maze.
    /// assert_eq!(Grid::generate(&cfg).unwrap(), grid);
    /// ```
    pub fn generate(config: &MazeConfig) -> Result<Self, GridError> {
        config.validate()?;
        let (rows, cols) = (config.rows, config.cols);
        let mut grid = Self {
            rows,
            cols,
            cells: vec![DirSet::empty(); rows as usize * cols as usize],
        };
        let mut forest = DisjointSetForest::new(grid.cells.len());

        let internal_edges =
            (rows as usize - 1) * cols as usize + rows as usize * (cols as usize - 1);
        let mut candidates: Vec<(Coord, Direction)> = Vec::with_capacity(internal_edges);
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                if y > 0 {
                    candidates.push((Coord::new(x, y), Direction::Up));
                }
                if x > 0 {
                    candidates.push((Coord::new(x, y), Direction::Left));
                }
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        for n in (1..candidates.len()).rev() {
            let k = rng.random_range(0..=n);
            candidates.swap(n, k);
        }

        for (source, dir) in candidates {
            let neighbour = source.step(dir);
            let a = grid.index(source) as u32;
            let b = grid.index(neighbour) as u32;
            if forest.union(a, b) {
                grid.open(source, dir);
            }
        }
        Ok(grid)
    }

    /// Build a grid from explicit per-cell masks, row-major.
    ///
    /// Intended for fixtures and tests that need a known layout. Checks
    /// the dimensions, the mask count, and that every open edge is
    /// mirrored on an in-bounds neighbour.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyGrid`] / [`GridError::DimensionTooLarge`] for bad
    /// dimensions, [`GridError::MaskCountMismatch`] when the slice length
    /// is not `rows * cols`, and [`GridError::AsymmetricEdge`] for an edge
    /// without its mirrored counterpart.
    pub fn from_masks(rows: u32, cols: u32, masks: Vec<DirSet>) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        let expected = rows as usize * cols as usize;
        if masks.len() != expected {
            return Err(GridError::MaskCountMismatch {
                expected,
                actual: masks.len(),
            });
        }
        let grid = Self {
            rows,
            cols,
            cells: masks,
        };
        for coord in grid.coords() {
            for dir in grid.open_at(coord).iter() {
                let neighbour = coord.step(dir);
                if !grid.contains(neighbour)
                    || !grid.open_at(neighbour).contains(dir.opposite())
                {
                    return Err(GridError::AsymmetricEdge { at: coord, dir });
                }
            }
        }
        Ok(grid)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The fixed origin cell, `(0, 0)`.
    pub fn origin(&self) -> Coord {
        Coord::ORIGIN
    }

    /// The designated goal cell, `(cols - 1, rows - 1)`.
    pub fn goal(&self) -> Coord {
        Coord::new(self.cols as i32 - 1, self.rows as i32 - 1)
    }

    /// Whether `coord` lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.cols && (coord.y as u32) < self.rows
    }

    /// The open directions of the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    pub fn open_at(&self, coord: Coord) -> DirSet {
        assert!(
            self.contains(coord),
            "coordinate {coord} outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[self.index(coord)]
    }

    /// The open neighbours of `coord`, with the direction leading to each.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    pub fn open_neighbours(&self, coord: Coord) -> SmallVec<[(Direction, Coord); 4]> {
        let mut neighbours = SmallVec::new();
        for dir in self.open_at(coord).iter() {
            neighbours.push((dir, coord.step(dir)));
        }
        neighbours
    }

    /// Total number of open edges, each counted once.
    pub fn open_edge_count(&self) -> usize {
        self.cells.iter().map(|set| set.len()).sum::<usize>() / 2
    }

    /// Iterate all cell coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |y| (0..cols).map(move |x| Coord::new(x, y)))
    }

    fn index(&self, coord: Coord) -> usize {
        coord.y as usize * self.cols as usize + coord.x as usize
    }

    fn open(&mut self, at: Coord, dir: Direction) {
        let neighbour = at.step(dir);
        let i = self.index(at);
        let j = self.index(neighbour);
        self.cells[i].insert(dir);
        self.cells[j].insert(dir.opposite());
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("open_edges", &self.open_edge_count())
            .finish_non_exhaustive()
    }
}
