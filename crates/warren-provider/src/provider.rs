//! Query surface of the maze drive.

use crate::error::ProviderError;
use crate::item::{CellItem, ChildEntry};
use crate::path::{self, parse_path};
use log::{debug, warn};
use std::sync::Arc;
use warren_core::Direction;
use warren_grid::Grid;
use warren_route::{derive_secret, walk};

/// Path-based query interface over an immutable maze grid.
///
/// Holds a shared reference to the grid generated at startup. Every
/// query is a pure read, so one provider value serves unbounded
/// concurrent callers without locking.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use warren_grid::{Grid, MazeConfig};
/// use warren_provider::MazeProvider;
///
/// let grid = Arc::new(Grid::generate(&MazeConfig::default()).unwrap());
/// let provider = MazeProvider::new(grid);
/// assert!(provider.item_exists(""));
/// // The origin sits on the top-left corner; no edge ever opens upward there.
/// assert!(!provider.item_exists("up"));
/// ```
#[derive(Clone, Debug)]
pub struct MazeProvider {
    grid: Arc<Grid>,
}

impl MazeProvider {
    /// Create a provider over a generated grid.
    pub fn new(grid: Arc<Grid>) -> Self {
        Self { grid }
    }

    /// The grid this provider serves.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Resolve a textual path to its cell record.
    ///
    /// The record carries the terminal coordinate and, when the route
    /// ends at the goal cell, the goal secret derived from the canonical
    /// route.
    ///
    /// # Errors
    ///
    /// [`ProviderError::PathNotFound`] if a token is unrecognized or a
    /// step crosses a closed edge.
    pub fn resolve(&self, path: &str) -> Result<CellItem, ProviderError> {
        let raw = match parse_path(path) {
            Some(raw) => raw,
            None => {
                debug!("unrecognized token in {path:?}");
                return Err(self.not_found(path));
            }
        };
        let coord = match walk(&self.grid, &raw) {
            Ok(coord) => coord,
            Err(err) => {
                debug!("walk failed for {path:?}: {err}");
                return Err(self.not_found(path));
            }
        };
        let secret = derive_secret(&self.grid, coord, &raw);
        Ok(CellItem {
            coord,
            direction: None,
            secret,
        })
    }

    /// Host probe: does the path resolve to a cell?
    pub fn item_exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok()
    }

    /// Host probe: is the item a container?
    ///
    /// Every resolvable cell is addressable as a container — a dead end
    /// still opens back the way it came — so this reduces to
    /// [`item_exists`](Self::item_exists).
    pub fn is_container(&self, path: &str) -> bool {
        self.item_exists(path)
    }

    /// Fetch the record for the cell a path resolves to.
    ///
    /// Identical to [`resolve`](Self::resolve); named for the host's
    /// get-item verb.
    pub fn get_item(&self, path: &str) -> Result<CellItem, ProviderError> {
        self.resolve(path)
    }

    /// Enumerate the immediate children of the cell a path resolves to.
    ///
    /// One entry per open direction, in Up, Down, Left, Right order,
    /// each carrying the neighbour coordinate, the direction leading to
    /// it, and the composed child path. Children never carry a secret: a
    /// secret is derived only for a route that was actually resolved.
    ///
    /// # Errors
    ///
    /// [`ProviderError::RecursionUnsupported`] when `recurse` is set —
    /// recursive enumeration is never performed — and
    /// [`ProviderError::PathNotFound`] if the path does not resolve.
    pub fn child_items(
        &self,
        path: &str,
        recurse: bool,
    ) -> Result<Vec<ChildEntry>, ProviderError> {
        if recurse {
            warn!("recursive enumeration rejected for {path:?}");
            return Err(ProviderError::RecursionUnsupported);
        }
        let parent = self.resolve(path)?;
        let open = self.grid.open_at(parent.coord);
        let mut children = Vec::with_capacity(open.len());
        for dir in Direction::ALL {
            if open.contains(dir) {
                children.push(ChildEntry {
                    path: path::join(path, dir),
                    item: CellItem {
                        coord: parent.coord.step(dir),
                        direction: Some(dir),
                        secret: None,
                    },
                });
            }
        }
        Ok(children)
    }

    fn not_found(&self, path: &str) -> ProviderError {
        ProviderError::PathNotFound {
            path: path.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::Coord;
    use warren_test_utils::two_by_two;

    fn provider() -> MazeProvider {
        MazeProvider::new(Arc::new(two_by_two()))
    }

    #[test]
    fn the_root_resolves_to_the_origin() {
        let item = provider().resolve("").unwrap();
        assert_eq!(item.coord, Coord::ORIGIN);
        assert_eq!(item.direction, None);
        assert_eq!(item.secret, None);
    }

    #[test]
    fn probes_agree_with_resolution() {
        let provider = provider();
        assert!(provider.item_exists("right"));
        assert!(provider.is_container("right"));
        assert!(!provider.item_exists("up"));
        assert!(!provider.is_container("up"));
    }

    #[test]
    fn get_item_matches_resolve() {
        let provider = provider();
        assert_eq!(
            provider.get_item("right\\down").unwrap(),
            provider.resolve("right\\down").unwrap()
        );
    }

    #[test]
    fn recursion_is_a_distinct_rejection() {
        let provider = provider();
        assert_eq!(
            provider.child_items("", true),
            Err(ProviderError::RecursionUnsupported)
        );
        assert_eq!(
            provider.child_items("up", false),
            Err(ProviderError::PathNotFound {
                path: "up".to_owned()
            })
        );
    }
}
