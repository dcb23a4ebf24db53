//! Warren: a deterministic perfect-maze drive.
//!
//! A fixed square grid is carved into a spanning-tree maze once at
//! startup; path-based queries then navigate it from the origin, and the
//! unique canonical route to the goal cell yields a stable secret
//! string. This is the top-level facade crate re-exporting the public
//! API of the Warren sub-crates; for most users, depending on `warren`
//! alone is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use warren::prelude::*;
//!
//! // Carve the reference 64×64 maze. Same config, same layout, always.
//! let grid = Arc::new(Grid::generate(&MazeConfig::default()).unwrap());
//! assert_eq!(grid.open_edge_count(), 64 * 64 - 1);
//!
//! // Serve path queries over it.
//! let provider = MazeProvider::new(Arc::clone(&grid));
//! let root = provider.resolve("").unwrap();
//! assert_eq!(root.coord, grid.origin());
//!
//! // The origin is not the goal on the reference shape, so no secret yet.
//! assert!(root.secret.is_none());
//!
//! // Walking the maze by hand works through the route layer.
//! let open: Vec<_> = grid.open_neighbours(grid.origin()).to_vec();
//! assert!(!open.is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | Directions, direction sets, coordinates |
//! | [`grid`] | `warren-grid` | Grid storage, config, seeded generation |
//! | [`route`] | `warren-route` | Canonicalization, navigation, goal secret |
//! | [`provider`] | `warren-provider` | Host-shell drive adapter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core direction and coordinate types (`warren-core`).
pub use warren_core as types;

/// Grid storage, configuration, and seeded generation (`warren-grid`).
pub use warren_grid as grid;

/// Route canonicalization, navigation, and goal secrets (`warren-route`).
pub use warren_route as route;

/// Host-shell drive adapter (`warren-provider`).
pub use warren_provider as provider;

pub mod prelude {
    //! Single-import convenience: `use warren::prelude::*;`.

    pub use warren_core::{Coord, DirSet, Direction};
    pub use warren_grid::{Grid, GridError, MazeConfig};
    pub use warren_provider::{
        default_drives, CellItem, ChildEntry, DriveInfo, MazeProvider, ProviderError,
    };
    pub use warren_route::{canonicalize, derive_secret, walk, RouteError};
}
