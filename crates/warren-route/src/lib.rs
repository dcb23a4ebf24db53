//! Route queries over a maze grid.
//!
//! Every query here is a pure function over an immutable
//! [`Grid`](warren_grid::Grid):
//!
//! - [`canonicalize`] reduces a raw move sequence to its backtrack-free
//!   canonical form;
//! - [`walk`] validates a raw sequence edge-by-edge from the origin and
//!   computes the terminal cell;
//! - [`derive_secret`] hashes the canonical route, at the goal cell only.
//!
//! Navigation deliberately validates the *raw* route while the secret is
//! derived from the *canonical* route: detours are legal to walk, and
//! they all cancel to the same canonical sequence, so every valid way of
//! reaching the goal produces the same secret.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canonical;
pub mod error;
pub mod navigate;
pub mod secret;

pub use canonical::canonicalize;
pub use error::RouteError;
pub use navigate::walk;
pub use secret::derive_secret;
