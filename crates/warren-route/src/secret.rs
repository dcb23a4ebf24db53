//! Goal-cell secret derivation.

use crate::canonical::canonicalize;
use sha2::{Digest, Sha256};
use warren_core::{Coord, Direction};
use warren_grid::Grid;

/// One-byte route encoding, fixed by the secret scheme.
fn code(dir: Direction) -> u8 {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Fold a 32-byte digest into a u32: byte `i` lands in lane `i % 4`, so
/// each of the four byte-lanes receives the XOR of eight digest bytes.
fn fold(digest: &[u8]) -> u32 {
    let mut acc = 0u32;
    for (i, byte) in digest.iter().enumerate() {
        acc ^= u32::from(*byte) << (8 * (i % 4));
    }
    acc
}

/// Derive the goal secret for a finished walk.
///
/// Returns `None` unless `terminal` is the grid's goal cell — absence is
/// the normal case, not a failure. At the goal, the *raw* route is
/// canonicalized, encoded one byte per token (Up→0, Down→1, Left→2,
/// Right→3), hashed with SHA-256, folded to 32 bits, and rendered as
/// `MAZE{XXXXXXXX}` with eight uppercase hex digits.
///
/// On a spanning-tree grid there is exactly one canonical route from
/// origin to goal, so every valid raw route reaching the goal yields the
/// identical secret, detours and all.
///
/// # Examples
///
/// ```
/// use warren_grid::{Grid, MazeConfig};
/// use warren_route::{derive_secret, walk};
///
/// // On a 1×1 grid the origin is the goal and the canonical route is empty.
/// let grid = Grid::generate(&MazeConfig { rows: 1, cols: 1, seed: 0 }).unwrap();
/// let terminal = walk(&grid, &[]).unwrap();
/// assert_eq!(
///     derive_secret(&grid, terminal, &[]).as_deref(),
///     Some("MAZE{5C662AE7}")
/// );
/// ```
pub fn derive_secret(grid: &Grid, terminal: Coord, raw: &[Direction]) -> Option<String> {
    if terminal != grid.goal() {
        return None;
    }
    let encoded: Vec<u8> = canonicalize(raw).into_iter().map(code).collect();
    let digest = Sha256::digest(&encoded);
    Some(format!("MAZE{{{:08X}}}", fold(&digest)))
}
