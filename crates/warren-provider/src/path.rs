//! Textual path parsing.

use warren_core::Direction;

/// Separator used when composing child paths.
///
/// Parsing additionally accepts `/`, so paths typed with either
/// convention resolve; emitted paths always use this one.
pub const SEPARATOR: char = '\\';

fn token(segment: &str) -> Option<Direction> {
    match segment.to_ascii_lowercase().as_str() {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

/// Parse a delimiter-separated path into direction tokens.
///
/// Segments are separated by `\` or `/` and matched case-insensitively.
/// Empty segments are no-ops and contribute nothing, so `"up\\\\down"`,
/// `"/up/down/"` and `"Up\\Down"` all parse to the same route. Returns
/// `None` if any non-empty segment is not a direction token; the
/// provider surfaces that as path-not-found.
///
/// # Examples
///
/// ```
/// use warren_core::Direction::{Down, Up};
/// use warren_provider::parse_path;
///
/// assert_eq!(parse_path("Up\\down"), Some(vec![Up, Down]));
/// assert_eq!(parse_path(""), Some(Vec::new()));
/// assert_eq!(parse_path("up\\sideways"), None);
/// ```
pub fn parse_path(path: &str) -> Option<Vec<Direction>> {
    let mut route = Vec::new();
    for segment in path.split(['\\', '/']) {
        if segment.is_empty() {
            continue;
        }
        route.push(token(segment)?);
    }
    Some(route)
}

/// Syntactic path validation for the host's is-valid probe.
///
/// A path is valid exactly when [`parse_path`] accepts it. Validity does
/// not imply the denoted edges exist in the maze — that is the walk's
/// concern.
pub fn is_valid_path(path: &str) -> bool {
    parse_path(path).is_some()
}

/// Compose a child path by appending a direction segment.
pub fn join(path: &str, dir: Direction) -> String {
    if path.is_empty() {
        dir.to_string()
    } else {
        format!("{path}{SEPARATOR}{dir}")
    }
}
