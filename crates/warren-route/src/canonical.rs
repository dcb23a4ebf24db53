//! Stack-based route canonicalization.

use warren_core::Direction;

/// Reduce a raw move sequence to its canonical, backtrack-free form.
///
/// A single left-to-right pass keeps an output stack: when the incoming
/// token is the exact opposite of the stack top the pair cancels,
/// otherwise the token is pushed. Only *immediately adjacent* opposite
/// pairs cancel — `[Up, Left, Down]` stays as it is, because `Left`
/// separates the opposites.
///
/// The result never contains two adjacent opposite tokens, and
/// canonicalizing an already-canonical sequence returns it unchanged.
///
/// # Examples
///
/// ```
/// use warren_core::Direction::{Down, Left, Up};
/// use warren_route::canonicalize;
///
/// assert_eq!(canonicalize(&[Up, Down]), Vec::new());
/// assert_eq!(canonicalize(&[Up, Left, Down]), vec![Up, Left, Down]);
/// ```
pub fn canonicalize(path: &[Direction]) -> Vec<Direction> {
    let mut canonical: Vec<Direction> = Vec::with_capacity(path.len());
    for &dir in path {
        if canonical.last().copied() == Some(dir.opposite()) {
            canonical.pop();
        } else {
            canonical.push(dir);
        }
    }
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use warren_core::Direction::{Down, Left, Right, Up};

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(canonicalize(&[]), Vec::new());
    }

    #[test]
    fn adjacent_opposites_cancel() {
        assert_eq!(canonicalize(&[Up, Down]), Vec::new());
        assert_eq!(canonicalize(&[Right, Left, Down, Up]), Vec::new());
    }

    #[test]
    fn cancellation_cascades_through_the_stack() {
        // Down/Up cancels first, exposing Right/Left, which then cancels.
        assert_eq!(canonicalize(&[Right, Down, Up, Left]), Vec::new());
    }

    #[test]
    fn separated_opposites_do_not_cancel() {
        assert_eq!(canonicalize(&[Up, Left, Down]), vec![Up, Left, Down]);
    }

    fn arb_path() -> impl Strategy<Value = Vec<Direction>> {
        prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..64)
    }

    proptest! {
        #[test]
        fn result_has_no_adjacent_opposites(path in arb_path()) {
            let canonical = canonicalize(&path);
            for pair in canonical.windows(2) {
                prop_assert_ne!(pair[0].opposite(), pair[1]);
            }
        }

        #[test]
        fn canonicalize_is_idempotent(path in arb_path()) {
            let once = canonicalize(&path);
            let twice = canonicalize(&once);
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn inserted_detours_cancel(
            path in arb_path(),
            at in any::<prop::sample::Index>(),
            dir in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            let at = at.index(path.len() + 1);
            let mut detoured = path.clone();
            detoured.insert(at, dir.opposite());
            detoured.insert(at, dir);
            prop_assert_eq!(canonicalize(&detoured), canonicalize(&path));
        }
    }
}
