//! Whole-cube rotational symmetry reduction.
//!
//! The pocket cube has no fixed center facelets, so two states differing
//! only by which face is called "top" describe the same scrambled cube. A
//! reorientation is expressed purely as face-block reassignment: each of
//! the six blocks in the layout receives the four facelets of a source
//! face, unpermuted. Canonicalization collapses each 24-element orbit to
//! its lexicographic minimum, which downstream search uses only for
//! deduplication.

use crate::cube::{CubeState, Face};

// Generator reorientations about three perpendicular axes. Entry `i` names
// the face whose block lands in layout block `i` (U L F R B D order).
const TILT: [Face; 6] = [
    Face::Front,
    Face::Left,
    Face::Down,
    Face::Right,
    Face::Up,
    Face::Back,
];
const SPIN: [Face; 6] = [
    Face::Up,
    Face::Front,
    Face::Right,
    Face::Back,
    Face::Left,
    Face::Down,
];
const ROLL: [Face; 6] = [
    Face::Left,
    Face::Down,
    Face::Front,
    Face::Up,
    Face::Back,
    Face::Right,
];

fn reorient(state: &CubeState, sources: &[Face; 6]) -> CubeState {
    let mut next = *state;

    for (block, source) in sources.iter().enumerate() {
        let base = source.base();
        for i in 0..4 {
            next.facelets[block * 4 + i] = state.facelets[base + i];
        }
    }

    next
}

/// Every whole-cube reorientation of `state`, produced by the nested
/// generator walk. The walk records 84 entries and may repeat states, but
/// it covers the full 24-element closure of the generators and always
/// contains `state` itself.
#[must_use]
pub fn reorientations(state: &CubeState) -> Vec<CubeState> {
    let mut orbit = Vec::with_capacity(84);

    let mut s = *state;
    for _ in 0..4 {
        s = reorient(&s, &TILT);
        orbit.push(s);
        for _ in 0..4 {
            s = reorient(&s, &SPIN);
            orbit.push(s);
            for _ in 0..4 {
                s = reorient(&s, &ROLL);
                orbit.push(s);
            }
        }
    }

    orbit
}

/// The lexicographically smallest state in the reorientation orbit of
/// `state`. Pure and idempotent; invariant under any reorientation of the
/// input.
#[must_use]
pub fn canonicalize(state: &CubeState) -> CubeState {
    // Same walk as `reorientations`, folded without collecting. This runs
    // once per BFS successor, so it stays allocation-free.
    let mut best = *state;

    let mut s = *state;
    for _ in 0..4 {
        s = reorient(&s, &TILT);
        best = best.min(s);
        for _ in 0..4 {
            s = reorient(&s, &SPIN);
            best = best.min(s);
            for _ in 0..4 {
                s = reorient(&s, &ROLL);
                best = best.min(s);
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::moves::parse_alg;

    fn scrambled() -> CubeState {
        CubeState::SOLVED.apply_all(&parse_alg("U2 R B' F2 R").unwrap())
    }

    #[test]
    fn test_canonical_form_of_solved() {
        assert_eq!(
            canonicalize(&CubeState::SOLVED).to_string(),
            "BBBBOOOOWWWWRRRRYYYYGGGG",
        );
    }

    #[test]
    fn test_known_canonical_form() {
        assert_eq!(
            canonicalize(&scrambled()).to_string(),
            "BROOGBOYWOGYWGRGWYWBRYBR",
        );
    }

    #[test]
    fn test_walk_covers_the_orbit() {
        let state = scrambled();
        let orbit = reorientations(&state);
        assert_eq!(orbit.len(), 84);
        assert!(orbit.contains(&state));

        let distinct: HashSet<CubeState> = orbit.iter().copied().collect();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let canonical = canonicalize(&scrambled());
        assert_eq!(canonicalize(&canonical), canonical);
    }

    #[test]
    fn test_canonicalize_is_orbit_invariant() {
        let state = scrambled();
        let canonical = canonicalize(&state);

        for generator in [&TILT, &SPIN, &ROLL] {
            assert_eq!(canonicalize(&reorient(&state, generator)), canonical);
        }
        for twin in reorientations(&state) {
            assert_eq!(canonicalize(&twin), canonical);
        }
        assert!(canonical <= state);
    }

    #[test]
    fn test_canonicalize_agrees_with_collected_minimum() {
        let state = scrambled();
        let minimum = reorientations(&state).into_iter().min().unwrap();
        assert_eq!(canonicalize(&state), minimum);
    }
}
