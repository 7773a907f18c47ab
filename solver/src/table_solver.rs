use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;

use pocket_core::{CubeState, Move, canonicalize, reorientations};

use crate::table::SolutionTable;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableSolveError {
    #[error("the state's canonical form is not in the solution table")]
    TableMiss,
    #[error("the stored representative cannot be aligned with the queried state")]
    MisalignedRepresentative,
}

/// Table-backed solver. The table is handed in at construction and never
/// mutated afterwards.
///
/// A class's stored path leads to its first-discovered representative, and
/// undoing that path is only guaranteed to solve the representative
/// itself. Querying a reoriented twin of the representative can therefore
/// leave the cube unsolved; every candidate sequence is verified by
/// application before it is returned, and a reoriented-but-solved end
/// state is finished off with a precomputed realignment suffix. A wrong
/// sequence is never returned.
pub struct TableSolver {
    table: SolutionTable,
    realignments: FxHashMap<CubeState, Vec<Move>>,
}

impl TableSolver {
    #[must_use]
    pub fn new(table: SolutionTable) -> TableSolver {
        TableSolver {
            realignments: realignment_suffixes(),
            table,
        }
    }

    #[must_use]
    pub fn table(&self) -> &SolutionTable {
        &self.table
    }

    /// Derive a solving sequence for `state` from the precomputed table.
    pub fn solve(&self, state: &CubeState) -> Result<Vec<Move>, TableSolveError> {
        let path = self
            .table
            .path_to(&canonicalize(state))
            .ok_or(TableSolveError::TableMiss)?;

        let mut sequence: Vec<Move> = path.iter().rev().map(|mv| mv.inverse()).collect();
        let end = state.apply_all(&sequence);
        if end.is_solved() {
            return Ok(sequence);
        }

        // The query was a twin of the representative. If undoing the path
        // left a reoriented copy of the solved cube, a fixed suffix
        // finishes the job. Otherwise the relabeling that connects the two
        // states is not expressible in the move vocabulary, and the lookup
        // result is unusable for this query.
        match self.realignments.get(&end) {
            Some(suffix) => {
                sequence.extend_from_slice(suffix);
                debug_assert!(state.apply_all(&sequence).is_solved());
                Ok(sequence)
            }
            None => Err(TableSolveError::MisalignedRepresentative),
        }
    }
}

/// For each reoriented copy of the solved state, an exact move sequence
/// returning it to the solved state.
///
/// Found by a raw-state BFS from solved: whole-cube reorientations are
/// realizable as paired opposite-face turns, so all 24 targets sit within
/// four moves. Reversing and inverting the discovered path gives a suffix
/// that is correct by construction.
fn realignment_suffixes() -> FxHashMap<CubeState, Vec<Move>> {
    let targets: FxHashSet<CubeState> = reorientations(&CubeState::SOLVED).into_iter().collect();

    let mut suffixes = FxHashMap::default();
    suffixes.insert(CubeState::SOLVED, Vec::new());

    let mut visited = FxHashSet::default();
    visited.insert(CubeState::SOLVED);
    let mut frontier = VecDeque::new();
    frontier.push_back((CubeState::SOLVED, Vec::new()));

    while let Some((state, path)) = frontier.pop_front() {
        if suffixes.len() == targets.len() {
            break;
        }
        if path.len() >= 4 {
            continue;
        }

        for mv in Move::ALL {
            let successor = state.apply(mv);
            if !visited.insert(successor) {
                continue;
            }

            let mut next_path = path.clone();
            next_path.push(mv);

            if targets.contains(&successor) {
                let suffix = next_path.iter().rev().map(|mv| mv.inverse()).collect();
                suffixes.insert(successor, suffix);
            }

            frontier.push_back((successor, next_path));
        }
    }

    suffixes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reorientation_has_a_suffix() {
        let suffixes = realignment_suffixes();
        assert_eq!(suffixes.len(), 24);

        for (reoriented, suffix) in &suffixes {
            assert!(suffix.len() <= 4);
            assert!(reoriented.apply_all(suffix).is_solved());
        }
    }
}
