use std::collections::VecDeque;
use std::time::Instant;

use fxhash::{FxHashMap, FxHashSet};
use log::{debug, info};
use pocket_core::{CubeState, Move, canonicalize};

/// Mapping from canonical form to the move path that reaches the class's
/// first-discovered representative from the solved state.
///
/// Built once by breadth-first search and read-only afterwards; the path
/// stored for a class is of minimum move count among the representatives
/// BFS order put in front of it.
#[derive(Debug, PartialEq, Eq)]
pub struct SolutionTable {
    paths: FxHashMap<CubeState, Vec<Move>>,
}

impl SolutionTable {
    /// Explore every equivalence class reachable from the solved state,
    /// running until the frontier is exhausted.
    ///
    /// Frontier exhaustion is the only termination condition: the
    /// relabeling equivalence is coarser than raw state identity but is
    /// not the true rotation equivalence, so the final class count is
    /// discovered, not assumed.
    #[must_use]
    pub fn build() -> SolutionTable {
        Self::build_inner(None)
    }

    /// Depth-limited variant: paths of length `max_depth` are recorded but
    /// not expanded.
    #[must_use]
    pub fn build_to_depth(max_depth: usize) -> SolutionTable {
        Self::build_inner(Some(max_depth))
    }

    fn build_inner(max_depth: Option<usize>) -> SolutionTable {
        let start = Instant::now();

        let mut paths = FxHashMap::default();
        let mut visited = FxHashSet::default();
        let mut frontier = VecDeque::new();

        let root = canonicalize(&CubeState::SOLVED);
        paths.insert(root, Vec::new());
        visited.insert(root);
        frontier.push_back((CubeState::SOLVED, Vec::new()));

        // Classes discovered per path length, for progress reporting.
        let mut per_depth = vec![1_usize];

        while let Some((state, path)) = frontier.pop_front() {
            if max_depth.is_some_and(|limit| path.len() >= limit) {
                continue;
            }

            for mv in Move::ALL {
                let successor = state.apply(mv);
                let canonical = canonicalize(&successor);
                if !visited.insert(canonical) {
                    continue;
                }

                let mut next_path = path.clone();
                next_path.push(mv);

                if per_depth.len() <= next_path.len() {
                    debug!(
                        "depth {}: {} classes so far, frontier {}",
                        per_depth.len() - 1,
                        paths.len(),
                        frontier.len(),
                    );
                    per_depth.push(0);
                }
                per_depth[next_path.len()] += 1;

                paths.insert(canonical, next_path.clone());
                frontier.push_back((successor, next_path));
            }
        }

        for (depth, count) in per_depth.iter().enumerate() {
            debug!("depth {depth}: {count} new classes");
        }
        info!(
            "discovered {} equivalence classes in {:.2?}",
            paths.len(),
            start.elapsed(),
        );

        SolutionTable { paths }
    }

    pub(crate) fn from_paths(paths: FxHashMap<CubeState, Vec<Move>>) -> SolutionTable {
        SolutionTable { paths }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The stored path for a canonical form, if its class was discovered.
    #[must_use]
    pub fn path_to(&self, canonical: &CubeState) -> Option<&[Move]> {
        self.paths.get(canonical).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CubeState, &[Move])> {
        self.paths
            .iter()
            .map(|(canonical, path)| (canonical, path.as_slice()))
    }
}
