use log::{Level, debug, log_enabled};
use pocket_core::{CubeState, Move};

/// Exhaustive depth-first search for a shortest solving sequence of at
/// most `max_depth` moves, without symmetry reduction.
///
/// `None` is the normal outcome when the bound is too small, not an
/// error. The search visits O(18^max_depth) nodes, which makes it a
/// cross-check for the table solver rather than a production strategy.
#[must_use]
pub fn solve_bounded(state: &CubeState, max_depth: usize) -> Option<Vec<Move>> {
    let mut nodes_visited = 0_u64;
    let mut path = Vec::with_capacity(max_depth);

    let solution = search(state, max_depth, &mut path, &mut nodes_visited);

    if log_enabled!(Level::Debug) {
        debug!("visited {nodes_visited} nodes within depth {max_depth}");
    }
    solution
}

fn search(
    state: &CubeState,
    max_depth: usize,
    path: &mut Vec<Move>,
    nodes_visited: &mut u64,
) -> Option<Vec<Move>> {
    if log_enabled!(Level::Debug) {
        *nodes_visited += 1;
    }

    if state.is_solved() {
        return Some(path.clone());
    }
    if path.len() == max_depth {
        return None;
    }

    let mut shortest: Option<Vec<Move>> = None;

    for mv in Move::ALL {
        path.push(mv);
        let found = search(&state.apply(mv), max_depth, path, nodes_visited);
        path.pop();

        if let Some(candidate) = found
            && shortest
                .as_ref()
                .is_none_or(|best| candidate.len() < best.len())
        {
            shortest = Some(candidate);
        }
    }

    shortest
}
