use itertools::Itertools;
use pocket_core::{CubeState, Move, canonicalize, parse_alg};
use solver::{SolutionTable, TableSolveError, TableSolver, solve_bounded};

const SCRAMBLE: &str = "U2 R B' F2 R";

fn scrambled() -> CubeState {
    CubeState::SOLVED.apply_all(&parse_alg(SCRAMBLE).unwrap())
}

#[test_log::test]
fn test_depth_limited_class_counts() {
    let table = SolutionTable::build_to_depth(3);
    assert_eq!(table.len(), 2407);

    let histogram = table.iter().counts_by(|(_, path)| path.len());
    assert_eq!(histogram[&0], 1);
    assert_eq!(histogram[&1], 15);
    assert_eq!(histogram[&2], 184);
    assert_eq!(histogram[&3], 2207);
}

#[test_log::test]
fn test_deeper_build_extends_shallower_one() {
    let shallow = SolutionTable::build_to_depth(3);
    let deep = SolutionTable::build_to_depth(4);

    assert_eq!(deep.len(), 2407 + 23308);
    for (canonical, path) in shallow.iter() {
        assert_eq!(deep.path_to(canonical), Some(path));
    }
}

#[test_log::test]
fn test_table_soundness() {
    let table = SolutionTable::build_to_depth(3);

    for (canonical, path) in table.iter() {
        let representative = CubeState::SOLVED.apply_all(path);
        assert_eq!(canonicalize(&representative), *canonical);
    }
}

#[test_log::test]
fn test_solved_needs_no_moves() {
    let solver = TableSolver::new(SolutionTable::build_to_depth(1));
    assert_eq!(solver.solve(&CubeState::SOLVED), Ok(vec![]));
}

#[test_log::test]
fn test_single_move_scrambles_round_trip() {
    let solver = TableSolver::new(SolutionTable::build_to_depth(3));

    for mv in Move::ALL {
        let state = CubeState::SOLVED.apply(mv);
        let solution = solver.solve(&state).unwrap();
        assert!(state.apply_all(&solution).is_solved(), "{mv}");
        // Twins of a merged class pick up a realignment suffix.
        assert!(solution.len() <= 5, "{mv}: {}", solution.len());
    }
}

/// The quotient under relabeling is not a move-congruence, so a stored
/// twin's path cannot always be transported to the query, and a class can
/// even stay undiscovered at the query's own depth. What must hold is that
/// every returned sequence solves, and every failure is explicit.
#[test_log::test]
fn test_two_move_scrambles_never_get_wrong_answers() {
    let solver = TableSolver::new(SolutionTable::build_to_depth(3));

    let mut solved = 0;
    let mut misses = 0;
    let mut misaligned = 0;

    for first in Move::ALL {
        for second in Move::ALL {
            let state = CubeState::SOLVED.apply(first).apply(second);
            match solver.solve(&state) {
                Ok(solution) => {
                    assert!(state.apply_all(&solution).is_solved(), "{first} {second}");
                    solved += 1;
                }
                Err(TableSolveError::TableMiss) => misses += 1,
                Err(TableSolveError::MisalignedRepresentative) => misaligned += 1,
            }
        }
    }

    assert_eq!((solved, misses, misaligned), (282, 34, 8));
}

#[test_log::test]
fn test_deeper_table_removes_misses() {
    let solver = TableSolver::new(SolutionTable::build_to_depth(4));

    let mut solved = 0;
    let mut misaligned = 0;

    for first in Move::ALL {
        for second in Move::ALL {
            let state = CubeState::SOLVED.apply(first).apply(second);
            match solver.solve(&state) {
                Ok(solution) => {
                    assert!(state.apply_all(&solution).is_solved(), "{first} {second}");
                    solved += 1;
                }
                Err(TableSolveError::TableMiss) => panic!("miss for {first} {second}"),
                Err(TableSolveError::MisalignedRepresentative) => misaligned += 1,
            }
        }
    }

    assert_eq!((solved, misaligned), (316, 8));
}

#[test_log::test]
fn test_table_solver_reports_misses() {
    let solver = TableSolver::new(SolutionTable::build_to_depth(1));
    assert_eq!(
        solver.solve(&scrambled()),
        Err(TableSolveError::TableMiss),
    );
}

#[test_log::test]
fn test_bounded_solver_agrees_at_shallow_depths() {
    let state = CubeState::SOLVED.apply_all(&parse_alg("U F'").unwrap());

    let solution = solve_bounded(&state, 3).unwrap();
    assert!(solution.len() <= 2);
    assert!(state.apply_all(&solution).is_solved());
}

#[test_log::test]
fn test_bounded_solver_respects_the_bound() {
    assert_eq!(solve_bounded(&CubeState::SOLVED, 0), Some(vec![]));
    assert_eq!(solve_bounded(&scrambled(), 0), None);
    assert_eq!(solve_bounded(&scrambled(), 2), None);
}

#[test_log::test]
fn test_bounded_solver_restores_the_example_scramble() {
    let scrambled = scrambled();
    assert_eq!(scrambled.to_string(), "BROOWGRGWYWBGBOYWOGYRYBR");

    let solution = solve_bounded(&scrambled, 5).unwrap();
    assert!(solution.len() <= 5);
    assert_eq!(
        scrambled.apply_all(&solution).to_string(),
        "YYYYBBBBRRRRGGGGOOOOWWWW",
    );
}
