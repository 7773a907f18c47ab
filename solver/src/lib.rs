//! Search machinery for the pocket cube: breadth-first table
//! precomputation over symmetry-reduced states, table-backed solving with
//! reorientation compensation, and a bounded backtracking solver used as
//! an independent cross-check.

pub mod backtrack;
pub mod table;
pub mod table_encoding;
pub mod table_solver;

pub use backtrack::solve_bounded;
pub use table::SolutionTable;
pub use table_encoding::{decode_table, encode_table};
pub use table_solver::{TableSolveError, TableSolver};
