use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use clap::Parser;
use color_eyre::eyre::OptionExt;
use log::info;
use owo_colors::OwoColorize;
use pocket_core::{CubeState, Move, format_alg, parse_alg};
use solver::{SolutionTable, TableSolver, decode_table, encode_table, solve_bounded};

/// Solves scrambled 2×2×2 pocket cubes
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Precompute the full solution table and write it to disk
    Build {
        /// Where to write the encoded table
        #[arg(default_value = "table.bin")]
        output: PathBuf,
    },
    /// Solve a state via the precomputed table
    Solve {
        /// The 24-facelet state, e.g. BROOWGRGWYWBGBOYWOGYRYBR
        state: String,
        /// The encoded table; built from scratch and written here if missing
        #[arg(long, default_value = "table.bin")]
        table: PathBuf,
    },
    /// Solve a state by bounded backtracking search
    Backtrack {
        /// The 24-facelet state
        state: String,
        /// Maximum solution length to consider
        #[arg(long, default_value_t = 5)]
        max_depth: usize,
    },
    /// Apply a move sequence to the solved state and print the result
    Scramble {
        /// Whitespace-separated moves, e.g. "U2 R B' F2 R"
        alg: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let args = Commands::parse();

    match args {
        Commands::Build { output } => {
            let table = build_table();
            fs::write(&output, encode_table(&table))?;
            println!("{} classes written to {}", table.len(), output.display());
        }
        Commands::Solve { state, table } => {
            let state: CubeState = state.parse()?;
            let solver = TableSolver::new(load_or_build_table(&table)?);

            let start = Instant::now();
            let solution = solver.solve(&state)?;
            info!("table lookup took {:.2?}", start.elapsed());

            print_solution(&state, &solution);
        }
        Commands::Backtrack { state, max_depth } => {
            let state: CubeState = state.parse()?;

            let start = Instant::now();
            let solution = solve_bounded(&state, max_depth)
                .ok_or_eyre(format!("no solution within {max_depth} moves"))?;
            info!("backtracking took {:.2?}", start.elapsed());

            print_solution(&state, &solution);
        }
        Commands::Scramble { alg } => {
            let moves = parse_alg(&alg)?;
            println!("{}", CubeState::SOLVED.apply_all(&moves));
        }
    }

    Ok(())
}

fn build_table() -> SolutionTable {
    let start = Instant::now();
    let table = SolutionTable::build();
    info!("table build took {:.2?}", start.elapsed());
    table
}

fn load_or_build_table(path: &Path) -> color_eyre::Result<SolutionTable> {
    if path.exists() {
        let data = fs::read(path)?;
        return decode_table(&data).ok_or_eyre("could not decode the table");
    }

    let table = build_table();
    fs::write(path, encode_table(&table))?;
    Ok(table)
}

fn print_solution(state: &CubeState, solution: &[Move]) {
    if solution.is_empty() {
        println!("{}", "already solved".green());
        return;
    }

    println!(
        "{} ({} moves)",
        format_alg(solution).green(),
        solution.len(),
    );
    println!("{state} -> {}", state.apply_all(solution));
}
