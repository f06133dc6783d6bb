//! Sliding-Tile Puzzle Solver
//!
//! Reads an N x N board from a file and prints a shortest sequence of
//! boards leading to the goal, or reports that no solution exists.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

use npuzzle::{input, Solver};

/// Solves an N-puzzle board file with A* search.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board file: the dimension N followed by N*N tiles, 0 for the blank.
    board: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print search statistics to stderr after solving.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let initial = input::read_board(&cli.board)
        .with_context(|| format!("Failed to load board from {}", cli.board.display()))?;
    info!("Loaded {}", cli.board.display());

    let solver = Solver::new(initial);
    print!("{}", report(&solver));

    if cli.stats {
        let stats = solver.stats();
        eprintln!(
            "expanded {} / generated {} (twin: expanded {} / generated {})",
            stats.expanded, stats.generated, stats.twin_expanded, stats.twin_generated
        );
    }

    Ok(())
}

/// Maps the `-v` count to a log level; the environment is not consulted.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Formats the solver outcome the way it is printed to stdout.
///
/// Every board's string form ends in a newline, so boards are separated by
/// a blank line.
fn report(solver: &Solver) -> String {
    let mut output = String::new();
    match (solver.moves(), solver.solution()) {
        (Some(moves), Some(path)) => {
            output.push_str(&format!("Minimum number of moves = {}\n", moves));
            for board in path {
                output.push_str(&board.to_string());
                output.push('\n');
            }
        }
        _ => output.push_str("No solution possible\n"),
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use npuzzle::Board;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["npuzzle", "-vv", "--stats", "puzzle04.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.stats);
        assert_eq!(cli.board, PathBuf::from("puzzle04.txt"));

        assert!(Cli::try_parse_from(["npuzzle"]).is_err());
    }

    #[test]
    fn test_solution_report_snapshot() {
        let initial = Board::new(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap();
        let output = report(&Solver::new(initial));
        insta::assert_snapshot!("puzzle04_report", output);
    }

    #[test]
    fn test_unsolvable_report() {
        let initial = Board::new(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();
        assert_eq!(report(&Solver::new(initial)), "No solution possible\n");
    }

    #[test]
    fn test_goal_report() {
        let output = report(&Solver::new(Board::goal(2).unwrap()));
        assert_eq!(output, "Minimum number of moves = 0\n2\n 1  2\n 3  0\n\n");
    }
}
