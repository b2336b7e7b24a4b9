use clap::Parser;
use coinslide_solver::engine::Board;
use coinslide_solver::solver::solve_bfs;
use coinslide_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a board file (4 lines of 'O' and '.'); the standard
    /// center-coins start is used when omitted
    board_file: Option<PathBuf>,

    /// Generate a random four-coin board from this seed instead of reading
    /// a file
    #[clap(long, conflicts_with = "board_file")]
    random_seed: Option<u64>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let board = if let Some(seed) = args.random_seed {
        println!("Generated board from seed {}\n", seed);
        Board::random_with_seed(seed)
    } else if let Some(path) = &args.board_file {
        let board = read_board_file(path)
            .unwrap_or_else(|e| panic!("Failed to read board from {}: {}", path.display(), e));
        println!("Loaded board from {}\n", path.display());
        board
    } else {
        Board::new()
    };

    println!("Initial board state:\n{}\n", board);
    println!("Searching for a shortest solution...\n");

    if let Some(solution) = solve_bfs(&board) {
        println!("Solution found:\n");
        println!("Moves ({}):", solution.moves.len());
        if solution.moves.is_empty() {
            println!("  Already solved, no moves needed.");
        } else {
            for (i, m) in solution.moves.iter().enumerate() {
                println!("  Move {}: {}", i + 1, m);
            }
        }
        println!(
            "\nDiscovered {} states, expanded {}.",
            solution.states_discovered, solution.states_expanded
        );

        let mut replayed = board;
        for m in &solution.moves {
            replayed = replayed
                .apply_move(m)
                .expect("solver returned an illegal move");
        }
        println!("\nFinal board state:\n{}", replayed);
    } else {
        println!("No solution found.");
    }
}
